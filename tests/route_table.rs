//! Route table properties of the wallet shell.

use std::collections::HashSet;

use wallet_shell::config::RouterMode;
use wallet_shell::routing::{Resolution, RouteTable, Router, ViewId};

fn router() -> Router {
    Router::new(RouteTable::wallet(), "/", RouterMode::History)
}

#[test]
fn test_route_names_are_distinct() {
    let table = RouteTable::wallet();
    let names: HashSet<_> = table.routes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), table.len());
    assert_eq!(table.len(), 4);
}

#[test]
fn test_exactly_one_root_route() {
    let table = RouteTable::wallet();
    let roots: Vec<_> = table.routes().iter().filter(|r| r.path == "/").collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "Main");
}

#[test]
fn test_root_resolves_to_main() {
    assert_eq!(router().resolve("/").route().map(|r| r.view), Some(ViewId::Main));
}

#[test]
fn test_named_paths_resolve_to_their_views() {
    let router = router();
    for (path, view) in [
        ("/Newwallet", ViewId::Newwallet),
        ("/Loadwallet", ViewId::Loadwallet),
        ("/Mainaction", ViewId::Mainaction),
    ] {
        let route = router.resolve(path).route().expect(path);
        assert_eq!(route.view, view);
        assert_eq!(route.name, view.as_str());
    }
}

#[test]
fn test_table_order_is_declaration_order() {
    let names: Vec<_> = RouteTable::wallet()
        .routes()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, ["Main", "Newwallet", "Loadwallet", "Mainaction"]);
}

#[test]
fn test_base_path_prefixes_every_route() {
    let router = Router::new(RouteTable::wallet(), "/wallet/", RouterMode::History);
    assert_eq!(
        router.resolve_location("/wallet/Loadwallet").route().map(|r| r.view),
        Some(ViewId::Loadwallet)
    );
    assert!(matches!(
        router.resolve_location("/Loadwallet"),
        Resolution::NotFound { .. }
    ));
    let hrefs: Vec<_> = router.routes().iter().map(|r| router.href(r)).collect();
    assert!(hrefs.iter().all(|h| h.starts_with("/wallet/")));
}

#[test]
fn test_hash_mode_reads_fragment() {
    let router = Router::new(RouteTable::wallet(), "/", RouterMode::Hash);
    assert_eq!(
        router.resolve_location("/#/Mainaction").route().map(|r| r.view),
        Some(ViewId::Mainaction)
    );
    assert_eq!(router.href_for("Newwallet").as_deref(), Some("/#/Newwallet"));
}
