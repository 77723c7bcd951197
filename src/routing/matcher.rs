//! Route matching logic.
//!
//! # Responsibilities
//! - Turn a browser location into a route path (base prefix, mode)
//! - Match a route path against a route pattern
//!
//! # Design Decisions
//! - Path matching is ASCII case-insensitive
//! - A single trailing slash is optional (`/Newwallet/` == `/Newwallet`)
//! - Query string and fragment never take part in history-mode matching
//! - Percent-escapes are decoded before matching (`/%4Eewwallet` == `/Newwallet`)
//! - No regex; patterns are literal paths

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::config::RouterMode;

/// Trait for matching route paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the route path matches this pattern.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal route path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    normalized: String,
}

impl ExactPathMatcher {
    /// Create a new exact path matcher.
    /// The pattern is normalized once so matching is a single comparison.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self {
            normalized: normalize_path(pattern.as_ref()),
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        normalize_path(path) == self.normalized
    }
}

/// Lowercase a path and drop a single trailing slash (except on `/`).
pub fn normalize_path(path: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    trimmed.to_ascii_lowercase()
}

/// Decode percent-escapes; invalid UTF-8 leaves the input untouched.
fn decode(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

/// Extracts route paths from locations for a given base and mode.
#[derive(Debug, Clone)]
pub struct LocationParser {
    base: String,
    mode: RouterMode,
}

impl LocationParser {
    /// `base` is expected in `/segment/` form (see config normalization).
    pub fn new(base: impl Into<String>, mode: RouterMode) -> Self {
        Self {
            base: base.into(),
            mode,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn mode(&self) -> RouterMode {
        self.mode
    }

    /// Route path for a location (`/base/Newwallet?x=1` → `/Newwallet`).
    ///
    /// Returns `None` when the location lies outside the base.
    pub fn route_path(&self, location: &str) -> Option<String> {
        let (before_fragment, fragment) = match location.split_once('#') {
            Some((head, frag)) => (head, Some(frag)),
            None => (location, None),
        };
        let path = before_fragment
            .split_once('?')
            .map_or(before_fragment, |(p, _)| p);
        let path = if path.is_empty() { "/" } else { path };
        let path = decode(path);

        let rest = self.strip_base(&path)?;

        match self.mode {
            RouterMode::History => Some(format!("/{}", rest)),
            RouterMode::Hash => {
                // Anything but the base itself is outside the hash router.
                if !rest.is_empty() && rest != "index.html" {
                    return None;
                }
                let fragment = fragment.unwrap_or("");
                let fragment = fragment.split_once('?').map_or(fragment, |(p, _)| p);
                let fragment = decode(fragment);
                if fragment.starts_with('/') {
                    Some(fragment.to_string())
                } else {
                    Some(format!("/{}", fragment))
                }
            }
        }
    }

    /// Location for a route path (`/Newwallet` → `/base/Newwallet`).
    pub fn href(&self, route_path: &str) -> String {
        let relative = route_path.trim_start_matches('/');
        match self.mode {
            RouterMode::History => format!("{}{}", self.base, relative),
            RouterMode::Hash => format!("{}#/{}", self.base, relative),
        }
    }

    /// Path remainder after the base, without a leading slash.
    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base == "/" {
            return Some(path.trim_start_matches('/'));
        }
        // `/wallet` (no trailing slash) addresses the base itself.
        let bare = self.base.trim_end_matches('/');
        if path.eq_ignore_ascii_case(bare) {
            return Some("");
        }
        let prefix = path.get(..self.base.len())?;
        if prefix.eq_ignore_ascii_case(&self.base) {
            Some(&path[self.base.len()..])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path_matcher() {
        let matcher = ExactPathMatcher::new("/Newwallet");

        assert!(matcher.matches("/Newwallet"));
        assert!(matcher.matches("/newwallet")); // Case insensitive
        assert!(matcher.matches("/Newwallet/")); // Trailing slash optional
        assert!(!matcher.matches("/Newwallet/extra"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_root_matcher() {
        let matcher = ExactPathMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(matcher.matches(""));
        assert!(!matcher.matches("/Main"));
    }

    #[test]
    fn test_history_location_at_root_base() {
        let parser = LocationParser::new("/", RouterMode::History);
        assert_eq!(parser.route_path("/").as_deref(), Some("/"));
        assert_eq!(parser.route_path("/Loadwallet?from=main#top").as_deref(), Some("/Loadwallet"));
        assert_eq!(parser.route_path("").as_deref(), Some("/"));
    }

    #[test]
    fn test_history_location_under_base() {
        let parser = LocationParser::new("/wallet/", RouterMode::History);
        assert_eq!(parser.route_path("/wallet/").as_deref(), Some("/"));
        assert_eq!(parser.route_path("/wallet").as_deref(), Some("/"));
        assert_eq!(parser.route_path("/wallet/Mainaction").as_deref(), Some("/Mainaction"));
        assert_eq!(parser.route_path("/Mainaction"), None);
        assert_eq!(parser.route_path("/walletx/Mainaction"), None);
    }

    #[test]
    fn test_hash_location() {
        let parser = LocationParser::new("/", RouterMode::Hash);
        assert_eq!(parser.route_path("/#/Newwallet").as_deref(), Some("/Newwallet"));
        assert_eq!(parser.route_path("/").as_deref(), Some("/"));
        assert_eq!(parser.route_path("/#").as_deref(), Some("/"));
        assert_eq!(parser.route_path("/Newwallet"), None);
    }

    #[test]
    fn test_percent_escapes_are_decoded() {
        let parser = LocationParser::new("/wallet/", RouterMode::History);
        assert_eq!(parser.route_path("/wallet/%4Eewwallet").as_deref(), Some("/Newwallet"));
        assert_eq!(parser.route_path("/%77allet/Loadwallet").as_deref(), Some("/Loadwallet"));
        assert_eq!(parser.route_path("/wallet/%ff").as_deref(), Some("/%ff"));

        let hash = LocationParser::new("/", RouterMode::Hash);
        assert_eq!(hash.route_path("/#/Main%61ction").as_deref(), Some("/Mainaction"));
    }

    #[test]
    fn test_href() {
        let history = LocationParser::new("/wallet/", RouterMode::History);
        assert_eq!(history.href("/"), "/wallet/");
        assert_eq!(history.href("/Newwallet"), "/wallet/Newwallet");

        let hash = LocationParser::new("/", RouterMode::Hash);
        assert_eq!(hash.href("/Loadwallet"), "/#/Loadwallet");
    }
}
