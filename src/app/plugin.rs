//! Plugin installation.
//!
//! Plugins are installed into a `PluginSet` while the application context
//! is being built. Each capability can be provided once; a second install
//! is a startup fault.

use crate::app::component_library::ComponentLibrary;
use crate::app::http_client::HttpClient;
use crate::errors::{ShellError, ShellResult};

/// A cross-cutting capability installed into the application.
pub trait Plugin: Send + Sync {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Provide the plugin's capability to the set.
    fn install(self: Box<Self>, plugins: &mut PluginSet) -> ShellResult<()>;
}

/// Capabilities installed so far.
#[derive(Debug, Default)]
pub struct PluginSet {
    components: Option<ComponentLibrary>,
    http: Option<HttpClient>,
    installed: Vec<&'static str>,
}

impl PluginSet {
    pub fn provide_components(&mut self, plugin: &'static str, library: ComponentLibrary) -> ShellResult<()> {
        if self.components.is_some() {
            return Err(already_installed(plugin));
        }
        self.components = Some(library);
        Ok(())
    }

    pub fn provide_http(&mut self, plugin: &'static str, client: HttpClient) -> ShellResult<()> {
        if self.http.is_some() {
            return Err(already_installed(plugin));
        }
        self.http = Some(client);
        Ok(())
    }

    pub fn components(&self) -> Option<&ComponentLibrary> {
        self.components.as_ref()
    }

    pub fn http(&self) -> Option<&HttpClient> {
        self.http.as_ref()
    }

    /// Plugin names in install order.
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }

    pub(crate) fn install(&mut self, plugin: Box<dyn Plugin>) -> ShellResult<()> {
        let name = plugin.name();
        plugin.install(self)?;
        self.installed.push(name);
        tracing::debug!(plugin = name, "Plugin installed");
        Ok(())
    }
}

fn already_installed(plugin: &'static str) -> ShellError {
    ShellError::PluginInstall {
        plugin,
        reason: "capability already provided".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::component_library::ComponentLibraryPlugin;

    struct Failing;

    impl Plugin for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn install(self: Box<Self>, _plugins: &mut PluginSet) -> ShellResult<()> {
            Err(ShellError::PluginInstall {
                plugin: "failing",
                reason: "boom".into(),
            })
        }
    }

    #[test]
    fn test_install_records_order() {
        let mut set = PluginSet::default();
        set.install(Box::new(ComponentLibraryPlugin)).unwrap();
        assert_eq!(set.installed(), &["component-library"]);
        assert!(set.components().is_some());
        assert!(set.http().is_none());
    }

    #[test]
    fn test_double_install_fails() {
        let mut set = PluginSet::default();
        set.install(Box::new(ComponentLibraryPlugin)).unwrap();
        let err = set.install(Box::new(ComponentLibraryPlugin)).unwrap_err();
        assert!(matches!(err, ShellError::PluginInstall { plugin: "component-library", .. }));
        assert_eq!(set.installed().len(), 1);
    }

    #[test]
    fn test_failing_plugin_not_recorded() {
        let mut set = PluginSet::default();
        assert!(set.install(Box::new(Failing)).is_err());
        assert!(set.installed().is_empty());
    }
}
