use crate::shared::error::AtlasError;
use crate::shared::Result;
use crate::topology::domain::AppRecord;

/// HostResolver picks the root app of a tree request
pub struct HostResolver;

impl HostResolver {
    /// Finds the app whose name and host both equal `host`
    ///
    /// # Errors
    /// Returns `AtlasError::HostNotFound` when no such app exists.
    pub fn resolve<'a>(apps: &'a [AppRecord], host: &str) -> Result<&'a AppRecord> {
        apps.iter()
            .find(|app| app.is_host() && app.name == host)
            .ok_or_else(|| {
                AtlasError::HostNotFound {
                    host: host.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, name: &str, host: &str) -> AppRecord {
        AppRecord {
            id: id.to_string(),
            name: name.to_string(),
            host: host.to_string(),
            version: String::new(),
            relationships: vec![],
        }
    }

    #[test]
    fn test_resolve_host() {
        let apps = vec![app("app:1", "cart", "shell"), app("app:2", "shell", "shell")];
        let host = HostResolver::resolve(&apps, "shell").unwrap();
        assert_eq!(host.id, "app:2");
    }

    #[test]
    fn test_app_that_is_not_its_own_host_is_rejected() {
        let apps = vec![app("app:1", "cart", "shell")];
        let error = HostResolver::resolve(&apps, "cart").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AtlasError>(),
            Some(AtlasError::HostNotFound { host }) if host == "cart"
        ));
    }

    #[test]
    fn test_missing_host() {
        let error = HostResolver::resolve(&[], "shell").unwrap_err();
        assert!(error.to_string().contains("Host app not found: shell"));
    }
}
