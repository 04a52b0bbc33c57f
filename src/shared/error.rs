use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts publishing manifests from CI can tell a missing host apart
/// from a broken store or an unreachable server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The requested host app does not exist in the topology
    HostNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (store I/O, network error, invalid manifest, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that reached `main`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<AtlasError>() {
            Some(AtlasError::HostNotFound { .. }) => ExitCode::HostNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::HostNotFound => write!(f, "Host Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the topology store and its surfaces.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Invalid manifest: {reason}\n\n💡 Hint: {hint}")]
    InvalidManifest { reason: String, hint: String },

    #[error("Host app not found: {host}\n\n💡 Hint: Publish a manifest whose name and host are both \"{host}\"")]
    HostNotFound { host: String },

    #[error("Failed to read graph store: {path}\nDetails: {details}")]
    StoreRead { path: PathBuf, details: String },

    #[error("Failed to write graph store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    StoreWrite { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Request to {url} failed: {details}")]
    RemoteRequest { url: String, details: String },
}

impl AtlasError {
    pub fn invalid_manifest(reason: impl Into<String>) -> Self {
        AtlasError::InvalidManifest {
            reason: reason.into(),
            hint: "Manifests need a non-empty `name`; `remotes` maps names to versions and `shared` is a list or map of dependencies".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::HostNotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::HostNotFound), "Host Not Found (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_host_not_found() {
        let error: anyhow::Error = AtlasError::HostNotFound {
            host: "shell".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::HostNotFound);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = AtlasError::invalid_manifest("empty name").into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("boom");
        assert_eq!(ExitCode::for_error(&plain), ExitCode::ApplicationError);
    }

    #[test]
    fn test_exit_code_survives_context() {
        let error = anyhow::Error::from(AtlasError::HostNotFound {
            host: "shell".to_string(),
        })
        .context("Failed to build tree");
        assert_eq!(ExitCode::for_error(&error), ExitCode::HostNotFound);
    }

    #[test]
    fn test_invalid_manifest_display() {
        let error = AtlasError::invalid_manifest("App name cannot be empty");
        let display = format!("{}", error);
        assert!(display.contains("Invalid manifest"));
        assert!(display.contains("App name cannot be empty"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_host_not_found_display() {
        let error = AtlasError::HostNotFound {
            host: "shell".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Host app not found: shell"));
        assert!(display.contains("name and host are both \"shell\""));
    }

    #[test]
    fn test_store_write_display() {
        let error = AtlasError::StoreWrite {
            path: PathBuf::from("/tmp/atlas-store.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write graph store"));
        assert!(display.contains("/tmp/atlas-store.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_remote_request_display() {
        let error = AtlasError::RemoteRequest {
            url: "http://localhost:3030/api/apps".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("http://localhost:3030/api/apps"));
        assert!(display.contains("connection refused"));
    }
}
