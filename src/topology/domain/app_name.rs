use crate::shared::error::AtlasError;
use crate::shared::Result;

/// Maximum length for app and dependency names (npm's own limit)
const MAX_NAME_LENGTH: usize = 214;

/// Maximum length for version strings
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for an app, remote, host or shared-dependency name
///
/// Names follow npm conventions, so scoped names such as `@acme/ui` are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AtlasError::invalid_manifest("App name cannot be empty").into());
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(AtlasError::invalid_manifest(format!(
                "Name '{}...' is too long ({} bytes). Maximum allowed: {} bytes",
                &name[..name.char_indices().nth(16).map_or(name.len(), |(i, _)| i)],
                name.len(),
                MAX_NAME_LENGTH
            ))
            .into());
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/'))
        {
            return Err(AtlasError::invalid_manifest(format!(
                "Name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, '@' and '/' are allowed.",
                name
            ))
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a declared version or version range
///
/// Empty is allowed: a manifest without a version is stored with `""`.
/// Ranges such as `^18.2.0` or `>=1 <2` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VersionTag(String);

impl VersionTag {
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();

        if version.len() > MAX_VERSION_LENGTH {
            return Err(AtlasError::invalid_manifest(format!(
                "Version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            ))
            .into());
        }

        if version.chars().any(char::is_control) {
            return Err(
                AtlasError::invalid_manifest("Version contains control characters").into(),
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
