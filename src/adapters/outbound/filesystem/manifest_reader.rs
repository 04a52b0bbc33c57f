use crate::ports::outbound::ManifestReader;
use crate::shared::error::AtlasError;
use crate::shared::security::{read_checked, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use crate::topology::domain::FederatedAppManifest;
use std::path::Path;

/// JsonManifestReader adapter for reading manifest JSON files
///
/// Files go through the same symlink and size checks as the graph store
/// snapshot before they are parsed.
pub struct JsonManifestReader;

impl JsonManifestReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for JsonManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<FederatedAppManifest> {
        let content = read_checked(path, "manifest", MAX_MANIFEST_SIZE)?;

        serde_json::from_str(&content).map_err(|e| {
            AtlasError::invalid_manifest(format!("{}: {}", path.display(), e)).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_with_shared_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shell.json");
        fs::write(
            &path,
            r#"{"name":"shell","host":"shell","version":"1.1","remotes":{"cart":"1.0"},"shared":["react"]}"#,
        )
        .unwrap();

        let manifest = JsonManifestReader::new().read_manifest(&path).unwrap();
        assert_eq!(manifest.name, "shell");
        assert_eq!(manifest.host.as_deref(), Some("shell"));
        assert_eq!(manifest.remotes.unwrap().get("cart").unwrap(), "1.0");
    }

    #[test]
    fn test_read_manifest_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let error = JsonManifestReader::new().read_manifest(&path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AtlasError>(),
            Some(AtlasError::InvalidManifest { .. })
        ));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result = JsonManifestReader::new().read_manifest(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read manifest metadata"));
    }

    #[test]
    fn test_read_manifest_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = JsonManifestReader::new().read_manifest(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_manifest_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("huge.json");
        let padding = " ".repeat(MAX_MANIFEST_SIZE as usize + 1);
        fs::write(&path, format!("{{\"name\":\"shell\"}}{}", padding)).unwrap();

        let result = JsonManifestReader::new().read_manifest(&path);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
