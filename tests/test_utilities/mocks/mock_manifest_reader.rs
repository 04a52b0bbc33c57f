use federation_atlas::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifests from memory
///
/// Paths that were never registered fail as if the file were missing.
#[derive(Default)]
pub struct MockManifestReader {
    pub manifests: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers raw manifest JSON under `path`
    pub fn with_manifest(mut self, path: &str, json: &str) -> Self {
        self.manifests.insert(PathBuf::from(path), json.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<FederatedAppManifest> {
        let json = self
            .manifests
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Failed to read manifest: {} not found", path.display()))?;
        Ok(serde_json::from_str(json)?)
    }
}
