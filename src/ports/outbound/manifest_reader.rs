use crate::shared::Result;
use crate::topology::domain::FederatedAppManifest;
use std::path::Path;

/// ManifestReader port for loading manifests from disk
///
/// Used by the `publish` command to read the manifest files given on the
/// command line before they are sent to a server.
pub trait ManifestReader: Send + Sync {
    /// Reads and parses a manifest file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink or is too large
    /// - The content is not a valid manifest JSON document
    fn read_manifest(&self, path: &Path) -> Result<FederatedAppManifest>;
}
