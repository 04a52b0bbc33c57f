use crate::application::read_models::TreeView;
use crate::shared::Result;
use crate::topology::domain::{FederatedAppManifest, SavedApp};
use async_trait::async_trait;

/// TopologyClient port for talking to a running atlas server
///
/// Implementations must be `Send + Sync` so manifests can be published
/// concurrently.
#[async_trait]
pub trait TopologyClient: Send + Sync {
    /// Posts a manifest to the server's write endpoint
    ///
    /// # Errors
    /// Returns `AtlasError::RemoteRequest` if the server cannot be reached
    /// or rejects the manifest.
    async fn publish(&self, manifest: &FederatedAppManifest) -> Result<SavedApp>;

    /// Fetches the tree of `host` as the server builds it
    ///
    /// # Errors
    /// Returns `AtlasError::HostNotFound` when the server answers 404.
    async fn fetch_tree(&self, host: &str, max_depth: Option<usize>) -> Result<TreeView>;
}
