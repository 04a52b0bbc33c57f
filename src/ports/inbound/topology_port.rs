use crate::application::dto::{DependencyViewRequest, ModuleViewRequest, TreeRequest};
use crate::application::read_models::{DependencyGraphView, ModuleGraphView, TreeView};
use crate::shared::Result;
use crate::topology::domain::{AppRecord, DependencyRecord, FederatedAppManifest, SavedApp};
use async_trait::async_trait;

/// TopologyPort - Inbound port for the topology dashboard
///
/// The operations the HTTP API exposes. Adapters hold it as
/// `Arc<dyn TopologyPort>` and never see the store behind it.
#[async_trait]
pub trait TopologyPort: Send + Sync {
    /// Upserts a manifest
    ///
    /// # Errors
    /// - `AtlasError::InvalidManifest` if a name or version is invalid
    /// - the store's error if a write fails part-way
    async fn save_manifest(&self, manifest: FederatedAppManifest) -> Result<SavedApp>;

    /// Lists apps, optionally restricted to the topology of one host
    async fn list_apps(&self, host: Option<String>) -> Result<Vec<AppRecord>>;

    /// Lists host apps
    async fn list_hosts(&self) -> Result<Vec<AppRecord>>;

    /// Lists shared dependencies with the apps declaring them
    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>>;

    /// Builds the tree of a host app
    ///
    /// # Errors
    /// Returns `AtlasError::HostNotFound` if the host app does not exist
    async fn app_tree(&self, request: TreeRequest) -> Result<TreeView>;

    async fn dependency_view(&self, request: DependencyViewRequest)
        -> Result<DependencyGraphView>;

    async fn module_view(&self, request: ModuleViewRequest) -> Result<ModuleGraphView>;
}
