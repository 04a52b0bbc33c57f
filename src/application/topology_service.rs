use crate::application::dto::{DependencyViewRequest, ModuleViewRequest, TreeRequest};
use crate::application::read_models::{DependencyGraphView, ModuleGraphView, TreeView};
use crate::application::use_cases::{
    BuildTreeUseCase, DependencyViewUseCase, ModuleViewUseCase, QueryTopologyUseCase,
    SaveManifestUseCase,
};
use crate::ports::inbound::TopologyPort;
use crate::ports::outbound::GraphStore;
use crate::shared::Result;
use crate::topology::domain::{AppRecord, DependencyRecord, FederatedAppManifest, SavedApp};
use crate::topology::services::DEFAULT_MAX_NODES;
use async_trait::async_trait;

/// TopologyService - Implements the inbound port on top of a graph store
///
/// Each call builds the use case it needs around a clone of the store
/// handle (typically an `Arc`).
pub struct TopologyService<S> {
    store: S,
    max_depth: usize,
    max_nodes: usize,
}

impl<S: GraphStore + Clone> TopologyService<S> {
    pub fn new(store: S, max_depth: usize) -> Self {
        Self {
            store,
            max_depth,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Caps the size of every tree this service builds
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

#[async_trait]
impl<S: GraphStore + Clone> TopologyPort for TopologyService<S> {
    async fn save_manifest(&self, manifest: FederatedAppManifest) -> Result<SavedApp> {
        SaveManifestUseCase::new(self.store.clone())
            .execute(&manifest)
            .await
    }

    async fn list_apps(&self, host: Option<String>) -> Result<Vec<AppRecord>> {
        QueryTopologyUseCase::new(self.store.clone())
            .apps(host.as_deref())
            .await
    }

    async fn list_hosts(&self) -> Result<Vec<AppRecord>> {
        QueryTopologyUseCase::new(self.store.clone()).hosts().await
    }

    async fn list_dependencies(&self) -> Result<Vec<DependencyRecord>> {
        QueryTopologyUseCase::new(self.store.clone())
            .dependencies()
            .await
    }

    async fn app_tree(&self, request: TreeRequest) -> Result<TreeView> {
        BuildTreeUseCase::new(self.store.clone(), self.max_depth)
            .with_max_nodes(self.max_nodes)
            .execute(request)
            .await
    }

    async fn dependency_view(
        &self,
        request: DependencyViewRequest,
    ) -> Result<DependencyGraphView> {
        DependencyViewUseCase::new(self.store.clone())
            .execute(request)
            .await
    }

    async fn module_view(&self, request: ModuleViewRequest) -> Result<ModuleGraphView> {
        ModuleViewUseCase::new(self.store.clone())
            .execute(request)
            .await
    }
}
