use crate::application::dto::TreeRequest;
use crate::application::read_models::{TreeView, TreeViewBuilder};
use crate::ports::outbound::GraphStore;
use crate::shared::Result;
use crate::topology::domain::AppIndex;
use crate::topology::services::{
    ExpansionState, GraphQueries, HostResolver, TreeBuilder, DEFAULT_MAX_NODES,
};

/// BuildTreeUseCase - Reconstructs the remote tree of a host app
///
/// The lookup table used to resolve relationship targets is built from
/// the host's topology for this call only and dropped afterwards.
///
/// # Type Parameters
/// * `S` - GraphStore implementation
pub struct BuildTreeUseCase<S> {
    store: S,
    max_depth: usize,
    max_nodes: usize,
}

impl<S: GraphStore> BuildTreeUseCase<S> {
    /// `max_depth` is the configured cap; requests may only lower it
    pub fn new(store: S, max_depth: usize) -> Self {
        Self {
            store,
            max_depth,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// # Errors
    /// Returns `AtlasError::HostNotFound` if no app has `name == host == request.host`
    pub async fn execute(&self, request: TreeRequest) -> Result<TreeView> {
        let snapshot = self.store.snapshot().await?;

        let all_apps = GraphQueries::apps(&snapshot);
        let root = HostResolver::resolve(&all_apps, &request.host)?;

        let topology = GraphQueries::apps_for_host(&snapshot, &request.host);
        let index = AppIndex::new(&topology);

        let max_depth = request
            .max_depth
            .map_or(self.max_depth, |depth| depth.min(self.max_depth));
        let tree = TreeBuilder::new(max_depth)
            .with_max_nodes(self.max_nodes)
            .build(root, &index);

        tracing::debug!(
            target: "atlas::tree",
            host = %request.host,
            nodes = tree.node_count(),
            lookup = index.len(),
            max_depth,
            max_nodes = self.max_nodes,
            "Built app tree"
        );

        let state = ExpansionState::with_collapsed(request.collapsed);
        Ok(TreeViewBuilder::build(&request.host, &tree, &state, max_depth))
    }
}
