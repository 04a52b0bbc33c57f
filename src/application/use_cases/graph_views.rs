use crate::application::dto::{DependencyViewRequest, ModuleViewRequest};
use crate::application::read_models::{DependencyGraphView, ModuleGraphView};
use crate::ports::outbound::GraphStore;
use crate::shared::Result;
use crate::topology::services::{DependencySearch, GraphQueries};

/// DependencyViewUseCase - Shared dependencies and the apps declaring them
///
/// # Type Parameters
/// * `S` - GraphStore implementation
pub struct DependencyViewUseCase<S> {
    store: S,
}

impl<S: GraphStore> DependencyViewUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn execute(&self, request: DependencyViewRequest) -> Result<DependencyGraphView> {
        let snapshot = self.store.snapshot().await?;
        let dependencies = GraphQueries::dependencies(&snapshot);
        let apps = GraphQueries::apps(&snapshot);

        let search = DependencySearch::new(request.search);
        let result = search.filter(&dependencies, &apps);

        tracing::debug!(
            target: "atlas::views",
            search = %search.query(),
            dependencies = result.dependencies.len(),
            apps = result.apps.len(),
            links = result.links.len(),
            "Filtered dependency view"
        );

        Ok(DependencyGraphView::build(
            search.query(),
            result,
            request.viewport,
        ))
    }
}

/// ModuleViewUseCase - Every app sized by the remotes it loads
///
/// # Type Parameters
/// * `S` - GraphStore implementation
pub struct ModuleViewUseCase<S> {
    store: S,
}

impl<S: GraphStore> ModuleViewUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn execute(&self, request: ModuleViewRequest) -> Result<ModuleGraphView> {
        let snapshot = self.store.snapshot().await?;
        let apps = GraphQueries::apps(&snapshot);
        Ok(ModuleGraphView::build(&apps, request.viewport))
    }
}
