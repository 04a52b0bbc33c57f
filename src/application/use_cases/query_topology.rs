use crate::ports::outbound::GraphStore;
use crate::shared::Result;
use crate::topology::domain::{AppRecord, DependencyRecord};
use crate::topology::services::GraphQueries;

/// QueryTopologyUseCase - Read-side listings of apps, hosts and dependencies
///
/// # Type Parameters
/// * `S` - GraphStore implementation
pub struct QueryTopologyUseCase<S> {
    store: S,
}

impl<S: GraphStore> QueryTopologyUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists apps with their outgoing remote edges
    ///
    /// With `host`, only apps of that host's topology are returned.
    pub async fn apps(&self, host: Option<&str>) -> Result<Vec<AppRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(match host {
            Some(host) => GraphQueries::apps_for_host(&snapshot, host),
            None => GraphQueries::apps(&snapshot),
        })
    }

    pub async fn hosts(&self) -> Result<Vec<AppRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(GraphQueries::host_apps(&snapshot))
    }

    pub async fn dependencies(&self) -> Result<Vec<DependencyRecord>> {
        let snapshot = self.store.snapshot().await?;
        Ok(GraphQueries::dependencies(&snapshot))
    }
}
