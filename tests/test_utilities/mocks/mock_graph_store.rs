use async_trait::async_trait;
use federation_atlas::ports::outbound::AppUpsert;
use federation_atlas::prelude::*;
use federation_atlas::topology::domain::{AppNode, DependencyNode, GraphSnapshot};

/// GraphStore whose every call fails, standing in for an unreachable backend
#[derive(Default, Clone)]
pub struct FailingGraphStore;

impl FailingGraphStore {
    pub fn new() -> Self {
        Self
    }
}

fn unavailable<T>() -> Result<T> {
    anyhow::bail!("graph store unavailable")
}

#[async_trait]
impl GraphStore for FailingGraphStore {
    async fn merge_app(&self, _upsert: AppUpsert) -> Result<AppNode> {
        unavailable()
    }

    async fn find_app(&self, _name: &str) -> Result<Option<AppNode>> {
        unavailable()
    }

    async fn merge_remote(&self, _from_id: &str, _to_id: &str) -> Result<bool> {
        unavailable()
    }

    async fn merge_dependency(&self, _name: &str, _version: &str) -> Result<DependencyNode> {
        unavailable()
    }

    async fn merge_dependency_edge(&self, _app_id: &str, _dependency_id: &str) -> Result<bool> {
        unavailable()
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        unavailable()
    }
}
