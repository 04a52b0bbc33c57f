use crate::shared::Result;
use crate::topology::domain::{AppNode, DependencyNode, GraphSnapshot};
use async_trait::async_trait;

/// What a merge does to an app node that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMatch {
    /// Overwrite the stored version (the app's own manifest)
    UpdateVersion,
    /// Leave the stored node untouched (remotes and hosts referenced by another manifest)
    KeepExisting,
}

/// Merge-on-name request for an app node
///
/// `host` and `version` are only written when the node is created, except
/// that `OnMatch::UpdateVersion` also refreshes the version of an existing
/// node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppUpsert {
    pub name: String,
    pub host: String,
    pub version: String,
    pub on_match: OnMatch,
}

impl AppUpsert {
    /// Upsert for the app that published the manifest
    pub fn app(name: impl Into<String>, host: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            version: version.into(),
            on_match: OnMatch::UpdateVersion,
        }
    }

    /// Upsert for an app that is only referenced, never described, by the manifest
    pub fn referenced(
        name: impl Into<String>,
        host: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            version: version.into(),
            on_match: OnMatch::KeepExisting,
        }
    }
}

/// GraphStore port for the persisted topology graph
///
/// Every write is an idempotent merge: apps are unique by name,
/// dependencies by (name, version) and edges by their endpoints. Nothing
/// is ever deleted.
///
/// # Async Support
/// Implementations must be `Send + Sync`; the HTTP server shares one store
/// between all request handlers.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Creates the app node or applies `OnMatch` to the existing one
    ///
    /// # Returns
    /// The node as stored after the merge
    ///
    /// # Errors
    /// Returns `AtlasError::StoreWrite` if the change cannot be persisted
    async fn merge_app(&self, upsert: AppUpsert) -> Result<AppNode>;

    /// Looks up an app node by name
    async fn find_app(&self, name: &str) -> Result<Option<AppNode>>;

    /// Merges a remote edge `from_id -> to_id`
    ///
    /// # Returns
    /// `true` if the edge was created, `false` if it already existed
    async fn merge_remote(&self, from_id: &str, to_id: &str) -> Result<bool>;

    /// Creates or returns the dependency node keyed by (name, version)
    async fn merge_dependency(&self, name: &str, version: &str) -> Result<DependencyNode>;

    /// Merges a "declares shared dependency" edge `app_id -> dependency_id`
    async fn merge_dependency_edge(&self, app_id: &str, dependency_id: &str) -> Result<bool>;

    /// Returns a consistent copy of the whole graph
    ///
    /// # Errors
    /// Returns `AtlasError::StoreRead` if the backing storage cannot be read
    async fn snapshot(&self) -> Result<GraphSnapshot>;
}

#[async_trait]
impl<T: GraphStore + ?Sized> GraphStore for std::sync::Arc<T> {
    async fn merge_app(&self, upsert: AppUpsert) -> Result<AppNode> {
        (**self).merge_app(upsert).await
    }

    async fn find_app(&self, name: &str) -> Result<Option<AppNode>> {
        (**self).find_app(name).await
    }

    async fn merge_remote(&self, from_id: &str, to_id: &str) -> Result<bool> {
        (**self).merge_remote(from_id, to_id).await
    }

    async fn merge_dependency(&self, name: &str, version: &str) -> Result<DependencyNode> {
        (**self).merge_dependency(name, version).await
    }

    async fn merge_dependency_edge(&self, app_id: &str, dependency_id: &str) -> Result<bool> {
        (**self).merge_dependency_edge(app_id, dependency_id).await
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        (**self).snapshot().await
    }
}
