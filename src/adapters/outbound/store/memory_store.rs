use crate::ports::outbound::{AppUpsert, GraphStore, OnMatch};
use crate::shared::Result;
use crate::topology::domain::{AppNode, DependencyNode, GraphSnapshot, Relationship};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use uuid::Uuid;

/// Key of a dependency node
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct DependencyKey {
    name: String,
    version: String,
}

impl DependencyKey {
    fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// InMemoryGraphStore keeps the topology graph in concurrent maps
///
/// Apps are keyed by name and dependencies by (name, version); the
/// `entry` API makes each merge atomic with respect to concurrent writers.
/// Edges live in sets, so merging an existing edge is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    apps: DashMap<String, AppNode>,
    dependencies: DashMap<DependencyKey, DependencyNode>,
    remotes: DashSet<Relationship>,
    dependency_edges: DashSet<Relationship>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted snapshot
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        let store = Self::new();
        for app in snapshot.apps {
            store.apps.insert(app.name.clone(), app);
        }
        for dependency in snapshot.dependencies {
            store.dependencies.insert(
                DependencyKey::new(&dependency.name, &dependency.version),
                dependency,
            );
        }
        for edge in snapshot.remotes {
            store.remotes.insert(edge);
        }
        for edge in snapshot.dependency_edges {
            store.dependency_edges.insert(edge);
        }
        store
    }

    pub fn app_count(&self) -> usize {
        self.apps.len()
    }

    /// Copies the graph synchronously; every collection is sorted
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let mut apps: Vec<AppNode> = self.apps.iter().map(|e| e.value().clone()).collect();
        apps.sort_by(|a, b| a.name.cmp(&b.name));

        let mut dependencies: Vec<DependencyNode> =
            self.dependencies.iter().map(|e| e.value().clone()).collect();
        dependencies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));

        let mut remotes: Vec<Relationship> = self.remotes.iter().map(|e| e.key().clone()).collect();
        remotes.sort();

        let mut dependency_edges: Vec<Relationship> =
            self.dependency_edges.iter().map(|e| e.key().clone()).collect();
        dependency_edges.sort();

        GraphSnapshot {
            apps,
            dependencies,
            remotes,
            dependency_edges,
        }
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn merge_app(&self, upsert: AppUpsert) -> Result<AppNode> {
        let node = match self.apps.entry(upsert.name.clone()) {
            Entry::Occupied(mut existing) => {
                if upsert.on_match == OnMatch::UpdateVersion {
                    let node = existing.get_mut();
                    node.version = upsert.version;
                    node.updated_at = Utc::now();
                }
                existing.get().clone()
            }
            Entry::Vacant(vacant) => {
                let now = Utc::now();
                let node = AppNode {
                    id: format!("app:{}", Uuid::new_v4()),
                    name: upsert.name,
                    host: upsert.host,
                    version: upsert.version,
                    created_at: now,
                    updated_at: now,
                };
                tracing::debug!(target: "atlas::store", app = %node.name, id = %node.id, "Created app node");
                vacant.insert(node).value().clone()
            }
        };
        Ok(node)
    }

    async fn find_app(&self, name: &str) -> Result<Option<AppNode>> {
        Ok(self.apps.get(name).map(|entry| entry.value().clone()))
    }

    async fn merge_remote(&self, from_id: &str, to_id: &str) -> Result<bool> {
        Ok(self.remotes.insert(Relationship::new(from_id, to_id)))
    }

    async fn merge_dependency(&self, name: &str, version: &str) -> Result<DependencyNode> {
        let node = self
            .dependencies
            .entry(DependencyKey::new(name, version))
            .or_insert_with(|| DependencyNode {
                id: format!("dep:{}", Uuid::new_v4()),
                name: name.to_string(),
                version: version.to_string(),
            })
            .value()
            .clone();
        Ok(node)
    }

    async fn merge_dependency_edge(&self, app_id: &str, dependency_id: &str) -> Result<bool> {
        Ok(self
            .dependency_edges
            .insert(Relationship::new(app_id, dependency_id)))
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        Ok(self.to_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_merge_app_creates_once() {
        let store = InMemoryGraphStore::new();

        let first = store
            .merge_app(AppUpsert::app("shell", "shell", "1.0"))
            .await
            .unwrap();
        let second = store
            .merge_app(AppUpsert::app("shell", "other", "1.1"))
            .await
            .unwrap();

        assert_eq!(store.app_count(), 1);
        assert_eq!(first.id, second.id);
        assert!(first.id.starts_with("app:"));
        assert_eq!(second.version, "1.1");
        // host is only written on create
        assert_eq!(second.host, "shell");
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_merge_referenced_app_keeps_existing_fields() {
        let store = InMemoryGraphStore::new();
        store
            .merge_app(AppUpsert::app("cart", "shell", "2.0"))
            .await
            .unwrap();

        let node = store
            .merge_app(AppUpsert::referenced("cart", "", "1.0"))
            .await
            .unwrap();

        assert_eq!(node.version, "2.0");
        assert_eq!(node.host, "shell");
    }

    #[tokio::test]
    async fn test_edges_are_deduplicated() {
        let store = InMemoryGraphStore::new();

        assert!(store.merge_remote("app:1", "app:2").await.unwrap());
        assert!(!store.merge_remote("app:1", "app:2").await.unwrap());
        assert!(store.merge_remote("app:2", "app:1").await.unwrap());

        assert!(store.merge_dependency_edge("app:1", "dep:1").await.unwrap());
        assert!(!store.merge_dependency_edge("app:1", "dep:1").await.unwrap());

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.remotes.len(), 2);
        assert_eq!(snapshot.dependency_edges.len(), 1);
    }

    #[tokio::test]
    async fn test_dependencies_keyed_by_name_and_version() {
        let store = InMemoryGraphStore::new();

        let a = store.merge_dependency("react", "18.0").await.unwrap();
        let b = store.merge_dependency("react", "18.0").await.unwrap();
        let c = store.merge_dependency("react", "17.0").await.unwrap();

        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert!(a.id.starts_with("dep:"));
    }

    #[tokio::test]
    async fn test_find_app() {
        let store = InMemoryGraphStore::new();
        store
            .merge_app(AppUpsert::app("shell", "shell", ""))
            .await
            .unwrap();

        assert!(store.find_app("shell").await.unwrap().is_some());
        assert!(store.find_app("cart").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_snapshot_round_trip_preserves_ids() {
        let store = InMemoryGraphStore::new();
        let shell = store
            .merge_app(AppUpsert::app("shell", "shell", "1.0"))
            .await
            .unwrap();
        let cart = store
            .merge_app(AppUpsert::referenced("cart", "shell", "1.0"))
            .await
            .unwrap();
        store.merge_remote(&shell.id, &cart.id).await.unwrap();

        let restored = InMemoryGraphStore::from_snapshot(store.to_snapshot());

        let again = restored
            .merge_app(AppUpsert::app("shell", "shell", "1.1"))
            .await
            .unwrap();
        assert_eq!(again.id, shell.id);
        assert!(!restored.merge_remote(&shell.id, &cart.id).await.unwrap());
    }
}
