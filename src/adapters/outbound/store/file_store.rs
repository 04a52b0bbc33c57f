use super::memory_store::InMemoryGraphStore;
use crate::ports::outbound::{AppUpsert, GraphStore};
use crate::shared::error::AtlasError;
use crate::shared::security::{read_checked, MAX_STORE_SIZE};
use crate::shared::Result;
use crate::topology::domain::{AppNode, DependencyNode, GraphSnapshot};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// FileGraphStore wraps an in-memory graph and persists it as a JSON snapshot
///
/// Decorator over [`InMemoryGraphStore`]: reads are served from memory,
/// and every write step is followed by a full snapshot written to a
/// temporary file and renamed over the store file. Snapshot writes are
/// serialized by a mutex so an older snapshot never replaces a newer one.
pub struct FileGraphStore {
    inner: InMemoryGraphStore,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileGraphStore {
    /// Opens the store at `path`, starting empty if the file does not exist yet
    ///
    /// # Errors
    /// Returns `AtlasError::StoreRead` if the file exists but cannot be read
    /// or is not a valid snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = if path.exists() {
            Self::load(&path)?
        } else {
            tracing::info!(target: "atlas::store", path = %path.display(), "Starting with an empty graph store");
            GraphSnapshot::default()
        };

        tracing::info!(
            target: "atlas::store",
            path = %path.display(),
            apps = snapshot.apps.len(),
            dependencies = snapshot.dependencies.len(),
            "Opened graph store"
        );

        Ok(Self {
            inner: InMemoryGraphStore::from_snapshot(snapshot),
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<GraphSnapshot> {
        let content =
            read_checked(path, "graph store", MAX_STORE_SIZE).map_err(|e| AtlasError::StoreRead {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| {
            AtlasError::StoreRead {
                path: path.to_path_buf(),
                details: format!("not a valid graph snapshot: {}", e),
            }
            .into()
        })
    }

    async fn persist(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.inner.to_snapshot();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_snapshot(&path, &snapshot))
            .await
            .map_err(|e| AtlasError::StoreWrite {
                path: self.path.clone(),
                details: e.to_string(),
            })?
    }
}

fn write_snapshot(path: &Path, snapshot: &GraphSnapshot) -> Result<()> {
    let to_store_error = |details: String| AtlasError::StoreWrite {
        path: path.to_path_buf(),
        details,
    };

    let json = serde_json::to_string_pretty(snapshot).map_err(|e| to_store_error(e.to_string()))?;

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);

    fs::write(&temp, json).map_err(|e| to_store_error(e.to_string()))?;
    fs::rename(&temp, path).map_err(|e| to_store_error(e.to_string()))?;
    Ok(())
}

#[async_trait]
impl GraphStore for FileGraphStore {
    async fn merge_app(&self, upsert: AppUpsert) -> Result<AppNode> {
        let node = self.inner.merge_app(upsert).await?;
        self.persist().await?;
        Ok(node)
    }

    async fn find_app(&self, name: &str) -> Result<Option<AppNode>> {
        self.inner.find_app(name).await
    }

    async fn merge_remote(&self, from_id: &str, to_id: &str) -> Result<bool> {
        let created = self.inner.merge_remote(from_id, to_id).await?;
        if created {
            self.persist().await?;
        }
        Ok(created)
    }

    async fn merge_dependency(&self, name: &str, version: &str) -> Result<DependencyNode> {
        let node = self.inner.merge_dependency(name, version).await?;
        self.persist().await?;
        Ok(node)
    }

    async fn merge_dependency_edge(&self, app_id: &str, dependency_id: &str) -> Result<bool> {
        let created = self
            .inner
            .merge_dependency_edge(app_id, dependency_id)
            .await?;
        if created {
            self.persist().await?;
        }
        Ok(created)
    }

    async fn snapshot(&self) -> Result<GraphSnapshot> {
        self.inner.snapshot().await
    }
}
