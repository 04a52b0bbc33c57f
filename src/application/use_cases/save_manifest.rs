use crate::ports::outbound::{AppUpsert, GraphStore};
use crate::shared::Result;
use crate::topology::domain::{FederatedAppManifest, SavedApp, ValidatedManifest, UNKNOWN_VERSION};
use anyhow::Context;

/// SaveManifestUseCase - Upserts a published manifest into the graph
///
/// The write is a sequence of independent merges and is not atomic: a
/// store failure part-way leaves the steps already applied in place.
///
/// # Type Parameters
/// * `S` - GraphStore implementation
pub struct SaveManifestUseCase<S> {
    store: S,
}

impl<S: GraphStore> SaveManifestUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the upsert
    ///
    /// # Returns
    /// The app as stored after the write
    ///
    /// # Errors
    /// Returns `AtlasError::InvalidManifest` before anything is written if
    /// a name or version is invalid, or the store's error if a merge fails.
    pub async fn execute(&self, manifest: &FederatedAppManifest) -> Result<SavedApp> {
        // Step 1: Validate everything up front
        let manifest = manifest.validate()?;

        // Step 2: The app itself
        let app = self
            .store
            .merge_app(AppUpsert::app(
                manifest.name.as_str(),
                manifest.host_or_empty(),
                manifest.version.as_str(),
            ))
            .await
            .with_context(|| format!("Failed to save app '{}'", manifest.name))?;

        // Step 3: Remotes it loads
        let remotes = self.save_remotes(&app.id, &manifest).await?;

        // Step 4: Edge from its host
        self.link_host(&app.id, &app.host, &manifest).await?;

        // Step 5: Shared dependencies
        let shared = self.save_shared(&app.id, &manifest).await?;

        tracing::info!(
            target: "atlas::store",
            app = %app.name,
            version = %app.version,
            remotes,
            shared,
            "Saved manifest"
        );

        Ok(SavedApp::from(&app))
    }

    /// A remote seen for the first time takes the publishing app's host and
    /// version; the version declared in `remotes` is not stored
    async fn save_remotes(&self, app_id: &str, manifest: &ValidatedManifest) -> Result<usize> {
        for remote in &manifest.remotes {
            let node = self
                .store
                .merge_app(AppUpsert::referenced(
                    remote.name.as_str(),
                    manifest.host_or_empty(),
                    manifest.version.as_str(),
                ))
                .await
                .with_context(|| format!("Failed to save remote '{}'", remote.name))?;
            self.store.merge_remote(app_id, &node.id).await?;
        }
        Ok(manifest.remotes.len())
    }

    /// Links the declared host to the app when the host is a true host and
    /// the stored app still belongs to it
    async fn link_host(
        &self,
        app_id: &str,
        stored_host: &str,
        manifest: &ValidatedManifest,
    ) -> Result<()> {
        let Some(host) = manifest.foreign_host() else {
            return Ok(());
        };

        let host_node = self
            .store
            .merge_app(AppUpsert::referenced(
                host.as_str(),
                host.as_str(),
                UNKNOWN_VERSION,
            ))
            .await
            .with_context(|| format!("Failed to save host '{}'", host))?;

        if host_node.is_host() && stored_host == host.as_str() {
            self.store.merge_remote(&host_node.id, app_id).await?;
        } else {
            tracing::debug!(
                target: "atlas::store",
                app = %manifest.name,
                host = %host,
                "Declared host is not linked: it is not a host app or the app belongs elsewhere"
            );
        }
        Ok(())
    }

    async fn save_shared(&self, app_id: &str, manifest: &ValidatedManifest) -> Result<usize> {
        for entry in &manifest.shared {
            let dependency = self
                .store
                .merge_dependency(entry.name.as_str(), entry.version.as_str())
                .await
                .with_context(|| format!("Failed to save shared dependency '{}'", entry.name))?;
            self.store
                .merge_dependency_edge(app_id, &dependency.id)
                .await?;
        }
        Ok(manifest.shared.len())
    }
}
