//! federation-atlas - topology dashboard backend for module-federation deployments
//!
//! Records the manifests that federated front-end applications publish
//! (their host, remotes and shared dependencies) in a graph store and
//! serves the topology back as a collapsible host tree, a dependency
//! graph filtered by a search string and a module overview.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`topology`): Manifest validation, graph records, tree reconstruction and layout presets
//! - **Application Layer** (`application`): Use cases, view read models and the topology service
//! - **Ports** (`ports`): Interface definitions for the store, the client and progress output
//! - **Adapters** (`adapters`): axum API, graph stores, reqwest client and console output
//! - **Shared** (`shared`): Error taxonomy and file security checks
//!
//! # Example
//!
//! ```no_run
//! use federation_atlas::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let store = InMemoryGraphStore::new();
//! let service = TopologyService::new(std::sync::Arc::new(store), 32);
//!
//! let manifest: FederatedAppManifest = serde_json::from_str(
//!     r#"{"name":"shell","host":"shell","version":"1.1","remotes":{"cart":"1.0"}}"#,
//! )?;
//! service.save_manifest(manifest).await?;
//!
//! let view = service.app_tree(TreeRequest::new("shell")).await?;
//! print!("{}", TreePrinter::new(false).render(&view));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;
pub mod topology;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{router, serve_on, AtlasServer};
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TreePrinter};
    pub use crate::adapters::outbound::filesystem::JsonManifestReader;
    pub use crate::adapters::outbound::network::AtlasHttpClient;
    pub use crate::adapters::outbound::store::{FileGraphStore, InMemoryGraphStore};
    pub use crate::application::dto::{
        DependencyViewRequest, ModuleViewRequest, PublishRequest, PublishSummary, TreeRequest,
    };
    pub use crate::application::read_models::{
        DependencyGraphView, ModuleGraphView, TreeNodeView, TreeView,
    };
    pub use crate::application::use_cases::{
        BuildTreeUseCase, DependencyViewUseCase, ModuleViewUseCase, PublishManifestsUseCase,
        QueryTopologyUseCase, SaveManifestUseCase,
    };
    pub use crate::application::TopologyService;
    pub use crate::ports::inbound::TopologyPort;
    pub use crate::ports::outbound::{
        GraphStore, ManifestReader, ProgressReporter, TopologyClient,
    };
    pub use crate::shared::Result;
    pub use crate::topology::domain::{
        AppRecord, DependencyRecord, FederatedAppManifest, NodePath, SavedApp,
    };
    pub use crate::topology::policies::{LayoutPreset, Viewport};
    pub use crate::topology::services::{ExpansionState, TreeBuilder};
}
