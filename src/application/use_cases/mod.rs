/// Use cases module containing application business logic orchestration
mod build_tree;
mod graph_views;
mod publish_manifests;
mod query_topology;
mod save_manifest;

pub use build_tree::BuildTreeUseCase;
pub use graph_views::{DependencyViewUseCase, ModuleViewUseCase};
pub use publish_manifests::PublishManifestsUseCase;
pub use query_topology::QueryTopologyUseCase;
pub use save_manifest::SaveManifestUseCase;
