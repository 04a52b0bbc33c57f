pub mod app_name;
pub mod graph;
pub mod manifest;
pub mod tree;

pub use app_name::{AppName, VersionTag};
pub use graph::{
    AppIndex, AppNode, AppRecord, DependencyNode, DependencyRecord, GraphSnapshot, Relationship,
    SavedApp, UNKNOWN_VERSION,
};
pub use manifest::{
    FederatedAppManifest, RemoteDeclaration, SharedDeclarations, SharedEntry, SharedListEntry,
    SharedModule, SharedSpec, ValidatedManifest,
};
pub use tree::{NodePath, TreeNode};
