//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the HTTP layer and the CLI printer.
//! They are built from domain records and never written back.

pub mod graph_view;
pub mod tree_view;

pub use graph_view::{DependencyGraphView, GraphNodeView, ModuleGraphView, NodeKind};
pub use tree_view::{TreeNodeView, TreeView, TreeViewBuilder};
