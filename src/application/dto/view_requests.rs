use crate::topology::domain::NodePath;
use crate::topology::policies::Viewport;

/// TreeRequest - Input of the tree use case
#[derive(Debug, Clone)]
pub struct TreeRequest {
    /// Name of the host app to root the tree at
    pub host: String,
    /// Tree positions the viewer has collapsed
    pub collapsed: Vec<NodePath>,
    /// Requested depth cap; never raises the configured maximum
    pub max_depth: Option<usize>,
}

impl TreeRequest {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            collapsed: Vec::new(),
            max_depth: None,
        }
    }

    pub fn with_collapsed(mut self, collapsed: Vec<NodePath>) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// DependencyViewRequest - Input of the dependency view use case
#[derive(Debug, Clone, Default)]
pub struct DependencyViewRequest {
    /// Substring filter on dependency names; empty keeps everything
    pub search: String,
    pub viewport: Viewport,
}

impl DependencyViewRequest {
    pub fn new(search: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            search: search.into(),
            viewport,
        }
    }
}

/// ModuleViewRequest - Input of the module view use case
#[derive(Debug, Clone, Default)]
pub struct ModuleViewRequest {
    pub viewport: Viewport,
}

impl ModuleViewRequest {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}
