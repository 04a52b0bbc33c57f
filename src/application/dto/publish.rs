use crate::topology::domain::SavedApp;
use std::path::PathBuf;

/// PublishRequest - Manifest files to send to a server
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub manifest_paths: Vec<PathBuf>,
}

impl PublishRequest {
    pub fn new(manifest_paths: Vec<PathBuf>) -> Self {
        Self { manifest_paths }
    }
}

/// A manifest that could not be published, with the reason
#[derive(Debug, Clone)]
pub struct PublishFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// PublishSummary - Outcome of a publish run
#[derive(Debug, Clone, Default)]
pub struct PublishSummary {
    pub published: Vec<SavedApp>,
    pub failures: Vec<PublishFailure>,
}

impl PublishSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
