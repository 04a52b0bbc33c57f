use async_trait::async_trait;
use federation_atlas::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock TopologyClient recording what was published
#[derive(Default, Clone)]
pub struct MockTopologyClient {
    pub published: Arc<Mutex<Vec<String>>>,
    pub rejected: HashSet<String>,
    pub tree: Option<TreeView>,
}

impl MockTopologyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `publish` fail for the app called `name`
    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    pub fn with_tree(mut self, tree: TreeView) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn published_names(&self) -> Vec<String> {
        let mut names = self.published.lock().unwrap().clone();
        names.sort();
        names
    }
}

#[async_trait]
impl TopologyClient for MockTopologyClient {
    async fn publish(&self, manifest: &FederatedAppManifest) -> Result<SavedApp> {
        if self.rejected.contains(&manifest.name) {
            anyhow::bail!("server answered 500 Internal Server Error");
        }

        self.published.lock().unwrap().push(manifest.name.clone());
        Ok(SavedApp {
            id: format!("app:{}", manifest.name),
            name: manifest.name.clone(),
            host: manifest.host.clone().unwrap_or_default(),
            version: manifest.version.clone().unwrap_or_default(),
        })
    }

    async fn fetch_tree(&self, host: &str, _max_depth: Option<usize>) -> Result<TreeView> {
        self.tree
            .clone()
            .filter(|tree| tree.host == host)
            .ok_or_else(|| anyhow::anyhow!("Host app not found: {}", host))
    }
}
