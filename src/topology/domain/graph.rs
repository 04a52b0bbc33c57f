use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Version stored on a host node that was created implicitly by a remote's manifest
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Stored app node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNode {
    pub id: String,
    pub name: String,
    pub host: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppNode {
    /// A host app is the root of a topology: its host is itself
    pub fn is_host(&self) -> bool {
        self.name == self.host
    }
}

/// App as stored after a manifest write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedApp {
    pub id: String,
    pub name: String,
    pub host: String,
    pub version: String,
}

impl From<&AppNode> for SavedApp {
    fn from(node: &AppNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            host: node.host.clone(),
            version: node.version.clone(),
        }
    }
}

/// Stored shared-dependency node, unique by (name, version)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub id: String,
    pub name: String,
    pub version: String,
}

/// Directed edge between two element ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_id: String,
    pub to_id: String,
}

impl Relationship {
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }
}

/// App as returned by the read endpoints, with its relationships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    pub host: String,
    pub version: String,
    pub relationships: Vec<Relationship>,
}

impl AppRecord {
    pub fn from_node(node: &AppNode, relationships: Vec<Relationship>) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            host: node.host.clone(),
            version: node.version.clone(),
            relationships,
        }
    }

    pub fn is_host(&self) -> bool {
        self.name == self.host
    }
}

/// Dependency as returned by the read endpoints; relationships point from apps to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub id: String,
    pub name: String,
    pub version: String,
    pub relationships: Vec<Relationship>,
}

/// Point-in-time copy of the whole graph
///
/// Stores hand this out for read queries, and the file-backed store
/// persists it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    #[serde(default)]
    pub apps: Vec<AppNode>,
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
    #[serde(default)]
    pub remotes: Vec<Relationship>,
    #[serde(default)]
    pub dependency_edges: Vec<Relationship>,
}

/// Request-scoped lookup table of apps by element id
///
/// Built once per request from the records being served and passed
/// explicitly to whatever needs to resolve relationship targets.
#[derive(Debug)]
pub struct AppIndex<'a> {
    by_id: HashMap<&'a str, &'a AppRecord>,
}

impl<'a> AppIndex<'a> {
    pub fn new(records: &'a [AppRecord]) -> Self {
        Self {
            by_id: records
                .iter()
                .map(|record| (record.id.as_str(), record))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a AppRecord> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
