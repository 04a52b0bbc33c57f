use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PATH_SEPARATOR: char = '/';

/// Identity of a position in a reconstructed tree
///
/// The sequence of element ids from the root down to the node. The same
/// app reached through two parents has two distinct paths, so each
/// occurrence can be collapsed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn root(id: impl Into<String>) -> Self {
        Self(vec![id.into()])
    }

    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut ids = self.0.clone();
        ids.push(id.into());
        Self(ids)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    /// Depth below the root (the root itself is 0)
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(&PATH_SEPARATOR.to_string()))
    }
}

impl FromStr for NodePath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids: Vec<String> = s
            .trim()
            .split(PATH_SEPARATOR)
            .map(str::to_string)
            .collect();

        if ids.iter().any(String::is_empty) {
            return Err(format!(
                "Invalid node path '{}'. Expected element ids separated by '/'",
                s
            ));
        }

        Ok(Self(ids))
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Node of a tree reconstructed from remote relationships
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub version: String,
    pub children: Vec<TreeNode>,
    /// Set when the depth cap stopped expansion below this node
    pub truncated: bool,
}

impl TreeNode {
    pub fn leaf(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            children: Vec::new(),
            truncated: false,
        }
    }

    /// Total number of nodes in this subtree, the node included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
