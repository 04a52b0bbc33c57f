use crate::topology::domain::{AppIndex, AppRecord, TreeNode};
use std::collections::HashSet;

/// Default cap on how deep a tree is expanded below its root
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default cap on the number of nodes in one tree, root included
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// TreeBuilder reconstructs a rooted tree from flat remote relationships
///
/// Each relationship target is resolved through the request-scoped
/// [`AppIndex`] and expanded in turn. An app shared by several parents
/// shows up once under each of them.
///
/// Cycles are cut with the set of ancestors on the current path: an id
/// that is already an ancestor is not entered again. Expansion also stops
/// at `max_depth`; the node where that happens is flagged `truncated`.
///
/// Shared descendants make the tree grow with the number of paths, not the
/// number of apps, so the total is capped at `max_nodes`. Once that budget
/// is spent, the node whose next child no longer fits is flagged
/// `truncated` and nothing further is expanded.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
    max_nodes: usize,
}

/// Nodes still allowed in the tree under construction
struct NodeBudget {
    remaining: usize,
    exhausted: bool,
}

impl NodeBudget {
    fn take(&mut self) -> bool {
        if self.remaining == 0 {
            self.exhausted = true;
            return false;
        }
        self.remaining -= 1;
        true
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl TreeBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Caps the node count; values below 1 still allow the root
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes.max(1);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Builds the tree below `root`
    ///
    /// Relationship targets missing from `index` (dependencies, apps
    /// outside the current selection) are skipped.
    pub fn build(&self, root: &AppRecord, index: &AppIndex<'_>) -> TreeNode {
        let mut ancestors = HashSet::new();
        let mut budget = NodeBudget {
            remaining: self.max_nodes - 1,
            exhausted: false,
        };
        let tree = self.expand(root, index, &mut ancestors, &mut budget, 0);

        if budget.exhausted {
            tracing::warn!(
                target: "atlas::tree",
                app = %root.name,
                max_nodes = self.max_nodes,
                "Maximum tree size reached, remaining remotes are not shown"
            );
        }
        tree
    }

    fn expand<'a>(
        &self,
        record: &'a AppRecord,
        index: &AppIndex<'a>,
        ancestors: &mut HashSet<&'a str>,
        budget: &mut NodeBudget,
        depth: usize,
    ) -> TreeNode {
        let mut node = TreeNode::leaf(&record.id, &record.name, &record.version);

        let mut targets: Vec<&AppRecord> = record
            .relationships
            .iter()
            .filter(|rel| rel.from_id == record.id)
            .filter_map(|rel| index.get(&rel.to_id))
            .collect();
        // Children come out in name order, and the node budget is spent in that order too
        targets.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        if targets.is_empty() {
            return node;
        }

        if depth >= self.max_depth {
            tracing::warn!(
                target: "atlas::tree",
                app = %record.name,
                max_depth = self.max_depth,
                "Maximum tree depth reached, remotes below this app are not shown"
            );
            node.truncated = true;
            return node;
        }

        ancestors.insert(record.id.as_str());

        for target in targets {
            if ancestors.contains(target.id.as_str()) {
                tracing::debug!(
                    target: "atlas::tree",
                    from = %record.name,
                    to = %target.name,
                    "Skipping remote that points back to an ancestor"
                );
                continue;
            }
            if !budget.take() {
                node.truncated = true;
                break;
            }
            node.children
                .push(self.expand(target, index, ancestors, budget, depth + 1));
        }

        ancestors.remove(record.id.as_str());
        node
    }
}
