//! Tree read model: a reconstructed tree with expand/collapse applied

use crate::topology::domain::{NodePath, TreeNode};
use crate::topology::policies::LayoutPreset;
use crate::topology::services::ExpansionState;
use serde::{Deserialize, Serialize};

/// Tree of a host app, ready for the tree layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeView {
    pub host: String,
    pub root: TreeNodeView,
    /// Collapsed positions the view was rendered with
    pub collapsed: Vec<NodePath>,
    pub max_depth: usize,
    pub preset: LayoutPreset,
}

/// One position in the tree view
///
/// A collapsed node keeps `child_count` so the renderer can still show
/// that something is hidden below it, but carries no children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeView {
    pub id: String,
    pub path: NodePath,
    pub name: String,
    pub version: String,
    pub expanded: bool,
    pub child_count: usize,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub children: Vec<TreeNodeView>,
}

impl TreeNodeView {
    /// Number of nodes visible in this subtree, the node included
    pub fn visible_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNodeView::visible_count)
            .sum::<usize>()
    }
}

/// Builds tree views by walking a `TreeNode` under an `ExpansionState`
pub struct TreeViewBuilder;

impl TreeViewBuilder {
    pub fn build(
        host: &str,
        tree: &TreeNode,
        state: &ExpansionState,
        max_depth: usize,
    ) -> TreeView {
        TreeView {
            host: host.to_string(),
            root: Self::build_node(tree, NodePath::root(&tree.id), state),
            collapsed: state.collapsed_paths().cloned().collect(),
            max_depth,
            preset: LayoutPreset::tree(),
        }
    }

    fn build_node(node: &TreeNode, path: NodePath, state: &ExpansionState) -> TreeNodeView {
        let expanded = state.is_expanded(&path);
        let children = if expanded {
            node.children
                .iter()
                .map(|child| Self::build_node(child, path.child(&child.id), state))
                .collect()
        } else {
            Vec::new()
        };

        TreeNodeView {
            id: node.id.clone(),
            path,
            name: node.name.clone(),
            version: node.version.clone(),
            expanded,
            child_count: node.children.len(),
            truncated: node.truncated,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// shell -> (cart -> ui), (checkout -> ui)
    fn tree() -> TreeNode {
        let mut root = TreeNode::leaf("a", "shell", "1.0");
        let mut cart = TreeNode::leaf("b", "cart", "1.0");
        cart.children.push(TreeNode::leaf("d", "ui", "2.0"));
        let mut checkout = TreeNode::leaf("c", "checkout", "1.0");
        checkout.children.push(TreeNode::leaf("d", "ui", "2.0"));
        root.children.push(cart);
        root.children.push(checkout);
        root
    }

    #[test]
    fn test_fully_expanded_view() {
        let view = TreeViewBuilder::build("shell", &tree(), &ExpansionState::new(), 32);

        assert_eq!(view.root.visible_count(), 5);
        assert!(view.root.expanded);
        assert_eq!(view.root.path.to_string(), "a");
        assert_eq!(view.root.children[0].children[0].path.to_string(), "a/b/d");
        assert!(view.collapsed.is_empty());
        assert_eq!(view.preset.name(), "tree");
    }

    #[test]
    fn test_collapsed_node_hides_children_but_keeps_count() {
        let state = ExpansionState::new().toggle(&NodePath::root("a").child("b"));
        let view = TreeViewBuilder::build("shell", &tree(), &state, 32);

        let cart = &view.root.children[0];
        assert!(!cart.expanded);
        assert_eq!(cart.child_count, 1);
        assert!(cart.children.is_empty());
        assert_eq!(view.root.visible_count(), 4);
    }

    #[test]
    fn test_collapsing_one_occurrence_leaves_the_other_expanded() {
        let state = ExpansionState::new().toggle(&NodePath::root("a").child("b").child("d"));
        let view = TreeViewBuilder::build("shell", &tree(), &state, 32);

        assert!(!view.root.children[0].children[0].expanded);
        assert!(view.root.children[1].children[0].expanded);
    }

    #[test]
    fn test_building_does_not_touch_the_tree() {
        let tree = tree();
        let before = tree.clone();
        let state = ExpansionState::new().toggle(&NodePath::root("a"));

        let view = TreeViewBuilder::build("shell", &tree, &state, 32);

        assert_eq!(tree, before);
        assert_eq!(view.root.visible_count(), 1);
        assert_eq!(view.collapsed, vec![NodePath::root("a")]);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = TreeViewBuilder::build("shell", &tree(), &ExpansionState::new(), 8);
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["maxDepth"], 8);
        assert_eq!(value["root"]["childCount"], 2);
        assert_eq!(value["root"]["children"][1]["path"], "a/c");
        assert_eq!(value["preset"]["kind"], "tree");
    }
}
