use crate::topology::domain::NodePath;
use std::collections::BTreeSet;

/// Expand/collapse view state of a tree
///
/// Every node starts expanded; the state records which tree positions the
/// viewer has collapsed. It is a value: `toggle` hands back a new state
/// and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    collapsed: BTreeSet<NodePath>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collapsed(paths: impl IntoIterator<Item = NodePath>) -> Self {
        Self {
            collapsed: paths.into_iter().collect(),
        }
    }

    /// Returns a new state with `path` flipped between collapsed and expanded
    pub fn toggle(&self, path: &NodePath) -> Self {
        let mut collapsed = self.collapsed.clone();
        if !collapsed.remove(path) {
            collapsed.insert(path.clone());
        }
        Self { collapsed }
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        !self.collapsed.contains(path)
    }

    pub fn collapsed_paths(&self) -> impl Iterator<Item = &NodePath> {
        self.collapsed.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_expanded_by_default() {
        let state = ExpansionState::new();
        assert!(state.is_expanded(&NodePath::root("a")));
        assert!(state.is_expanded(&NodePath::root("a").child("b")));
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let path = NodePath::root("a").child("b");
        let original = ExpansionState::new();
        let collapsed = original.toggle(&path);

        assert!(original.is_expanded(&path));
        assert!(!collapsed.is_expanded(&path));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let path = NodePath::root("a").child("b");
        let state = ExpansionState::with_collapsed([NodePath::root("a").child("c")]);

        let restored = state.toggle(&path).toggle(&path);

        assert_eq!(restored, state);
    }

    #[test]
    fn test_same_app_under_two_parents_is_independent() {
        let via_cart = NodePath::root("a").child("b").child("d");
        let via_checkout = NodePath::root("a").child("c").child("d");

        let state = ExpansionState::new().toggle(&via_cart);

        assert!(!state.is_expanded(&via_cart));
        assert!(state.is_expanded(&via_checkout));
    }

    #[test]
    fn test_collapsed_paths_sorted() {
        let state = ExpansionState::with_collapsed([
            NodePath::root("a").child("c"),
            NodePath::root("a").child("b"),
        ]);
        let paths: Vec<String> = state.collapsed_paths().map(|p| p.to_string()).collect();
        assert_eq!(paths, vec!["a/b", "a/c"]);
    }
}
