use crate::application::read_models::{TreeNodeView, TreeView};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Renders a tree view as indented text for the terminal
///
/// ```text
/// shell 1.1
/// ├── cart 1.0
/// └── checkout 1.0 [+2]
/// ```
pub struct TreePrinter {
    colored: bool,
}

impl TreePrinter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn render(&self, view: &TreeView) -> String {
        let mut out = String::new();
        self.write_label(&mut out, &view.root);
        out.push('\n');
        self.write_children(&mut out, &view.root, "");
        out
    }

    fn write_children(&self, out: &mut String, node: &TreeNodeView, prefix: &str) {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let branch = if last { "└── " } else { "├── " };
            out.push_str(prefix);
            out.push_str(branch);
            self.write_label(out, child);
            out.push('\n');

            let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            self.write_children(out, child, &next_prefix);
        }
    }

    fn write_label(&self, out: &mut String, node: &TreeNodeView) {
        let mut suffix = String::new();
        if !node.expanded && node.child_count > 0 {
            let _ = write!(suffix, " [+{}]", node.child_count);
        }
        if node.truncated {
            suffix.push_str(" [truncated]");
        }

        let version = if node.version.is_empty() {
            String::new()
        } else {
            format!(" {}", node.version)
        };

        if self.colored {
            let _ = write!(
                out,
                "{}{}{}",
                node.name.bold().green(),
                version.dimmed(),
                suffix.yellow()
            );
        } else {
            let _ = write!(out, "{}{}{}", node.name, version, suffix);
        }
    }
}
