//! Read-only consumers of a resolved dependents tree.
//!
//! Everything here walks the tree through the public accessors; nothing
//! mutates a node. These are the helpers a `dependents` report task uses to
//! show a user what else rebuilds when a binary changes.

use tracing::debug;

use crate::resolved::ResolvedDependents;

/// Render a result tree as text, one node per line.
///
/// Nodes that are not currently buildable are annotated `(not buildable)`,
/// test suites `(test suite)`. Children appear in stored order.
pub fn render_tree(root: &ResolvedDependents) -> String {
    let mut output = String::new();
    output.push_str(&node_line(root));
    output.push('\n');
    let count = root.children().len();
    for (i, child) in root.children().iter().enumerate() {
        render_subtree(&mut output, child, "", i == count - 1);
    }
    debug!(
        nodes = count_nodes(root),
        test_suites = count_test_suites(root),
        "rendered dependents tree"
    );
    output
}

fn render_subtree(output: &mut String, node: &ResolvedDependents, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&node_line(node));
    output.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        render_subtree(output, child, &child_prefix, i == count - 1);
    }
}

fn node_line(node: &ResolvedDependents) -> String {
    let mut line = node.id().to_string();
    if !node.is_buildable() {
        line.push_str(" (not buildable)");
    }
    if node.is_test_suite() {
        line.push_str(" (test suite)");
    }
    line
}

/// Total node count of the tree, root included.
pub fn count_nodes(root: &ResolvedDependents) -> usize {
    1 + root.children().iter().map(count_nodes).sum::<usize>()
}

/// Number of test-suite nodes in the tree, root included.
pub fn count_test_suites(root: &ResolvedDependents) -> usize {
    let own = if root.is_test_suite() { 1 } else { 0 };
    own + root
        .children()
        .iter()
        .map(count_test_suites)
        .sum::<usize>()
}
