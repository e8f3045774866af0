use dependents_tree::identifier::BinaryIdentifier;
use dependents_tree::report::{count_nodes, count_test_suites, render_tree};
use dependents_tree::resolved::ResolvedDependents;

fn id(s: &str) -> BinaryIdentifier {
    BinaryIdentifier::parse(s).unwrap()
}

fn sample_tree() -> ResolvedDependents {
    let test_bin = ResolvedDependents::new(id("proj:libB:testBinary1"), false, true);
    let lib_c = ResolvedDependents::with_children(id("proj:libC:binary1"), true, false, vec![
        ResolvedDependents::new(id("proj:libD:binary1"), true, false),
    ]);
    ResolvedDependents::with_children(id("proj:libA:binary1"), true, false, vec![test_bin, lib_c])
}

#[test]
fn render_leaf_is_single_line() {
    let leaf = ResolvedDependents::new(id("proj:libA:binary1"), true, false);
    assert_eq!(render_tree(&leaf), "proj:libA:binary1\n");
}

#[test]
fn render_annotates_flags() {
    let out = render_tree(&sample_tree());
    assert!(out.contains("proj:libB:testBinary1 (not buildable) (test suite)"));
    assert!(!out.contains("proj:libA:binary1 ("));
}

#[test]
fn render_preserves_child_order_and_nesting() {
    let out = render_tree(&sample_tree());
    let expected = "\
proj:libA:binary1
├── proj:libB:testBinary1 (not buildable) (test suite)
└── proj:libC:binary1
    └── proj:libD:binary1
";
    assert_eq!(out, expected);
}

#[test]
fn middle_children_use_continuation_prefix() {
    let root = ResolvedDependents::with_children(id("proj:root:bin"), true, false, vec![
        ResolvedDependents::with_children(id("proj:libA:a"), true, false, vec![
            ResolvedDependents::new(id("proj:libB:b"), true, false),
        ]),
        ResolvedDependents::new(id("proj:libC:c"), true, false),
    ]);
    let out = render_tree(&root);
    assert!(out.contains("│   └── proj:libB:b"));
}

#[test]
fn counts_over_sample_tree() {
    let tree = sample_tree();
    assert_eq!(count_nodes(&tree), 4);
    assert_eq!(count_test_suites(&tree), 1);
}

#[test]
fn counts_include_root() {
    let root = ResolvedDependents::new(id("proj:libB:testBinary1"), false, true);
    assert_eq!(count_nodes(&root), 1);
    assert_eq!(count_test_suites(&root), 1);
}
