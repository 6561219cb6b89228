//! Generator invariant properties
//!
//! Generated trees must respect the configured depth and breadth, and
//! generation must be a pure function of seed and size.

use crate::{arbitrary_seed, arbitrary_size, assert_passes, tree_with_depth};
use markup_shrink::*;

/// Property: no generated tree is deeper than its maximum depth
pub fn test_depth_bound() {
    let prop = for_all_named(tree_with_depth(), "(max_depth, tree)", |(max_depth, tree)| {
        tree.depth() <= *max_depth
    })
    .with_show(|(max_depth, tree)| format!("max_depth = {max_depth}, tree = {tree}"));

    assert_passes("Depth bound property", prop.run(&Config::default().with_tests(200)));
}

/// Property: at depth zero only leaves and text are produced
pub fn test_depth_zero_terminates() {
    let gen = markup(&GenConfig::default().with_max_depth(0));
    let prop = for_all(gen, |tree: &Markup| !tree.is_container() && tree.node_count() == 1);

    assert_passes("Depth zero property", prop.run(&Config::default().with_tests(200)));
}

/// Property: the same seed and size always yield the same tree
pub fn test_same_seed_same_tree() {
    let inputs = arbitrary_size().bind(|size| arbitrary_seed().map(move |seed| (size, seed)));
    let prop = for_all_named(inputs, "(size, seed)", |&(size, seed)| {
        generate(4, seed, size) == generate(4, seed, size)
    });

    assert_passes("Reproducibility property", prop.run(&Config::default().with_tests(50)));
}

/// Generated trees should regularly, but not always, contain text
pub fn test_text_distribution() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| tree.node_count() <= 1 + 3 + 9 + 27 + 81)
        .classify("contains text", Markup::is_text)
        .classify("container", Markup::is_container)
        .collect("nodes", Markup::node_count)
        .collect("depth", Markup::depth);

    match prop.run(&Config::default().with_tests(200).with_seed(42)) {
        TestResult::PassWithStatistics { statistics, .. } => {
            let with_text = statistics
                .classifications
                .get("contains text")
                .copied()
                .unwrap_or(0);
            assert!(with_text > 0, "no generated tree contained text");
            assert!(with_text < 200, "every generated tree contained text");
            assert!(statistics.collections["depth"].iter().all(|&depth| depth <= 4));
            println!("✓ Text distribution: {with_text}/200 trees contain text");
        }
        result => panic!("Expected statistics from the distribution run, got:\n{result}"),
    }
}
