//! Shrinking correctness properties
//!
//! These properties ensure the markup shrinker never proposes a larger
//! tree, proposes few of them, and reaches a minimal tree.

use crate::assert_passes;
use markup_shrink::*;

/// Property: no candidate grows, and each one loses size or nodes
pub fn test_candidates_strictly_decrease() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        let (size, nodes) = (tree.size(), tree.node_count());
        shrink(tree).iter().all(|candidate| {
            candidate.size() <= size
                && candidate.node_count() <= nodes
                && candidate.size() + candidate.node_count() < size + nodes
        })
    })
    .named("tree")
    .with_show(Markup::to_string);

    assert_passes("Strict decrease property", prop.run(&Config::default().with_tests(200)));
}

/// Property: a tree has no candidates exactly when it is wiped
pub fn test_minimal_trees_have_no_candidates() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| shrink(tree).is_empty() == tree.is_wiped())
        .with_examples(vec![
            Markup::Div(vec![], vec![Markup::text("")]),
            Markup::Table(vec![], vec![Markup::Break(vec![]), Markup::Area(vec![])]),
            Markup::Table(vec![], vec![]),
            Markup::text(""),
            Markup::text(" "),
        ]);

    assert_passes("Minimal tree property", prop.run(&Config::default()));
    assert_eq!(
        shrink(&Markup::Div(vec![], vec![Markup::text("")])),
        vec![Markup::Div(vec![], vec![])]
    );
}

/// Property: the candidate count grows linearly with the tree
pub fn test_candidate_count_is_linear() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        shrink(tree).len() <= tree.node_count() + 3 * tree.size()
    })
    .collect("candidates", |tree| shrink(tree).len());

    assert_passes("Linear candidate count property", prop.run(&Config::default()));
}

/// Property: two levels of the shrink tree stay within the linear bound,
/// and the printed tree has one branch per node
pub fn test_shrink_tree_fan_out() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        let shrinks = Tree::unfold(tree.clone(), &shrink, 2);
        let bound = |m: &Markup| m.node_count() + 3 * m.size();
        let weight = |m: &Markup| m.size() + m.node_count();
        let printed = shrinks.render_with(|m| m.size().to_string());
        shrinks.children.len() <= bound(tree)
            && shrinks.children.iter().all(|child| {
                weight(&child.value) < weight(tree) && child.children.len() <= bound(&child.value)
            })
            && printed.matches("── ").count() == shrinks.count_nodes()
    });

    let config = Config::default().with_tests(30).with_size_limit(20);
    assert_passes("Shrink tree fan-out property", prop.run(&config));
}

/// Property: the first candidate is always the wiped tree, so taking it
/// reaches a tree without candidates in at most one step
pub fn test_first_candidate_descent() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| {
        let mut current = tree.clone();
        let mut steps = 0;
        while let Some(next) = shrink(&current).into_iter().next() {
            current = next;
            steps += 1;
            if steps > 1 {
                return false;
            }
        }
        current.is_wiped() && current.size() == 0
    });

    assert_passes("First candidate descent property", prop.run(&Config::default()));
}

/// Property: shrinking the same tree twice gives the same candidates
pub fn test_shrinking_is_deterministic() {
    let prop = for_all_arbitrary::<Markup, _>(|tree| shrink(tree) == tree.shrink());

    assert_passes("Deterministic shrinking property", prop.run(&Config::default().with_tests(50)));
}
