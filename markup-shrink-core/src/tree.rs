//! Rose trees of shrink candidates, for inspecting a shrinker.

use std::collections::VecDeque;
use std::fmt::Display;

/// A rose tree containing a value and its shrink candidates.
///
/// [`Tree::unfold`] expands a shrinker to a bounded depth, which makes the
/// size of a shrink search visible without running a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    /// Create a new tree with the given value and no children.
    pub fn singleton(value: T) -> Self {
        Tree {
            value,
            children: Vec::new(),
        }
    }

    /// Create a new tree with the given value and children.
    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Tree { value, children }
    }

    /// Expand `shrink` from `value`, `depth` levels deep.
    pub fn unfold<S>(value: T, shrink: &S, depth: usize) -> Self
    where
        S: Fn(&T) -> Vec<T>,
    {
        if depth == 0 {
            return Tree::singleton(value);
        }
        let children = shrink(&value)
            .into_iter()
            .map(|candidate| Tree::unfold(candidate, shrink, depth - 1))
            .collect();
        Tree { value, children }
    }

    /// Map a function over the tree values.
    pub fn map<U, F>(self, f: F) -> Tree<U>
    where
        F: Fn(T) -> U + Clone,
    {
        Tree {
            value: f(self.value),
            children: self
                .children
                .into_iter()
                .map(|child| child.map(f.clone()))
                .collect(),
        }
    }

    /// Get all possible shrink values in breadth-first order.
    pub fn shrinks(&self) -> Vec<&T> {
        let mut result = Vec::new();
        let mut queue: VecDeque<&Tree<T>> = self.children.iter().collect();

        while let Some(tree) = queue.pop_front() {
            result.push(&tree.value);
            queue.extend(tree.children.iter());
        }

        result
    }

    /// Get the value from the tree.
    pub fn outcome(&self) -> &T {
        &self.value
    }

    /// Check if the tree has any children (shrinks).
    pub fn has_shrinks(&self) -> bool {
        !self.children.is_empty()
    }

    /// Count the total number of nodes in the tree.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.count_nodes())
            .sum::<usize>()
    }

    /// Get the depth of the tree.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<T> Tree<T> {
    /// Print the tree with box-drawing branches, one label per node.
    ///
    /// Multi-line labels, such as rendered markup, keep their later lines
    /// indented under the branch they belong to. A trailing newline in a
    /// label is dropped.
    pub fn render_with<F>(&self, show: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut out = String::new();
        self.render_node(&show, &mut out, "", true);
        out
    }

    fn render_node<F>(&self, show: &F, out: &mut String, prefix: &str, is_last: bool)
    where
        F: Fn(&T) -> String,
    {
        let (branch, indent) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let child_prefix = format!("{prefix}{indent}");
        let continuation = if self.children.is_empty() { "  " } else { "│ " };

        let label = show(&self.value);
        let mut lines = label.lines();
        out.push_str(&format!("{prefix}{branch}{}\n", lines.next().unwrap_or("")));
        for line in lines {
            out.push_str(&format!("{child_prefix}{continuation}{line}\n"));
        }

        for (i, child) in self.children.iter().enumerate() {
            child.render_node(show, out, &child_prefix, i + 1 == self.children.len());
        }
    }
}

impl<T: Display> Tree<T> {
    pub fn render(&self) -> String {
        self.render_with(T::to_string)
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::singleton(value)
    }
}
