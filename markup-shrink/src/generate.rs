//! Random markup trees.

use markup_shrink_core::{Arbitrary, Frequency, Gen, Seed, Size};

use crate::attribute::{attributes, Attribute};
use crate::markup::Markup;

/// Constants steering generation.
///
/// `success_rate` is the weight given to elements over plain text, and to
/// `img` over the other leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    pub max_depth: usize,
    pub success_rate: u32,
    pub max_attributes: usize,
    pub max_children: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            max_depth: 4,
            success_rate: 5,
            max_attributes: 3,
            max_children: 3,
        }
    }
}

impl GenConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_success_rate(mut self, success_rate: u32) -> Self {
        self.success_rate = success_rate;
        self
    }

    pub fn with_max_attributes(mut self, max_attributes: usize) -> Self {
        self.max_attributes = max_attributes;
        self
    }

    pub fn with_max_children(mut self, max_children: usize) -> Self {
        self.max_children = max_children;
        self
    }
}

type BuildLeaf = fn(Vec<Attribute>, String) -> Markup;
type BuildContainer = fn(Vec<Attribute>, Vec<Markup>) -> Markup;

fn image(mut attrs: Vec<Attribute>, src: String) -> Markup {
    attrs.push(Attribute::new("src", src));
    Markup::Image(attrs)
}

/// Generate markup trees no deeper than `config.max_depth`.
pub fn markup(config: &GenConfig) -> Gen<Markup> {
    node(*config, config.max_depth)
}

/// Draw a single tree.
pub fn generate(max_depth: usize, seed: Seed, size: Size) -> Markup {
    markup(&GenConfig::default().with_max_depth(max_depth)).generate(size, seed)
}

// Containers are only on the table while there is depth left to spend.
fn node(config: GenConfig, depth: usize) -> Gen<Markup> {
    let mut table = Frequency::new(config.success_rate, leaf(&config)).with(1, text());
    if depth > 0 {
        table = table.with(config.success_rate, container(config, depth - 1));
    }
    Gen::frequency(table)
}

fn text() -> Gen<Markup> {
    Gen::<String>::unicode().map(Markup::Text)
}

fn leaf(config: &GenConfig) -> Gen<Markup> {
    let attrs = attributes(config.max_attributes);
    let src = Gen::<String>::unicode();
    let kind = Gen::weighted(
        Frequency::new(config.success_rate, image as BuildLeaf)
            .with(1, |attrs: Vec<Attribute>, _: String| Markup::Break(attrs))
            .with(1, |attrs: Vec<Attribute>, _: String| Markup::Area(attrs)),
    );

    Gen::new(move |size, seed| {
        let (attrs_seed, seed) = seed.split();
        let (src_seed, kind_seed) = seed.split();
        let attrs = attrs.generate(size, attrs_seed);
        let src = src.generate(size, src_seed);
        (kind.generate(size, kind_seed))(attrs, src)
    })
}

fn container(config: GenConfig, child_depth: usize) -> Gen<Markup> {
    let children = Gen::vec_of_len(
        Gen::usize_range(0, config.max_children),
        node(config, child_depth),
    );
    let attrs = attributes(config.max_attributes);
    let kind = Gen::weighted(
        Frequency::new(1, Markup::Paragraph as BuildContainer)
            .with(1, Markup::Div)
            .with(1, Markup::Table)
            .with(1, Markup::Anchor),
    );

    Gen::new(move |size, seed| {
        let (children_seed, seed) = seed.split();
        let (attrs_seed, kind_seed) = seed.split();
        let children = children.generate(size, children_seed);
        let attrs = attrs.generate(size, attrs_seed);
        (kind.generate(size, kind_seed))(attrs, children)
    })
}

impl Arbitrary for Markup {
    fn arbitrary() -> Gen<Self> {
        markup(&GenConfig::default())
    }

    fn shrink(&self) -> Vec<Self> {
        crate::shrink::shrink(self)
    }
}
