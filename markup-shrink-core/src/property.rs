//! Property definitions and the shrinking driver.

use crate::{arbitrary::*, data::*, error::*, gen::*};
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, info};

/// Statistics gathered during a property run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestStatistics {
    pub classifications: HashMap<String, usize>,
    pub collections: HashMap<String, Vec<usize>>,
    pub total_tests: usize,
}

impl TestStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_classification(&mut self, name: &str) {
        *self.classifications.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn record_collection(&mut self, name: &str, value: usize) {
        self.collections
            .entry(name.to_string())
            .or_default()
            .push(value);
    }
}

/// Outcome of [`minimize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Minimized<T> {
    /// The smallest failing value found.
    pub value: T,
    /// Every accepted shrink, in order. The original value is not included.
    pub steps: Vec<T>,
    /// How many candidates were checked against the property.
    pub attempts: usize,
}

/// Greedily shrink a failing value.
///
/// Repeatedly asks `shrink` for candidates of the current value and keeps
/// the first one (in the shrinker's order) for which `fails` holds. Stops
/// when no candidate fails or after `limit` accepted steps.
pub fn minimize<T, S, F>(value: T, shrink: S, fails: F, limit: usize) -> Minimized<T>
where
    T: Clone,
    S: Fn(&T) -> Vec<T>,
    F: Fn(&T) -> bool,
{
    let mut current = value;
    let mut steps = Vec::new();
    let mut attempts = 0;

    while steps.len() < limit {
        let mut accepted = None;
        for candidate in shrink(&current) {
            attempts += 1;
            if fails(&candidate) {
                accepted = Some(candidate);
                break;
            }
        }

        match accepted {
            Some(candidate) => {
                debug!(step = steps.len() + 1, attempts, "accepted shrink");
                steps.push(candidate.clone());
                current = candidate;
            }
            None => break,
        }
    }

    Minimized {
        value: current,
        steps,
        attempts,
    }
}

type ShrinkFn<T> = Box<dyn Fn(&T) -> Vec<T>>;
type ShowFn<T> = Box<dyn Fn(&T) -> String>;
type ClassificationFn<T> = Box<dyn Fn(&T) -> bool>;
type CollectionFn<T> = Box<dyn Fn(&T) -> usize>;

/// A property that can be tested with generated inputs.
pub struct Property<T> {
    generator: Gen<T>,
    shrinker: ShrinkFn<T>,
    condition: Box<dyn Fn(&T) -> bool>,
    show: ShowFn<T>,
    variable_name: Option<String>,
    classifications: Vec<(String, ClassificationFn<T>)>,
    collections: Vec<(String, CollectionFn<T>)>,
    examples: Vec<T>,
}

impl<T> Property<T>
where
    T: 'static + Debug + Clone,
{
    /// Create a property that checks a boolean condition. Failures are not shrunk.
    pub fn for_all<F>(generator: Gen<T>, condition: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Property {
            generator,
            shrinker: Box::new(|_| Vec::new()),
            condition: Box::new(condition),
            show: Box::new(|value| format!("{value:?}")),
            variable_name: None,
            classifications: Vec::new(),
            collections: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Create a property whose failures are shrunk with `shrink`.
    pub fn for_all_shrink<S, F>(generator: Gen<T>, shrink: S, condition: F) -> Self
    where
        S: Fn(&T) -> Vec<T> + 'static,
        F: Fn(&T) -> bool + 'static,
    {
        Property::for_all(generator, condition).with_shrink(shrink)
    }

    /// Replace the shrinker.
    pub fn with_shrink<S>(mut self, shrink: S) -> Self
    where
        S: Fn(&T) -> Vec<T> + 'static,
    {
        self.shrinker = Box::new(shrink);
        self
    }

    /// Replace how counterexamples are printed (`Debug` by default).
    pub fn with_show<F>(mut self, show: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.show = Box::new(show);
        self
    }

    /// Name the generated variable in the shrinking progression.
    pub fn named(mut self, variable_name: &str) -> Self {
        self.variable_name = Some(variable_name.to_string());
        self
    }

    /// Add a classification to categorize test inputs.
    pub fn classify<F>(mut self, name: &str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.classifications
            .push((name.to_string(), Box::new(predicate)));
        self
    }

    /// Add a collection to gather numerical statistics from test inputs.
    pub fn collect<F>(mut self, name: &str, extractor: F) -> Self
    where
        F: Fn(&T) -> usize + 'static,
    {
        self.collections
            .push((name.to_string(), Box::new(extractor)));
        self
    }

    /// Test explicit examples before any generated value.
    pub fn with_examples(mut self, examples: Vec<T>) -> Self {
        self.examples = examples;
        self
    }

    /// Run this property with the given configuration.
    pub fn run(&self, config: &Config) -> TestResult {
        self.run_with_context(config, None, None)
    }

    /// Run this property with the given configuration and context information.
    pub fn run_with_context(
        &self,
        config: &Config,
        property_name: Option<&str>,
        module_path: Option<&str>,
    ) -> TestResult {
        if let Err(error) = config.validate() {
            return error.into();
        }

        let mut seed = config.initial_seed();
        let mut statistics = TestStatistics::new();

        for test_num in 0..config.test_limit {
            let value = match self.examples.get(test_num) {
                Some(example) => example.clone(),
                None => {
                    let (test_seed, next_seed) = seed.split();
                    seed = next_seed;
                    self.generator.generate(config.size_for(test_num), test_seed)
                }
            };

            self.collect_statistics(&value, &mut statistics);

            if (self.condition)(&value) {
                continue;
            }

            let tests_run = test_num + 1;
            let minimized = minimize(
                value.clone(),
                &self.shrinker,
                |candidate| !(self.condition)(candidate),
                config.shrink_limit,
            );
            info!(
                tests_run,
                shrinks = minimized.steps.len(),
                attempts = minimized.attempts,
                "property failed"
            );

            let shrink_steps = std::iter::once(&value)
                .chain(minimized.steps.iter())
                .enumerate()
                .map(|(step, counterexample)| ShrinkStep {
                    counterexample: (self.show)(counterexample),
                    step,
                    variable_name: self.variable_name.clone(),
                })
                .collect();

            return TestResult::Fail {
                counterexample: (self.show)(&minimized.value),
                tests_run,
                shrinks_performed: minimized.steps.len(),
                property_name: property_name.map(|s| s.to_string()),
                module_path: module_path.map(|s| s.to_string()),
                assertion_type: Some("Boolean Condition".to_string()),
                shrink_steps,
            };
        }

        statistics.total_tests = config.test_limit;

        // Return PassWithStatistics only if we have classifications or collections
        if !self.classifications.is_empty() || !self.collections.is_empty() {
            TestResult::PassWithStatistics {
                tests_run: config.test_limit,
                property_name: property_name.map(|s| s.to_string()),
                module_path: module_path.map(|s| s.to_string()),
                statistics,
            }
        } else {
            TestResult::Pass {
                tests_run: config.test_limit,
                property_name: property_name.map(|s| s.to_string()),
                module_path: module_path.map(|s| s.to_string()),
            }
        }
    }

    fn collect_statistics(&self, value: &T, statistics: &mut TestStatistics) {
        for (name, predicate) in &self.classifications {
            if predicate(value) {
                statistics.record_classification(name);
            }
        }

        for (name, extractor) in &self.collections {
            statistics.record_collection(name, extractor(value));
        }
    }
}

/// Create a property that checks a boolean condition.
pub fn for_all<T, F>(generator: Gen<T>, condition: F) -> Property<T>
where
    T: 'static + Debug + Clone,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all(generator, condition)
}

/// Create a property that checks a boolean condition with a named variable.
pub fn for_all_named<T, F>(generator: Gen<T>, variable_name: &str, condition: F) -> Property<T>
where
    T: 'static + Debug + Clone,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all(generator, condition).named(variable_name)
}

/// Create a property with an explicit shrinker.
pub fn for_all_shrink<T, S, F>(generator: Gen<T>, shrink: S, condition: F) -> Property<T>
where
    T: 'static + Debug + Clone,
    S: Fn(&T) -> Vec<T> + 'static,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all_shrink(generator, shrink, condition)
}

/// Create a property using a type's own generator and shrinker.
pub fn for_all_arbitrary<T, F>(condition: F) -> Property<T>
where
    T: Arbitrary + Debug + Clone,
    F: Fn(&T) -> bool + 'static,
{
    Property::for_all_shrink(T::arbitrary(), T::shrink, condition)
}
