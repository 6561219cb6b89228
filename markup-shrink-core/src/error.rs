//! Error and result types for property runs.

use std::fmt;
use thiserror::Error;

/// Main error type for property runs.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Property failed with a counterexample.
    #[error("Property failed: {counterexample}")]
    PropertyFailed {
        counterexample: String,
        tests_run: usize,
        shrinks_performed: usize,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// A shrinking step in the failure progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkStep {
    /// The counterexample value at this step.
    pub counterexample: String,
    /// The step number (0 = original, 1+ = accepted shrinks).
    pub step: usize,
    /// Optional variable name for this input (e.g., "markup").
    pub variable_name: Option<String>,
}

/// Outcome of a property run.
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    /// Property held for every test.
    Pass {
        tests_run: usize,
        property_name: Option<String>,
        module_path: Option<String>,
    },

    /// Property held, with the statistics gathered along the way.
    PassWithStatistics {
        tests_run: usize,
        property_name: Option<String>,
        module_path: Option<String>,
        statistics: crate::property::TestStatistics,
    },

    /// Property failed with a (shrunk) counterexample.
    Fail {
        counterexample: String,
        tests_run: usize,
        shrinks_performed: usize,
        property_name: Option<String>,
        module_path: Option<String>,
        assertion_type: Option<String>,
        /// The shrinking progression showing how we reached the minimal counterexample.
        shrink_steps: Vec<ShrinkStep>,
    },
}

impl TestResult {
    /// Check if the run passed.
    pub fn is_pass(&self) -> bool {
        matches!(
            self,
            TestResult::Pass { .. } | TestResult::PassWithStatistics { .. }
        )
    }

    /// Check if the run failed.
    pub fn is_fail(&self) -> bool {
        matches!(self, TestResult::Fail { .. })
    }

    /// Turn a failure into a `CheckError`, for callers that use `?`.
    pub fn into_result(self) -> Result<()> {
        match self {
            TestResult::Fail {
                counterexample,
                tests_run,
                shrinks_performed,
                ..
            } => Err(CheckError::PropertyFailed {
                counterexample,
                tests_run,
                shrinks_performed,
            }),
            _ => Ok(()),
        }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, module_path: &Option<String>) -> fmt::Result {
    if let Some(module) = module_path {
        writeln!(f, "━━━ {} ━━━", module)?;
    }
    Ok(())
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Pass {
                tests_run,
                property_name,
                module_path,
            } => {
                write_header(f, module_path)?;
                let prop_name = property_name.as_deref().unwrap_or("property");
                write!(f, "  ✓ {} passed {} tests.", prop_name, tests_run)
            }
            TestResult::PassWithStatistics {
                tests_run,
                property_name,
                module_path,
                statistics,
            } => {
                write_header(f, module_path)?;
                let prop_name = property_name.as_deref().unwrap_or("property");
                writeln!(f, "  ✓ {} passed {} tests.", prop_name, tests_run)?;

                if !statistics.classifications.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "  Test data distribution:")?;
                    let mut names: Vec<_> = statistics.classifications.keys().collect();
                    names.sort();
                    for name in names {
                        let count = statistics.classifications[name];
                        let percentage = (count as f64 / statistics.total_tests as f64) * 100.0;
                        writeln!(f, "    {:>3.0}% {}", percentage, name)?;
                    }
                }

                if !statistics.collections.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "  Test data statistics:")?;
                    let mut names: Vec<_> = statistics.collections.keys().collect();
                    names.sort();
                    for name in names {
                        let values = &statistics.collections[name];
                        if values.is_empty() {
                            continue;
                        }
                        let min = values.iter().copied().fold(usize::MAX, usize::min);
                        let max = values.iter().copied().fold(0, usize::max);
                        let avg = values.iter().sum::<usize>() as f64 / values.len() as f64;
                        writeln!(f, "    {}: min={}, max={}, avg={:.1}", name, min, max, avg)?;
                    }
                }

                Ok(())
            }
            TestResult::Fail {
                counterexample,
                tests_run,
                shrinks_performed,
                property_name,
                module_path,
                assertion_type,
                shrink_steps,
            } => {
                write_header(f, module_path)?;
                let prop_name = property_name.as_deref().unwrap_or("property");
                writeln!(
                    f,
                    "  ✗ {} failed after {} tests and {} shrinks.",
                    prop_name, tests_run, shrinks_performed
                )?;

                if !shrink_steps.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "    Shrinking progression:")?;
                    for step in shrink_steps {
                        match (&step.variable_name, step.step) {
                            (Some(var_name), n) => writeln!(
                                f,
                                "      │ forAll {} = {} -- {}",
                                n, step.counterexample, var_name
                            )?,
                            (None, 0) => writeln!(f, "      │ Original: {}", step.counterexample)?,
                            (None, n) => writeln!(f, "      │ Step {}: {}", n, step.counterexample)?,
                        }
                    }
                    writeln!(f)?;
                }

                if let Some(assertion) = assertion_type {
                    writeln!(f, "    === {} ===", assertion)?;
                }

                write!(f, "    Minimal counterexample: {}", counterexample)
            }
        }
    }
}

impl From<CheckError> for TestResult {
    fn from(error: CheckError) -> Self {
        match error {
            CheckError::PropertyFailed {
                counterexample,
                tests_run,
                shrinks_performed,
            } => TestResult::Fail {
                counterexample,
                tests_run,
                shrinks_performed,
                property_name: None,
                module_path: None,
                assertion_type: None,
                shrink_steps: Vec::new(),
            },
            _ => TestResult::Fail {
                counterexample: error.to_string(),
                tests_run: 0,
                shrinks_performed: 0,
                property_name: None,
                module_path: None,
                assertion_type: None,
                shrink_steps: Vec::new(),
            },
        }
    }
}
