//! Test case synthesis
//!
//! Expands a confirmed [`TestPlan`] into concrete test case specifications.
//! For every parameter of every planned constructor, each invalid
//! initializer becomes one test case: the parameter under test is bound to
//! the invalid value and every other parameter to the first valid value of
//! its own rule.
//!
//! A plan whose rules produce no invalid initializers yields no test cases.

use crate::errors::{Error, Result};
use crate::parameters::{DeclaredType, FailureKind, ParameterInitializer};
use crate::plan::{PlanEntry, TestPlan};
use serde::Serialize;
use tracing::{debug, debug_span};

/// Name prefix for constructor tests.
const CONSTRUCTOR_PREFIX: &str = "constructor";

/// Binds one parameter to an expression in a generated test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterBinding {
    pub name: String,
    pub declared_type: DeclaredType,
    pub expression: String,
}

/// One generated test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseSpec {
    pub name: String,
    /// Class whose constructor is invoked
    pub target: String,
    pub expected_failure: Option<FailureKind>,
    /// Every constructor parameter, in declaration order
    pub bindings: Vec<ParameterBinding>,
}

impl TestCaseSpec {
    /// `@Test` or `@Test(expected = X.class)`
    pub fn annotation(&self) -> String {
        match self.expected_failure {
            Some(failure) => format!("@Test(expected = {}.class)", failure.simple_name()),
            None => "@Test".to_string(),
        }
    }
}

/// Expands test plans into test cases.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestCaseSynthesizer;

impl TestCaseSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// All test cases for the plan, in plan order, then parameter order,
    /// then invalid-initializer order.
    pub fn synthesize(&self, plan: &TestPlan) -> Result<Vec<TestCaseSpec>> {
        let mut cases = Vec::new();
        for entry in plan.entries() {
            cases.extend(self.synthesize_entry(entry)?);
        }
        debug!(constructors = plan.len(), cases = cases.len(), "Synthesized test cases");
        Ok(cases)
    }

    fn synthesize_entry(&self, entry: &PlanEntry) -> Result<Vec<TestCaseSpec>> {
        let constructor = entry.constructor();
        let rules = entry.rules();
        let _span = debug_span!("synthesize", signature = %constructor.signature()).entered();

        if rules.len() != constructor.parameter_count() {
            return Err(Error::contract(format!(
                "{} declares {} parameters but the plan has {} rules",
                constructor.presentable_signature(),
                constructor.parameter_count(),
                rules.len()
            )));
        }

        // First valid value of every rule, used for the parameters not under test.
        let defaults = rules
            .iter()
            .map(|rule| {
                rule.valid_initializers()?.into_iter().next().ok_or_else(|| {
                    Error::contract(format!("rule for '{}' has no valid initializer", rule.name()))
                })
            })
            .collect::<Result<Vec<ParameterInitializer>>>()?;

        let mut cases = Vec::new();
        for (tested, rule) in rules.iter().enumerate() {
            for (invalid, failure) in rule.invalid_initializers()?.iter() {
                let bindings = rules
                    .iter()
                    .zip(&defaults)
                    .enumerate()
                    .map(|(index, (r, default))| ParameterBinding {
                        name: r.name().to_string(),
                        declared_type: r.declared_type().clone(),
                        expression: if index == tested {
                            invalid.expression().to_string()
                        } else {
                            default.expression().to_string()
                        },
                    })
                    .collect();
                cases.push(TestCaseSpec {
                    name: format!(
                        "{}_{}_throws{}",
                        CONSTRUCTOR_PREFIX,
                        invalid.description(),
                        failure.simple_name()
                    ),
                    target: constructor.class_name().to_string(),
                    expected_failure: Some(failure),
                    bindings,
                });
            }
        }
        Ok(cases)
    }
}

/// Shorthand for `TestCaseSynthesizer::new().synthesize(plan)`.
pub fn synthesize(plan: &TestPlan) -> Result<Vec<TestCaseSpec>> {
    TestCaseSynthesizer::new().synthesize(plan)
}
