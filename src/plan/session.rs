//! Configuration state collected before a plan is confirmed

use super::{TestPlan, ValidationFailure};
use crate::errors::{Error, Result};
use crate::parameters::{classifier::classify_all, ParameterRule};
use crate::source::{Constructor, SourceClass};
use tracing::debug;

/// A constructor offered for testing, its selection toggle and its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferedConstructor {
    constructor: Constructor,
    selected: bool,
    rules: Vec<ParameterRule>,
}

impl OfferedConstructor {
    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn rules(&self) -> &[ParameterRule] {
        &self.rules
    }

    fn has_invalid_rule(&self) -> bool {
        self.rules.iter().any(|r| !r.is_valid())
    }
}

/// Editable selection for one source class.
///
/// Only non-private constructors taking at least one parameter are offered.
/// Every offered constructor starts unselected with default rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSession {
    class_name: String,
    offered: Vec<OfferedConstructor>,
}

impl ConfigurationSession {
    /// Classify every offered constructor's parameters.
    ///
    /// Fails if any offered constructor has a parameter type no rule
    /// supports.
    pub fn new(class: &SourceClass) -> Result<Self> {
        let offered = class
            .testable_constructors()
            .map(|constructor| {
                let rules = classify_all(constructor.parameters().iter().cloned())?;
                Ok(OfferedConstructor {
                    constructor: constructor.clone(),
                    selected: false,
                    rules,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            class = class.name(),
            offered = offered.len(),
            "Built configuration session"
        );
        Ok(Self {
            class_name: class.name().to_string(),
            offered,
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn offered(&self) -> &[OfferedConstructor] {
        &self.offered
    }

    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }

    /// Index of the offered constructor with the given type-only signature.
    pub fn find(&self, signature: &str) -> Option<usize> {
        let wanted = normalize_signature(signature);
        self.offered
            .iter()
            .position(|o| normalize_signature(&o.constructor.signature()) == wanted)
    }

    pub fn select(&mut self, index: usize, selected: bool) -> Result<()> {
        self.entry_mut(index)?.selected = selected;
        Ok(())
    }

    pub fn select_all(&mut self) {
        for offered in &mut self.offered {
            offered.selected = true;
        }
    }

    pub fn rules_mut(&mut self, index: usize) -> Result<&mut [ParameterRule]> {
        Ok(self.entry_mut(index)?.rules.as_mut_slice())
    }

    /// At least one constructor is selected and every offered rule is valid.
    pub fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        if !self.offered.iter().any(|o| o.selected) {
            return Err(ValidationFailure::NothingSelected);
        }
        let invalid: Vec<String> = self
            .offered
            .iter()
            .filter(|o| o.has_invalid_rule())
            .map(|o| o.constructor.presentable_signature())
            .collect();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::InvalidRules {
                constructors: invalid,
            })
        }
    }

    /// Freeze the selected constructors into a plan.
    pub fn confirm(&self) -> std::result::Result<TestPlan, ValidationFailure> {
        self.validate()?;
        Ok(TestPlan::new(
            self.offered
                .iter()
                .filter(|o| o.selected)
                .map(|o| (o.constructor.clone(), o.rules.clone()))
                .collect(),
        ))
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut OfferedConstructor> {
        let count = self.offered.len();
        self.offered.get_mut(index).ok_or_else(|| {
            Error::contract(format!(
                "constructor index {} out of range ({} offered)",
                index, count
            ))
        })
    }
}

fn normalize_signature(signature: &str) -> String {
    signature
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .replace("java.lang.String", "String")
}
