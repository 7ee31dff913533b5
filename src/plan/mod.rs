//! Test plans
//!
//! A [`TestPlan`] is the confirmed outcome of a configuration session: the
//! constructors the user chose to test, each with one configured rule per
//! parameter in declaration order. It is read-only once built.

pub mod file;
pub mod provider;
pub mod session;

pub use file::{PlanFile, PlanFileProvider};
pub use provider::{Confirmation, PlanProvider, SelectAll};
pub use session::{ConfigurationSession, OfferedConstructor};

use crate::parameters::ParameterRule;
use crate::source::Constructor;

/// One constructor to test and its parameter rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    constructor: Constructor,
    rules: Vec<ParameterRule>,
}

impl PlanEntry {
    pub fn constructor(&self) -> &Constructor {
        &self.constructor
    }

    pub fn rules(&self) -> &[ParameterRule] {
        &self.rules
    }
}

/// Ordered mapping from constructor to its parameter rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestPlan {
    entries: Vec<PlanEntry>,
}

impl TestPlan {
    /// Build a plan as given. Rule counts are not checked here; the
    /// synthesizer rejects entries whose arity does not match.
    pub fn new(entries: Vec<(Constructor, Vec<ParameterRule>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(constructor, rules)| PlanEntry { constructor, rules })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a configuration session cannot be confirmed yet.
///
/// This is feedback for whoever is collecting the configuration, not an
/// error: the session stays usable and can be fixed and confirmed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    NothingSelected,
    /// Constructors (presentable signatures) carrying at least one invalid rule
    InvalidRules { constructors: Vec<String> },
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingSelected => write!(f, "Must select at least one constructor"),
            Self::InvalidRules { constructors } => write!(
                f,
                "One or more constructors have invalid parameter rules configured: {}",
                constructors.join("; ")
            ),
        }
    }
}

impl std::error::Error for ValidationFailure {}
