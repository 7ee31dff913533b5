// Export modules for library usage
pub mod classpath;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emit;
pub mod errors;
pub mod generator;
pub mod layout;
pub mod observability;
pub mod parameters;
pub mod plan;
pub mod source;
pub mod synthesis;

// Re-export commonly used types
pub use crate::errors::{Error, ErrorCategory, Result};

pub use crate::parameters::{
    classifier::{classify, classify_all},
    DeclaredType, FailureKind, InvalidInitializers, NumericConstraint, NumericRule, ObjectRule,
    ParameterDescriptor, ParameterInitializer, ParameterRule, StringRule,
};

pub use crate::plan::{
    Confirmation, ConfigurationSession, PlanFile, PlanFileProvider, PlanProvider, SelectAll,
    TestPlan, ValidationFailure,
};

pub use crate::source::{Constructor, JavaSourceIntrospector, SourceClass, SourceIntrospector};

pub use crate::synthesis::{synthesize, ParameterBinding, TestCaseSpec, TestCaseSynthesizer};

pub use crate::emit::{CodeEmitter, DryRunEmitter, FileEmitter, JavaRenderer};

pub use crate::classpath::{BuildFileProbe, ClasspathProbe, SkipClasspathCheck};

pub use crate::config::BoilerplateConfig;

pub use crate::generator::{Generator, Outcome};
