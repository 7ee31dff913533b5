//! Shared error types for boilerplate generation
//!
//! Every failure raised by the library is one of three kinds:
//! - **Unsupported input**: the user pointed us at something we cannot handle
//!   (a file with two classes, a `long` parameter, a project without Mockito).
//! - **Contract violation**: a caller broke a precondition, such as expanding
//!   a rule that is not valid. These are defects, never expected at runtime.
//! - **Environment**: I/O and configuration problems outside our control.
//!
//! A generation pass that fails with any of these writes nothing.

use crate::plan::ValidationFailure;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UnsupportedInput,
    ContractViolation,
    Environment,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedInput => write!(f, "unsupported input"),
            Self::ContractViolation => write!(f, "contract violation"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// Main error type for boilerplate operations
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor parameter has a type no rule can handle (e.g. `long`)
    #[error("This functionality cannot currently be used on a class containing an unsupported parameter type: {type_name} (parameter '{parameter}')")]
    UnsupportedParameterType { type_name: String, parameter: String },

    #[error("{path}: file must contain exactly 1 class, found {found}")]
    NotSingleClass { path: PathBuf, found: usize },

    #[error("{path}: non-java files are not supported")]
    NotJavaSource { path: PathBuf },

    /// The source file does not live under the configured source root
    #[error("{path}: can only generate test cases for source files under {expected}")]
    NotInSourceRoot { path: PathBuf, expected: String },

    #[error("{path}: existing test file is unusable: {message}")]
    InvalidTestFile { path: PathBuf, message: String },

    /// A required test fixture is missing from the build classpath
    #[error("{fixture} must be on the project classpath before tests can be generated ({detail})")]
    MissingFixture { fixture: String, detail: String },

    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A caller broke an API precondition
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Invalid selection: {0}")]
    Validation(ValidationFailure),

    #[error("Plan error{}: {message}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Plan {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a contract violation error
    pub fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation(message.into())
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a plan error, optionally tied to a plan file
    pub fn plan(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Plan {
            path,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedParameterType { .. }
            | Self::NotSingleClass { .. }
            | Self::NotJavaSource { .. }
            | Self::NotInSourceRoot { .. }
            | Self::InvalidTestFile { .. }
            | Self::MissingFixture { .. }
            | Self::Parse { .. }
            | Self::Validation(_)
            | Self::Plan { .. } => ErrorCategory::UnsupportedInput,
            Self::ContractViolation(_) => ErrorCategory::ContractViolation,
            Self::Config(_) | Self::Io { .. } => ErrorCategory::Environment,
        }
    }

    /// Whether the end user can resolve this error by changing their input or setup.
    pub fn is_user_fixable(&self) -> bool {
        self.category() != ErrorCategory::ContractViolation
    }
}

impl From<ValidationFailure> for Error {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
