//! Per-parameter test rules
//!
//! Every constructor parameter gets a [`ParameterRule`] describing how to
//! produce values for it: a set of *valid* initializers that let construction
//! succeed, and a set of *invalid* initializers paired with the failure the
//! constructor is expected to raise.
//!
//! Rules are plain configuration state. Whatever presents them to the user
//! (a dialog, a plan file) mutates the fields directly; nothing here knows
//! about widgets.
//!
//! ```
//! use boilerplate::parameters::{
//!     classify, DeclaredType, NumericConstraint, ParameterDescriptor, ParameterRule,
//! };
//!
//! let descriptor = ParameterDescriptor::new("count", DeclaredType::Int).unwrap();
//! let mut rule = classify(descriptor).unwrap();
//! if let ParameterRule::Numeric(numeric) = &mut rule {
//!     numeric.set_constraint(NumericConstraint::GreaterEqual);
//!     numeric.set_boundary("10");
//! }
//!
//! let valid = rule.valid_initializers().unwrap();
//! assert_eq!(valid[0].description(), "countGreaterThan10");
//! assert_eq!(valid[0].expression(), "11");
//! ```

pub mod classifier;
pub mod initializer;
pub mod numeric;
pub mod object;

pub use classifier::classify;
pub use initializer::{FailureKind, InvalidInitializers, ParameterInitializer};
pub use numeric::{NumericConstraint, NumericRule};
pub use object::{ObjectRule, StringRule};

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Canonical name of the Java string type.
pub const STRING_CANONICAL_TEXT: &str = "java.lang.String";

const OTHER_PRIMITIVES: [&str; 7] = ["long", "short", "byte", "char", "boolean", "float", "double"];

/// Semantic tag for a parameter's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum DeclaredType {
    /// The primitive `int`
    Int,
    /// `String` / `java.lang.String`
    String,
    /// Any primitive other than `int`; no rule supports these yet
    OtherPrimitive(String),
    /// Any reference type, carrying its source text (e.g. `List<String>`)
    Object(String),
}

impl DeclaredType {
    /// Tag a type by its source text.
    pub fn from_type_text(text: &str) -> Self {
        let text = text.trim();
        match text {
            "int" => Self::Int,
            "String" | STRING_CANONICAL_TEXT => Self::String,
            t if OTHER_PRIMITIVES.contains(&t) => Self::OtherPrimitive(t.to_string()),
            t => Self::Object(t.to_string()),
        }
    }

    /// Text used when declaring a local of this type.
    pub fn type_text(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::String => "String",
            Self::OtherPrimitive(name) | Self::Object(name) => name,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Int | Self::OtherPrimitive(_))
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_text())
    }
}

/// A parameter as declared in the source signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    declared_type: DeclaredType,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::contract(format!(
                "parameter of type {} has an empty name",
                declared_type
            )));
        }
        Ok(Self {
            name,
            declared_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    /// The parameter name with its first character upper-cased, for building
    /// identifiers like `validName`.
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Configured rule for one constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterRule {
    Numeric(NumericRule),
    String(StringRule),
    Object(ObjectRule),
}

impl ParameterRule {
    pub fn descriptor(&self) -> &ParameterDescriptor {
        match self {
            Self::Numeric(rule) => rule.descriptor(),
            Self::String(rule) => rule.descriptor(),
            Self::Object(rule) => rule.descriptor(),
        }
    }

    pub fn name(&self) -> &str {
        self.descriptor().name()
    }

    pub fn declared_type(&self) -> &DeclaredType {
        self.descriptor().declared_type()
    }

    /// Whether the rule's configuration is complete enough to expand.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Numeric(rule) => rule.is_valid(),
            Self::String(_) | Self::Object(_) => true,
        }
    }

    /// Values that must let construction succeed. Never empty.
    ///
    /// Fails with a contract violation if the rule is not valid.
    pub fn valid_initializers(&self) -> Result<Vec<ParameterInitializer>> {
        match self {
            Self::Numeric(rule) => rule.valid_initializers(),
            Self::String(rule) => Ok(rule.valid_initializers()),
            Self::Object(rule) => Ok(rule.valid_initializers()),
        }
    }

    /// Values that must make construction fail, with the expected failure.
    ///
    /// Fails with a contract violation if the rule is not valid.
    pub fn invalid_initializers(&self) -> Result<InvalidInitializers> {
        match self {
            Self::Numeric(rule) => rule.invalid_initializers(),
            Self::String(rule) => Ok(rule.invalid_initializers()),
            Self::Object(rule) => Ok(rule.invalid_initializers()),
        }
    }

    /// Short human-readable summary of the configured constraint.
    pub fn summary(&self) -> String {
        match self {
            Self::Numeric(rule) => match (rule.constraint(), rule.boundary_text()) {
                (None, _) => "unset".to_string(),
                (Some(NumericConstraint::Any), _) => "any".to_string(),
                (Some(c), Some(b)) => format!("{} {}", c.symbol(), b),
                (Some(c), None) => format!("{} ?", c.symbol()),
            },
            Self::String(rule) => flags_summary(&[
                ("non-null", rule.disallow_null()),
                ("non-blank", rule.disallow_blank()),
            ]),
            Self::Object(rule) => flags_summary(&[("non-null", rule.disallow_null())]),
        }
    }
}

fn flags_summary(flags: &[(&str, bool)]) -> String {
    let set: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(label, _)| *label)
        .collect();
    if set.is_empty() {
        "any".to_string()
    } else {
        set.join(", ")
    }
}
