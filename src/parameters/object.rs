//! Rules for reference-type parameters

use super::initializer::{FailureKind, InvalidInitializers, ParameterInitializer};
use super::{DeclaredType, ParameterDescriptor};
use crate::errors::{Error, Result};

/// Literal used for a valid string argument.
pub const VALID_STRING_LITERAL: &str = "\"test\"";

/// Whitespace-only literal used for a blank string argument.
pub const BLANK_STRING_LITERAL: &str = "\"\\n\\n  \\t \"";

/// Rule for any single non-primitive, non-string parameter. Valid values are
/// mocks of the declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRule {
    descriptor: ParameterDescriptor,
    disallow_null: bool,
}

impl ObjectRule {
    pub fn new(descriptor: ParameterDescriptor) -> Result<Self> {
        match descriptor.declared_type() {
            DeclaredType::Object(_) => Ok(Self {
                descriptor,
                disallow_null: false,
            }),
            other => Err(Error::contract(format!(
                "object rule requires a non-primitive, non-string parameter, '{}' is {}",
                descriptor.name(),
                other
            ))),
        }
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }

    pub fn disallow_null(&self) -> bool {
        self.disallow_null
    }

    pub fn set_disallow_null(&mut self, disallow: bool) {
        self.disallow_null = disallow;
    }

    pub fn valid_initializers(&self) -> Vec<ParameterInitializer> {
        vec![ParameterInitializer::new(
            format!("valid{}", self.descriptor.capitalized_name()),
            mock_expression(self.descriptor.declared_type().type_text()),
        )]
    }

    pub fn invalid_initializers(&self) -> InvalidInitializers {
        null_initializers(&self.descriptor, self.disallow_null)
    }
}

/// Rule for `String` parameters: an object rule that can also reject blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRule {
    descriptor: ParameterDescriptor,
    disallow_null: bool,
    disallow_blank: bool,
}

impl StringRule {
    pub fn new(descriptor: ParameterDescriptor) -> Result<Self> {
        if *descriptor.declared_type() != DeclaredType::String {
            return Err(Error::contract(format!(
                "string rule requires a String parameter, '{}' is {}",
                descriptor.name(),
                descriptor.declared_type()
            )));
        }
        Ok(Self {
            descriptor,
            disallow_null: false,
            disallow_blank: false,
        })
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }

    pub fn disallow_null(&self) -> bool {
        self.disallow_null
    }

    pub fn set_disallow_null(&mut self, disallow: bool) {
        self.disallow_null = disallow;
    }

    pub fn disallow_blank(&self) -> bool {
        self.disallow_blank
    }

    pub fn set_disallow_blank(&mut self, disallow: bool) {
        self.disallow_blank = disallow;
    }

    pub fn valid_initializers(&self) -> Vec<ParameterInitializer> {
        vec![ParameterInitializer::new(
            format!("valid{}", self.descriptor.capitalized_name()),
            VALID_STRING_LITERAL,
        )]
    }

    /// Null first (when disallowed), then blank (when disallowed).
    pub fn invalid_initializers(&self) -> InvalidInitializers {
        let mut initializers = null_initializers(&self.descriptor, self.disallow_null);
        if self.disallow_blank {
            initializers.insert(
                ParameterInitializer::new(
                    format!("blank{}", self.descriptor.capitalized_name()),
                    BLANK_STRING_LITERAL,
                ),
                FailureKind::IllegalArgument,
            );
        }
        initializers
    }
}

fn null_initializers(descriptor: &ParameterDescriptor, disallow_null: bool) -> InvalidInitializers {
    let mut initializers = InvalidInitializers::new();
    if disallow_null {
        initializers.insert(
            ParameterInitializer::new(format!("null{}", descriptor.capitalized_name()), "null"),
            FailureKind::NullPointer,
        );
    }
    initializers
}

/// `mock(Type.class)`, with type arguments erased since class literals
/// cannot carry them.
fn mock_expression(type_text: &str) -> String {
    let raw = type_text
        .split_once('<')
        .map_or(type_text, |(raw, _)| raw)
        .trim();
    format!("mock({}.class)", raw)
}
