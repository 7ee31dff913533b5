//! Initializer values and expected failures

use serde::{Deserialize, Serialize};

/// A named, value-producing expression that can bind one parameter.
///
/// `description` becomes part of a test name (`countLessThan10`), so it must
/// be a valid identifier fragment. `expression` is only the right-hand side of
/// a declaration, without the trailing semicolon (`mock(Foo.class)`, `"test"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterInitializer {
    description: String,
    expression: String,
}

impl ParameterInitializer {
    pub fn new(description: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expression: expression.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Failure a constructor is expected to raise for an invalid argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Argument rejected: out of range, blank, ...
    IllegalArgument,
    /// Null rejected
    NullPointer,
}

impl FailureKind {
    /// Simple class name of the Java exception.
    pub const fn simple_name(&self) -> &'static str {
        match self {
            Self::IllegalArgument => "IllegalArgumentException",
            Self::NullPointer => "NullPointerException",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// Insertion-ordered mapping from invalid initializer to expected failure.
///
/// Re-inserting an existing initializer replaces its failure in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidInitializers {
    entries: Vec<(ParameterInitializer, FailureKind)>,
}

impl InvalidInitializers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, initializer: ParameterInitializer, failure: FailureKind) {
        match self.entries.iter_mut().find(|(i, _)| *i == initializer) {
            Some(entry) => entry.1 = failure,
            None => self.entries.push((initializer, failure)),
        }
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: InvalidInitializers) {
        for (initializer, failure) in other.entries {
            self.insert(initializer, failure);
        }
    }

    pub fn get(&self, initializer: &ParameterInitializer) -> Option<FailureKind> {
        self.entries
            .iter()
            .find(|(i, _)| i == initializer)
            .map(|(_, failure)| *failure)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterInitializer, FailureKind)> {
        self.entries.iter().map(|(i, f)| (i, *f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ParameterInitializer, FailureKind)> for InvalidInitializers {
    fn from_iter<T: IntoIterator<Item = (ParameterInitializer, FailureKind)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (initializer, failure) in iter {
            map.insert(initializer, failure);
        }
        map
    }
}
