//! Rules for primitive `int` parameters
//!
//! A numeric rule carries one relational constraint against an integer
//! boundary. Expansion partitions the integers around the boundary into the
//! three representative values `v - 1`, `v` and `v + 1`, and sorts each into
//! the valid or invalid set according to the constraint.

use super::initializer::{FailureKind, InvalidInitializers, ParameterInitializer};
use super::{DeclaredType, ParameterDescriptor};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relational constraint on an integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericConstraint {
    /// Can be anything
    Any,
    LessEqual,
    Less,
    Equal,
    Greater,
    GreaterEqual,
}

impl NumericConstraint {
    pub const ALL: [NumericConstraint; 6] = [
        Self::Any,
        Self::LessEqual,
        Self::Less,
        Self::Equal,
        Self::Greater,
        Self::GreaterEqual,
    ];

    /// Human-readable operator form.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::Equal => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    /// Key used in plan files.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::LessEqual => "less_equal",
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
            Self::GreaterEqual => "greater_equal",
        }
    }

    /// Relations to `v` that satisfy (first) and violate (second) the constraint.
    fn partition(&self) -> (&'static [Relation], &'static [Relation]) {
        use Relation::*;
        match self {
            Self::Any => (&[], &[]),
            Self::LessEqual => (&[LessThan, EqualTo], &[GreaterThan]),
            Self::Less => (&[LessThan], &[GreaterThan, EqualTo]),
            Self::Equal => (&[EqualTo], &[LessThan, GreaterThan]),
            Self::Greater => (&[GreaterThan], &[LessThan, EqualTo]),
            Self::GreaterEqual => (&[GreaterThan, EqualTo], &[LessThan]),
        }
    }
}

impl std::fmt::Display for NumericConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for NumericConstraint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.symbol() == s || c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown constraint '{}', expected one of: {}",
                    s,
                    Self::ALL.map(|c| c.key()).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    LessThan,
    EqualTo,
    GreaterThan,
}

impl Relation {
    const fn label(&self) -> &'static str {
        match self {
            Self::LessThan => "LessThan",
            Self::EqualTo => "EqualTo",
            Self::GreaterThan => "GreaterThan",
        }
    }

    fn value(&self, boundary: i32) -> Option<i32> {
        match self {
            Self::LessThan => boundary.checked_sub(1),
            Self::EqualTo => Some(boundary),
            Self::GreaterThan => boundary.checked_add(1),
        }
    }
}

/// Rule for an `int` parameter.
///
/// The boundary is kept as the text the user entered; it only needs to parse
/// once the constraint is something other than [`NumericConstraint::Any`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRule {
    descriptor: ParameterDescriptor,
    constraint: Option<NumericConstraint>,
    boundary: Option<String>,
}

impl NumericRule {
    /// New rule with the default `Any` constraint.
    pub fn new(descriptor: ParameterDescriptor) -> Result<Self> {
        let mut rule = Self::unconfigured(descriptor)?;
        rule.constraint = Some(NumericConstraint::Any);
        Ok(rule)
    }

    /// New rule with no constraint selected at all. Such a rule is invalid
    /// until a constraint is set.
    pub fn unconfigured(descriptor: ParameterDescriptor) -> Result<Self> {
        if *descriptor.declared_type() != DeclaredType::Int {
            return Err(Error::contract(format!(
                "numeric rule requires an int parameter, '{}' is {}",
                descriptor.name(),
                descriptor.declared_type()
            )));
        }
        Ok(Self {
            descriptor,
            constraint: None,
            boundary: None,
        })
    }

    pub fn descriptor(&self) -> &ParameterDescriptor {
        &self.descriptor
    }

    pub fn constraint(&self) -> Option<NumericConstraint> {
        self.constraint
    }

    pub fn set_constraint(&mut self, constraint: NumericConstraint) {
        self.constraint = Some(constraint);
    }

    pub fn clear_constraint(&mut self) {
        self.constraint = None;
    }

    pub fn boundary_text(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    pub fn set_boundary(&mut self, text: impl Into<String>) {
        self.boundary = Some(text.into());
    }

    pub fn clear_boundary(&mut self) {
        self.boundary = None;
    }

    /// Parsed boundary, if the entered text is a Java `int`.
    pub fn boundary(&self) -> Option<i32> {
        self.boundary.as_deref()?.trim().parse().ok()
    }

    /// A constraint is set, and unless it is `Any` the boundary parses and
    /// both of its neighbours fit in an `int`.
    pub fn is_valid(&self) -> bool {
        match self.constraint {
            None => false,
            Some(NumericConstraint::Any) => true,
            Some(_) => self
                .boundary()
                .is_some_and(|v| v.checked_sub(1).is_some() && v.checked_add(1).is_some()),
        }
    }

    pub fn valid_initializers(&self) -> Result<Vec<ParameterInitializer>> {
        let (constraint, boundary) = self.checked_state()?;
        if constraint == NumericConstraint::Any {
            return Ok(vec![ParameterInitializer::new(
                format!("valid{}", self.descriptor.capitalized_name()),
                "0",
            )]);
        }
        let (valid, _) = constraint.partition();
        valid
            .iter()
            .map(|relation| self.initializer(*relation, boundary))
            .collect()
    }

    pub fn invalid_initializers(&self) -> Result<InvalidInitializers> {
        let (constraint, boundary) = self.checked_state()?;
        let (_, invalid) = constraint.partition();
        invalid
            .iter()
            .map(|relation| {
                self.initializer(*relation, boundary)
                    .map(|i| (i, FailureKind::IllegalArgument))
            })
            .collect()
    }

    fn checked_state(&self) -> Result<(NumericConstraint, i32)> {
        match (self.is_valid(), self.constraint) {
            (true, Some(NumericConstraint::Any)) => Ok((NumericConstraint::Any, 0)),
            (true, Some(constraint)) => self
                .boundary()
                .map(|v| (constraint, v))
                .ok_or_else(|| self.not_valid()),
            _ => Err(self.not_valid()),
        }
    }

    fn not_valid(&self) -> Error {
        Error::contract(format!(
            "rule for '{}' must be valid when getting initializers (constraint: {}, boundary: {})",
            self.descriptor.name(),
            self.constraint
                .map(|c| c.symbol().to_string())
                .unwrap_or_else(|| "unset".into()),
            self.boundary.as_deref().unwrap_or("none"),
        ))
    }

    fn initializer(&self, relation: Relation, boundary: i32) -> Result<ParameterInitializer> {
        let value = relation.value(boundary).ok_or_else(|| self.not_valid())?;
        Ok(ParameterInitializer::new(
            format!(
                "{}{}{}",
                self.descriptor.name(),
                relation.label(),
                boundary_fragment(boundary)
            ),
            value.to_string(),
        ))
    }
}

/// Identifier-safe rendering of a boundary: `5`, `Negative5`.
fn boundary_fragment(boundary: i32) -> String {
    if boundary < 0 {
        format!("Negative{}", boundary.unsigned_abs())
    } else {
        boundary.to_string()
    }
}
