//! Maps declared parameter types to rule variants

use super::{DeclaredType, NumericRule, ObjectRule, ParameterDescriptor, ParameterRule, StringRule};
use crate::errors::{Error, Result};

/// Build the default rule for a parameter.
///
/// `int` gets a numeric rule, `String` a string rule and every other reference
/// type an object rule. Other primitives are not supported; the error is fatal
/// for the whole constructor.
pub fn classify(descriptor: ParameterDescriptor) -> Result<ParameterRule> {
    match descriptor.declared_type() {
        DeclaredType::Int => NumericRule::new(descriptor).map(ParameterRule::Numeric),
        DeclaredType::String => StringRule::new(descriptor).map(ParameterRule::String),
        DeclaredType::Object(_) => ObjectRule::new(descriptor).map(ParameterRule::Object),
        DeclaredType::OtherPrimitive(type_name) => Err(Error::UnsupportedParameterType {
            type_name: type_name.clone(),
            parameter: descriptor.name().to_string(),
        }),
    }
}

/// Classify every parameter of one signature, in declaration order.
pub fn classify_all<I>(parameters: I) -> Result<Vec<ParameterRule>>
where
    I: IntoIterator<Item = ParameterDescriptor>,
{
    parameters.into_iter().map(classify).collect()
}
