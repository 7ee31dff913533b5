//! Boundary to whatever collects the user's configuration

use super::ConfigurationSession;
use crate::errors::Result;
use crate::parameters::ParameterRule;

/// How a configuration round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    /// Dismissed without confirming. Not an error; nothing is generated.
    Cancelled,
}

/// Presents offered constructors and their rules, and lets the user edit
/// them in place.
///
/// On `Confirmed` the generator calls [`ConfigurationSession::confirm`];
/// implementations that can re-prompt should call
/// [`ConfigurationSession::validate`] themselves before confirming.
pub trait PlanProvider {
    fn configure(&mut self, session: &mut ConfigurationSession) -> Result<Confirmation>;
}

/// Selects every offered constructor and rejects `null` for every object
/// and `String` parameter. Numeric rules keep `Any`, since no boundary can
/// be guessed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectAll;

impl PlanProvider for SelectAll {
    fn configure(&mut self, session: &mut ConfigurationSession) -> Result<Confirmation> {
        session.select_all();
        for index in 0..session.offered().len() {
            for rule in session.rules_mut(index)? {
                match rule {
                    ParameterRule::Object(object) => object.set_disallow_null(true),
                    ParameterRule::String(string) => string.set_disallow_null(true),
                    ParameterRule::Numeric(_) => {}
                }
            }
        }
        Ok(Confirmation::Confirmed)
    }
}
