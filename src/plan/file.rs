//! TOML plan files
//!
//! A plan file stands in for the selection dialog: it names the
//! constructors to test by their type-only signature and configures each
//! parameter's rule.
//!
//! ```toml
//! [[constructor]]
//! signature = "(int, String)"
//! select = true
//!
//! [[constructor.parameter]]
//! name = "count"
//! constraint = "greater_equal"
//! boundary = 10
//!
//! [[constructor.parameter]]
//! name = "name"
//! disallow_null = true
//! disallow_blank = true
//! ```

use super::{Confirmation, ConfigurationSession, PlanProvider};
use crate::errors::{Error, Result};
use crate::parameters::{NumericConstraint, ParameterRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const TEMPLATE_HEADER: &str = "\
# Boilerplate test plan
#
# Set `select = true` on each constructor to generate tests for.
# int parameters:    constraint = any | less_equal | less | equal | greater | greater_equal
#                    boundary = <int>  (required unless constraint = any)
# object parameters: disallow_null = true | false
# String parameters: disallow_null, disallow_blank = true | false
# Set `cancel = true` to abort without generating anything.

";

/// Boundary as written in the file: a TOML integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Boundary {
    Int(i64),
    Text(String),
}

impl Boundary {
    fn as_text(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSettings {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow_null: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow_blank: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorSettings {
    pub signature: String,
    #[serde(default = "default_select")]
    pub select: bool,
    #[serde(default, rename = "parameter", skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterSettings>,
}

fn default_select() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cancel: bool,
    #[serde(default, rename = "constructor")]
    pub constructors: Vec<ConstructorSettings>,
}

impl PlanFile {
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&contents).map_err(|e| Error::plan(Some(path.to_path_buf()), e))
    }

    /// Template describing every offered constructor with its current rule
    /// state, none selected.
    pub fn template(session: &ConfigurationSession) -> Self {
        let constructors = session
            .offered()
            .iter()
            .map(|offered| ConstructorSettings {
                signature: offered.constructor().signature(),
                select: false,
                parameters: offered.rules().iter().map(settings_for).collect(),
            })
            .collect();
        Self {
            cancel: false,
            constructors,
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| Error::plan(None, format!("failed to serialize plan: {}", e)))?;
        Ok(format!("{}{}", TEMPLATE_HEADER, body))
    }

    /// Apply selections and rule settings to a session. Returns whether the
    /// file asks to cancel.
    pub fn apply(&self, session: &mut ConfigurationSession) -> std::result::Result<Confirmation, String> {
        if self.cancel {
            return Ok(Confirmation::Cancelled);
        }
        for settings in &self.constructors {
            let index = session.find(&settings.signature).ok_or_else(|| {
                format!(
                    "no testable constructor {} in {}",
                    settings.signature,
                    session.class_name()
                )
            })?;
            session
                .select(index, settings.select)
                .map_err(|e| e.to_string())?;
            let rules = session.rules_mut(index).map_err(|e| e.to_string())?;
            for parameter in &settings.parameters {
                let rule = rules
                    .iter_mut()
                    .find(|r| r.name() == parameter.name)
                    .ok_or_else(|| {
                        format!(
                            "constructor {} has no parameter '{}'",
                            settings.signature, parameter.name
                        )
                    })?;
                apply_settings(rule, parameter)?;
            }
        }
        Ok(Confirmation::Confirmed)
    }
}

fn settings_for(rule: &ParameterRule) -> ParameterSettings {
    let mut settings = ParameterSettings {
        name: rule.name().to_string(),
        ..Default::default()
    };
    match rule {
        ParameterRule::Numeric(numeric) => {
            settings.constraint = numeric.constraint().map(|c| c.key().to_string());
            settings.boundary = numeric.boundary_text().map(|b| Boundary::Text(b.to_string()));
        }
        ParameterRule::String(string) => {
            settings.disallow_null = Some(string.disallow_null());
            settings.disallow_blank = Some(string.disallow_blank());
        }
        ParameterRule::Object(object) => {
            settings.disallow_null = Some(object.disallow_null());
        }
    }
    settings
}

fn apply_settings(rule: &mut ParameterRule, settings: &ParameterSettings) -> std::result::Result<(), String> {
    let name = settings.name.as_str();
    match rule {
        ParameterRule::Numeric(numeric) => {
            reject(name, "disallow_null", settings.disallow_null.is_some())?;
            reject(name, "disallow_blank", settings.disallow_blank.is_some())?;
            if let Some(constraint) = &settings.constraint {
                let constraint: NumericConstraint =
                    constraint.parse().map_err(|e| format!("parameter '{}': {}", name, e))?;
                numeric.set_constraint(constraint);
            }
            if let Some(boundary) = &settings.boundary {
                numeric.set_boundary(boundary.as_text());
            }
        }
        ParameterRule::String(string) => {
            reject(name, "constraint", settings.constraint.is_some())?;
            reject(name, "boundary", settings.boundary.is_some())?;
            if let Some(disallow) = settings.disallow_null {
                string.set_disallow_null(disallow);
            }
            if let Some(disallow) = settings.disallow_blank {
                string.set_disallow_blank(disallow);
            }
        }
        ParameterRule::Object(object) => {
            reject(name, "constraint", settings.constraint.is_some())?;
            reject(name, "boundary", settings.boundary.is_some())?;
            reject(name, "disallow_blank", settings.disallow_blank.is_some())?;
            if let Some(disallow) = settings.disallow_null {
                object.set_disallow_null(disallow);
            }
        }
    }
    Ok(())
}

fn reject(name: &str, key: &str, present: bool) -> std::result::Result<(), String> {
    if present {
        Err(format!("'{}' does not apply to parameter '{}'", key, name))
    } else {
        Ok(())
    }
}

/// [`PlanProvider`] backed by a plan file on disk.
#[derive(Debug, Clone)]
pub struct PlanFileProvider {
    path: PathBuf,
    plan: PlanFile,
}

impl PlanFileProvider {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let plan = PlanFile::load(&path)?;
        debug!(path = %path.display(), constructors = plan.constructors.len(), "Loaded plan file");
        Ok(Self { path, plan })
    }

    pub fn from_plan(path: impl Into<PathBuf>, plan: PlanFile) -> Self {
        Self {
            path: path.into(),
            plan,
        }
    }
}

impl PlanProvider for PlanFileProvider {
    fn configure(&mut self, session: &mut ConfigurationSession) -> Result<Confirmation> {
        self.plan
            .apply(session)
            .map_err(|message| Error::plan(Some(self.path.clone()), message))
    }
}
