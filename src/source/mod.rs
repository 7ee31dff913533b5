//! Source introspection
//!
//! Reads a Java compilation unit and reports what the generator needs from
//! it: the package, the single top-level class, and that class's
//! constructors with their parameters in declaration order.

pub mod java;

pub use java::{parse_unit, JavaSourceIntrospector, ParsedUnit, TypeDeclaration};

use crate::errors::{Error, Result};
use crate::parameters::{DeclaredType, ParameterDescriptor};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Access level of a member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

/// A constructor declared by the source class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    class_name: String,
    visibility: Visibility,
    parameters: Vec<ParameterDescriptor>,
    /// 1-indexed line of the declaration
    line: usize,
}

impl Constructor {
    pub fn new(
        class_name: impl Into<String>,
        visibility: Visibility,
        parameters: Vec<ParameterDescriptor>,
        line: usize,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            visibility,
            parameters,
            line,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Constructors worth testing: visible outside the class and taking at
    /// least one argument.
    pub fn is_testable(&self) -> bool {
        self.visibility != Visibility::Private && !self.parameters.is_empty()
    }

    /// Parameter types only, e.g. `(int, String)`. Identifies the
    /// constructor in plan files.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.declared_type().type_text())
            .collect();
        format!("({})", types.join(", "))
    }

    /// e.g. `Constructor: (int count, String name)`
    pub fn presentable_signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.declared_type(), p.name()))
            .collect();
        format!("Constructor: ({})", params.join(", "))
    }
}

/// The single class of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceClass {
    path: PathBuf,
    package: Option<String>,
    name: String,
    constructors: Vec<Constructor>,
}

impl SourceClass {
    pub fn new(
        path: impl Into<PathBuf>,
        package: Option<String>,
        name: impl Into<String>,
        constructors: Vec<Constructor>,
    ) -> Self {
        Self {
            path: path.into(),
            package,
            name: name.into(),
            constructors,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn testable_constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.constructors.iter().filter(|c| c.is_testable())
    }
}

/// Boundary to whatever can read source classes.
pub trait SourceIntrospector {
    fn load(&self, path: &Path) -> Result<SourceClass>;
}

/// Build a descriptor from a parameter's name and type text.
pub(crate) fn descriptor(name: &str, type_text: &str) -> Result<ParameterDescriptor> {
    ParameterDescriptor::new(name, DeclaredType::from_type_text(type_text))
}

/// Reject anything that is not a `.java` file.
pub fn ensure_java_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("java") => Ok(()),
        _ => Err(Error::NotJavaSource {
            path: path.to_path_buf(),
        }),
    }
}
