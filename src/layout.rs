//! Conventional source and test locations
//!
//! A class `com.example.Foo` at `<root>/src/main/java/com/example/Foo.java`
//! is tested by `<root>/src/test/java/com/example/FooTest.java`. The
//! directory names come from [`LayoutConfig`].

use crate::config::LayoutConfig;
use crate::errors::{Error, Result};
use crate::source::SourceClass;
use std::path::{Path, PathBuf};

/// Where the companion test for a source class lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLocation {
    /// Directory that contains the source root (e.g. the module root)
    pub project_root: PathBuf,
    pub directory: PathBuf,
    pub file: PathBuf,
    pub class_name: String,
}

/// Resolve the companion test location for `class`.
///
/// The source file's directory must end with the source root followed by
/// the package directories; anything else is not a recognised source file.
pub fn resolve_test_location(class: &SourceClass, layout: &LayoutConfig) -> Result<TestLocation> {
    let source_dir = class
        .path()
        .parent()
        .ok_or_else(|| not_in_source_root(class.path(), layout))?;

    let package_dirs: Vec<&str> = class
        .package()
        .map(|p| p.split('.').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let expected: Vec<&str> = layout
        .source_root
        .iter()
        .map(String::as_str)
        .chain(package_dirs.iter().copied())
        .collect();

    let project_root = strip_trailing_components(source_dir, &expected)
        .ok_or_else(|| not_in_source_root(class.path(), layout))?;

    let directory = layout
        .test_root
        .iter()
        .map(String::as_str)
        .chain(package_dirs.iter().copied())
        .fold(project_root.clone(), |dir, part| dir.join(part));

    let class_name = format!("{}{}", class.name(), layout.test_suffix);
    let file = directory.join(format!("{}.java", class_name));

    Ok(TestLocation {
        project_root,
        directory,
        file,
        class_name,
    })
}

/// Walk up from `dir`, matching `expected` from its last element backwards.
fn strip_trailing_components(dir: &Path, expected: &[&str]) -> Option<PathBuf> {
    let mut current = dir;
    for part in expected.iter().rev() {
        if current.file_name()?.to_str()? != *part {
            return None;
        }
        current = current.parent()?;
    }
    Some(current.to_path_buf())
}

fn not_in_source_root(path: &Path, layout: &LayoutConfig) -> Error {
    Error::NotInSourceRoot {
        path: path.to_path_buf(),
        expected: layout.source_root.join("/"),
    }
}

/// Skeleton for a new test file.
pub fn new_test_file_contents(package: Option<&str>, class_name: &str, brace_on_next_line: bool) -> String {
    let mut out = String::new();
    if let Some(package) = package {
        out.push_str(&format!("package {};\n\n", package));
    }
    if brace_on_next_line {
        out.push_str(&format!("public class {}\n{{\n}}\n", class_name));
    } else {
        out.push_str(&format!("public class {} {{\n}}\n", class_name));
    }
    out
}
