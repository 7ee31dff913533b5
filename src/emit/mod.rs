//! Code emission
//!
//! Writes imports and rendered test methods into the companion test file.
//! The complete new file text is computed first and written in one step, so
//! a failure leaves the file untouched.

pub mod render;

pub use render::{JavaRenderer, REQUIRED_IMPORTS};

use crate::errors::{Error, Result};
use crate::layout::new_test_file_contents;
use crate::source::parse_unit;
use crate::synthesis::TestCaseSpec;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// The test file generated code goes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionTarget {
    pub path: PathBuf,
    pub package: Option<String>,
    pub class_name: String,
}

/// Boundary to whatever applies generated code.
pub trait CodeEmitter {
    /// Append `imports` after the package statement (or the leading comments)
    /// and `cases` at the end of the test class. Either everything is applied or nothing is.
    fn emit(&mut self, target: &EmissionTarget, imports: &[&str], cases: &[TestCaseSpec]) -> Result<()>;
}

/// Insert imports and methods into existing test-file text.
///
/// The text must parse and hold exactly one top-level type with a body.
pub fn insert_generated(
    path: &Path,
    existing: &str,
    imports: &[&str],
    methods: &str,
) -> Result<String> {
    let unit = parse_unit(path, existing).map_err(|e| Error::InvalidTestFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let declaration = unit.single_type().map_err(|e| Error::InvalidTestFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let close = declaration.body_close.ok_or_else(|| Error::InvalidTestFile {
        path: path.to_path_buf(),
        message: format!("{} has no body", declaration.name),
    })?;

    // Methods go in first: they sit after the import anchor, so inserting
    // them does not move it.
    let before = existing[..close].trim_end();
    let separator = if before.ends_with('{') { "\n" } else { "\n\n" };
    let mut text = format!("{}{}{}\n{}", before, separator, methods, &existing[close..]);

    if !imports.is_empty() {
        let block = imports.join("\n");
        match unit.package_end.or(unit.header_end) {
            Some(anchor) => text.insert_str(anchor, &format!("\n\n{}", block)),
            None => text.insert_str(0, &format!("{}\n\n", block)),
        }
    }
    Ok(text)
}

/// Compute the final text for `target` from its current contents (or a new
/// skeleton when it does not exist yet).
fn updated_contents(
    renderer: &JavaRenderer,
    target: &EmissionTarget,
    current: Option<String>,
    imports: &[&str],
    cases: &[TestCaseSpec],
) -> Result<String> {
    let existing = current.unwrap_or_else(|| {
        new_test_file_contents(
            target.package.as_deref(),
            &target.class_name,
            renderer.brace_on_next_line(),
        )
    });
    insert_generated(&target.path, &existing, imports, &renderer.render_methods(cases))
}

/// Current contents of `path`, or `None` when it does not exist yet.
fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Temporary file next to `path` carrying the permissions the final file
/// should have: those of the file being replaced, or the umask default for
/// a new one.
fn temp_file_in(directory: &Path, path: &Path) -> Result<NamedTempFile> {
    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
    }
    let temp = builder.tempfile_in(directory).map_err(|e| Error::io(directory, e))?;

    if let Some(permissions) = existing {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp.path(), e))?;
    }
    Ok(temp)
}

/// Writes generated code to disk via a temporary file and rename.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    renderer: JavaRenderer,
}

impl FileEmitter {
    pub fn new(renderer: JavaRenderer) -> Self {
        Self { renderer }
    }
}

impl CodeEmitter for FileEmitter {
    fn emit(&mut self, target: &EmissionTarget, imports: &[&str], cases: &[TestCaseSpec]) -> Result<()> {
        let current = read_existing(&target.path)?;
        let created = current.is_none();
        let contents = updated_contents(&self.renderer, target, current, imports, cases)?;

        let directory = target
            .path
            .parent()
            .ok_or_else(|| Error::contract(format!("{} has no parent", target.path.display())))?;
        fs::create_dir_all(directory).map_err(|e| Error::io(directory, e))?;

        let mut temp = temp_file_in(directory, &target.path)?;
        temp.write_all(contents.as_bytes())
            .map_err(|e| Error::io(temp.path(), e))?;
        temp.persist(&target.path)
            .map_err(|e| Error::io(&target.path, e.error))?;

        if created {
            info!(path = %target.path.display(), "Created test file");
        }
        debug!(path = %target.path.display(), cases = cases.len(), "Wrote test cases");
        Ok(())
    }
}

/// Computes the resulting file text without touching disk.
#[derive(Debug, Clone)]
pub struct DryRunEmitter {
    renderer: JavaRenderer,
    output: Option<String>,
}

impl DryRunEmitter {
    pub fn new(renderer: JavaRenderer) -> Self {
        Self {
            renderer,
            output: None,
        }
    }

    /// Text the test file would have, once `emit` has run.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl CodeEmitter for DryRunEmitter {
    fn emit(&mut self, target: &EmissionTarget, imports: &[&str], cases: &[TestCaseSpec]) -> Result<()> {
        let current = read_existing(&target.path)?;
        self.output = Some(updated_contents(&self.renderer, target, current, imports, cases)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const METHOD: &str = "    @Test\n    public void a()\n    {\n    }";

    #[test]
    fn test_insert_into_empty_class_with_package() {
        let existing = "package com.example;\n\npublic class FooTest\n{\n}\n";
        let text = insert_generated(Path::new("FooTest.java"), existing, &REQUIRED_IMPORTS, METHOD)
            .unwrap();
        assert_eq!(
            text,
            indoc! {"
                package com.example;

                import static org.mockito.Mockito.mock;
                import org.junit.Test;

                public class FooTest
                {
                    @Test
                    public void a()
                    {
                    }
                }
            "}
        );
    }

    #[test]
    fn test_insert_after_existing_members_without_package() {
        let existing = indoc! {"
            import java.util.List;

            public class FooTest {
                private int x;
            }
        "};
        let text = insert_generated(Path::new("FooTest.java"), existing, &["import org.junit.Test;"], METHOD)
            .unwrap();
        assert!(text.starts_with("import org.junit.Test;\n\nimport java.util.List;"));
        assert!(text.contains("    private int x;\n\n    @Test"));
        assert!(text.trim_end().ends_with("    }\n}"));
        parse_unit(Path::new("FooTest.java"), &text).unwrap();
    }

    #[test]
    fn test_insert_rejects_multiple_classes() {
        let err = insert_generated(
            Path::new("FooTest.java"),
            "class FooTest {}\nclass Other {}\n",
            &[],
            METHOD,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidTestFile { .. }));
    }

    #[test]
    fn test_insert_rejects_broken_file() {
        let err = insert_generated(Path::new("FooTest.java"), "class FooTest {", &[], METHOD)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTestFile { .. }));
    }

    #[test]
    fn test_dry_run_uses_skeleton_for_missing_file() {
        let mut emitter = DryRunEmitter::new(JavaRenderer::new(&RenderConfig::default()));
        let target = EmissionTarget {
            path: PathBuf::from("/definitely/missing/FooTest.java"),
            package: Some("a.b".into()),
            class_name: "FooTest".into(),
        };
        emitter.emit(&target, &REQUIRED_IMPORTS, &[]).unwrap();
        let output = emitter.output().unwrap();
        assert!(output.starts_with("package a.b;\n\nimport static org.mockito.Mockito.mock;"));
        assert!(output.contains("public class FooTest\n{"));
        assert!(!Path::new("/definitely/missing").exists());
    }

    #[test]
    fn test_imports_follow_leading_header_comment() {
        let existing = indoc! {"
            /*
             * License
             */

            public class FooTest {
            }
        "};
        let text = insert_generated(Path::new("FooTest.java"), existing, &["import org.junit.Test;"], METHOD)
            .unwrap();
        assert!(text.starts_with("/*\n * License\n */\n\nimport org.junit.Test;\n\npublic class FooTest {"));
        parse_unit(Path::new("FooTest.java"), &text).unwrap();
    }

    #[test]
    fn test_dry_run_reports_unreadable_test_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FooTest.java");
        fs::write(&path, [0xff, 0xfe]).unwrap();

        let mut emitter = DryRunEmitter::new(JavaRenderer::new(&RenderConfig::default()));
        let target = EmissionTarget {
            path: path.clone(),
            package: None,
            class_name: "FooTest".into(),
        };
        let err = emitter.emit(&target, &REQUIRED_IMPORTS, &[]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(emitter.output().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_files_keep_ordinary_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        let reference = dir.path().join("Reference.java");
        fs::write(&reference, "").unwrap();

        let mut emitter = FileEmitter::new(JavaRenderer::new(&RenderConfig::default()));
        let created = EmissionTarget {
            path: dir.path().join("FooTest.java"),
            package: None,
            class_name: "FooTest".into(),
        };
        emitter.emit(&created, &REQUIRED_IMPORTS, &[]).unwrap();
        assert_eq!(mode(&created.path), mode(&reference));

        let existing = EmissionTarget {
            path: dir.path().join("BarTest.java"),
            package: None,
            class_name: "BarTest".into(),
        };
        fs::write(&existing.path, "public class BarTest {\n}\n").unwrap();
        fs::set_permissions(&existing.path, fs::Permissions::from_mode(0o640)).unwrap();
        emitter.emit(&existing, &REQUIRED_IMPORTS, &[]).unwrap();
        assert_eq!(mode(&existing.path), 0o640);
        assert!(fs::read_to_string(&existing.path).unwrap().starts_with("import static"));
    }
}
