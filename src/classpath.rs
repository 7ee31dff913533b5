//! Required test fixtures
//!
//! Generated tests call `mock(...)` and carry `@Test`, so the target project
//! must have a mocking library and a test framework available. Without
//! either, generation stops before anything is written.

use crate::config::FixtureConfig;
use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Build files inspected for dependency declarations, in lookup order.
pub const BUILD_FILES: [&str; 3] = ["pom.xml", "build.gradle", "build.gradle.kts"];

/// Boundary to whatever knows the project's classpath.
pub trait ClasspathProbe {
    /// Succeeds if both the mocking facility and the test annotation
    /// facility are available to code under `source`.
    fn check(&self, source: &Path) -> Result<()>;
}

/// Looks for dependency markers in the nearest build file above a source.
#[derive(Debug, Clone)]
pub struct BuildFileProbe {
    mock_markers: Vec<String>,
    test_markers: Vec<String>,
}

impl BuildFileProbe {
    pub fn new(config: &FixtureConfig) -> Self {
        Self {
            mock_markers: lowercase(&config.mock_markers),
            test_markers: lowercase(&config.test_markers),
        }
    }

    fn find_build_file(source: &Path) -> Option<PathBuf> {
        source
            .ancestors()
            .skip(1)
            .flat_map(|dir| BUILD_FILES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }
}

impl ClasspathProbe for BuildFileProbe {
    fn check(&self, source: &Path) -> Result<()> {
        let build_file = Self::find_build_file(source).ok_or_else(|| Error::MissingFixture {
            fixture: "A build file".into(),
            detail: format!(
                "none of {} found above {}",
                BUILD_FILES.join(", "),
                source.display()
            ),
        })?;
        let contents = fs::read_to_string(&build_file)
            .map_err(|e| Error::io(&build_file, e))?
            .to_lowercase();
        debug!(build_file = %build_file.display(), "Checking test fixtures");

        require(&contents, &self.mock_markers, "Mockito", &build_file)?;
        require(&contents, &self.test_markers, "JUnit", &build_file)
    }
}

/// Accepts every project; used when the check is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkipClasspathCheck;

impl ClasspathProbe for SkipClasspathCheck {
    fn check(&self, _source: &Path) -> Result<()> {
        Ok(())
    }
}

fn lowercase(markers: &[String]) -> Vec<String> {
    markers.iter().map(|m| m.to_lowercase()).collect()
}

fn require(contents: &str, markers: &[String], fixture: &str, build_file: &Path) -> Result<()> {
    if markers.iter().any(|m| contents.contains(m.as_str())) {
        Ok(())
    } else {
        Err(Error::MissingFixture {
            fixture: fixture.into(),
            detail: format!(
                "{} does not mention any of: {}",
                build_file.display(),
                markers.join(", ")
            ),
        })
    }
}
