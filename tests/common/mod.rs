// Test utility module for boilerplate integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const POM_WITH_FIXTURES: &str = r#"<project>
  <dependencies>
    <dependency><groupId>junit</groupId><artifactId>junit</artifactId></dependency>
    <dependency><groupId>org.mockito</groupId><artifactId>mockito-core</artifactId></dependency>
  </dependencies>
</project>
"#;

pub const POM_WITHOUT_MOCKITO: &str = r#"<project>
  <dependencies>
    <dependency><groupId>junit</groupId><artifactId>junit</artifactId></dependency>
  </dependencies>
</project>
"#;

/// A throwaway Maven-style project.
pub struct JavaProject {
    dir: TempDir,
}

impl JavaProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with a pom.xml declaring JUnit and Mockito.
    pub fn with_fixtures() -> Self {
        let project = Self::new();
        project.write("pom.xml", POM_WITH_FIXTURES);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write `src/main/java/<package dirs>/<class>.java`.
    pub fn source(&self, package: &str, class: &str, contents: &str) -> PathBuf {
        self.write(&format!("src/main/java/{}/{}.java", package_dir(package), class), contents)
    }

    /// Path of the companion test for `class`.
    pub fn test_path(&self, package: &str, class: &str) -> PathBuf {
        self.root()
            .join(format!("src/test/java/{}/{}Test.java", package_dir(package), class))
    }
}

fn package_dir(package: &str) -> String {
    package.replace('.', "/")
}
