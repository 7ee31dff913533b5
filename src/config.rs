//! Configuration for boilerplate
//!
//! Settings come from `.boilerplate.toml`, found by walking up from the
//! current directory (see [`loader`]). Every field is optional.
//!
//! ```toml
//! [layout]
//! source_root = ["src", "main", "java"]
//! test_root = ["src", "test", "java"]
//! test_suffix = "Test"
//!
//! [fixtures]
//! check_classpath = true
//! mock_markers = ["mockito"]
//! test_markers = ["junit"]
//!
//! [render]
//! indent = "    "
//! brace_style = "next-line"
//! ```

pub mod loader;

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoilerplateConfig {
    pub layout: LayoutConfig,
    pub fixtures: FixtureConfig,
    pub render: RenderConfig,
}

impl BoilerplateConfig {
    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<(), String> {
        if self.layout.source_root.is_empty() {
            return Err("layout.source_root cannot be empty".into());
        }
        if self.layout.test_root.is_empty() {
            return Err("layout.test_root cannot be empty".into());
        }
        if self.layout.source_root == self.layout.test_root {
            return Err("layout.source_root and layout.test_root must differ".into());
        }
        if self.layout.test_suffix.is_empty() {
            return Err("layout.test_suffix cannot be empty".into());
        }
        if !self.render.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err("render.indent must contain only spaces or tabs".into());
        }
        if self.fixtures.check_classpath
            && (self.fixtures.mock_markers.is_empty() || self.fixtures.test_markers.is_empty())
        {
            return Err("fixtures markers cannot be empty while check_classpath is enabled".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Directories between the project root and the package directories of main sources
    pub source_root: Vec<String>,
    /// Same, for test sources
    pub test_root: Vec<String>,
    /// Appended to the source class name to name the test class
    pub test_suffix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_root: vec!["src".into(), "main".into(), "java".into()],
            test_root: vec!["src".into(), "test".into(), "java".into()],
            test_suffix: "Test".into(),
        }
    }
}

/// Markers looked for in build files to confirm the test libraries are
/// available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    pub check_classpath: bool,
    pub mock_markers: Vec<String>,
    pub test_markers: Vec<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            check_classpath: true,
            mock_markers: vec!["mockito".into()],
            test_markers: vec!["junit".into()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BraceStyle {
    /// Opening braces on their own line
    #[default]
    NextLine,
    SameLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub indent: String,
    pub brace_style: BraceStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "    ".into(),
            brace_style: BraceStyle::NextLine,
        }
    }
}

/// Commented default configuration written by `boilerplate init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Boilerplate configuration

[layout]
# Directories between the project root and the package directories
source_root = ["src", "main", "java"]
test_root = ["src", "test", "java"]
test_suffix = "Test"

[fixtures]
# Refuse to generate unless a build file mentions the mocking and test libraries
check_classpath = true
mock_markers = ["mockito"]
test_markers = ["junit"]

[render]
indent = "    "
# "next-line" or "same-line"
brace_style = "next-line"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_text_matches_defaults() {
        let parsed: BoilerplateConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, BoilerplateConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BoilerplateConfig::default();
        assert!(config.validate().is_ok());

        config.layout.test_suffix.clear();
        assert!(config.validate().is_err());

        let mut config = BoilerplateConfig::default();
        config.render.indent = "--".into();
        assert!(config.validate().is_err());

        let mut config = BoilerplateConfig::default();
        config.layout.test_root = config.layout.source_root.clone();
        assert!(config.validate().is_err());

        let mut config = BoilerplateConfig::default();
        config.fixtures.mock_markers.clear();
        assert!(config.validate().is_err());
        config.fixtures.check_classpath = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed: BoilerplateConfig =
            toml::from_str("[render]\nbrace_style = \"same-line\"\n").unwrap();
        assert_eq!(parsed.render.brace_style, BraceStyle::SameLine);
        assert_eq!(parsed.render.indent, "    ");
        assert_eq!(parsed.layout, LayoutConfig::default());
    }
}
