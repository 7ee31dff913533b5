//! CLI command implementations for boilerplate.
//!
//! Available commands:
//! - **generate**: Synthesize constructor tests into the companion test file
//! - **plan**: Write a plan-file template for a class
//! - **list**: Show the constructors offered for testing and their rules
//! - **init**: Initialize a new `.boilerplate.toml`

pub mod generate;
pub mod init;
pub mod list;
pub mod plan;

pub use generate::{handle_generate, GenerateConfig};
pub use init::init_config;
pub use list::{list_constructors, ListedConstructor, ListedParameter};
pub use plan::write_plan_template;

use crate::plan::ConfigurationSession;
use crate::source::{JavaSourceIntrospector, SourceIntrospector};
use anyhow::{Context, Result};
use std::path::Path;

/// Parse `source` and offer its constructors with default rules.
pub(crate) fn load_session(source: &Path) -> Result<ConfigurationSession> {
    let class = JavaSourceIntrospector
        .load(source)
        .with_context(|| format!("Failed to load {}", source.display()))?;
    Ok(ConfigurationSession::new(&class)?)
}
