use super::load_session;
use crate::plan::PlanFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Print or write a plan file listing every offered constructor with its
/// default rules, ready to be edited and passed to `generate --plan`.
pub fn write_plan_template(source: &Path, output: Option<&Path>) -> Result<()> {
    let session = load_session(source)?;
    if session.is_empty() {
        anyhow::bail!(
            "{} has no non-private constructors with parameters",
            session.class_name()
        );
    }
    let text = PlanFile::template(&session).to_toml_string()?;

    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote plan for {} to {}", session.class_name(), path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
