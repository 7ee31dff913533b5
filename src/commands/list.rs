use super::load_session;
use crate::cli::OutputFormat;
use crate::plan::ConfigurationSession;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedConstructor {
    pub signature: String,
    pub line: usize,
    pub parameters: Vec<ListedParameter>,
}

/// Offered constructors with their default rule state.
pub fn listed_constructors(session: &ConfigurationSession) -> Vec<ListedConstructor> {
    session
        .offered()
        .iter()
        .map(|offered| ListedConstructor {
            signature: offered.constructor().signature(),
            line: offered.constructor().line(),
            parameters: offered
                .rules()
                .iter()
                .map(|rule| ListedParameter {
                    name: rule.name().to_string(),
                    type_name: rule.declared_type().type_text().to_string(),
                    rule: rule.summary(),
                })
                .collect(),
        })
        .collect()
}

pub fn list_constructors(source: &Path, format: OutputFormat) -> Result<()> {
    let session = load_session(source)?;
    let listed = listed_constructors(&session);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listed)?),
        OutputFormat::Terminal => {
            println!("{}", session.class_name().bold());
            if listed.is_empty() {
                println!("  {}", "no constructors to test".dimmed());
            }
            for constructor in &listed {
                println!(
                    "  {} {}",
                    constructor.signature.cyan(),
                    format!("(line {})", constructor.line).dimmed()
                );
                for parameter in &constructor.parameters {
                    println!(
                        "    {} {}: {}",
                        parameter.type_name, parameter.name, parameter.rule
                    );
                }
            }
        }
    }
    Ok(())
}
