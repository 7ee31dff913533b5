use crate::classpath::{BuildFileProbe, ClasspathProbe, SkipClasspathCheck};
use crate::config::{load_config, load_config_from, BoilerplateConfig};
use crate::emit::{DryRunEmitter, FileEmitter, JavaRenderer};
use crate::generator::{Generator, Outcome};
use crate::plan::{PlanFileProvider, PlanProvider, SelectAll};
use crate::source::JavaSourceIntrospector;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub source: PathBuf,
    pub plan: Option<PathBuf>,
    pub all: bool,
    pub dry_run: bool,
    pub skip_classpath_check: bool,
    pub config: Option<PathBuf>,
}

pub fn handle_generate(options: GenerateConfig) -> Result<Outcome> {
    let config = match &options.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    let mut provider = plan_provider(&options)?;
    let probe = classpath_probe(&config, options.skip_classpath_check);
    let generator = Generator {
        introspector: &JavaSourceIntrospector,
        classpath: probe.as_ref(),
        config: &config,
    };
    let renderer = JavaRenderer::new(&config.render);

    let outcome = if options.dry_run {
        let mut emitter = DryRunEmitter::new(renderer);
        let outcome = generator.run(&options.source, provider.as_mut(), &mut emitter)?;
        if let Some(text) = emitter.output() {
            print!("{}", text);
        }
        outcome
    } else {
        let mut emitter = FileEmitter::new(renderer);
        generator.run(&options.source, provider.as_mut(), &mut emitter)?
    };

    report(&outcome, options.dry_run);
    Ok(outcome)
}

fn plan_provider(options: &GenerateConfig) -> Result<Box<dyn PlanProvider>> {
    match &options.plan {
        Some(path) => Ok(Box::new(PlanFileProvider::load(path)?)),
        None => {
            debug_assert!(options.all);
            Ok(Box::new(SelectAll))
        }
    }
}

fn classpath_probe(config: &BoilerplateConfig, skip: bool) -> Box<dyn ClasspathProbe> {
    if skip || !config.fixtures.check_classpath {
        Box::new(SkipClasspathCheck)
    } else {
        Box::new(BuildFileProbe::new(&config.fixtures))
    }
}

fn report(outcome: &Outcome, dry_run: bool) {
    match outcome {
        Outcome::Generated { test_file, cases } => {
            let verb = if dry_run { "Would generate" } else { "Generated" };
            eprintln!(
                "{} {} test case(s) in {}",
                verb.green().bold(),
                cases.len(),
                test_file.display()
            );
        }
        Outcome::NothingToTest => eprintln!(
            "{}",
            "No non-private constructors with parameters to test".yellow()
        ),
        Outcome::NoNegativeCases => eprintln!(
            "{}",
            "Configured rules produce no invalid inputs; nothing generated".yellow()
        ),
        Outcome::Cancelled => {}
    }
}
