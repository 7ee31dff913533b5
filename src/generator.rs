//! One generation pass, end to end
//!
//! Load the source class, resolve its companion test file, collect the
//! user's plan, check fixtures, synthesize every test case, and only then
//! emit. Any failure before emission leaves the project untouched.

use crate::classpath::ClasspathProbe;
use crate::config::BoilerplateConfig;
use crate::emit::{CodeEmitter, EmissionTarget, REQUIRED_IMPORTS};
use crate::errors::Result;
use crate::layout::{resolve_test_location, TestLocation};
use crate::plan::{ConfigurationSession, Confirmation, PlanProvider};
use crate::source::{SourceClass, SourceIntrospector};
use crate::synthesis::{TestCaseSpec, TestCaseSynthesizer};
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

/// How a generation pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Test cases were written to `test_file`
    Generated {
        test_file: PathBuf,
        cases: Vec<TestCaseSpec>,
    },
    /// The class has no non-private constructor taking parameters
    NothingToTest,
    /// The configured rules produce no failing inputs
    NoNegativeCases,
    /// The user dismissed the configuration
    Cancelled,
}

/// Collaborators for a generation pass.
pub struct Generator<'a> {
    pub introspector: &'a dyn SourceIntrospector,
    pub classpath: &'a dyn ClasspathProbe,
    pub config: &'a BoilerplateConfig,
}

impl Generator<'_> {
    /// Parse the source and build the configuration session for it.
    pub fn prepare(&self, source: &Path) -> Result<(SourceClass, TestLocation, ConfigurationSession)> {
        let class = self.introspector.load(source)?;
        let location = resolve_test_location(&class, &self.config.layout)?;
        let session = ConfigurationSession::new(&class)?;
        Ok((class, location, session))
    }

    pub fn run(
        &self,
        source: &Path,
        provider: &mut dyn PlanProvider,
        emitter: &mut dyn CodeEmitter,
    ) -> Result<Outcome> {
        let _span = info_span!("generate", source = %source.display()).entered();

        let (class, location, mut session) = self.prepare(source)?;
        if session.is_empty() {
            info!(class = class.name(), "No testable constructors");
            return Ok(Outcome::NothingToTest);
        }

        if provider.configure(&mut session)? == Confirmation::Cancelled {
            info!("Configuration cancelled");
            return Ok(Outcome::Cancelled);
        }
        let plan = session.confirm()?;

        self.classpath.check(class.path())?;

        let cases = TestCaseSynthesizer::new().synthesize(&plan)?;
        if cases.is_empty() {
            info!(
                constructors = plan.len(),
                "Configured rules produce no invalid inputs; nothing to generate"
            );
            return Ok(Outcome::NoNegativeCases);
        }

        let target = EmissionTarget {
            path: location.file.clone(),
            package: class.package().map(String::from),
            class_name: location.class_name.clone(),
        };
        emitter.emit(&target, &REQUIRED_IMPORTS, &cases)?;
        info!(
            test_file = %location.file.display(),
            cases = cases.len(),
            "Generated test cases"
        );
        Ok(Outcome::Generated {
            test_file: location.file,
            cases,
        })
    }
}
