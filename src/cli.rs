use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "boilerplate")]
#[command(about = "Generates JUnit constructor tests from parameter rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// BOILERPLATE_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate constructor test cases for a Java class
    Generate {
        /// Java source file declaring the class under test
        source: PathBuf,

        /// Plan file selecting constructors and configuring parameter rules
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        plan: Option<PathBuf>,

        /// Test every offered constructor, rejecting null object and String arguments
        #[arg(long)]
        all: bool,

        /// Print the resulting test file instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Do not require Mockito and JUnit in the project's build file
        #[arg(long)]
        skip_classpath_check: bool,

        /// Configuration file (defaults to the nearest .boilerplate.toml)
        #[arg(short, long, env = "BOILERPLATE_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a plan-file template for a Java class
    Plan {
        /// Java source file declaring the class under test
        source: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the constructors offered for testing
    List {
        /// Java source file declaring the class under test
        source: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
