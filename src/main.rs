use anyhow::Result;
use boilerplate::cli::{parse_args, Commands};
use boilerplate::commands::{self, GenerateConfig};
use boilerplate::observability::init_tracing;

fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Generate {
            source,
            plan,
            all,
            dry_run,
            skip_classpath_check,
            config,
        } => {
            let options = GenerateConfig {
                source,
                plan,
                all,
                dry_run,
                skip_classpath_check,
                config,
            };
            // Every outcome, including a cancelled plan, is a clean exit
            commands::handle_generate(options)?;
        }
        Commands::Plan { source, output } => {
            commands::write_plan_template(&source, output.as_deref())?;
        }
        Commands::List { source, format } => {
            commands::list_constructors(&source, format)?;
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
        }
    }
    Ok(())
}
