use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Save {
            title,
            project_path,
            debug,
        } => handlers::save::handle(title.as_deref(), project_path.as_deref(), debug),

        Commands::Diagnose { project_path } => handlers::diagnose::handle(project_path.as_deref()),
    }
}
