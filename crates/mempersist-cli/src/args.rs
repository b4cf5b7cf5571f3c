use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mem-persist")]
#[command(about = "Save Claude Code conversation threads to Nowledge Mem", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Save the current session to Nowledge Mem")]
    Save {
        #[arg(
            short,
            long,
            help = "Custom thread title (auto-generated if not provided)"
        )]
        title: Option<String>,

        #[arg(
            short = 'p',
            long,
            help = "Project directory path (default: current directory)"
        )]
        project_path: Option<String>,

        #[arg(long, help = "Show verbose pipeline diagnostics")]
        debug: bool,
    },

    #[command(about = "Run connectivity, auth, and filesystem checks")]
    Diagnose {
        #[arg(
            short = 'p',
            long,
            help = "Project directory path (default: current directory)"
        )]
        project_path: Option<String>,
    },
}
