mod commands;

use clap::{Parser, Subcommand};
use console::style;
use laragen_core::LaragenError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "laragen")]
#[command(about = "CRUD scaffolding for Laravel + Inertia projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Code generation (make: commands)
    Make {
        #[command(subcommand)]
        make_command: MakeCommands,
    },
}

#[derive(Subcommand)]
enum MakeCommands {
    /// Generate controller, views, and routes for a model from its migration
    Crud {
        /// Model name in singular StudlyCase (e.g. Post, BlogPost)
        model: String,

        /// Project root containing the Laravel tree
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("❌").red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), LaragenError> {
    match cli.command {
        Commands::Make { make_command } => match make_command {
            MakeCommands::Crud {
                model,
                project_root,
            } => {
                commands::crud::generate(&model, &project_root)?;
            }
        },
    }

    Ok(())
}
