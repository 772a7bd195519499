//! Recipebook CLI
//!
//! Command-line front end for the recipe journal

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use recipebook_core::logging_facility::{self, Profile};
use recipebook_core::ExError;
use recipebook_store::{RecipeStore, DEFAULT_DB_FILE};

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "recipebook")]
#[command(about = "Recipebook - a personal recipe journal", long_about = None)]
struct Cli {
    /// Journal database file
    #[arg(long, global = true, env = "RECIPEBOOK_DB", default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Write logs to stderr in this format (silent when omitted)
    #[arg(long, global = true, env = "RECIPEBOOK_LOG", value_enum)]
    log: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the saved name
    Whoami,
    /// Save your name (first run only)
    Register(commands::identity::RegisterArgs),
    /// Add a new recipe
    Add(commands::recipe::AddArgs),
    /// List your saved recipes, newest first
    List(commands::recipe::ListArgs),
    /// Show one recipe, optionally exporting its image
    Show(commands::recipe::ShowArgs),
    /// Delete a recipe
    Delete(commands::recipe::DeleteArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(format) = cli.log {
        logging_facility::init(format.profile());
    }

    if let Err(e) = run(cli) {
        std::process::exit(report(e.as_ref()));
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecipeStore::open(&cli.db)?;

    let result = match cli.command {
        Commands::Whoami => commands::identity::execute_whoami(&store),
        Commands::Register(args) => commands::identity::execute_register(args, &store),
        Commands::Add(args) => commands::recipe::execute_add(args, &store),
        Commands::List(args) => commands::recipe::execute_list(args, &store),
        Commands::Show(args) => commands::recipe::execute_show(args, &store),
        Commands::Delete(args) => commands::recipe::execute_delete(args, &store),
    };

    first_error(result, store.close())
}

/// The command's own error wins over a failure to close the store
fn first_error(
    result: Result<(), Box<dyn std::error::Error>>,
    closed: recipebook_store::Result<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    result?;
    closed?;
    Ok(())
}

/// Print the error and pick the exit status: 2 for input the user can fix,
/// 1 for everything else
fn report(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<ExError>() {
        Some(ex) if ex.kind().is_user_recoverable() => {
            let message = if ex.message().is_empty() {
                ex.to_string()
            } else {
                ex.message().to_string()
            };
            eprintln!("Warning: {}", message);
            2
        }
        _ => {
            eprintln!("Error: {}", err);
            1
        }
    }
}
