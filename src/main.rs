//! auditrack CLI - interactive audit findings tracker

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use auditrack::app::App;
use auditrack::config;
use auditrack::storage::SqliteStore;
use auditrack::ui::{self, Icons};
use auditrack::Tracker;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "auditrack")]
#[command(version)]
#[command(about = "Audit findings tracker - assign findings to auditors and collect department notes")]
#[command(long_about = r#"
auditrack keeps audit findings, who they are assigned to, and auditors'
notes per department in a local SQLite database.

Example usage:
  auditrack                      # sign in and use the menu
  auditrack init --database ./data/auditors.db
  auditrack stats --format json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and open the interactive menu (default)
    Run,

    /// Create the schema and demo data if missing
    Init,

    /// Show table sizes and the finding status distribution
    Stats {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps it clear of the tables
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database_path(cli.database.as_deref(), file_config.as_ref());
    tracing::debug!("Using database {}", database.display());

    let store = SqliteStore::open(&database)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut app = App::new(Tracker::new(store));
            app.run()?;
        }

        Commands::Init => {
            let counts = store.counts()?;
            ui::success("Database ready");
            ui::status(Icons::DATABASE, "Database", &database.display().to_string());
            println!("{}", counts);
        }

        Commands::Stats { format } => {
            let tracker = Tracker::new(store);
            let counts = tracker.counts()?;
            let distribution = tracker.status_distribution()?;

            match format {
                OutputFormat::Json => {
                    let data = serde_json::json!({
                        "database": database.display().to_string(),
                        "counts": counts,
                        "status_distribution": distribution,
                    });
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                OutputFormat::Text => {
                    ui::header(Icons::STATS, &format!("auditrack Statistics ({})", database.display()));
                    println!("{}", ui::stats_table(&counts, &distribution));
                    if !distribution.is_empty() {
                        ui::section("Audit Status Distribution");
                        println!("{}", ui::render_distribution(&distribution));
                    }
                }
            }
        }
    }

    Ok(())
}
