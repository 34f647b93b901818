mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use passage_archive_core::{env_config::ENV_DB_PATH, env_non_empty, Category};
use passage_archive_service::RegistrationService;
use passage_archive_storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "passage-archive")]
#[command(about = "Archive English reading passages by exam, textbook or source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API behind the entry form
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Register one passage
    Add(AddArgs),
    /// Print stored records as JSON, latest last
    List {
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Print stored supplement textbook names
    Textbooks,
    /// Print the units stored for a textbook
    Units { textbook: String },
    /// Connection test: open the archive and count its rows
    Check,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// mock-exam, supplement or external
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,
    /// Mock exam grade: 1, 2, 3 or Grade1..Grade3
    #[arg(long, default_value = "")]
    pub grade: String,
    /// Mock exam year: 25, 25년 or 2025
    #[arg(long, default_value = "")]
    pub year: String,
    /// Mock exam month: one of 03 04 06 07 09 10 11
    #[arg(long, default_value = "")]
    pub month: String,
    #[arg(long, default_value = "")]
    pub textbook: String,
    /// Register under a textbook not stored yet
    #[arg(long)]
    pub new_textbook: bool,
    #[arg(long, default_value = "")]
    pub unit: String,
    /// Register under a unit not stored for the textbook yet
    #[arg(long)]
    pub add_unit: bool,
    #[arg(short, long, default_value = "")]
    pub item_number: String,
    /// External passage source
    #[arg(long, default_value = "")]
    pub source: String,
    #[arg(long, conflicts_with = "passage_file")]
    pub passage: Option<String>,
    /// Read the passage text from a file
    #[arg(long)]
    pub passage_file: Option<PathBuf>,
    /// Join wrapped lines and break paragraphs after each sentence
    #[arg(long)]
    pub clean: bool,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse().map_err(|e: passage_archive_core::ClassifyError| e.to_string())
}

pub(crate) fn get_db_path() -> PathBuf {
    env_non_empty(ENV_DB_PATH).map_or_else(
        || {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("passage-archive")
                .join("archive.db")
        },
        PathBuf::from,
    )
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Open the archive at the configured path.
pub(crate) fn open_storage() -> Result<Storage> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(Storage::new(&db_path)?)
}

pub(crate) fn open_service() -> Result<RegistrationService> {
    let storage = open_storage()?;
    Ok(RegistrationService::with_system_clock(Arc::new(storage)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Add(args) => commands::add::run(args).await?,
        Commands::List { category, limit } => commands::query::run_list(category, limit).await?,
        Commands::Textbooks => commands::query::run_textbooks().await?,
        Commands::Units { textbook } => commands::query::run_units(&textbook).await?,
        Commands::Check => commands::check::run().await?,
    }

    Ok(())
}
