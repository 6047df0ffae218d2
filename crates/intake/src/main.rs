use anyhow::Context;
use clap::{Parser, Subcommand};
use intake::{Intake, config::Config};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

/// Intake - client intake form storage
#[derive(Debug, Parser)]
#[command(name = "intake", version = intake::VERSION)]
#[command(about = "Store client intake submissions in SQLite or a document table", long_about = None)]
struct Cli {
    /// Path to the TOML config
    #[arg(short, long, default_value = "intake.toml", env = "INTAKE_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the configured table and print its definition
    Init,

    /// Store one submission read from a JSON file (`-` for stdin)
    Submit { file: PathBuf },

    /// Print the form layout as JSON
    Form,

    /// Print every stored record as JSON lines
    Dump,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_submission(file: &Path) -> anyhow::Result<serde_json::Value> {
    let text = if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("reading stdin")?
    } else {
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?
    };

    serde_json::from_str(&text).context("submission is not valid JSON")
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let mut intake = Intake::open(&config)?;

    match cli.command {
        Command::Init => println!("{}", intake.storage_definition()?),
        Command::Submit { file } => {
            let json = read_submission(&file)?;
            let receipt = intake.submit_json(&json)?;
            println!("{}", serde_json::to_string(&receipt)?);
        }
        Command::Form => println!("{}", serde_json::to_string_pretty(&intake.form())?),
        Command::Dump => {
            for record in intake.records()? {
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    }

    Ok(())
}
