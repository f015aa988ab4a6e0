use anyhow::{Context, Result};
use bankimport_core::Statement;
use bankimport_ingest::{detect_format, ImportError, Institution};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "bankimport",
    version,
    about = "Convert bank statement exports into normalized transactions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report which export layout a file uses
    Detect {
        file: PathBuf,
    },

    /// Import a statement export and print its transactions
    Import {
        file: PathBuf,

        /// Institution that produced the export
        #[arg(long, default_value = "hapoalim")]
        institution: Institution,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,

        /// Config file (defaults to ~/.bankimport/config.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage ~/.bankimport/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config (keyword table, currency) if none exists
    Init,
    /// Print the effective config
    Show {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Detect { file } => {
            let format = detect_format(&file).ok_or_else(|| ImportError::unsupported(&file))?;
            println!("{} (version {})", format, format.index());
        }

        Command::Import {
            file,
            institution,
            output,
            config,
        } => {
            let cfg = config::load_config(config.as_deref())?;
            let importer = cfg.importer()?;
            let stmt = institution
                .import(&file, &importer)
                .with_context(|| format!("importing {}", file.display()))?;

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stmt)?);
                }
                OutputFormat::Text => print_statement(&file, &stmt),
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show { config } => {
                let cfg = config::load_config(config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn print_statement(file: &Path, stmt: &Statement) {
    println!("Parsed {} transactions from {}", stmt.len(), file.display());
    if let (Some(start), Some(end)) = (stmt.start_date(), stmt.end_date()) {
        println!("Period: {} .. {}", start, end);
    }
    println!();

    for t in &stmt.transactions {
        let balance = t.balance.map(|b| b.to_string()).unwrap_or_default();
        let side = if t.is_debit() { "DR" } else { "CR" };
        print!(
            "{} | {:<5} | {} {:>12} {} | {:>12} | {}",
            t.date,
            t.kind.as_str(),
            side,
            t.amount.abs(),
            stmt.currency,
            balance,
            t.description
        );
        match &t.memo {
            Some(memo) => println!(" ({})", memo),
            None => println!(),
        }
    }

    println!("\nNet: {} {}", stmt.total(), stmt.currency);
    if let Some(balance) = stmt.end_balance() {
        println!("Closing balance: {} {}", balance, stmt.currency);
    }
}
