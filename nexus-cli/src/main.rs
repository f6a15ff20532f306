use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use nexus_capture::parse_expense;
use nexus_core::classify;
use nexus_ledger::{Assistant, InsightReport, ReceiptBoard, Reply, TransactionLog};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod scan;
mod session;
mod state;

use config::Config;
use scan::{ScanEvent, Upload, scan_uploads};
use session::{Outcome, Session};

#[derive(Parser, Debug)]
#[command(name = "nexus", version, about = "Nexus finance dashboard, headless")]
struct Cli {
    /// Config file (default: ~/.nexus/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the spending category for some text
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Parse one utterance into an expense
    Parse {
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the logged transaction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan receipt files (name and size only, no OCR)
    Scan {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the receipt board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: log expenses, scan receipts, manage groups
    Chat,

    /// Build the insight report from a file of utterances (one per line)
    Insights {
        #[arg(long)]
        utterances: Option<PathBuf>,

        /// Also write the report to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;
    init_logging(&cfg);

    match cli.command {
        Command::Classify { text } => {
            println!("{}", classify(&text.join(" ")));
        }

        Command::Parse { text, json } => {
            parse_one(&text.join(" "), json)?;
        }

        Command::Scan { files, json } => {
            let uploads = files
                .iter()
                .map(|p| Upload::from_path(p))
                .collect::<Result<Vec<_>>>()?;

            let mut board = ReceiptBoard::new();
            let total = uploads.len();
            let mut completed = 0;
            scan_uploads(&mut board, uploads, &cfg.scan, |event| {
                if json {
                    return;
                }
                match event {
                    ScanEvent::Queued(entry) => println!("{}", render::receipt_row(entry)),
                    ScanEvent::Done(entry) => {
                        completed += 1;
                        println!("({completed}/{total}) {}", render::receipt_row(entry));
                    }
                }
            })
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(board.entries())?);
            } else {
                for entry in board.entries() {
                    println!("\n{}\n  {}", entry.file_name, entry.summary());
                }
            }
        }

        Command::Chat => {
            run_chat(cfg).await?;
        }

        Command::Insights { utterances, export } => {
            let log = match utterances {
                Some(p) => log_from_file(&p)?,
                None => TransactionLog::new(),
            };
            let now = Local::now().naive_local();
            let doc = InsightReport::build(&log, now.date()).render_document(now);
            print!("{doc}");

            if let Some(p) = export {
                std::fs::write(&p, &doc).with_context(|| format!("write {}", p.display()))?;
                println!("\nWrote {}", p.display());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// `NEXUS_LOG` overrides the config's filter. Library `log` records are
/// bridged into the subscriber.
fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_env("NEXUS_LOG")
        .or_else(|_| EnvFilter::try_new(&cfg.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_one(text: &str, json: bool) -> Result<()> {
    let mut log = TransactionLog::new();
    let mut assistant = Assistant::new();
    let now = Local::now().naive_local();

    let Some(reply) = assistant.process(text, &mut log, now) else {
        bail!("nothing to parse");
    };

    match reply {
        Reply::Logged { transaction_id, text } => {
            let txn = log
                .get(&transaction_id)
                .context("logged transaction missing")?;
            if json {
                println!("{}", serde_json::to_string_pretty(txn)?);
            } else {
                println!("{}", render::transaction_row(txn));
                println!("{text}");
            }
        }
        Reply::Conversational(text) => {
            if json {
                println!("null");
            } else {
                println!("No expense detected. {text}");
            }
        }
    }
    Ok(())
}

fn log_from_file(path: &Path) -> Result<TransactionLog> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let today = Local::now().date_naive();

    let mut log = TransactionLog::new();
    for (n, line) in content.lines().enumerate() {
        match parse_expense(line) {
            Some(expense) => {
                log.record(expense, today);
            }
            None if line.trim().is_empty() => {}
            None => tracing::debug!("line {}: no expense in {:?}", n + 1, line),
        }
    }
    tracing::info!("loaded {} expenses from {}", log.len(), path.display());
    Ok(log)
}

async fn run_chat(cfg: Config) -> Result<()> {
    let mut session = Session::new(cfg.scan);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("Nexus. Type /help for commands.");
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match session.handle_line(&line, Local::now().naive_local()).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Reply(text)) if text.is_empty() => {}
            Ok(Outcome::Reply(text)) => println!("{text}"),
            Err(e) => eprintln!("error: {e:#}"),
        }
    }
    Ok(())
}
