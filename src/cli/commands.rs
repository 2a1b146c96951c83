use std::path::PathBuf;

use anyhow::{Result, bail};
use chrono::DateTime;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::clipboard::copy_to_clipboard;
use crate::history::{HistoryStore, MAX_HISTORY};
use crate::link::{build_chat_url, sanitize_digits};
use crate::models::Tone;
use crate::refiner::MessageRefiner;
use crate::storage::FileStore;

const MIN_PHONE_DIGITS: usize = 5;
const DEFAULT_COUNTRY_CODE: &str = "+971";

#[derive(Parser)]
#[command(name = "wa-direct")]
#[command(version = "0.1.0")]
#[command(about = "Compose WhatsApp chat links with AI-polished messages", long_about = None)]
pub struct Cli {
    /// Directory for persisted state (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a wa.me chat link and record the contact
    Chat(ChatArgs),
    /// Rewrite a message draft in a given tone
    Refine(RefineArgs),
    /// Inspect or edit the recent contact list
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Args)]
pub struct ChatArgs {
    /// Country dial code, e.g. +971
    #[arg(long, default_value = DEFAULT_COUNTRY_CODE)]
    pub code: String,

    /// Local phone number; spaces and punctuation are dropped
    #[arg(long)]
    pub number: String,

    /// Message to pre-fill in the chat
    #[arg(long)]
    pub message: Option<String>,

    /// Rewrite the message in this tone before building the link
    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    /// Copy the resulting link to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Args)]
pub struct RefineArgs {
    /// The draft message to rewrite
    #[arg(long)]
    pub message: String,

    /// Target tone for the rewrite
    #[arg(long, value_enum, default_value_t = Tone::Professional)]
    pub tone: Tone,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show recent contacts, newest first
    List,
    /// Remove one contact by id
    Delete {
        /// Id shown by `history list`
        id: String,
    },
    /// Remove all recent contacts
    Clear,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chat(args)) => start_chat(cli.data_dir, args).await,
        Some(Commands::Refine(args)) => refine_draft(args).await,
        Some(Commands::History { command }) => manage_history(cli.data_dir, command),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_history(data_dir: Option<PathBuf>) -> Result<HistoryStore<FileStore>> {
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default()?,
    };
    Ok(HistoryStore::load(store))
}

async fn start_chat(data_dir: Option<PathBuf>, args: ChatArgs) -> Result<()> {
    let number = sanitize_digits(&args.number);
    if number.len() < MIN_PHONE_DIGITS {
        bail!("Please enter a valid phone number (at least {MIN_PHONE_DIGITS} digits)");
    }
    validate_country_code(&args.code)?;

    let message = args.message.filter(|m| !m.trim().is_empty());
    if args.tone.is_some() && message.is_none() {
        bail!("Please type a rough draft first");
    }

    let message = match (message, args.tone) {
        (Some(draft), Some(tone)) => Some(MessageRefiner::from_env().refine(&draft, tone).await),
        (message, _) => message,
    };

    let mut history = open_history(data_dir)?;
    history.insert(&number, &args.code, message.clone());

    let url = build_chat_url(&args.code, &number, message.as_deref());
    println!("{url}");

    if args.copy {
        match copy_to_clipboard(&url) {
            Ok(()) => println!("Link copied to clipboard"),
            // The link is already printed, so a dead clipboard only costs
            // the convenience.
            Err(e) => warn!("Could not copy link to clipboard: {e:#}"),
        }
    }

    Ok(())
}

async fn refine_draft(args: RefineArgs) -> Result<()> {
    let draft = args.message.trim();
    if draft.is_empty() {
        bail!("Please type a rough draft first");
    }

    let refined = MessageRefiner::from_env().refine(draft, args.tone).await;
    println!("{refined}");

    Ok(())
}

fn manage_history(data_dir: Option<PathBuf>, command: HistoryCommands) -> Result<()> {
    let mut history = open_history(data_dir)?;

    match command {
        HistoryCommands::List => list_history(&history),
        HistoryCommands::Delete { id } => {
            if !history.entries().iter().any(|record| record.id == id) {
                println!("No history entry with id {id}");
                return Ok(());
            }
            history.delete_by_id(&id);
            println!("Deleted 1 entry ({} remaining)", history.entries().len());
        }
        HistoryCommands::Clear => {
            history.clear_all();
            println!("History cleared");
        }
    }

    Ok(())
}

fn list_history(history: &HistoryStore<FileStore>) {
    let entries = history.entries();
    if entries.is_empty() {
        println!("No recent chats");
        return;
    }

    println!("Recent chats ({} of {})", entries.len(), MAX_HISTORY);
    for record in entries {
        let when = DateTime::from_timestamp_millis(record.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown time".to_string());

        println!("{}  {}  {} {}", record.id, when, record.country_code, record.phone_number);
        if let Some(note) = &record.note {
            println!("    note: {note}");
        }
        println!(
            "    {}",
            build_chat_url(&record.country_code, &record.phone_number, record.note.as_deref())
        );
    }
}

fn validate_country_code(code: &str) -> Result<()> {
    let Some(digits) = code.strip_prefix('+') else {
        bail!("Country code must start with '+', e.g. +971");
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        bail!("Country code must be '+' followed by digits, e.g. +971");
    }
    Ok(())
}
