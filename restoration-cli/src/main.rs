//! Restoration CLI - daily readings and journal from the terminal

mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use restoration_core::journal::JournalKind;
use restoration_core::reflection::ReflectionKind;
use restoration_core::{Language, Settings};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "restoration")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display language (ko, en)
    #[arg(short, long, global = true)]
    lang: Option<Language>,

    /// Directory holding journal records
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the reading for a day
    Today {
        /// Date (YYYY-MM-DD), today when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List one full reading cycle
    Schedule {
        /// Date whose day is highlighted
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the historical timeline of the era
    History,

    /// Generate a reflection on the day's reading
    Reflect {
        /// passage, meditation-guide, intention, context, evangelism-tips or prayer
        kind: ReflectionKind,

        /// Date (YYYY-MM-DD), today when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Faith diary entries
    Diary {
        #[command(subcommand)]
        action: DiaryAction,
    },

    /// Mission plans
    Mission {
        #[command(subcommand)]
        action: MissionAction,
    },
}

#[derive(Subcommand)]
enum DiaryAction {
    /// Save a diary entry
    Add {
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Repentance and gratitude
        #[arg(long, default_value = "")]
        repentance: String,

        /// Resolution and application
        #[arg(long, default_value = "")]
        resolve: String,

        /// God-given vision
        #[arg(long, default_value = "")]
        dream: String,
    },

    /// List the entries saved for a day
    List {
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the days that have entries
    Dates,
}

#[derive(Subcommand)]
enum MissionAction {
    /// Save a mission plan
    Add {
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// The plan text
        plan: String,
    },

    /// List the plans saved for a day
    List {
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the days that have plans
    Dates,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "restoration_cli=debug,restoration_core=debug"
    } else {
        "restoration_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = Settings::client_from_env().context("Invalid configuration")?;
    if let Some(language) = cli.lang {
        settings.language = language;
    }
    if let Some(data_dir) = cli.data_dir {
        settings.data_path = data_dir;
    }
    let ctx = commands::Context::new(settings);

    match cli.command {
        Commands::Today { date, json } => commands::today(&ctx, date, json),

        Commands::Schedule { date, json } => commands::schedule(&ctx, date, json),

        Commands::History => commands::history(&ctx),

        Commands::Reflect { kind, date } => commands::reflect(&ctx, kind, date).await,

        Commands::Diary { action } => match action {
            DiaryAction::Add {
                date,
                repentance,
                resolve,
                dream,
            } => commands::diary_add(&ctx, date, repentance, resolve, dream).await,
            DiaryAction::List { date, json } => commands::diary_list(&ctx, date, json).await,
            DiaryAction::Dates => commands::journal_dates(&ctx, JournalKind::Diary).await,
        },

        Commands::Mission { action } => match action {
            MissionAction::Add { date, plan } => commands::mission_add(&ctx, date, plan).await,
            MissionAction::List { date, json } => commands::mission_list(&ctx, date, json).await,
            MissionAction::Dates => commands::journal_dates(&ctx, JournalKind::Mission).await,
        },
    }
}
