//! `moodmapper`: command-line client for the MoodMapper API.
//!
//! Each subcommand is one independent interaction: collect input, make one
//! request, print the result or an error banner.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

mod api;
mod config;
mod render;

use api::{ApiClient, ClientError, LogMoodBody};

#[derive(Debug, Parser)]
#[command(name = "moodmapper", version, about = "Track your moods and uncover emotional trends.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new user
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List all users
    Users,
    /// Log a mood entry
    Log {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        user_id: i64,
        #[arg(long, value_enum)]
        mood: Mood,
        /// What triggered this mood?
        #[arg(long, default_value = "")]
        trigger_note: String,
        /// Entry date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show every mood entry of a user, newest first
    Moods {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        user_id: i64,
    },
    /// Change the mood and trigger note of an entry
    Update {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
        #[arg(long, value_enum)]
        mood: Mood,
        #[arg(long, default_value = "")]
        trigger_note: String,
    },
    /// Delete a mood entry
    Delete {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },
    /// Bar chart of entries per mood
    Summary {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        user_id: i64,
    },
    /// The five most recent entries of a user
    Recent {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        user_id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Neutral,
}

impl Mood {
    fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Neutral => "neutral",
        }
    }
}

/// Validates a user supplied date before anything is sent.
fn parse_entry_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())
}

fn describe(context: &str, err: &ClientError) -> String {
    match err {
        ClientError::Status { status, body } => format!("{context} ({status}): {body}"),
        other => format!("{context}: {other}"),
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<String, String> {
    match command {
        Command::Register { name, email } => api
            .register_user(&name, &email)
            .await
            .map(|id| render::success(&format!("User registered! ID: {id}")))
            .map_err(|e| describe("Registration failed", &e)),

        Command::Users => api
            .list_users()
            .await
            .map(|users| render::users_table(&users))
            .map_err(|e| describe("Failed to fetch users", &e)),

        Command::Log {
            user_id,
            mood,
            trigger_note,
            date,
        } => {
            let date = match date {
                Some(raw) => parse_entry_date(&raw)?,
                None => Local::now().date_naive(),
            };
            let body = LogMoodBody {
                mood: mood.as_str().to_string(),
                trigger_note,
                date: date.format("%Y-%m-%d").to_string(),
                user_id,
            };
            api.log_mood(&body)
                .await
                .map(|ack| render::success(&ack.message))
                .map_err(|e| describe("Failed to log mood", &e))
        }

        Command::Moods { user_id } => api
            .list_moods(user_id)
            .await
            .map(|moods| {
                if moods.is_empty() {
                    render::info("No mood logs found.")
                } else {
                    render::moods_table(&moods)
                }
            })
            .map_err(|e| describe("Could not fetch moods", &e)),

        Command::Update {
            id,
            mood,
            trigger_note,
        } => api
            .update_mood(id, mood.as_str(), &trigger_note)
            .await
            .map(|ack| render::success(&ack.message))
            .map_err(|e| describe("Update failed", &e)),

        Command::Delete { id } => api
            .delete_mood(id)
            .await
            .map(|ack| render::success(&ack.message))
            .map_err(|e| describe("Failed to delete mood", &e)),

        Command::Summary { user_id } => api
            .mood_summary(user_id)
            .await
            .map(|summary| {
                if summary.is_empty() {
                    render::info("No summary data.")
                } else {
                    render::bar_chart(&summary)
                }
            })
            .map_err(|e| describe("Failed to fetch summary", &e)),

        Command::Recent { user_id } => api
            .recent_moods(user_id)
            .await
            .map(|recent| {
                if recent.is_empty() {
                    render::info("No recent moods.")
                } else {
                    render::moods_table(&recent)
                }
            })
            .map_err(|e| describe("Failed to fetch recent moods", &e)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodmapper=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_url = match config::base_url_from_env() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("{}", render::failure(&e.to_string()));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(base_url = %base_url, "Using MoodMapper API");

    let api = ApiClient::new(base_url);
    match run(&api, cli.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", render::failure(&message));
            ExitCode::FAILURE
        }
    }
}
