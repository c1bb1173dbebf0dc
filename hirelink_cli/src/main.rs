//! Terminal client for the Hirelink job-matching API.
//!
//! This is the presentation layer: it composes SDK calls and renders
//! loading/success/error outcomes as text. Failed calls print the
//! normalized error's display message and exit non-zero.

use clap::{Parser, Subcommand};
use tracing::debug;

use hirelink_client::models::{
    format_timestamp, ContactMessage, LoginRequest, NewFeatureSuggestion,
};
use hirelink_client::services::{auth, chat, contact, features, jobs, matching};
use hirelink_client::{ApiClient, ClientConfig, ClientError, SessionStore};

#[derive(Parser)]
#[command(name = "hirelink")]
#[command(about = "Hirelink job-matching platform client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Job postings
    Jobs {
        #[command(subcommand)]
        action: JobsAction,
    },
    /// List candidate/job matches
    Matches,
    /// Ask the assistant
    Chat { message: Vec<String> },
    /// Submit a feature suggestion
    Suggest {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        message: Vec<String>,
    },
}

#[derive(Subcommand)]
enum JobsAction {
    /// List all job postings
    List,
    /// Show one job posting
    Show { id: String },
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hirelink=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", render_error(&err));
        std::process::exit(1);
    }
}

/// Collapse an SDK failure to the text a user sees. Structured detail
/// (status code, error tag) is dropped only here, at the last boundary.
fn render_error(err: &ClientError) -> String {
    match err.api() {
        Some(api) => api.display_message(),
        None => err.to_string(),
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let session = SessionStore::open_default();
    let config = ClientConfig::from_env();
    debug!("API base URL: {}", config.base_url);
    let client = ApiClient::new(config, session.clone())?;

    match cli.command {
        Command::Login { email, password } => {
            let auth = auth::login(&client, &LoginRequest { email, password }).await?;
            session.set(auth.user.clone(), auth.token)?;
            println!("Signed in as {} <{}>", auth.user.name, auth.user.email);
        }
        Command::Logout => {
            session.clear()?;
            println!("Signed out");
        }
        Command::Whoami => match session.get() {
            Some(s) => println!("{} <{}> ({:?})", s.user.name, s.user.email, s.user.role),
            None => println!("Not signed in"),
        },
        Command::Jobs { action } => match action {
            JobsAction::List => {
                let listing = jobs::list(&client).await?;
                if listing.is_empty() {
                    println!("No jobs found");
                }
                for job in listing {
                    println!(
                        "{}  {}  {}",
                        job.id,
                        job.title,
                        format_timestamp(job.created_at.as_ref())
                    );
                }
            }
            JobsAction::Show { id } => {
                let job = jobs::get(&client, &id).await?;
                println!("{}", job.title);
                if let Some(company) = &job.company {
                    println!("Company:  {company}");
                }
                if let Some(location) = &job.location {
                    println!("Location: {location}");
                }
                if !job.skills.is_empty() {
                    println!("Skills:   {}", job.skills.join(", "));
                }
                println!();
                println!("{}", job.description);
            }
        },
        Command::Matches => {
            for m in matching::list(&client).await? {
                let score = m
                    .score
                    .map(|s| format!("{:.0}%", s * 100.0))
                    .unwrap_or_else(|| "-".into());
                println!(
                    "{}  job={}  score={}  {}",
                    m.id,
                    m.job,
                    score,
                    m.status.as_deref().unwrap_or("")
                );
            }
        }
        Command::Chat { message } => {
            let reply = chat::send(&client, &message.join(" ")).await?;
            println!("{}", reply.reply);
        }
        Command::Suggest { title, description } => {
            let suggestion = features::suggest(
                &client,
                &NewFeatureSuggestion { title, description },
            )
            .await?;
            println!("Suggestion recorded: {}", suggestion.id);
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let ack = contact::send(
                &client,
                &ContactMessage {
                    name,
                    email,
                    message: message.join(" "),
                },
            )
            .await?;
            println!(
                "{}",
                ack.message.as_deref().unwrap_or("Message sent")
            );
        }
    }

    Ok(())
}
