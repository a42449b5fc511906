//! ReportMitra - command-line client

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reportmitra::{
    api::ApiClient,
    config::{Config, UploadConfig},
    models::{CreateReportInput, ReactionKind, RegisterInput, Report},
    services::{CommunityFeed, ReactionTracker, ReportService, SessionService},
    storage::FileTokenStore,
};

#[derive(Parser)]
#[command(name = "reportmitra")]
#[command(version)]
#[command(about = "Report and follow civic issues from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, default_value = "config.yml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login { email: String, password: String },

    /// Create an account
    Register {
        email: String,
        password: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },

    /// Email a one-time sign-in code
    RequestOtp { email: String },

    /// Sign in with a one-time code
    VerifyOtp { email: String, otp: String },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Link your Aadhaar number; required before submitting reports
    VerifyAadhaar { aadhaar_number: String },

    /// Submit a new report
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        department: Option<String>,
        /// Photo to attach (jpg, png, gif, webp)
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Look up a report by tracking ID
    Track { tracking_id: String },

    /// Show the on-chain audit trail of a report
    Blockchain { tracking_id: String },

    /// List your reports
    History,

    /// Browse resolved community reports
    Feed {
        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Like a report (again to undo)
    Like { report_id: i64 },

    /// Dislike a report (again to undo)
    Dislike { report_id: i64 },

    /// Show comments on a report
    Comments { report_id: i64 },

    /// Comment on a report
    Comment { report_id: i64, text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reportmitra=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load_with_env(&cli.config)?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let tokens = FileTokenStore::boxed(&config.storage.token_path);
    let client = Arc::new(ApiClient::new(&config.api, tokens)?);
    let session = SessionService::new(client.clone());
    let reports = ReportService::new(client.clone(), config.upload.clone());

    match cli.command {
        Commands::Login { email, password } => {
            let user = session.login(&email, &password).await?;
            println!("Signed in as {}", user.display_name());
        }
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            let mut input = RegisterInput::new(email, password.clone(), password);
            input.first_name = first_name;
            input.last_name = last_name;
            let user = session.register(&input).await?;
            println!("Welcome, {}", user.display_name());
        }
        Commands::RequestOtp { email } => {
            println!("{}", session.request_otp(&email).await?);
        }
        Commands::VerifyOtp { email, otp } => {
            let user = session.verify_otp(&email, &otp).await?;
            println!("Signed in as {}", user.display_name());
        }
        Commands::Logout => {
            session.logout().await?;
            println!("Signed out");
        }
        Commands::Whoami => {
            if !session.restore().await? {
                anyhow::bail!("Not signed in");
            }
            match session.current_user().await {
                Some(user) => println!("{} <{}>", user.display_name(), user.email),
                None => println!("Signed in (profile unavailable)"),
            }
        }
        Commands::VerifyAadhaar { aadhaar_number } => {
            let profile = session.verify_aadhaar(&aadhaar_number).await?;
            let name = profile
                .aadhaar
                .and_then(|aadhaar| aadhaar.full_name)
                .unwrap_or_else(|| "citizen".to_string());
            println!("Aadhaar verified for {}", name);
        }
        Commands::Submit {
            title,
            location,
            description,
            department,
            image,
        } => {
            let mut input = CreateReportInput::new(title, location, description);
            input.department = department;
            let report = match image {
                Some(path) => {
                    let (bytes, content_type) = read_image(&path).await?;
                    reports.submit_with_image(input, bytes, content_type).await?
                }
                None => reports.submit(&input).await?,
            };
            println!(
                "Submitted report #{} (tracking ID: {})",
                report.id,
                report.tracking_id.as_deref().unwrap_or("pending")
            );
        }
        Commands::Track { tracking_id } => {
            let report = reports.track(&tracking_id).await?;
            print_report(&report);
            if let Some(ref department) = report.department {
                println!("    Department: {}", department);
            }
            if let Some(ref allocated) = report.allocated_to {
                println!("    Assigned to: {}", allocated);
            }
        }
        Commands::Blockchain { tracking_id } => {
            let status = reports.blockchain_status(&tracking_id).await?;
            println!(
                "{}: {}{}",
                status.tracking_id,
                if status.blockchain_verified { "verified on chain" } else { "not yet anchored" },
                if status.sla_escalated { ", escalated" } else { "" }
            );
            if let Some(sla) = status.sla_status {
                println!(
                    "    SLA: {} days elapsed, {} remaining{}",
                    sla.days_elapsed,
                    sla.days_remaining,
                    if sla.within_sla { "" } else { " (breached)" }
                );
            }
            for event in status.events() {
                println!(
                    "    {:<20} {}",
                    event.event_type,
                    event.tx_hash.as_deref().unwrap_or("-")
                );
            }
            for evidence in status.evidence() {
                let mark = if evidence.verified { "ok" } else { "unverified" };
                println!("    evidence {} [{}] {}", evidence.file_name, mark, evidence.file_hash);
            }
        }
        Commands::History => {
            let history = reports.history().await?;
            if history.is_empty() {
                println!("No reports yet");
            }
            history.iter().for_each(print_report);
        }
        Commands::Feed { pages } => {
            let tracker = Arc::new(ReactionTracker::new(client.clone()));
            let mut feed = CommunityFeed::with_reactions(client.clone(), tracker.clone());
            feed.load_initial().await?;
            for _ in 1..pages {
                if !feed.has_more() {
                    break;
                }
                feed.load_more().await?;
            }
            for report in feed.reports() {
                print_report(report);
                if let Some(state) = tracker.state(report.id).await {
                    println!(
                        "    {} likes, {} dislikes, {} comments",
                        state.likes,
                        state.dislikes,
                        report.comments_count.unwrap_or(0)
                    );
                }
            }
        }
        Commands::Like { report_id } => react(&client, report_id, ReactionKind::Like).await?,
        Commands::Dislike { report_id } => react(&client, report_id, ReactionKind::Dislike).await?,
        Commands::Comments { report_id } => {
            let comments = reports.comments(report_id).await?;
            if comments.is_empty() {
                println!("No comments yet");
            }
            for comment in comments {
                println!("{}: {}", comment.display_name(), comment.text);
            }
        }
        Commands::Comment { report_id, text } => {
            let comment = reports.post_comment(report_id, &text).await?;
            println!("Posted comment #{}", comment.id);
        }
    }

    Ok(())
}

async fn react(client: &Arc<ApiClient>, report_id: i64, kind: ReactionKind) -> Result<()> {
    let tracker = ReactionTracker::new(client.clone());
    let state = tracker.toggle(report_id, kind).await?;
    println!(
        "Report #{}: {} likes, {} dislikes{}",
        report_id,
        state.likes,
        state.dislikes,
        match (state.liked, state.disliked) {
            (true, _) => " (you liked this)",
            (_, true) => " (you disliked this)",
            _ => "",
        }
    );
    Ok(())
}

async fn read_image(path: &Path) -> Result<(Vec<u8>, &'static str)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let content_type = UploadConfig::mime_for_extension(&extension)
        .with_context(|| format!("Unsupported image type: {}", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok((bytes, content_type))
}

fn print_report(report: &Report) {
    let date = report
        .created_at()
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default();
    println!(
        "#{} [{}] {} - {} {}",
        report.id,
        report.status_label(),
        report.issue_title,
        report.location,
        date
    );
}
