use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::Instrument;

use crate::api::{parse_engagement_id, EngagementApi, EngagementForm, RestTransport};
use crate::config::config;
use crate::events::{AppEvent, Dispatch, Notification, Severity};
use crate::session::{FormSession, Navigator, Route, SessionState};
use crate::telemetry::{create_session_span, generate_correlation_id};

#[derive(Parser)]
#[command(name = "engagement-console")]
#[command(about = "Administrative console for public engagement records")]
#[command(
    long_about = "Manage engagement records against a remote engagement API: \
                  list the collection, inspect a single record, and run the \
                  create/update workflow from the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every engagement known to the API
    List,
    /// Show a single engagement by id
    Show {
        /// Engagement id (positive number)
        id: String,
    },
    /// Create a new engagement
    Create {
        /// Engagement name
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Update an existing engagement
    Update {
        /// Engagement id (positive number)
        id: String,
        /// Engagement name
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Optional form fields shared by create and update.
#[derive(Args)]
pub struct FieldArgs {
    /// Plain-text description
    #[arg(long)]
    pub description: Option<String>,
    /// Rich-text description
    #[arg(long)]
    pub rich_description: Option<String>,
    /// Plain-text content
    #[arg(long)]
    pub content: Option<String>,
    /// Rich-text content
    #[arg(long)]
    pub rich_content: Option<String>,
    /// Status identifier
    #[arg(long)]
    pub status_id: Option<u32>,
    /// First day of the engagement (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: Option<NaiveDate>,
    /// Last day of the engagement (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: Option<NaiveDate>,
}

impl FieldArgs {
    fn apply(self, form: &mut EngagementForm) {
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(rich_description) = self.rich_description {
            form.rich_description = rich_description;
        }
        if let Some(content) = self.content {
            form.content = content;
        }
        if let Some(rich_content) = self.rich_content {
            form.rich_content = rich_content;
        }
        if let Some(status_id) = self.status_id {
            form.status_id = status_id;
        }
        if let Some(from_date) = self.from_date {
            form.from_date = Some(from_date);
        }
        if let Some(to_date) = self.to_date {
            form.to_date = Some(to_date);
        }
    }
}

/// Renders navigation requests to the terminal instead of a browser.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        println!("➡️  {}", route.path());
    }
}

/// Renders dispatched events to the terminal.
struct ConsoleDispatch;

impl Dispatch for ConsoleDispatch {
    fn dispatch(&self, event: AppEvent) {
        match event {
            AppEvent::Notification(Notification {
                severity, text, ..
            }) => match severity {
                Severity::Success => println!("✅ {text}"),
                Severity::Error => println!("❌ {text}"),
            },
            AppEvent::EngagementsLoaded(engagements) => {
                tracing::debug!(count = engagements.len(), "engagement store updated");
            }
        }
    }
}

fn engagement_api() -> Result<EngagementApi<RestTransport>> {
    let config = config()?;
    Ok(EngagementApi::new(RestTransport::new(
        config.api.url.clone(),
    )))
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => list_command().await,
        Commands::Show { id } => show_command(&id).await,
        Commands::Create { name, fields } => create_command(name, fields).await,
        Commands::Update { id, name, fields } => update_command(&id, name, fields).await,
    }
}

async fn list_command() -> Result<()> {
    let api = engagement_api()?;
    let engagements = api
        .fetch_all(&ConsoleDispatch)
        .await
        .map_err(|e| anyhow::anyhow!(e.message()))?;

    if engagements.is_empty() {
        println!("No engagements found.");
        return Ok(());
    }
    for engagement in engagements {
        println!(
            "📋 #{} {} ({})",
            engagement.id, engagement.name, engagement.status.status_name
        );
    }
    Ok(())
}

async fn show_command(raw_id: &str) -> Result<()> {
    let api = engagement_api()?;
    let id = parse_engagement_id(raw_id).map_err(|e| anyhow::anyhow!(e.message()))?;
    let engagement = api
        .fetch_one(id)
        .await
        .map_err(|e| anyhow::anyhow!(e.message()))?;

    println!("📋 #{} {}", engagement.id, engagement.name);
    println!("   status:      {}", engagement.status.status_name);
    println!("   description: {}", engagement.description);
    if let (Some(from), Some(to)) = (engagement.start_date, engagement.end_date) {
        println!("   window:      {from} to {to}");
    }
    if let Some(published) = engagement.published_date {
        println!("   published:   {published}");
    }
    Ok(())
}

async fn create_command(name: String, fields: FieldArgs) -> Result<()> {
    let correlation_id = generate_correlation_id();
    let span = create_session_span("create", None, &correlation_id);

    async {
        let mut form = EngagementForm {
            name,
            ..Default::default()
        };
        fields.apply(&mut form);

        let mut session = FormSession::new(engagement_api()?, ConsoleNavigator, ConsoleDispatch);
        session.mount("create").await;
        session.submit(form).await;

        if session.state() == SessionState::Redirected {
            Ok(())
        } else {
            Err(anyhow::anyhow!("engagement was not created"))
        }
    }
    .instrument(span)
    .await
}

async fn update_command(raw_id: &str, name: Option<String>, fields: FieldArgs) -> Result<()> {
    let correlation_id = generate_correlation_id();
    let id = parse_engagement_id(raw_id).map_err(|e| anyhow::anyhow!(e.message()))?;
    let span = create_session_span("update", Some(id), &correlation_id);

    async {
        let mut session = FormSession::new(engagement_api()?, ConsoleNavigator, ConsoleDispatch);
        session.mount(raw_id).await;
        if session.state() != SessionState::Ready {
            return Err(anyhow::anyhow!("engagement {id} could not be loaded"));
        }

        // Start from the saved record so unspecified fields keep their values.
        let mut form = EngagementForm::from_engagement(session.saved_engagement());
        if let Some(name) = name {
            form.name = name;
        }
        fields.apply(&mut form);

        session.submit(form).await;

        if session.state() == SessionState::Redirected {
            Ok(())
        } else {
            Err(anyhow::anyhow!("engagement {id} was not updated"))
        }
    }
    .instrument(span)
    .await
}
