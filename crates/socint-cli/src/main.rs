use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use socint_app::Session;
use socint_core::EntityKind;

mod analyze;
mod entities;

#[derive(Debug, Parser)]
#[command(name = "socint")]
#[command(about = "Social perception analytics (terminal front end)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List entities of one kind.
    List {
        /// campaign, brand, or content
        kind: String,
        /// Case-insensitive substring over names, descriptions, authors,
        /// keywords, and tags.
        #[arg(long, default_value = "")]
        search: String,
        /// Exact status match; omit for all.
        #[arg(long)]
        status: Option<String>,
        /// Exact category match (brands only).
        #[arg(long)]
        category: Option<String>,
        /// Exact platform match (content only).
        #[arg(long)]
        platform: Option<String>,
        /// Exact content type match (content only).
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Print one entity as JSON.
    Show {
        /// campaign, brand, or content
        kind: String,
        id: String,
    },
    /// Open the analysis view for an entity and print the derived tables.
    Analyze {
        /// campaign, brand, or content
        kind: String,
        id: String,
        /// Narrow the date range (ISO date; requires --end).
        #[arg(long, requires = "end")]
        start: Option<String>,
        /// Narrow the date range (ISO date; requires --start).
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// Emit the full bundle as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },
    /// Print windowed trends over an entity's series.
    Trend {
        /// campaign, brand, or content
        kind: String,
        id: String,
        /// sentiment, mentions, or engagement; omit for all three.
        #[arg(long)]
        field: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = socint_core::load_app_config()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();

    let seed = match &config.seed_path {
        Some(path) => socint_store::load_seed(path)?,
        None => socint_store::demo(),
    };
    let mut session = Session::new(seed, config.trend_window);
    tracing::debug!(
        campaigns = session.campaigns.len(),
        brands = session.brands.len(),
        contents = session.contents.len(),
        "session seeded"
    );

    match cli.command {
        Commands::List {
            kind,
            search,
            status,
            category,
            platform,
            content_type,
        } => entities::run_list(
            &session,
            kind.parse::<EntityKind>()?,
            &entities::ListArgs {
                search,
                status,
                category,
                platform,
                content_type,
            },
        ),
        Commands::Show { kind, id } => {
            entities::run_show(&session, kind.parse::<EntityKind>()?, &id)
        }
        Commands::Analyze {
            kind,
            id,
            start,
            end,
            json,
        } => analyze::run_analyze(
            &mut session,
            kind.parse::<EntityKind>()?,
            &id,
            start.as_deref().zip(end.as_deref()),
            json,
        ),
        Commands::Trend { kind, id, field } => analyze::run_trend(
            &mut session,
            kind.parse::<EntityKind>()?,
            &id,
            field.as_deref(),
        ),
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
