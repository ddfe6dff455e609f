//! Terminal driver for the vendor-scout pipeline: run a discovery or send a
//! single outreach email without going through the HTTP API.

use anyhow::Context;
use clap::{Parser, Subcommand};

use sojourn_contact::ContactFinder;
use sojourn_core::AppConfig;
use sojourn_outreach::{compose, ComposeParams, MailerClient};
use sojourn_pipeline::{ScoutRequest, ScoutService};
use sojourn_places::PlacesClient;
use sojourn_relevance::ScoringClient;

#[derive(Debug, Parser)]
#[command(name = "sojourn-cli")]
#[command(about = "Sojourn vendor scout command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one vendor discovery and print the ranked result.
    Scout {
        #[arg(long)]
        location: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Compose, send, and log one outreach email.
    Outreach {
        #[arg(long)]
        vendor_email: String,
        #[arg(long)]
        vendor_name: String,
        #[arg(long)]
        vendor_category: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        guide_user_id: String,
        #[arg(long)]
        retreat_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = sojourn_core::load_app_config()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Scout {
            location,
            category,
            description,
        } => run_scout(&config, location, category, description).await,
        Commands::Outreach {
            vendor_email,
            vendor_name,
            vendor_category,
            location,
            guide_user_id,
            retreat_id,
        } => {
            run_outreach(
                &config,
                vendor_email,
                vendor_name,
                vendor_category,
                location,
                guide_user_id,
                retreat_id,
            )
            .await
        }
    }
}

async fn run_scout(
    config: &AppConfig,
    location: String,
    category: String,
    description: Option<String>,
) -> anyhow::Result<()> {
    let places_key = config
        .places_api_key
        .as_deref()
        .context("GOOGLE_PLACES_API_KEY is not set")?;
    let scoring_key = config
        .scoring_api_key
        .as_deref()
        .context("OPENAI_API_KEY is not set")?;

    let places = PlacesClient::new(places_key, config.http_timeout_secs)?;
    let contact = ContactFinder::new(config.probe_timeout_secs, &config.contact_user_agent)?;
    let scoring = match &config.scoring_base_url {
        Some(base) => ScoringClient::with_base_url(
            scoring_key,
            &config.scoring_model,
            config.scoring_timeout_secs,
            base,
        )?,
        None => ScoringClient::new(scoring_key, &config.scoring_model, config.scoring_timeout_secs)?,
    };
    let service = ScoutService::new(places, contact, scoring, config.detail_concurrency);

    let result = service
        .run(&ScoutRequest {
            location,
            category,
            retreat_description: description,
        })
        .await?;

    println!("{}\n", result.search_summary);
    for (rank, vendor) in result.vendors.iter().enumerate() {
        println!(
            "{}. {} — {}/100",
            rank + 1,
            vendor.name,
            vendor.relevance_score
        );
        let mut contact_line = vendor.email.clone();
        if let Some(phone) = &vendor.phone {
            contact_line.push_str(&format!(" | {phone}"));
        }
        if let Some(website) = &vendor.website {
            contact_line.push_str(&format!(" | {website}"));
        }
        println!("   {contact_line}");
        println!("   {}\n", vendor.relevance_reason);
    }

    Ok(())
}

async fn run_outreach(
    config: &AppConfig,
    vendor_email: String,
    vendor_name: String,
    vendor_category: String,
    location: String,
    guide_user_id: String,
    retreat_id: Option<String>,
) -> anyhow::Result<()> {
    let mailer_key = config
        .mailer_api_key
        .as_deref()
        .context("RESEND_API_KEY is not set")?;
    let mailer = MailerClient::new(mailer_key, &config.outreach_from, config.mailer_timeout_secs)?;

    let message = compose(&ComposeParams {
        vendor_name: vendor_name.clone(),
        vendor_email: vendor_email.clone(),
        vendor_category: vendor_category.clone(),
        location: location.clone(),
        signup_base_url: config.signup_base_url.clone(),
    });

    mailer.send(&message).await?;
    println!("outreach email sent to {vendor_email}");

    // Best effort, like the server: the send already succeeded, so a log
    // failure is reported but does not fail the command.
    let record = sojourn_db::NewOutreachRecord {
        vendor_email,
        vendor_name,
        vendor_category,
        location,
        guide_user_id,
        retreat_id,
    };
    let pool_config = sojourn_db::PoolConfig::from_app_config(config);
    match sojourn_db::connect_pool(&config.database_url, pool_config).await {
        Ok(pool) => {
            if let Err(e) = sojourn_db::insert_outreach_record(&pool, &record).await {
                tracing::error!(error = %e, "failed to log outreach attempt");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to reach outreach log store");
        }
    }

    Ok(())
}
