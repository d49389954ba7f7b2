mod batch;
mod pipeline;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use storescout_core::AppConfig;
use storescout_fetch::PageFetcher;
use storescout_resolve::{GeminiClient, SearchClient, StoreResolver};

use crate::pipeline::{classify, looks_like_url, LookupOutcome};

#[derive(Debug, Parser)]
#[command(name = "storescout")]
#[command(about = "Detects the e-commerce platform behind a brand's storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single brand name or storefront URL
    Lookup {
        /// Brand name (resolved via web search) or storefront URL
        input: String,
    },
    /// Enrich a CSV brand table with storefront URLs and platforms
    Batch {
        /// Input CSV with Marca, URL, Plataforma columns
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path (defaults to storescout_<input name>.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Builds the name resolver when all credentials are configured.
///
/// A partial credential set disables name resolution rather than failing:
/// URL-based lookups and URL-only batch rows work without any keys.
fn build_resolver(config: &AppConfig) -> anyhow::Result<Option<StoreResolver>> {
    let (Some(google_api_key), Some(google_cx), Some(gemini_api_key)) = (
        config.google_api_key.as_deref(),
        config.google_cx.as_deref(),
        config.gemini_api_key.as_deref(),
    ) else {
        tracing::debug!("search credentials not fully configured; name resolution disabled");
        return Ok(None);
    };

    let search = SearchClient::new(google_api_key, google_cx)?;
    let gemini = GeminiClient::new(gemini_api_key, &config.gemini_model)?;
    Ok(Some(StoreResolver::new(search, gemini)))
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("batch");
    input.with_file_name(format!("storescout_{stem}.csv"))
}

fn print_outcome(input: &str, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::NotFound => println!("No storefront URL found for \"{input}\"."),
        LookupOutcome::Unreachable { url } => println!("Could not reach {url}."),
        LookupOutcome::Classified(classification) => {
            println!("Domain: {}", classification.domain);
            match classification.primary() {
                Some(platform) => println!("Platform: {platform}"),
                None => println!("Platform not detected."),
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = storescout_core::load_app_config_from_env()?;

    let fetcher = PageFetcher::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
    let resolver = build_resolver(&config)?;

    match cli.command {
        Commands::Lookup { input } => {
            if !looks_like_url(&input) && resolver.is_none() {
                anyhow::bail!(
                    "set GOOGLE_API_KEY, GOOGLE_CX, and GEMINI_API_KEY to resolve brand names"
                );
            }
            let outcome = classify(&input, resolver.as_ref(), &fetcher).await;
            print_outcome(&input, &outcome);
        }
        Commands::Batch { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));

            let mut rows = batch::read_rows(&input)?;
            tracing::info!(rows = rows.len(), input = %input.display(), "starting batch run");

            batch::process_rows(&mut rows, resolver.as_ref(), &fetcher).await;

            batch::write_rows(&output, &rows)?;
            println!("Wrote {} rows to {}.", rows.len(), output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
