//! The `pick` command: resolve inputs, run the pipeline, print the result.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Args};
use lunchroll_core::{load_blacklist, AppConfig, ConfigError};
use lunchroll_picker::{pick_restaurants, NearbyPager, PickRequest};
use lunchroll_places::PlacesClient;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::render::{render_json, render_text};

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("blacklist_source")
        .required(true)
        .args(["blacklist", "blacklist_file"]),
))]
pub(crate) struct PickArgs {
    /// Address to search around
    #[arg(long)]
    pub origin: String,
    /// Address walking distances are measured from (defaults to --origin)
    #[arg(long)]
    pub walk_origin: Option<String>,
    /// Number of restaurants to pick (1-30)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,
    /// Restaurant names to exclude, repeatable or comma-separated
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub blacklist: Vec<String>,
    /// File with one excluded restaurant name per line
    #[arg(long)]
    pub blacklist_file: Option<PathBuf>,
    /// Provider API key (overrides LUNCHROLL_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
    /// Seed for a reproducible selection
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the records as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Runs one pick and writes the ranked records to stdout.
///
/// # Errors
///
/// Returns an error if the API key is missing, the blacklist or count is
/// invalid, the HTTP client cannot be built, or any provider call fails.
/// Nothing is printed on failure.
pub(crate) async fn run_pick(config: AppConfig, args: PickArgs) -> anyhow::Result<()> {
    let config = config.with_api_key(args.api_key.clone());
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| ConfigError::MissingEnvVar("LUNCHROLL_API_KEY".to_string()))?;

    let names = (!args.blacklist.is_empty()).then_some(args.blacklist.as_slice());
    let blacklist = load_blacklist(names, args.blacklist_file.as_deref())?;
    let request = PickRequest::new(args.origin, args.walk_origin, args.count, blacklist)?;

    let client = PlacesClient::from_config(&config, &api_key)?;
    let pager = NearbyPager::with_tokio_delay(Duration::from_secs(config.page_delay_secs));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(
        origin = %request.search_origin,
        count = request.count,
        env = %config.env,
        "picking restaurants"
    );
    let records = pick_restaurants(&client, &pager, &request, &mut rng).await?;

    if args.json {
        println!("{}", render_json(&records)?);
    } else {
        print!("{}", render_text(&records));
    }
    Ok(())
}
