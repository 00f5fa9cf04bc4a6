use std::path::Path;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::command_logic::browse::run_browse;
use crate::command_logic::config::save_config;
use crate::command_logic::search::search_trips;
use crate::config::Config;
use crate::controller::SearchController;
use crate::desktop::SystemDesktop;
use crate::errors::AppError;
use crate::external_api::trips_api::TripsApi;

#[derive(Parser)]
#[command(
    name = "tripsearch",
    version,
    about = "Search tourist attractions from the terminal",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Base url of the trips backend
    #[arg(long, global = true, env = "TRIPSEARCH_BASE_URL")]
    pub base_url: Option<String>,
    /// Quiet period after typing before searching, in milliseconds
    #[arg(long, global = true, value_parser = validate_u64_more_then_zero)]
    pub debounce_ms: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search once and print the results
    Search(SearchArgs),
    /// Interactive search page
    Browse,
    /// Save the backend url to the config file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search keywords, none lists every attraction
    pub keywords: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Base url to save
    #[arg(long, short, required = true)]
    pub url: String,
    /// Debounce to save, in milliseconds
    #[arg(long, short, value_parser = validate_u64_more_then_zero)]
    pub debounce: Option<u64>,
}

fn validate_u64_more_then_zero(value: &str) -> Result<u64, AppError> {
    let number: u64 = value.parse().map_err(|_| AppError::MoreThenZero)?;
    if number == 0 {
        return Err(AppError::MoreThenZero)
    }
    Ok(number)
}

/// Config file values with the command line on top
fn effective_config(cli: &Cli, path_to_config: &Path) -> Result<Config, AppError> {
    Config::get_config(path_to_config)?.with_overrides(cli.base_url.as_deref(), cli.debounce_ms)
}

pub async fn handle_command(cli: Cli, path_to_config: &Path) -> Result<(), AppError> {
    match &cli.command {
        Commands::Search(args) => {
            let config = effective_config(&cli, path_to_config)?;
            let trips_api = TripsApi::new(&config.base_url)?;
            println!("{}", search_trips(&args.keywords, &trips_api).await);
        }
        Commands::Browse => {
            let config = effective_config(&cli, path_to_config)?;
            let trips_api = TripsApi::new(&config.base_url)?;
            let mut controller =
                SearchController::new(trips_api, Duration::from_millis(config.debounce_ms));
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            run_browse(&mut controller, input, std::io::stdout(), &SystemDesktop::default()).await?;
        }
        Commands::Config(args) => {
            println!("{}", save_config(&args.url, args.debounce, path_to_config)?);
        }
    }
    Ok(())
}
