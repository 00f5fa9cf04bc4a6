use clap::Parser;
use tracing_subscriber::EnvFilter;
use tripsearch::cli_app::{handle_command, Cli};
use tripsearch::config::Config;
use tripsearch::constants::Message;

fn init_tracing() {
    // RUST_LOG wins, otherwise only warnings and errors of this crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tripsearch=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match Config::default_path() {
        Ok(path_to_config) => handle_command(cli, &path_to_config).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("{}", Message::Failed(e.to_string()).to_formatted_string());
        std::process::exit(1);
    }
}
