use clap::Parser;
use tracing_subscriber::EnvFilter;

use eatfinder_client::JustEatClient;
use eatfinder_core::{load_app_config, TracingLogger};
use eatfinder_engine::SearchEngine;

#[derive(Debug, Parser)]
#[command(name = "eatfinder")]
#[command(about = "Search Just Eat UK restaurants by postcode")]
struct Cli {
    /// UK postcode to search, e.g. "EC1A 1BB".
    postcode: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let client = JustEatClient::new(&config)?;
    let engine = SearchEngine::new(client, TracingLogger);

    engine.search(&cli.postcode).await;
    let state = engine.state();

    // Rejections and transport failures are product outcomes, not process
    // failures: print the user-facing message and exit cleanly.
    if let Some(message) = state.error_message {
        println!("{message}");
        return Ok(());
    }
    if state.is_empty {
        println!("No restaurants found for that postcode.");
        return Ok(());
    }

    for restaurant in &state.restaurants {
        let rating = restaurant
            .rating
            .map_or_else(|| "unrated".to_owned(), |value| format!("{value:.1}"));
        println!("{} ({rating})", restaurant.name);
        if !restaurant.cuisines.is_empty() {
            println!("  {}", restaurant.cuisines.join(", "));
        }
        println!("  {}", restaurant.full_address());
    }

    Ok(())
}
