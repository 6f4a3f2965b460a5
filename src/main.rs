//! Brave Search Agent - command line entry point
//!
//! With no arguments, prints the agent manifest. With `<query> [num_results]`,
//! runs the search tool once and prints its envelope.

use brave_search_agent::agent::root_agent;
use brave_search_agent::tools::{brave_search, DEFAULT_NUM_RESULTS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging (stderr, so stdout stays JSON)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brave_search_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let agent = root_agent();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(query) = args.first() else {
        println!("{}", serde_json::to_string_pretty(&agent.manifest())?);
        return Ok(());
    };

    let num_results = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid num_results '{}': {}", raw, e))?,
        None => DEFAULT_NUM_RESULTS,
    };

    let response = brave_search(query, num_results).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
