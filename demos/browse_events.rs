//! Browse the event catalog.
//!
//! Lists all events, then fetches details for the first one.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example browse_events
//! ```
//!
//! By default this talks to the development backend. Point it elsewhere
//! with:
//! ```bash
//! export TAQUILLA_BASE_URL=https://staging.tickets.grye.org
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println"
)]

use std::env;

use taquilla_client::{ClientConfig, Environment, TaquillaClient, config::EndpointOverrides};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("taquilla_client=debug").init();

    let client = match env::var("TAQUILLA_BASE_URL") {
        Ok(base_url) => TaquillaClient::new(ClientConfig {
            base_url,
            endpoints: EndpointOverrides::default(),
        })?,
        Err(_) => TaquillaClient::from_environment(Environment::Development)?,
    };

    println!("fetching events from {}", client.base_url());
    let events = client.get_events().await?;
    println!("{}", serde_json::to_string_pretty(&events)?);

    if let Some(id) = events
        .as_array()
        .and_then(|list| list.first())
        .and_then(|event| event.get("id"))
    {
        let id = id.as_str().map_or_else(|| id.to_string(), str::to_owned);
        let detail = client.get_event(&id).await?;
        println!("first event detail:\n{}", serde_json::to_string_pretty(&detail)?);
    }

    Ok(())
}
