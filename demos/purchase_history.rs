//! Fetch purchase history with endpoint discovery.
//!
//! Demonstrates the sequential fallback scan: run with debug logging to
//! watch the client probe candidate routes until one answers.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example purchase_history
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

    match client.get_purchases().await {
        Ok(purchases) => {
            println!("{}", serde_json::to_string_pretty(&purchases)?);
        }
        Err(e) => {
            eprintln!("purchase history failed: {e}");
            if let Some(body) = e.body() {
                eprintln!("server said: {body}");
            }
        }
    }

    Ok(())
}
