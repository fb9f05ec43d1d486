//! Fetches the orders endpoint of a running service and prints the JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run --example fetch_orders -- http://localhost:8000/ limit=5 offset=10
//! ```
use anyhow::{bail, Context};
use orders_client::{ClientConfig, OrderClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(base) = args.next() else {
        bail!("usage: fetch_orders <base-url> [key=value ...]");
    };

    let mut params = Vec::new();
    for arg in args {
        let (k, v) = arg
            .split_once('=')
            .with_context(|| format!("parameter {arg:?} is not key=value"))?;
        params.push((k.to_string(), v.to_string()));
    }

    let config = ClientConfig::builder()
        .base_url(base)
        .user_agent(concat!("orders-client/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let client = OrderClient::new(config)?;
    log::info!("requesting {}", client.orders_url(params.iter().map(|(k, v)| (k, v)))?);

    let json = client.fetch_orders(params).await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
