//! Client for the orders endpoint.
//!
//! Builds `orders?<query>` from a parameter mapping, issues a GET and hands
//! back the decoded JSON body. See [`OrderClient`] for the exact contract.
pub mod config;
pub mod errors;
pub mod models;
pub mod net;
pub mod orders;
pub mod query;

pub use config::{ClientConfig, ClientConfigError};
pub use errors::{FetchError, TransportError};
pub use models::{Order, OrderId, Orders};
pub use orders::{fetch_orders, OrderClient};
pub use query::OrderQuery;
