//! Networking primitive used by the orders client.
//!
//! Everything above this module talks to a [`Transport`]: "GET this URL and
//! hand back the buffered response". [`HttpTransport`] is the reqwest backed
//! implementation; tests plug in their own.
mod fetch;
mod response;
mod transport;

pub use response::Response;
pub use transport::{HttpTransport, Transport};
