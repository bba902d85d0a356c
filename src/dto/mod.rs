//! Data transfer objects for the HTTP API.
//!
//! Request and response bodies for `/play` and `/session`, serializable via
//! `serde`. Field names are camelCase on the wire.
mod request;
mod response;

pub use request::*;
pub use response::*;
