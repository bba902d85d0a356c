//! HTTP hosting of rock-paper-scissors rounds.
//!
//! - [`Table`] — live sessions behind a single lock
//! - [`Server`] — actix-web server and route table
//! - [`Config`] — command line and environment configuration
//! - [`handlers`] — request handlers
mod config;
mod server;
mod table;

pub mod handlers;

pub use config::*;
pub use server::*;
pub use table::*;
