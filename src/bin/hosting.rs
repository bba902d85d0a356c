//! hosting Server Binary
//!
//! Serves rock-paper-scissors rounds over HTTP on BIND_ADDR.

use clap::Parser;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await
}
