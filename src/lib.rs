//! Rock-paper-scissors against an adaptive, house-biased opponent.
//!
//! The [`game`] module holds the rules: moves, outcomes, and the bounded
//! record of what a player has thrown. The [`strategy`] module decides the
//! computer's answer from that record. A [`session::Session`] ties the two
//! together into rounds, and the `hosting` and `terminal` front-ends (behind
//! the `server` feature) serve those rounds over HTTP or a console.

pub mod dto;
pub mod game;
pub mod session;
pub mod strategy;

#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "server")]
pub mod terminal;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Band weights, cumulative cutoffs, and uniform draws.
pub type Probability = f32;
/// Transition and tally counters.
pub type Count = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HISTORY
// ============================================================================
/// Maximum player moves retained per session; the oldest is evicted first.
pub const HISTORY_LIMIT: usize = 100;
/// Recorded moves required before the selector trusts any pattern.
pub const COLD_START: usize = 3;

// ============================================================================
// OPPONENT POLICY
// Weights (normalized by `Policy`) of each tactic band.
// ============================================================================
/// Counter the player's most frequent follow-up to their last move.
pub const WEIGHT_PATTERN: Probability = 0.40;
/// Counter the player's last move directly.
pub const WEIGHT_COUNTER: Probability = 0.30;
/// Repeat the player's last move to force a draw.
pub const WEIGHT_MIRROR: Probability = 0.10;
/// Uniformly random move.
pub const WEIGHT_NOISE: Probability = 0.20;

// ============================================================================
// HOSTING
// ============================================================================
/// Maximum concurrent sessions held by a table.
pub const SESSION_LIMIT: usize = 4096;
/// Session shared by every request that does not name its own.
pub const ANONYMOUS: &str = "house";
/// Longest accepted session identifier.
pub const SESSION_ID_MAX: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
