//! terminal Game Binary
//!
//! Plays rock-paper-scissors against the adaptive opponent in the console.

use roshambo::*;

fn main() -> anyhow::Result<()> {
    terminal::Terminal::default().run()
}
