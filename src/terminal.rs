//! Console rock-paper-scissors.
//!
//! The computer commits to its move before the player chooses, reading only
//! what the player has thrown in earlier rounds.
use crate::game::Move;
use crate::game::Outcome;
use crate::session::Round;
use crate::session::Session;
use crate::strategy::Selector;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Select;
use std::time::Duration;

const BEAT: Duration = Duration::from_millis(600);

#[derive(Debug, Default)]
pub struct Terminal {
    selector: Selector,
    session: Session,
}

impl Terminal {
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.round()?;
            let again = Confirm::new()
                .with_prompt("Play again?")
                .default(true)
                .interact()?;
            if !again {
                println!("Thanks for playing. {}", self.session.tally());
                return Ok(());
            }
        }
    }

    fn round(&mut self) -> anyhow::Result<Round> {
        let ref mut rng = rand::rng();
        let last = self.session.history().last();
        let computer = self.session.propose(&self.selector, last, rng);
        let player = self.choose()?;
        self.countdown();
        let round = self.session.settle(player, computer);
        self.show(&round);
        Ok(round)
    }

    fn choose(&self) -> anyhow::Result<Move> {
        let items = Move::all().map(|m| m.to_string());
        let selection = Select::new()
            .with_prompt("\nYOUR MOVE")
            .report(false)
            .items(&items)
            .default(0)
            .interact()?;
        Move::try_from(selection as u8)
    }

    fn countdown(&self) {
        for word in ["JO", "KEN", "PO!"] {
            println!("{}", word.bold());
            std::thread::sleep(BEAT);
        }
    }

    fn show(&self, round: &Round) {
        let rule = "=*=".repeat(20);
        println!("{}", rule);
        println!("  computer played {}", round.computer.to_string().cyan());
        println!("  you played      {}", round.player.to_string().cyan());
        println!("{}", rule);
        let verdict = match round.outcome {
            Outcome::PlayerWins => "YOU WIN!".green().bold(),
            Outcome::ComputerWins => "THE COMPUTER WINS!".red().bold(),
            Outcome::Draw => "DRAW!".yellow().bold(),
        };
        println!("{}", verdict);
        println!("{}", self.session.tally().to_string().dimmed());
    }
}
