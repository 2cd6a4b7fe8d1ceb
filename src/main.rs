//! Headless runner (default binary).
//!
//! Plays a seeded game by always taking the first legal move the oracle finds,
//! printing the board after every placement. Useful for eyeballing the junk
//! mechanic and for reproducing a game from its seed.

use anyhow::{Context, Result};
use clap::Parser;

use junk_blocks::core::snapshot::to_json;
use junk_blocks::core::GameSession;

#[derive(Debug, Parser)]
#[command(version, about = "Play a seeded junk-blocks game headlessly")]
struct Args {
    /// Seed for the hand dealer
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Difficulty passed to the dealer (reserved; does not bias draws)
    #[arg(long, default_value_t = 0)]
    difficulty: u32,

    /// Stop after this many placements
    #[arg(long, default_value_t = 50)]
    turns: u32,

    /// Print the final session snapshot as JSON instead of board dumps
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut session = GameSession::new(args.seed, args.difficulty);

    while !session.game_over() && session.turn() < args.turns {
        let Some(hint) = session.hint() else {
            break;
        };
        for _ in 0..hint.rotations {
            session
                .rotate(hint.hand_index)
                .with_context(|| format!("rotating hand slot {}", hint.hand_index))?;
        }
        let kind = session.hand()[hint.hand_index].kind;
        let outcome = session
            .place(hint.hand_index, hint.x, hint.y)
            .with_context(|| format!("placing {} at ({}, {})", kind.as_str(), hint.x, hint.y))?;

        if !args.json {
            println!(
                "turn {:>3}: {} at ({}, {}) lines={} junk={} +{} combo={}",
                session.turn(),
                kind.as_str(),
                hint.x,
                hint.y,
                outcome.lines_cleared,
                outcome.junk_created,
                outcome.points,
                outcome.combo_out
            );
            for row in session.board().to_ascii() {
                println!("  {row}");
            }
        }
    }

    if args.json {
        let json = to_json(&session.snapshot()).context("encoding final snapshot")?;
        println!("{json}");
    } else {
        println!(
            "final score {} after {} turns{}",
            session.score(),
            session.turn(),
            if session.game_over() { " (game over)" } else { "" }
        );
    }
    Ok(())
}
