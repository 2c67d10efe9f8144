extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate marble_game;

use failure::Error;
use marble_game::game::high_score;
use marble_game::input::Puzzle;
use std::io::Read;
use std::str::FromStr;

/// Multipliers to play when none are given on the command line: the game as
/// described, and the same game with a last marble a hundred times larger.
const DEFAULT_MULTIPLIERS: [usize; 2] = [1, 100];

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut multipliers = std::env::args()
        .skip(1)
        .map(|arg| {
            usize::from_str(&arg).map_err(|e| format_err!("bad multiplier {:?}: {}", arg, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if multipliers.is_empty() {
        multipliers.extend_from_slice(&DEFAULT_MULTIPLIERS);
    }

    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }
    let puzzle = Puzzle::from_str(&input)?;

    for multiplier in multipliers {
        let config = puzzle.config(multiplier)?;
        let score = high_score(config)?;
        println!(
            "{} players; last marble {}: high score {}",
            config.players, config.last_marble, score
        );
    }

    Ok(())
}
