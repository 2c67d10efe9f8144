//! Parsing the puzzle description: `"9 players; last marble is worth 25 points"`.

use failure::Error;
use game::GameConfig;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Puzzle {
    pub players: usize,
    pub last_marble: usize,
}

impl Puzzle {
    /// Return the configuration for this puzzle with the last marble's value
    /// scaled by `multiplier`.
    pub fn config(&self, multiplier: usize) -> Result<GameConfig, Error> {
        let last_marble = self
            .last_marble
            .checked_mul(multiplier)
            .ok_or_else(|| {
                format_err!(
                    "last marble {} times {} overflows",
                    self.last_marble,
                    multiplier
                )
            })?;
        Ok(GameConfig {
            players: self.players,
            last_marble,
        })
    }
}

impl FromStr for Puzzle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Puzzle, Error> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [players, "players;", "last", "marble", "is", "worth", last_marble, "points"] => {
                Ok(Puzzle {
                    players: usize::from_str(players)
                        .map_err(|e| format_err!("bad player count {:?}: {}", players, e))?,
                    last_marble: usize::from_str(last_marble)
                        .map_err(|e| format_err!("bad marble value {:?}: {}", last_marble, e))?,
                })
            }
            _ => Err(format_err!("unrecognized puzzle description: {:?}", s)),
        }
    }
}

#[test]
fn test_parse() {
    assert_eq!(
        Puzzle::from_str("9 players; last marble is worth 25 points").unwrap(),
        Puzzle {
            players: 9,
            last_marble: 25
        }
    );
    assert_eq!(
        "464 players; last marble is worth 71730 points\n"
            .parse::<Puzzle>()
            .unwrap(),
        Puzzle {
            players: 464,
            last_marble: 71730
        }
    );
}

#[test]
fn test_parse_errors() {
    assert!("".parse::<Puzzle>().is_err());
    assert!("9 players; last marble is worth 25".parse::<Puzzle>().is_err());
    assert!("nine players; last marble is worth 25 points".parse::<Puzzle>().is_err());
    assert!("-9 players; last marble is worth 25 points".parse::<Puzzle>().is_err());
    assert!("9 players; last marble is worth 2.5 points".parse::<Puzzle>().is_err());

    let err = "10 elves; last marble is worth 1618 points"
        .parse::<Puzzle>()
        .unwrap_err();
    assert!(err.to_string().contains("unrecognized"));
}

#[test]
fn test_config() {
    let puzzle = Puzzle {
        players: 10,
        last_marble: 1618,
    };
    assert_eq!(
        puzzle.config(1).unwrap(),
        GameConfig {
            players: 10,
            last_marble: 1618
        }
    );
    assert_eq!(puzzle.config(100).unwrap().last_marble, 161_800);
    assert!(puzzle.config(usize::max_value()).is_err());
}
