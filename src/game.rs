//! The marble game: players take turns placing numbered marbles into a ring,
//! and every 23rd marble scores instead.

use failure::Error;
use itertools::Itertools;
use ring::Ring;
use scores::Scores;

/// Marbles whose value is a multiple of this are kept and scored rather than
/// placed.
pub const SCORING_INTERVAL: usize = 23;

/// How often `play` logs its progress, in turns.
const PROGRESS_INTERVAL: usize = 1_000_000;

/// Games with more marbles than this don't log a trace line per turn.
const TRACE_LIMIT: usize = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub players: usize,
    pub last_marble: usize,
}

/// What happened on a single turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Turn {
    pub marble: usize,
    pub player: usize,
    /// Points earned this turn: zero unless the marble was a scoring one.
    pub points: u64,
}

pub struct Game {
    config: GameConfig,
    circle: Ring<usize>,
    scores: Scores,
    next: usize,
    /// The player who took the most recent turn, if any.
    last_player: Option<usize>,
}

impl Game {
    /// Set up a game with marble 0 alone in the circle and every score at zero.
    pub fn new(config: GameConfig) -> Result<Game, Error> {
        if config.players == 0 {
            return Err(format_err!("a game needs at least one player"));
        }
        if config.last_marble == 0 {
            return Err(format_err!("the last marble must be worth at least one point"));
        }

        // Every marble gets an arena slot, including marble 0.
        let capacity = config
            .last_marble
            .checked_add(1)
            .ok_or_else(|| format_err!("last marble {} is too large", config.last_marble))?;

        Ok(Game {
            config,
            circle: Ring::with_capacity(0, capacity),
            scores: Scores::new(config.players),
            next: 1,
            last_player: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn ring(&self) -> &Ring<usize> {
        &self.circle
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// The marble the next turn will play.
    pub fn next_marble(&self) -> usize {
        self.next
    }

    pub fn is_over(&self) -> bool {
        self.next > self.config.last_marble
    }

    /// Play the next marble. Return what happened, or `None` if the last
    /// marble has already been played.
    pub fn take_turn(&mut self) -> Option<Turn> {
        if self.is_over() {
            return None;
        }

        let marble = self.next;
        let player = (marble - 1) % self.config.players;
        let points = if marble % SCORING_INTERVAL == 0 {
            let removed = self.circle.remove_seventh_counter_clockwise();
            let points = (marble + removed) as u64;
            self.scores.award(player, points);
            points
        } else {
            self.circle.insert(marble);
            0
        };

        self.next += 1;
        self.last_player = Some(player);
        Some(Turn {
            marble,
            player,
            points,
        })
    }

    /// Play all the remaining marbles, and return the high score.
    pub fn play(&mut self) -> u64 {
        info!(
            "{} players; last marble {}",
            self.config.players, self.config.last_marble
        );
        let tracing = self.config.last_marble <= TRACE_LIMIT;
        if tracing {
            trace!("{}", self.trace());
        }

        while let Some(turn) = self.take_turn() {
            if tracing {
                trace!("{}", self.trace());
            }
            if turn.points > 0 {
                debug!(
                    "player {} scores {} with marble {}",
                    turn.player + 1,
                    turn.points,
                    turn.marble
                );
            }
            if turn.marble % PROGRESS_INTERVAL == 0 {
                debug!(
                    "played {} of {} marbles; circle holds {}",
                    turn.marble,
                    self.config.last_marble,
                    self.circle.len()
                );
            }
        }

        let high_score = self.scores.max_score();
        match self.scores.winner() {
            Some((player, score)) => {
                info!("player {} wins with {} points", player + 1, score)
            }
            None => info!("nobody played"),
        }
        high_score
    }

    /// Describe the circle the way the game's rules do: the player who just
    /// moved in brackets (numbered from 1), then the marbles clockwise from
    /// the oldest one, with the current marble in parentheses.
    pub fn trace(&self) -> String {
        let player = match self.last_player {
            Some(player) => (player + 1).to_string(),
            None => "-".to_string(),
        };
        let marbles = self
            .circle
            .iter_marked()
            .map(|(current, marble)| {
                if current {
                    format!("({})", marble)
                } else {
                    marble.to_string()
                }
            })
            .join(" ");
        format!("[{}] {}", player, marbles)
    }
}

/// Play a whole game and return the high score.
pub fn high_score(config: GameConfig) -> Result<u64, Error> {
    Ok(Game::new(config)?.play())
}
