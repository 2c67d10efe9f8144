//! Running point totals, one per player.

use itertools::Itertools;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scores(Vec<u64>);

impl Scores {
    /// Return a table of `players` scores, all zero.
    pub fn new(players: usize) -> Scores {
        Scores(vec![0; players])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn award(&mut self, player: usize, points: u64) {
        self.0[player] += points;
    }

    /// The highest score anyone has, or zero if nobody has scored yet.
    pub fn max_score(&self) -> u64 {
        self.0.iter().cloned().max().unwrap_or(0)
    }

    /// Return the player with the highest score, and that score. On a tie, the
    /// lowest-numbered player wins. `None` only if there are no players.
    pub fn winner(&self) -> Option<(usize, u64)> {
        // `max_by_key` keeps the last of equal maxima, so scan in reverse.
        self.0
            .iter()
            .cloned()
            .enumerate()
            .rev()
            .max_by_key(|&(_player, score)| score)
    }

    /// The sum of everyone's points.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = u64> + 'a {
        self.0.iter().cloned()
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.0.iter().join(" "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let scores = Scores::new(4);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores.max_score(), 0);
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.winner(), Some((0, 0)));
        assert_eq!(Scores::new(0).winner(), None);
    }

    #[test]
    fn test_award() {
        let mut scores = Scores::new(3);
        scores.award(1, 10);
        scores.award(2, 7);
        scores.award(1, 5);
        assert_eq!(scores.iter().collect::<Vec<_>>(), vec![0, 15, 7]);
        assert_eq!(scores.max_score(), 15);
        assert_eq!(scores.total(), 22);
        assert_eq!(scores.winner(), Some((1, 15)));
    }

    #[test]
    fn test_tie_goes_to_lowest_player() {
        let mut scores = Scores::new(4);
        scores.award(3, 9);
        scores.award(1, 9);
        assert_eq!(scores.winner(), Some((1, 9)));
    }

    #[test]
    fn test_display() {
        let mut scores = Scores::new(3);
        scores.award(0, 32);
        assert_eq!(scores.to_string(), "32 0 0");
    }

    #[test]
    #[should_panic]
    fn test_award_to_missing_player() {
        Scores::new(2).award(2, 1);
    }
}
