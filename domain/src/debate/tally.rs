//! Vote tallying
//!
//! Pure aggregation over collected judge votes. Ties are counted but
//! excluded from the majority comparison; an equal split of side votes is
//! reported as such rather than forcing a winner.

use crate::debate::vote::{JudgeVote, Vote};
use serde::{Deserialize, Serialize};

/// Which side, if any, leads the ballot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyOutcome {
    AffirmativeLeads,
    NegativeLeads,
    EvenSplit,
}

/// Aggregated vote counts for one finished judging round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub affirmative: usize,
    pub negative: usize,
    pub ties: usize,
}

impl Tally {
    pub fn from_votes(votes: &[JudgeVote]) -> Self {
        let mut tally = Tally {
            affirmative: 0,
            negative: 0,
            ties: 0,
        };
        for vote in votes {
            match vote.vote {
                Vote::Affirmative => tally.affirmative += 1,
                Vote::Negative => tally.negative += 1,
                Vote::Tie => tally.ties += 1,
            }
        }
        tally
    }

    pub fn outcome(&self) -> TallyOutcome {
        if self.affirmative == self.negative {
            TallyOutcome::EvenSplit
        } else if self.affirmative > self.negative {
            TallyOutcome::AffirmativeLeads
        } else {
            TallyOutcome::NegativeLeads
        }
    }

    /// Score summary shown to the host for the wrap-up interlude.
    pub fn summary_lines(&self) -> Vec<String> {
        let winner_line = match self.outcome() {
            TallyOutcome::EvenSplit => {
                "Judges split evenly. Consider calling it a tie or seeking a rematch.".to_string()
            }
            TallyOutcome::AffirmativeLeads => format!(
                "Affirmative leads the ballot {}-{}.",
                self.affirmative, self.negative
            ),
            TallyOutcome::NegativeLeads => format!(
                "Negative leads the ballot {}-{}.",
                self.negative, self.affirmative
            ),
        };

        let mut scoreboard = format!(
            "Final tally — Affirmative: {}, Negative: {}",
            self.affirmative, self.negative
        );
        if self.ties > 0 {
            scoreboard.push_str(&format!(", Ties: {}", self.ties));
        }

        vec![winner_line, scoreboard]
    }
}
