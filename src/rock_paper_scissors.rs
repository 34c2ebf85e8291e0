use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub const HANDS: [&str; 3] = ["rock", "paper", "scissors"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub ai_hand: String,
    pub player_hand: String,
    pub outcome: Outcome,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        };
        write!(
            f,
            "AI: {} | player: {} | {}",
            self.ai_hand, self.player_hand, outcome
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wins: {} | draws: {} | losses: {}",
            self.wins, self.draws, self.losses
        )
    }
}

/// Plays the classifier's top label against a random hand.
pub struct RockPaperScissors {
    rng: StdRng,
    stats: Stats,
}

impl RockPaperScissors {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            stats: Stats::default(),
        }
    }

    /// `None` when `player_hand` is not a hand.
    pub fn play(&mut self, player_hand: &str) -> Option<Game> {
        let player = HANDS.iter().position(|hand| *hand == player_hand)?;
        let ai = self.rng.random_range(0..HANDS.len());

        let outcome = outcome(player, ai);
        match outcome {
            Outcome::Win => self.stats.wins += 1,
            Outcome::Draw => self.stats.draws += 1,
            Outcome::Loss => self.stats.losses += 1,
        }

        Some(Game {
            ai_hand: HANDS[ai].to_string(),
            player_hand: player_hand.to_string(),
            outcome,
        })
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// Each hand beats the one before it in `HANDS`.
fn outcome(player: usize, ai: usize) -> Outcome {
    if player == ai {
        Outcome::Draw
    } else if player == (ai + 1) % HANDS.len() {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}
