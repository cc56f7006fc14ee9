//! Difficulty tiers and the search limits each one maps to.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ChessError;
use crate::search::alpha_beta::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// Search depth, wall-clock budget, and the chance of replacing the searched
/// move with a random legal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub max_depth: u8,
    pub time_budget: Duration,
    pub blunder_probability: f64,
}

impl DifficultyProfile {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
            time_budget: Some(self.time_budget),
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Beginner => DifficultyProfile {
                max_depth: 2,
                time_budget: Duration::from_millis(1500),
                blunder_probability: 0.25,
            },
            Difficulty::Intermediate => DifficultyProfile {
                max_depth: 3,
                time_budget: Duration::from_millis(3000),
                blunder_probability: 0.0,
            },
            Difficulty::Advanced => DifficultyProfile {
                max_depth: 4,
                time_budget: Duration::from_millis(6000),
                blunder_probability: 0.0,
            },
        }
    }

    /// Lenient lookup for user-facing input: unknown or missing names fall
    /// back to `Intermediate`.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        match name.map(str::parse::<Difficulty>) {
            Some(Ok(difficulty)) => difficulty,
            Some(Err(err)) => {
                log::warn!("{err}; using {}", Difficulty::default());
                Difficulty::default()
            }
            None => Difficulty::default(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == wanted)
            .ok_or_else(|| ChessError::UnknownDifficulty(s.to_owned()))
    }
}
