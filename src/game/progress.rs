//! Score and rank tracking
//!
//! Pure functions over the solution set and the found set. Nothing here
//! holds state; the session owns the found words and the puzzle owns the
//! solutions.

use std::fmt;

/// How words are scored
///
/// Game variants disagree, so both policies are exposed; a deployment
/// picks one and the maximum score uses the same aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    /// One point per letter (sum of word lengths)
    #[default]
    LengthSum,
    /// One point per word
    WordCount,
}

impl ScoringPolicy {
    /// Create a policy from a name string
    ///
    /// Supported names: "length", "length-sum", "count", "word-count".
    /// Defaults to length-sum if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "count" | "word-count" => Self::WordCount,
            _ => Self::LengthSum,
        }
    }

    /// Points awarded for a single word
    #[inline]
    #[must_use]
    pub fn word_points(self, word: &str) -> u32 {
        match self {
            Self::LengthSum => word.len() as u32,
            Self::WordCount => 1,
        }
    }

    /// Total score for a collection of words
    pub fn score<'a, I>(self, words: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().map(|word| self.word_points(word)).sum()
    }
}

/// Error type for invalid rank tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankTableError {
    /// The table has no tiers
    Empty,
    /// The first tier must sit at 0%
    FirstTierNotZero,
    /// Thresholds must be strictly ascending
    NotAscending,
    /// A threshold exceeds 100%
    ThresholdTooHigh(u8),
}

impl fmt::Display for RankTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rank table must have at least one tier"),
            Self::FirstTierNotZero => write!(f, "first rank tier must be at 0%"),
            Self::NotAscending => write!(f, "rank thresholds must be strictly ascending"),
            Self::ThresholdTooHigh(percent) => {
                write!(f, "rank threshold {percent}% exceeds 100%")
            }
        }
    }
}

impl std::error::Error for RankTableError {}

/// Ordered percentage thresholds mapped to tier labels
///
/// Configuration, not logic: hosts may supply their own table as long as
/// it starts at 0% and ascends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    tiers: Vec<(u8, String)>,
}

impl RankTable {
    /// Create a rank table from ascending `(percent, label)` tiers
    ///
    /// # Errors
    /// Returns an error if the table is empty, does not start at 0%, is
    /// not strictly ascending, or exceeds 100%.
    pub fn new<I, S>(tiers: I) -> Result<Self, RankTableError>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let tiers: Vec<(u8, String)> = tiers
            .into_iter()
            .map(|(percent, label)| (percent, label.into()))
            .collect();

        if tiers.is_empty() {
            return Err(RankTableError::Empty);
        }
        if tiers[0].0 != 0 {
            return Err(RankTableError::FirstTierNotZero);
        }
        for pair in tiers.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(RankTableError::NotAscending);
            }
        }
        // Ascending, so the last threshold is the largest
        let last = tiers[tiers.len() - 1].0;
        if last > 100 {
            return Err(RankTableError::ThresholdTooHigh(last));
        }

        Ok(Self { tiers })
    }

    /// Label of the highest tier whose threshold does not exceed the
    /// score percentage
    ///
    /// A zero maximum counts as 0% rather than dividing by zero.
    #[must_use]
    pub fn rank(&self, score: u32, max_score: u32) -> &str {
        let percent = if max_score == 0 {
            0
        } else {
            score.saturating_mul(100) / max_score
        };

        self.tiers
            .iter()
            .rev()
            .find(|(threshold, _)| u32::from(*threshold) <= percent)
            .map(|(_, label)| label.as_str())
            .expect("validated table starts at 0%")
    }

    /// The tiers in ascending order
    #[must_use]
    pub fn tiers(&self) -> &[(u8, String)] {
        &self.tiers
    }
}

impl Default for RankTable {
    /// `{0% Beginner, 30% Good, 60% Excellent, 100% Perfect}`
    fn default() -> Self {
        Self::new([
            (0, "Beginner"),
            (30, "Good"),
            (60, "Excellent"),
            (100, "Perfect"),
        ])
        .expect("default table is valid")
    }
}
