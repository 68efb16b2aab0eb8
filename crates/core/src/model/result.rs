use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a quiz counts as passed.
pub const PASS_MARK: u8 = 80;

/// A quiz score as a 0–100 percentage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Build a score, clamping anything above 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Parse a score from a query-string value, defaulting to 0 when the
    /// parameter is missing or not an integer. Negative values clamp to 0,
    /// values above 100 clamp to 100.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let value = raw
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);
        Self(value.clamp(0, 100) as u8)
    }

    /// Percentage of `correct` answers out of `total`, rounded to the nearest
    /// integer. An empty quiz scores 0.
    #[must_use]
    pub fn from_counts(correct: u32, total: u32) -> Self {
        if total == 0 {
            return Self(0);
        }
        let percent = (u64::from(correct) * 100 + u64::from(total) / 2) / u64::from(total);
        Self::new(percent.min(100) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn band(self) -> ScoreBand {
        ScoreBand::for_score(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self.0)
    }
}

/// Three-tier severity banding for a score: green at 80+, yellow at 60..80,
/// red below 60. Banding depends on the score alone, never on the status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            80..=100 => Self::Green,
            60..=79 => Self::Yellow,
            _ => Self::Red,
        }
    }

    /// CSS modifier used by the result page.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "band-green",
            Self::Yellow => "band-yellow",
            Self::Red => "band-red",
        }
    }
}

/// Pass/fail status as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuizOutcome {
    Passed,
    Failed,
}

impl QuizOutcome {
    /// Classify a status string; only `"passed"` (case-insensitive) counts
    /// as a pass, everything else including a missing status is a fail.
    #[must_use]
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some(status) if status.trim().eq_ignore_ascii_case("passed") => Self::Passed,
            _ => Self::Failed,
        }
    }

    #[must_use]
    pub fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Status string used in the result route's query parameters.
    #[must_use]
    pub fn as_status_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }

    /// Uppercase label rendered on the result page.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}
