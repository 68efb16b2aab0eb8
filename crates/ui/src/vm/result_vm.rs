use induct_core::model::{QuizOutcome, Score, ScoreBand};

/// Everything the result page renders, derived purely from the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: u8,
    pub band: ScoreBand,
    pub band_class: &'static str,
    pub label: &'static str,
    pub passed: bool,
}

/// Map the result route's query parameters.
///
/// `score` defaults to 0 when missing or unparsable; `status` is matched
/// case-insensitively against `"passed"`. Banding depends on the score
/// alone.
#[must_use]
pub fn map_result_query(score: Option<&str>, status: Option<&str>) -> ResultVm {
    let score = Score::parse_or_default(score);
    let outcome = QuizOutcome::from_status(status);
    let band = score.band();
    ResultVm {
        score: score.value(),
        band,
        band_class: band.css_class(),
        label: outcome.label(),
        passed: outcome.is_passed(),
    }
}
