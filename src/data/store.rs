use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Category, ScoreSeries, ScoreStore};

// ---------------------------------------------------------------------------
// Embedded score data
// ---------------------------------------------------------------------------

/// The fixed success scores, one per line. Embedded static configuration:
/// parsed once at startup, never re-read per interaction.
const SUCCESS_SCORES: &str = "
0.82979212
0.19645161
0.2932987
0.24947262
0.15058733
0.29283039
0.27052659
0.19869256
0.41809063
0.5129112
0.14208549
0.43094925
0.12872199
0.05018694
0.14933936
0.54031591
0.42177084
0.26600326
0.28457247
0.23699764
0.34309186
0.86981466
0.23099189
0.39810677
0.90916973
0.27825307
0.42259499
0.38058399
0.13115613
1.0408997
0.02923584
0.72276217
0.23658223
0.45860505
0.22900213
0.01130275
0.36317806
0.19054801
0.32718698
0.2893753
0.04709701
0.2742501
0.35121273
0.06190559
0.21834235
0.78725222
0.28048041
0.24679788
0.95756843
0.40505829
0.24483405
0.04809197
0.24015377
0.00278233
0.21075369
0.37762915
0.32718698
0.01130275
0.36283477
0.1514081
0.28457247
0.01130275
0.14123126
0.17848087
0.19645161
0.2471835
0.21844382
0.06572381
0.05806364
";

/// The fixed failure scores, one per line.
const FAILURE_SCORES: &str = "
0.13979679
0.34956851
0.39760298
0.25224568
0.18565343
0.16088654
0.18828622
0.53647832
0.19721238
0.58917457
0.86118901
0.18544103
0.13384477
0.28983871
0.25224568
0.14251213
0.06470221
0.03078543
0.21352143
0.40447661
0.2398476
0.21834235
0.03078543
0.34326297
0.21834235
0.03228126
0.19959471
0.6622971
0.23630017
0.32687157
0.87606612
0.36516341
0.25934622
0.14087584
0.58857402
";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("line {line}: invalid score {text:?}")]
    InvalidScore {
        line: usize,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("line {line}: negative score {value}")]
    NegativeScore { line: usize, value: f64 },
}

/// Parse a newline-separated score block. Blank lines are skipped; every
/// remaining line must be a non-negative float.
pub fn parse_scores(raw: &str) -> Result<Vec<f64>, StoreError> {
    let mut scores = Vec::new();
    for (idx, text) in raw.lines().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let value: f64 = text.parse().map_err(|source| StoreError::InvalidScore {
            line: idx + 1,
            text: text.to_string(),
            source,
        })?;
        if value < 0.0 {
            return Err(StoreError::NegativeScore {
                line: idx + 1,
                value,
            });
        }
        scores.push(value);
    }
    Ok(scores)
}

/// Build the process-lifetime [`ScoreStore`] from the embedded constants.
pub fn builtin_store() -> Result<ScoreStore> {
    let success = parse_scores(SUCCESS_SCORES).context("parsing embedded success scores")?;
    let failure = parse_scores(FAILURE_SCORES).context("parsing embedded failure scores")?;

    Ok(ScoreStore::new(
        ScoreSeries::new(Category::Success, success),
        ScoreSeries::new(Category::Failure, failure),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_has_expected_sizes() {
        let store = builtin_store().unwrap();
        assert_eq!(store.success.len(), 69);
        assert_eq!(store.failure.len(), 35);
        assert!(store.rows().all(|r| r.score >= 0.0));
    }

    #[test]
    fn builtin_store_keeps_source_order() {
        let store = builtin_store().unwrap();
        assert_eq!(store.success.scores()[0], 0.82979212);
        assert_eq!(store.success.scores()[1], 0.19645161);
        assert_eq!(store.failure.scores()[0], 0.13979679);
        assert_eq!(store.failure.scores()[34], 0.58857402);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let scores = parse_scores("\n0.5\n\n  \n1.25\n").unwrap();
        assert_eq!(scores, vec![0.5, 1.25]);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_scores("0.5\nnot-a-number\n").unwrap_err();
        assert!(matches!(err, StoreError::InvalidScore { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_negative_scores() {
        let err = parse_scores("0.5\n-0.1\n").unwrap_err();
        assert!(matches!(err, StoreError::NegativeScore { line: 2, .. }));
    }
}
