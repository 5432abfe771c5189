use super::model::{ScoreRow, ScoreStore};

// ---------------------------------------------------------------------------
// Threshold filter – the only computation the slider drives
// ---------------------------------------------------------------------------

/// Return every score ≥ `threshold`, in original order.
///
/// Pure and total: an empty input or a threshold above every score simply
/// yields an empty vector.
pub fn filter_scores(scores: &[f64], threshold: f64) -> Vec<f64> {
    scores.iter().copied().filter(|&s| s >= threshold).collect()
}

/// `(filtered_count, total_count)` for the textual `X / Y` readouts.
pub fn counts(original: &[f64], filtered: &[f64]) -> (usize, usize) {
    (filtered.len(), original.len())
}

// ---------------------------------------------------------------------------
// FilteredView – everything derived from one threshold value
// ---------------------------------------------------------------------------

/// The derived view for the current threshold. Recomputed on every slider
/// change, never persisted.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub threshold: f64,
    pub success: Vec<f64>,
    pub failure: Vec<f64>,
    pub success_total: usize,
    pub failure_total: usize,
    /// Rows passing the filter, in store order, for the table.
    pub rows: Vec<ScoreRow>,
}

impl FilteredView {
    /// Apply `threshold` to both series of the store.
    pub fn compute(store: &ScoreStore, threshold: f64) -> Self {
        let success = filter_scores(store.success.scores(), threshold);
        let failure = filter_scores(store.failure.scores(), threshold);
        let (_, success_total) = counts(store.success.scores(), &success);
        let (_, failure_total) = counts(store.failure.scores(), &failure);
        let rows = store.rows().filter(|r| r.score >= threshold).collect();

        FilteredView {
            threshold,
            success,
            failure,
            success_total,
            failure_total,
            rows,
        }
    }

    pub fn success_counts(&self) -> (usize, usize) {
        (self.success.len(), self.success_total)
    }

    pub fn failure_counts(&self) -> (usize, usize) {
        (self.failure.len(), self.failure_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Category, ScoreSeries};

    fn sample_store() -> ScoreStore {
        ScoreStore::new(
            ScoreSeries::new(Category::Success, vec![0.82979212, 0.19645161, 0.2932987]),
            ScoreSeries::new(Category::Failure, vec![0.13979679, 0.34956851]),
        )
    }

    #[test]
    fn filter_keeps_only_scores_at_or_above_threshold() {
        let filtered = filter_scores(&[0.1, 0.5, 0.3, 0.9], 0.3);
        assert!(filtered.iter().all(|&s| s >= 0.3));
        assert_eq!(filtered, vec![0.5, 0.3, 0.9]);
    }

    #[test]
    fn filter_is_order_preserving_subsequence() {
        let scores = [0.9, 0.1, 0.8, 0.2, 0.7];
        let filtered = filter_scores(&scores, 0.5);
        assert_eq!(filtered, vec![0.9, 0.8, 0.7]);
        assert!(filtered.len() <= scores.len());
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let scores = [0.3, 0.0, 1.2];
        assert_eq!(filter_scores(&scores, 0.0), scores.to_vec());
    }

    #[test]
    fn threshold_above_max_keeps_nothing() {
        assert!(filter_scores(&[0.3, 0.9, 1.2], 1.3).is_empty());
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(filter_scores(&[], 0.5).is_empty());
    }

    #[test]
    fn counts_are_bounded() {
        let original = [0.1, 0.6, 0.7];
        let filtered = filter_scores(&original, 0.5);
        let (kept, total) = counts(&original, &filtered);
        assert!(kept <= total);
        assert_eq!((kept, total), (2, 3));
    }

    #[test]
    fn view_at_default_threshold() {
        // Threshold 0.5 on the documented sample data: one success, no failures.
        let view = FilteredView::compute(&sample_store(), 0.5);
        assert_eq!(view.success, vec![0.82979212]);
        assert!(view.failure.is_empty());
        assert_eq!(view.success_counts(), (1, 3));
        assert_eq!(view.failure_counts(), (0, 2));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].score, 0.82979212);
        assert_eq!(view.rows[0].category, Category::Success);
    }

    #[test]
    fn view_at_zero_retains_all_rows() {
        let view = FilteredView::compute(&sample_store(), 0.0);
        assert_eq!(view.success.len(), 3);
        assert_eq!(view.failure.len(), 2);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn view_at_slider_maximum_is_empty() {
        let view = FilteredView::compute(&sample_store(), 2.0);
        assert!(view.success.is_empty());
        assert!(view.failure.is_empty());
        assert!(view.rows.is_empty());
        assert_eq!(view.success_counts(), (0, 3));
        assert_eq!(view.failure_counts(), (0, 2));
    }
}
