use std::fmt;

// ---------------------------------------------------------------------------
// Category – which of the two fixed populations a score belongs to
// ---------------------------------------------------------------------------

/// Label for the two score populations being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Failure,
}

impl Category {
    /// The lane the category occupies on the scatter strip's y axis.
    pub fn lane(self) -> f64 {
        match self {
            Category::Success => 1.0,
            Category::Failure => 0.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Success => write!(f, "success"),
            Category::Failure => write!(f, "failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreRow – one (score, category) record, as shown in the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRow {
    pub score: f64,
    pub category: Category,
}

// ---------------------------------------------------------------------------
// ScoreSeries – one labeled, ordered score list
// ---------------------------------------------------------------------------

/// An ordered sequence of non-negative scores, tagged with its category.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct ScoreSeries {
    category: Category,
    scores: Vec<f64>,
}

impl ScoreSeries {
    pub fn new(category: Category, scores: Vec<f64>) -> Self {
        ScoreSeries { category, scores }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ScoreStore – both series, fixed for the process lifetime
// ---------------------------------------------------------------------------

/// The two fixed series, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    pub success: ScoreSeries,
    pub failure: ScoreSeries,
}

impl ScoreStore {
    pub fn new(success: ScoreSeries, failure: ScoreSeries) -> Self {
        debug_assert_eq!(success.category(), Category::Success);
        debug_assert_eq!(failure.category(), Category::Failure);
        ScoreStore { success, failure }
    }

    /// All rows in source order: the success series first, then failure.
    pub fn rows(&self) -> impl Iterator<Item = ScoreRow> + '_ {
        let succ = self.success.scores().iter().map(|&score| ScoreRow {
            score,
            category: Category::Success,
        });
        let fail = self.failure.scores().iter().map(|&score| ScoreRow {
            score,
            category: Category::Failure,
        });
        succ.chain(fail)
    }

    /// Total number of rows across both series.
    pub fn len(&self) -> usize {
        self.success.len() + self.failure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.failure.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_preserve_source_order() {
        let store = ScoreStore::new(
            ScoreSeries::new(Category::Success, vec![0.9, 0.1]),
            ScoreSeries::new(Category::Failure, vec![0.3]),
        );
        let rows: Vec<ScoreRow> = store.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].score, 0.9);
        assert_eq!(rows[0].category, Category::Success);
        assert_eq!(rows[1].score, 0.1);
        assert_eq!(rows[2].category, Category::Failure);
    }

    #[test]
    fn lanes_are_distinct() {
        assert_ne!(Category::Success.lane(), Category::Failure.lane());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Category::Success.to_string(), "success");
        assert_eq!(Category::Failure.to_string(), "failure");
    }
}
