use crate::data::filter::FilteredView;
use crate::data::model::ScoreStore;
use crate::data::ratio::RatioCurve;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Slider bounds and default, matching the documented control surface.
pub const THRESHOLD_MIN: f64 = 0.0;
pub const THRESHOLD_MAX: f64 = 2.0;
pub const THRESHOLD_STEP: f64 = 0.01;
pub const THRESHOLD_DEFAULT: f64 = 0.5;

/// The full UI state, independent of rendering.
///
/// The store and ratio curve are fixed for the process lifetime; only the
/// threshold moves, and `view` is the cache derived from it.
pub struct AppState {
    /// The two fixed score series.
    pub store: ScoreStore,

    /// Current slider value. Owned here, read by the pure computations.
    pub threshold: f64,

    /// Filtered scores and table rows for the current threshold (cached).
    pub view: FilteredView,

    /// The threshold sweep, computed once at startup.
    pub ratio_curve: RatioCurve,
}

impl AppState {
    /// Build the state around a loaded store, at the default threshold.
    pub fn new(store: ScoreStore) -> Self {
        let ratio_curve =
            RatioCurve::compute(store.success.scores(), store.failure.scores());
        let view = FilteredView::compute(&store, THRESHOLD_DEFAULT);
        AppState {
            store,
            threshold: THRESHOLD_DEFAULT,
            view,
            ratio_curve,
        }
    }

    /// Recompute the cached view after a threshold change.
    pub fn refilter(&mut self) {
        self.view = FilteredView::compute(&self.store, self.threshold);
    }

    /// Slider handler: clamp to the control's bounds and refilter.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold.clamp(THRESHOLD_MIN, THRESHOLD_MAX);
        self.refilter();
    }
}
