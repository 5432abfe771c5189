// ---------------------------------------------------------------------------
// Ratio curve – success-rate / failure-rate across a threshold sweep
// ---------------------------------------------------------------------------

/// Number of grid points in the threshold sweep.
pub const GRID_POINTS: usize = 100;

/// One point of the ratio curve. `ratio` is `None` where the failure-rate
/// denominator is zero; charts must render those as gaps, never as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPoint {
    pub threshold: f64,
    pub ratio: Option<f64>,
}

/// The full sweep, computed once at startup. Independent of the
/// interactively-chosen threshold.
#[derive(Debug, Clone)]
pub struct RatioCurve {
    pub points: Vec<RatioPoint>,
}

/// Fixed ascending grid: 100 evenly spaced thresholds across [0, 1].
///
/// Note the grid deliberately stops short of the slider's [0, 2] range;
/// widening the sweep would change the ratio chart's x extent.
pub fn threshold_grid() -> Vec<f64> {
    linspace(0.0, 1.0, GRID_POINTS)
}

/// `n` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Fraction of `scores` at or above `t`. Empty input counts as rate 0 so the
/// caller's division-by-zero guard kicks in instead of a NaN.
fn retained_rate(scores: &[f64], t: f64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let kept = scores.iter().filter(|&&s| s >= t).count();
    kept as f64 / scores.len() as f64
}

/// Ratio of retained fractions at each grid point.
///
/// Both rates are non-increasing in `t`, but the ratio itself is not
/// monotonic and may be undefined over stretches where no failure survives.
pub fn ratio_curve(success: &[f64], failure: &[f64], grid: &[f64]) -> Vec<Option<f64>> {
    grid.iter()
        .map(|&t| {
            let succ_rate = retained_rate(success, t);
            let fail_rate = retained_rate(failure, t);
            if fail_rate != 0.0 {
                Some(succ_rate / fail_rate)
            } else {
                None
            }
        })
        .collect()
}

impl RatioCurve {
    /// Sweep the standard grid over both series.
    pub fn compute(success: &[f64], failure: &[f64]) -> Self {
        let grid = threshold_grid();
        let ratios = ratio_curve(success, failure, &grid);
        let points = grid
            .into_iter()
            .zip(ratios)
            .map(|(threshold, ratio)| RatioPoint { threshold, ratio })
            .collect();
        RatioCurve { points }
    }

    /// Contiguous runs of defined points, for gap-aware line rendering.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for p in &self.points {
            match p.ratio {
                Some(r) => current.push([p.threshold, r]),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}
