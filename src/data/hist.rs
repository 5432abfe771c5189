// ---------------------------------------------------------------------------
// Fixed-bin histogram for the overlay chart
// ---------------------------------------------------------------------------

/// Number of bins in the score histogram.
pub const BIN_COUNT: usize = 20;

/// One histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Bin `values` into `bins` equal-width buckets over `range`.
///
/// Values outside `range` are ignored; the upper edge is inclusive so the
/// maximum lands in the last bin. Degenerate ranges (min == max) collapse to
/// a single bin holding everything at that value.
pub fn histogram(values: &[f64], bins: usize, range: (f64, f64)) -> Vec<HistBin> {
    let (lo, hi) = range;
    if bins == 0 || values.is_empty() || hi < lo {
        return Vec::new();
    }

    if hi == lo {
        let count = values.iter().filter(|&&v| v == lo).count();
        return vec![HistBin {
            center: lo,
            width: 0.0,
            count,
        }];
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        if v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistBin {
            center: lo + width * (i as f64 + 0.5),
            width,
            count,
        })
        .collect()
}

/// Shared bin range for both filtered series, so the two overlays line up on
/// the same edges. `None` when there is nothing left to bin.
pub fn shared_range(success: &[f64], failure: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in success.iter().chain(failure) {
        min = min.min(v);
        max = max.max(v);
    }
    if min <= max {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_conserved_inside_the_range() {
        let values = [0.05, 0.15, 0.15, 0.95, 0.5];
        let bins = histogram(&values, BIN_COUNT, (0.0, 1.0));
        assert_eq!(bins.len(), BIN_COUNT);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn upper_edge_is_inclusive() {
        let bins = histogram(&[1.0], 4, (0.0, 1.0));
        assert_eq!(bins[3].count, 1);
    }

    #[test]
    fn values_outside_range_are_ignored() {
        let bins = histogram(&[-0.5, 0.5, 1.5], 2, (0.0, 1.0));
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn empty_input_yields_no_bins() {
        assert!(histogram(&[], BIN_COUNT, (0.0, 1.0)).is_empty());
    }

    #[test]
    fn degenerate_range_collapses_to_one_bin() {
        let bins = histogram(&[0.4, 0.4, 0.4], 20, (0.4, 0.4));
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn shared_range_spans_both_series() {
        assert_eq!(shared_range(&[0.2, 0.9], &[0.1, 0.5]), Some((0.1, 0.9)));
        assert_eq!(shared_range(&[0.3], &[]), Some((0.3, 0.3)));
        assert_eq!(shared_range(&[], &[]), None);
    }
}
