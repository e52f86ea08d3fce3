//! Secondary-statistic column interpolation.
//!
//! The secondary statistics (std dev, min, max) are not driven through the
//! smoother; short interior gaps in each column are filled with a natural
//! cubic through that column's own observed positions. Edge gaps (before
//! the first or after the last observed value of the column) and gaps
//! longer than the threshold stay absent — only the primary statistic is
//! guaranteed filled in retained rows.

use crate::runs::missing_runs;
use crate::spline::NaturalCubic;

/// Fills short interior missing runs of one sparse column.
///
/// Returns the column with eligible positions estimated; all other
/// positions are carried through unchanged. Columns with fewer than 2
/// observed values have nothing to interpolate between and are returned
/// as-is.
pub(crate) fn fill_column(values: &[Option<f64>], max_gap_days: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let observed: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|value| (i, value)))
        .collect();
    if observed.len() < 2 {
        return values.to_vec();
    }

    let xs: Vec<f64> = observed.iter().map(|&(i, _)| i as f64).collect();
    let ys: Vec<f64> = observed.iter().map(|&(_, v)| v).collect();
    let spline = NaturalCubic::fit(&xs, &ys);

    let missing: Vec<bool> = values.iter().map(|v| v.is_none()).collect();
    let mut filled = values.to_vec();
    for run in missing_runs(&missing) {
        // Interior means an observed value on both sides of the run.
        let interior = run.start > 0 && run.end() < n;
        if !interior || run.len > max_gap_days {
            continue;
        }
        for pos in run.positions() {
            filled[pos] = Some(spline.eval(pos as f64));
        }
    }
    filled
}
