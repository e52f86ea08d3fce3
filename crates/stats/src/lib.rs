//! Statistical helper functions for the demeter analysis pipeline.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Mean over the present entries of a sparse column.
///
/// Returns `None` when every entry is absent. This is the neutral
/// placeholder value used to condition the smoothing system before missing
/// positions are re-estimated.
pub fn mean_present(data: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in data.iter().flatten() {
        sum += value;
        count += 1;
    }
    if count == 0 { None } else { Some(sum / count as f64) }
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n as f64 - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}
