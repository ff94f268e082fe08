use num_traits::ToPrimitive;
use serde::Serialize;

use super::align::AlignedPoint;

/// Pearson coefficient over an aligned sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Always within `[-1, 1]`
    pub coefficient: f64,
    pub sample_size: usize,
}

/// Pearson correlation of the two columns of `pairs`.
///
/// Returns `None` when the coefficient is undefined: fewer than two samples,
/// a constant column, or a non-finite intermediate value.
pub fn correlate(pairs: &[AlignedPoint]) -> Option<CorrelationResult> {
    let n = pairs.len();
    if n < 2 {
        return None;
    }

    // Exact check on decimals; float variance of a constant column can be a
    // tiny non-zero residue.
    let first = &pairs[0];
    if pairs.iter().all(|p| p.a == first.a) || pairs.iter().all(|p| p.b == first.b) {
        return None;
    }

    let xs: Vec<f64> = pairs.iter().map(|p| p.a.to_f64()).collect::<Option<_>>()?;
    let ys: Vec<f64> = pairs.iter().map(|p| p.b.to_f64()).collect::<Option<_>>()?;

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (x, y) in xs.iter().zip(&ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    let coefficient = cov / denominator;
    if !coefficient.is_finite() {
        return None;
    }

    Some(CorrelationResult {
        coefficient: coefficient.clamp(-1.0, 1.0),
        sample_size: n,
    })
}
