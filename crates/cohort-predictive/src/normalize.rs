//! Softmax normalization of raw scenario scores.

/// Map raw scores onto a probability simplex, preserving index order.
///
/// The maximum is subtracted before exponentiating so large magnitudes neither
/// overflow to infinity nor underflow every term to zero.
pub fn softmax<const N: usize>(scores: [f64; N]) -> [f64; N] {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps = scores.map(|score| (score - max).exp());
    let total: f64 = exps.iter().sum();
    exps.map(|value| value / total)
}
