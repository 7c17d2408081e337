use crate::math::stable::sigmoid;

/// Binary cross-entropy on raw logits against a single constant target.
///
/// Never forms σ(x) on the loss path: each term is
/// `max(x, 0) − x·t + ln(1 + e^(−|x|))`, which stays finite for any finite
/// logit.
pub struct BceWithLogitsLoss;

impl BceWithLogitsLoss {
    /// Scalar BCE: mean(max(x,0) − x·t + ln(1 + e^(−|x|)))
    ///
    /// An empty batch yields NaN (0 / 0).
    pub fn loss(logits: &[f64], target: f64) -> f64 {
        let n = logits.len() as f64;
        logits.iter()
            .map(|&x| Self::term(x, target))
            .sum::<f64>() / n
    }

    /// Per-logit gradient of the mean: (σ(x) − t) / n
    pub fn derivative(logits: &[f64], target: f64) -> Vec<f64> {
        let n = logits.len() as f64;
        logits.iter()
            .map(|&x| (sigmoid(x) - target) / n)
            .collect()
    }

    // The large parts cancel before the tail is added, so e^-|x| survives
    // for confident logits.
    fn term(x: f64, target: f64) -> f64 {
        x.max(0.0) - x * target + (-x.abs()).exp().ln_1p()
    }
}
