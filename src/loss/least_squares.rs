pub struct LeastSquaresLoss;

impl LeastSquaresLoss {
    /// Scalar half-MSE: 0.5·mean((x − t)²)
    pub fn loss(scores: &[f64], target: f64) -> f64 {
        let n = scores.len() as f64;
        0.5 * scores.iter()
            .map(|x| (x - target).powi(2))
            .sum::<f64>() / n
    }

    /// Per-score gradient of the half-mean: (x − t) / n
    pub fn derivative(scores: &[f64], target: f64) -> Vec<f64> {
        let n = scores.len() as f64;
        scores.iter()
            .map(|x| (x - target) / n)
            .collect()
    }
}
