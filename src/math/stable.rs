/// Logistic sigmoid σ(x) = 1 / (1 + e^(−x)).
///
/// Evaluated in two branches so that `exp` only ever sees a non-positive
/// argument; large |x| saturates to 0 or 1 instead of overflowing.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
