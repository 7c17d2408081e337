use serde::{Serialize, Deserialize};

/// Selects which adversarial objective a loss call uses.
///
/// - `Minimax`      — standard GAN; inputs are logits, losses are stable BCE.
/// - `LeastSquares` — LSGAN; inputs are raw scores, losses are half-MSE
///   against targets 1 (real) and 0 (fake).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GanObjective {
    #[default]
    Minimax,
    LeastSquares,
}
