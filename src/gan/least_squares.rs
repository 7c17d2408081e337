//! Least-squares (LSGAN) losses on raw discriminator scores.

use crate::gan::DiscriminatorGradients;
use crate::loss::least_squares::LeastSquaresLoss;

const REAL: f64 = 1.0;
const FAKE: f64 = 0.0;

/// 0.5·mean((scores_real − 1)²) + 0.5·mean(scores_fake²)
///
/// Zero exactly when every real score is 1 and every fake score is 0, up to
/// f64 underflow: a residual below ~1e-154 squares to 0, so e.g. a fake
/// score of 1e-200 also gives 0.
pub fn ls_discriminator_loss(scores_real: &[f64], scores_fake: &[f64]) -> f64 {
    LeastSquaresLoss::loss(scores_real, REAL) + LeastSquaresLoss::loss(scores_fake, FAKE)
}

/// 0.5·mean((scores_fake − 1)²)
///
/// Zero exactly when every fake score is 1, up to the same underflow limit.
pub fn ls_generator_loss(scores_fake: &[f64]) -> f64 {
    LeastSquaresLoss::loss(scores_fake, REAL)
}

/// Gradient of [`ls_discriminator_loss`]: (real − 1)/N and fake/M.
pub fn ls_discriminator_loss_grad(scores_real: &[f64], scores_fake: &[f64]) -> DiscriminatorGradients {
    DiscriminatorGradients {
        real: LeastSquaresLoss::derivative(scores_real, REAL),
        fake: LeastSquaresLoss::derivative(scores_fake, FAKE),
    }
}

/// Gradient of [`ls_generator_loss`]: (fake − 1)/M.
pub fn ls_generator_loss_grad(scores_fake: &[f64]) -> Vec<f64> {
    LeastSquaresLoss::derivative(scores_fake, REAL)
}
