//! Minimax GAN losses on discriminator logits.
//!
//! Targets are implicit: 1 for real examples, 0 for fake ones. Every term
//! goes through [`BceWithLogitsLoss`], so logits of any finite magnitude
//! give a finite loss.

use crate::gan::DiscriminatorGradients;
use crate::loss::bce::BceWithLogitsLoss;

const REAL: f64 = 1.0;
const FAKE: f64 = 0.0;

/// mean(BCE(logits_real, 1)) + mean(BCE(logits_fake, 0))
///
/// The two batches are averaged independently, so their lengths may differ.
pub fn discriminator_loss(logits_real: &[f64], logits_fake: &[f64]) -> f64 {
    BceWithLogitsLoss::loss(logits_real, REAL) + BceWithLogitsLoss::loss(logits_fake, FAKE)
}

/// mean(BCE(logits_fake, 1)): the generator wants its samples scored as real.
pub fn generator_loss(logits_fake: &[f64]) -> f64 {
    BceWithLogitsLoss::loss(logits_fake, REAL)
}

/// Gradient of [`discriminator_loss`] with respect to both logit batches.
pub fn discriminator_loss_grad(logits_real: &[f64], logits_fake: &[f64]) -> DiscriminatorGradients {
    DiscriminatorGradients {
        real: BceWithLogitsLoss::derivative(logits_real, REAL),
        fake: BceWithLogitsLoss::derivative(logits_fake, FAKE),
    }
}

/// Gradient of [`generator_loss`] with respect to the fake logits.
pub fn generator_loss_grad(logits_fake: &[f64]) -> Vec<f64> {
    BceWithLogitsLoss::derivative(logits_fake, REAL)
}
