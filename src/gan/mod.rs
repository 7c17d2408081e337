pub mod standard;
pub mod least_squares;
pub mod objective;

pub use standard::{discriminator_loss, generator_loss, discriminator_loss_grad, generator_loss_grad};
pub use least_squares::{
    ls_discriminator_loss, ls_generator_loss, ls_discriminator_loss_grad, ls_generator_loss_grad,
};

/// Gradient of a discriminator loss with respect to both of its batches.
///
/// `real[i]` is ∂loss/∂real_i and `fake[i]` is ∂loss/∂fake_i; each already
/// carries the 1/N of its own mean, so it can seed a backward pass as is.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatorGradients {
    pub real: Vec<f64>,
    pub fake: Vec<f64>,
}
