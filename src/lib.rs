pub mod math;
pub mod loss;
pub mod gan;
pub mod config;
pub mod error;

// Convenience re-exports
pub use gan::{
    discriminator_loss, generator_loss, ls_discriminator_loss, ls_generator_loss,
    discriminator_loss_grad, generator_loss_grad, ls_discriminator_loss_grad, ls_generator_loss_grad,
    DiscriminatorGradients,
};
pub use loss::{BceWithLogitsLoss, LeastSquaresLoss, GanObjective};
pub use config::LossConfig;
pub use error::{GanLossError, Result};
