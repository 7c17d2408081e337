pub mod bce;
pub mod least_squares;
pub mod loss_type;

pub use bce::BceWithLogitsLoss;
pub use least_squares::LeastSquaresLoss;
pub use loss_type::GanObjective;
