use tracing::trace;

use crate::error::{GanLossError, Result};
use crate::gan::{least_squares, standard, DiscriminatorGradients};
use crate::loss::loss_type::GanObjective;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

impl GanObjective {
    /// Discriminator loss for this objective. Inputs are logits for
    /// `Minimax` and raw scores for `LeastSquares`.
    pub fn discriminator_loss(self, real: &[f64], fake: &[f64]) -> f64 {
        let loss = match self {
            GanObjective::Minimax      => standard::discriminator_loss(real, fake),
            GanObjective::LeastSquares => least_squares::ls_discriminator_loss(real, fake),
        };
        trace!(objective = ?self, n_real = real.len(), n_fake = fake.len(), loss, "discriminator loss");
        loss
    }

    /// Generator loss for this objective, on the discriminator's outputs
    /// for generated samples.
    pub fn generator_loss(self, fake: &[f64]) -> f64 {
        let loss = match self {
            GanObjective::Minimax      => standard::generator_loss(fake),
            GanObjective::LeastSquares => least_squares::ls_generator_loss(fake),
        };
        trace!(objective = ?self, n_fake = fake.len(), loss, "generator loss");
        loss
    }

    /// Gradient of [`GanObjective::discriminator_loss`] with respect to
    /// both batches.
    pub fn discriminator_grad(self, real: &[f64], fake: &[f64]) -> DiscriminatorGradients {
        let grads = match self {
            GanObjective::Minimax      => standard::discriminator_loss_grad(real, fake),
            GanObjective::LeastSquares => least_squares::ls_discriminator_loss_grad(real, fake),
        };
        trace!(
            objective = ?self,
            n_real = real.len(),
            n_fake = fake.len(),
            real_norm = l2_norm(&grads.real),
            fake_norm = l2_norm(&grads.fake),
            "discriminator grad"
        );
        grads
    }

    /// Gradient of [`GanObjective::generator_loss`] with respect to the fake
    /// batch.
    pub fn generator_grad(self, fake: &[f64]) -> Vec<f64> {
        let grad = match self {
            GanObjective::Minimax      => standard::generator_loss_grad(fake),
            GanObjective::LeastSquares => least_squares::ls_generator_loss_grad(fake),
        };
        trace!(objective = ?self, n_fake = fake.len(), fake_norm = l2_norm(&grad), "generator grad");
        grad
    }

    /// Like [`GanObjective::discriminator_loss`], but an empty batch is an
    /// error instead of NaN.
    pub fn try_discriminator_loss(self, real: &[f64], fake: &[f64]) -> Result<f64> {
        non_empty("real", real)?;
        non_empty("fake", fake)?;
        Ok(self.discriminator_loss(real, fake))
    }

    /// Like [`GanObjective::generator_loss`], but an empty batch is an error
    /// instead of NaN.
    pub fn try_generator_loss(self, fake: &[f64]) -> Result<f64> {
        non_empty("fake", fake)?;
        Ok(self.generator_loss(fake))
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn non_empty(which: &'static str, batch: &[f64]) -> Result<()> {
    if batch.is_empty() {
        return Err(GanLossError::EmptyBatch { which });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::LN_2;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a TRACE-level fmt subscriber and returns what it printed.
    fn capture_traces(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn minimax_routes_to_bce() {
        let obj = GanObjective::Minimax;
        assert_relative_eq!(obj.discriminator_loss(&[0.0], &[0.0]), 2.0 * LN_2);
        assert_relative_eq!(obj.generator_loss(&[0.0]), LN_2);
        assert_eq!(obj.generator_grad(&[0.0]), standard::generator_loss_grad(&[0.0]));
    }

    #[test]
    fn least_squares_routes_to_half_mse() {
        let obj = GanObjective::LeastSquares;
        assert_eq!(obj.discriminator_loss(&[1.0], &[0.0]), 0.0);
        assert_relative_eq!(obj.generator_loss(&[0.0]), 0.5);
        assert_eq!(
            obj.discriminator_grad(&[2.0], &[1.0]),
            least_squares::ls_discriminator_loss_grad(&[2.0], &[1.0]),
        );
    }

    #[test]
    fn every_dispatch_emits_a_trace_event() {
        let logs = capture_traces(|| {
            let obj = GanObjective::LeastSquares;
            obj.discriminator_loss(&[1.0, 2.0], &[0.0]);
            obj.generator_loss(&[0.0]);
            obj.discriminator_grad(&[1.0, 2.0], &[0.0]);
            obj.generator_grad(&[0.0, 3.0, 1.0]);
        });

        assert!(logs.contains("discriminator loss"));
        assert!(logs.contains("generator loss"));
        assert!(logs.contains("discriminator grad"));
        assert!(logs.contains("generator grad"));
        assert!(logs.contains("n_real=2"));
        assert!(logs.contains("n_fake=3"));
        assert!(logs.contains("fake_norm="));
    }

    #[test]
    fn default_is_minimax() {
        assert_eq!(GanObjective::default(), GanObjective::Minimax);
    }

    #[test]
    fn checked_losses_reject_empty_batches() {
        let obj = GanObjective::LeastSquares;
        let err = obj.try_discriminator_loss(&[1.0], &[]).unwrap_err();
        assert!(matches!(err, GanLossError::EmptyBatch { which: "fake" }));

        let err = obj.try_generator_loss(&[]).unwrap_err();
        assert!(err.to_string().contains("fake batch is empty"));

        assert!(obj.try_discriminator_loss(&[], &[0.0]).is_err());
    }

    #[test]
    fn checked_losses_agree_with_unchecked() {
        let obj = GanObjective::Minimax;
        let checked = obj.try_discriminator_loss(&[0.5, -1.0], &[2.0]).unwrap();
        assert_eq!(checked, obj.discriminator_loss(&[0.5, -1.0], &[2.0]));
        assert_eq!(obj.try_generator_loss(&[3.0]).unwrap(), obj.generator_loss(&[3.0]));
    }

    #[test]
    fn unchecked_losses_are_nan_on_empty() {
        assert!(GanObjective::Minimax.generator_loss(&[]).is_nan());
        assert!(GanObjective::LeastSquares.discriminator_loss(&[], &[]).is_nan());
    }
}
