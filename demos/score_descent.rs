use ferrite_gan::{GanObjective, LossConfig};
use tracing::info;

// Treats the discriminator outputs themselves as parameters and descends the
// loss gradients directly, which is what a backward pass would be seeded with.
fn run(config: LossConfig) {
    let objective = config.objective;
    let mut real = vec![-0.5, 0.2, 0.1, -1.0];
    let mut fake = vec![0.8, 0.3, 1.5];
    let lr = 2.0;
    let steps = 500;

    for step in 0..=steps {
        if step % 100 == 0 {
            info!(
                ?objective,
                step,
                d_loss = objective.discriminator_loss(&real, &fake),
                g_loss = objective.generator_loss(&fake),
                "scores"
            );
        }
        let grads = objective.discriminator_grad(&real, &fake);
        for (x, g) in real.iter_mut().zip(grads.real.iter()) {
            *x -= lr * g;
        }
        for (x, g) in fake.iter_mut().zip(grads.fake.iter()) {
            *x -= lr * g;
        }
    }

    println!("{objective:?}: real -> {real:.3?}, fake -> {fake:.3?}");
}

fn main() {
    tracing_subscriber::fmt().init();

    run(LossConfig::new(GanObjective::Minimax));
    run(LossConfig::new(GanObjective::LeastSquares));
}
