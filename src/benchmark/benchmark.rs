use std::time::Instant;

use crate::simulation::engine::{step, RayonFor, SequentialFor};
use crate::simulation::forces::ForceKernel;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, SimulationState};

/// Deterministic particle soup, no rand needed
fn bench_particles(n: usize) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let position = NVec2::new(
            ((i_f * 0.37).sin() * 0.5 + 0.5).rem_euclid(1.0),
            ((i_f * 0.13).cos() * 0.5 + 0.5).rem_euclid(1.0),
        );

        particles.push(Particle {
            position,
            velocity: NVec2::zeros(),
            category: (i % 3) as u32,
        });
    }

    particles
}

fn bench_params() -> Parameters {
    Parameters {
        k: 3,
        interaction_radius: 0.02,
        attraction: 2.667e-7,
        max_velocity: 1.333e-3,
        eps2: 0.0,
        seed: 42,
    }
}

/// Time one full all-pairs force pass (no integration) at various N.
pub fn bench_force() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let particles = bench_particles(n);
        let parameters = bench_params();
        let kernel = ForceKernel::new(&parameters);

        let mut out = vec![(NVec2::zeros(), 0u32); n];

        // Warm up
        for i in 0..n {
            out[i] = kernel.compute(i, &particles);
        }

        let t0 = Instant::now();
        for i in 0..n {
            out[i] = kernel.compute(i, &particles);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {:8.6} s", dt);
    }
}

/// Time full steps (force + integrate + swap), sequential vs rayon.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 10;

    for n in ns {
        let parameters = bench_params();
        let kernel = ForceKernel::new(&parameters);

        let mut seq_state = SimulationState::new(bench_particles(n));
        let mut par_state = SimulationState::new(bench_particles(n));

        // Warm up
        step(&mut seq_state, &kernel, &parameters, &SequentialFor);
        step(&mut par_state, &kernel, &parameters, &RayonFor);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut seq_state, &kernel, &parameters, &SequentialFor);
        }
        let dt_seq = t0.elapsed().as_secs_f64() / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            step(&mut par_state, &kernel, &parameters, &RayonFor);
        }
        let dt_par = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, sequential = {:8.6} s/step, rayon = {:8.6} s/step",
            dt_seq, dt_par
        );
    }
}
