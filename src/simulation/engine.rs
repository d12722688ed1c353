//! Step orchestration and execution strategy
//!
//! The per-particle body (force kernel + integrator) is embarrassingly
//! data-parallel: each index reads only the shared current buffer and
//! writes only its own slot in the next buffer. [`ParallelFor`] abstracts
//! how those N iterations are executed so the same step function runs
//! sequentially or fanned out over a rayon thread pool.

use rayon::prelude::*;

use crate::configuration::config::ExecutorConfig;
use crate::simulation::forces::ForceKernel;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Particle, SimulationState};

/// Execution strategy for the per-index scan phase. Implementations must
/// fill `out[i] = kernel(i)` for every index; they are free to choose any
/// order or degree of parallelism since slots are independent.
pub trait ParallelFor: Send + Sync {
    fn for_each(&self, out: &mut [Particle], kernel: &(dyn Fn(usize) -> Particle + Send + Sync));
}

/// Plain in-order loop on the calling thread.
pub struct SequentialFor;

impl ParallelFor for SequentialFor {
    fn for_each(&self, out: &mut [Particle], kernel: &(dyn Fn(usize) -> Particle + Send + Sync)) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = kernel(i);
        }
    }
}

/// Fan the scan out over rayon's global thread pool, one task per slot
/// chunk. `for_each` returns only after every slot is written, which gives
/// the step function its swap barrier for free.
pub struct RayonFor;

impl ParallelFor for RayonFor {
    fn for_each(&self, out: &mut [Particle], kernel: &(dyn Fn(usize) -> Particle + Send + Sync)) {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, slot)| *slot = kernel(i));
    }
}

/// Engine settings: which executor runs the scan phase.
pub struct Engine {
    pub executor: Box<dyn ParallelFor>,
}

impl Engine {
    pub fn new(cfg: &ExecutorConfig) -> Self {
        let executor: Box<dyn ParallelFor> = match cfg {
            ExecutorConfig::Sequential => Box::new(SequentialFor),
            ExecutorConfig::Rayon => Box::new(RayonFor),
        };
        Self { executor }
    }
}

/// Advance the simulation by one synchronous (Jacobi-style) step.
///
/// Every index runs the force kernel against the read-only current buffer
/// and the integrator against its own previous state, writing the result
/// into the other buffer at the same index. No particle's movement within
/// a step influences another's force computation in that step. The buffer
/// flag flips only after the executor joins, so readers of `current` never
/// observe a half-written generation.
pub fn step(
    state: &mut SimulationState,
    forces: &ForceKernel,
    params: &Parameters,
    executor: &dyn ParallelFor,
) {
    let max_velocity = params.max_velocity;
    let (current, next) = state.split();

    executor.for_each(next, &|i| {
        let (force, category) = forces.compute(i, current);
        let p = &current[i];
        let (velocity, position) = integrate(p.position, p.velocity, force, max_velocity);
        Particle {
            position,
            velocity,
            category,
        }
    });

    state.swap();
}
