//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - double-buffered particle state (`SimulationState`, both generations
//!   seeded identically)
//! - the force kernel (`ForceKernel`)
//!
//! Spawning is deterministic: a ChaCha12 stream seeded from the scenario
//! seed drives every random draw, so the same configuration always produces
//! bit-identical initial state.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::configuration::config::{ClusterConfig, ConfigError, ScenarioConfig};
use crate::simulation::engine::{self, Engine};
use crate::simulation::forces::ForceKernel;
use crate::simulation::integrator::wrap;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, SimulationState};

/// Spawn velocity components are uniform in [-SPAWN_VEL/2, SPAWN_VEL/2).
const SPAWN_VEL: f64 = 1.0e-3;

/// A fully-initialized runtime scenario: engine settings, parameters,
/// particle state, and the force kernel. The frame driver only needs
/// [`Scenario::step`] and [`SimulationState::snapshot`].
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub state: SimulationState,
    pub forces: ForceKernel,
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle. Rejects invalid
    /// configurations before any particle is spawned.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            k: p_cfg.k,
            interaction_radius: p_cfg.interaction_radius,
            attraction: p_cfg.attraction,
            max_velocity: p_cfg.max_velocity,
            eps2: p_cfg.eps2,
            seed: p_cfg.seed,
        };

        let initial = spawn_clusters(&cfg.clusters, parameters.seed);
        let state = SimulationState::new(initial);
        let forces = ForceKernel::new(&parameters);
        let engine = Engine::new(&cfg.engine.executor);

        Ok(Self {
            engine,
            parameters,
            state,
            forces,
        })
    }

    /// Advance the simulation by one step with this scenario's executor.
    pub fn step(&mut self) {
        engine::step(
            &mut self.state,
            &self.forces,
            &self.parameters,
            self.engine.executor.as_ref(),
        );
    }
}

/// Emit every cluster's particles: position = center + random point in the
/// spawn disk (uniform angle, uniform radius, so the cluster is denser
/// toward its center rather than area-uniform), a small random
/// velocity, and the cluster's category. Positions wrap onto the torus so
/// clusters may straddle the domain edge.
pub fn spawn_clusters(clusters: &[ClusterConfig], seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let n: usize = clusters.iter().map(|c| c.count).sum();
    let mut particles = Vec::with_capacity(n);

    for cl in clusters {
        for _ in 0..cl.count {
            let angle = rng.gen::<f64>() * std::f64::consts::TAU;
            let radius = rng.gen::<f64>() * cl.radius;
            let position = wrap(NVec2::new(
                cl.center[0] + angle.cos() * radius,
                cl.center[1] + angle.sin() * radius,
            ));
            let velocity = NVec2::new(
                rng.gen::<f64>() * SPAWN_VEL - 0.5 * SPAWN_VEL,
                rng.gen::<f64>() * SPAWN_VEL - 0.5 * SPAWN_VEL,
            );
            particles.push(Particle {
                position,
                velocity,
                category: cl.category,
            });
        }
    }

    particles
}
