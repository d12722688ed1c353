pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleView, SimulationState, NVec2};
pub use simulation::relation::relation;
pub use simulation::forces::ForceKernel;
pub use simulation::integrator::{integrate, wrap};
pub use simulation::engine::{step, Engine, ParallelFor, SequentialFor, RayonFor};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;

pub use configuration::config::{
    ClusterConfig, ConfigError, EngineConfig, ExecutorConfig, ParametersConfig, ScenarioConfig,
};

pub use benchmark::benchmark::{bench_force, bench_step};
