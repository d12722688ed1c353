//! Numerical parameters for the simulation
//!
//! `Parameters` holds the runtime settings, fixed at construction:
//! - category count `k`,
//! - conversion contact radius and attraction constant,
//! - speed cap, softening (`eps2`), and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub k: u32, // number of categories in the dominance cycle
    pub interaction_radius: f64, // contact distance for category conversion
    pub attraction: f64, // force scale constant
    pub max_velocity: f64, // speed cap applied after force integration
    pub eps2: f64, // softening - prevent singular forces at very small separations
    pub seed: u64, // deterministic seed to make runs reproducable
}
