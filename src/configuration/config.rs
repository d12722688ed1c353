//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – execution options (sequential or rayon scan)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`ClusterConfig`]    – one spawn cluster per category group
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   executor: "rayon"         # or "sequential"
//!
//! parameters:
//!   k: 3                      # number of categories in the cycle
//!   interaction_radius: 0.02  # contact distance for conversion
//!   attraction: 2.667e-7      # force scale constant
//!   max_velocity: 1.333e-3    # speed cap
//!   eps2: 0.0                 # softening epsilon^2 (optional, defaults to 0)
//!   seed: 42                  # deterministic seed
//!
//! clusters:
//!   - center: [ 0.2, 0.6 ]
//!     radius: 0.2
//!     count: 166
//!     category: 0
//!   - center: [ 0.8, 0.65 ]
//!     radius: 0.2
//!     count: 166
//!     category: 1
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation after validating it; an invalid scenario is rejected
//! before any stepping starts.

use serde::Deserialize;
use thiserror::Error;

/// Which executor runs the per-particle scan phase
/// executor: "sequential" or "rayon"
#[derive(Deserialize, Debug, Clone)]
pub enum ExecutorConfig {
    #[serde(rename = "sequential")] // plain in-order loop, fully deterministic single-threaded
    Sequential,

    #[serde(rename = "rayon")] // fan out over the rayon thread pool; same results, slots are independent
    Rayon,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub executor: ExecutorConfig, // execution strategy for the scan phase
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub k: u32,                  // number of categories in the dominance cycle
    pub interaction_radius: f64, // contact distance for category conversion
    pub attraction: f64,         // force scale constant (sign flips chase polarity)
    pub max_velocity: f64,       // speed cap
    #[serde(default)]
    pub eps2: f64,               // softening - prevent singular forces at tiny separations
    pub seed: u64,               // deterministic seed to make runs reproducable
}

/// Configuration for one spawn cluster
#[derive(Deserialize, Debug, Clone)]
pub struct ClusterConfig {
    pub center: [f64; 2], // cluster center in torus coordinates
    pub radius: f64,      // spawn disk radius
    pub count: usize,     // number of particles spawned in this cluster
    pub category: u32,    // category assigned to every particle in the cluster
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (executor)
    pub parameters: ParametersConfig, // global numerical parameters
    pub clusters: Vec<ClusterConfig>, // spawn clusters defining the initial state
}

/// Rejections raised by [`ScenarioConfig::validate`]. The step loop must
/// never start on a scenario that fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scenario spawns no particles")]
    NoParticles,

    #[error("category count k must be at least 2, got {0}")]
    BadCategoryCount(u32),

    #[error("cluster category {category} out of range for k = {k}")]
    CategoryOutOfRange { category: u32, k: u32 },

    #[error("cluster radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("cluster count must be positive")]
    EmptyCluster,

    #[error("interaction radius must be positive, got {0}")]
    BadInteractionRadius(f64),

    #[error("max velocity must be positive, got {0}")]
    BadMaxVelocity(f64),

    #[error("softening eps2 must be non-negative, got {0}")]
    NegativeSoftening(f64),
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;

        if p.k < 2 {
            return Err(ConfigError::BadCategoryCount(p.k));
        }
        if !(p.interaction_radius > 0.0) {
            return Err(ConfigError::BadInteractionRadius(p.interaction_radius));
        }
        if !(p.max_velocity > 0.0) {
            return Err(ConfigError::BadMaxVelocity(p.max_velocity));
        }
        if p.eps2 < 0.0 {
            return Err(ConfigError::NegativeSoftening(p.eps2));
        }

        for cl in &self.clusters {
            if cl.category >= p.k {
                return Err(ConfigError::CategoryOutOfRange {
                    category: cl.category,
                    k: p.k,
                });
            }
            if cl.radius < 0.0 {
                return Err(ConfigError::NegativeRadius(cl.radius));
            }
            if cl.count == 0 {
                return Err(ConfigError::EmptyCluster);
            }
        }

        if self.clusters.iter().map(|c| c.count).sum::<usize>() == 0 {
            return Err(ConfigError::NoParticles);
        }

        Ok(())
    }
}
