//! Core state types for the particle simulation.
//!
//! Defines the particle struct and the double-buffered simulation state:
//! - `Particle` — position/velocity on the unit torus plus a discrete category
//! - `SimulationState` — two generations of the full particle array
//! - `ParticleView` — the read-only per-frame snapshot handed to a display sink

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: NVec2, // torus coordinates in [0,1) x [0,1)
    pub velocity: NVec2,
    pub category: u32, // sign in [0, k), cyclic dominance ordering
}

/// Position + category of one particle, copied out for display.
/// Velocity is deliberately omitted; a sink never needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: NVec2,
    pub category: u32,
}

/// Double-buffered particle state.
///
/// Holds two generations of the particle array and a flag selecting which
/// one is current. A step reads the current buffer, fully overwrites the
/// other, then flips the flag. Both buffers are allocated once at startup;
/// the step hot path never allocates.
#[derive(Debug, Clone)]
pub struct SimulationState {
    buffers: [Vec<Particle>; 2],
    current: usize, // 0 or 1
}

impl SimulationState {
    /// Seed both generations with identical copies of `initial`.
    pub fn new(initial: Vec<Particle>) -> Self {
        Self {
            buffers: [initial.clone(), initial],
            current: 0,
        }
    }

    /// Number of particles (constant for the simulation's lifetime).
    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers[0].is_empty()
    }

    /// Read-only view of the current generation.
    pub fn current(&self) -> &[Particle] {
        &self.buffers[self.current]
    }

    /// Borrow the current generation read-only and the other generation
    /// mutably, for one step's scan/write phase. The two are disjoint, so
    /// every read during a step sees only previous-step state.
    pub fn split(&mut self) -> (&[Particle], &mut [Particle]) {
        let (a, b) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (a[0].as_slice(), b[0].as_mut_slice())
        } else {
            (b[0].as_slice(), a[0].as_mut_slice())
        }
    }

    /// Flip which buffer is current. Must only be called after all writes
    /// from `split` have completed.
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Copy out `{position, category}` for every particle in the current
    /// generation. Sinks get this copy, never a live reference, so a
    /// concurrent next-step write can never tear a frame.
    pub fn snapshot(&self) -> Vec<ParticleView> {
        self.current()
            .iter()
            .map(|p| ParticleView {
                position: p.position,
                category: p.category,
            })
            .collect()
    }
}
