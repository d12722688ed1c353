//! Per-particle force kernel
//!
//! All-pairs scan over the current buffer: every other particle contributes
//! an inverse-square-law-like field, summed over its periodic images so the
//! force is continuous across the torus seam, with a close-contact
//! conversion rule coupling category dynamics to proximity.

use crate::simulation::params::Parameters;
use crate::simulation::relation::relation;
use crate::simulation::states::{NVec2, Particle};

/// Couples the relation sign to the force sign. `+1.0` makes the dominant
/// side chase (attraction toward prey) and the dominated side flee; flip to
/// `-1.0` to invert the convention without touching the kernel.
const POLARITY: f64 = 1.0;

/// Periodic images of the other particle: itself plus the four
/// axis-adjacent torus copies. Diagonal copies are deliberately excluded;
/// the axis images already make the force seam-continuous and the diagonal
/// contributions are small at the interaction scales used here.
const SHIFTS: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)];

/// Brute-force all-pairs force evaluation for one particle.
/// Built once per scenario from [`Parameters`]; holds only plain numbers,
/// so it is freely shared across worker threads.
pub struct ForceKernel {
    pub k: u32,
    pub attraction: f64,
    pub interaction_radius: f64,
    pub eps2: f64, // softening added to squared separations
}

impl ForceKernel {
    pub fn new(p: &Parameters) -> Self {
        Self {
            k: p.k,
            attraction: p.attraction,
            interaction_radius: p.interaction_radius,
            eps2: p.eps2,
        }
    }

    /// Scan every other particle and accumulate the net force on
    /// `current[self_index]`, returning the force and the particle's
    /// (possibly converted) category for the next generation.
    ///
    /// The category accumulator is threaded through the scan in increasing
    /// index order: a conversion takes effect immediately for the remaining
    /// comparisons, so encountering several dominant categories in one scan
    /// can cascade. This sequential dependency is part of the model and the
    /// inner scan must not be reordered.
    pub fn compute(&self, self_index: usize, current: &[Particle]) -> (NVec2, u32) {
        let p = &current[self_index];
        let mut force = NVec2::zeros();
        let mut category = p.category;

        for (j, other) in current.iter().enumerate() {
            if j == self_index {
                continue;
            }

            let r = relation(category, other.category, self.k);
            if r == 0 {
                // Same category: no force contribution, no conversion check.
                continue;
            }

            if r == -1 && (other.position - p.position).norm() < self.interaction_radius {
                // Contact with a dominant category converts this particle
                // and replaces the pair's force contribution entirely.
                category = other.category;
                continue;
            }

            // Sum r / |r|^3 over the 5 periodic images of `other`.
            let mut strength = NVec2::zeros();
            for &(sx, sy) in &SHIFTS {
                let rv = other.position + NVec2::new(sx, sy) - p.position;
                let d2 = rv.dot(&rv) + self.eps2;
                let inv_r = d2.sqrt().recip();
                strength += rv * (inv_r * inv_r * inv_r);
            }

            force += (POLARITY * self.attraction * r as f64) * strength;
        }

        (force, category)
    }
}
