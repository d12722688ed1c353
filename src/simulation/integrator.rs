//! Per-particle integration: apply the accumulated force to the velocity,
//! cap the speed, and advance the position with toroidal wrap.
//!
//! There is no time step: each call applies the force as a fixed per-call
//! impulse, matching the frame-driver contract (the host decides cadence).

use super::states::NVec2;

/// Map a point into [0,1) x [0,1). `rem_euclid` handles negative overshoot,
/// so arbitrarily large excursions in either direction land back on the torus.
pub fn wrap(p: NVec2) -> NVec2 {
    NVec2::new(p.x.rem_euclid(1.0), p.y.rem_euclid(1.0))
}

/// Advance one particle by one step.
///
/// `velocity + force` is capped to `max_velocity` (direction preserved),
/// then the position moves by the new velocity and wraps. Pure numeric
/// function, no failure path: zero force leaves the velocity bit-identical,
/// and a force large enough to dominate the velocity simply saturates the cap.
pub fn integrate(
    position: NVec2,
    velocity: NVec2,
    force: NVec2,
    max_velocity: f64,
) -> (NVec2, NVec2) {
    let mut v = velocity + force;
    let speed = v.norm();
    if speed > max_velocity {
        v *= max_velocity / speed;
    }
    (v, wrap(position + v))
}
