//! Cyclic dominance relation between particle categories.
//!
//! Categories `0..k` are arranged on a cycle; each category dominates the
//! ones cyclically ahead of it (up to half a cycle away) and is dominated
//! by the ones behind it. The relation drives both the force sign and the
//! conversion rule in the force kernel.

/// Signed dominance of `other` as seen from `a`:
/// - `0`  — same category, neutral (no force, no conversion)
/// - `+1` — `a` dominates `other` (`other` is prey)
/// - `-1` — `other` dominates `a` (contact can convert `a`)
///
/// Computed from the cyclic distance `d = (other - a) mod k`: forward
/// distances up to half a cycle map to `+1`, the rest to `-1`. For even `k`
/// the exact half-cycle tie maps to `-1`, so opposite categories repel
/// each other mutually.
///
/// Pure and total for every `a, other < k`.
pub fn relation(a: u32, other: u32, k: u32) -> i32 {
    let d = (other as i64 - a as i64).rem_euclid(k as i64) as u32;
    if d == 0 {
        0
    } else if 2 * d < k {
        1
    } else {
        -1
    }
}
