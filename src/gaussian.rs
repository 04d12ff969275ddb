//! Box–Muller transform from uniform pairs to standard-normal values

use crate::lehmer::LehmerRng;
use std::f64::consts::PI;

/// Floor substituted for a uniform draw of exactly zero, keeps `ln(u)` finite
pub const UNIFORM_FLOOR: f64 = 1e-6;

/// Transform two uniform values in (0, 1) into one approximately N(0, 1) value
///
/// Uses the cosine branch of Box–Muller: `sqrt(-2 ln u) * cos(2π v)`.
/// The sine twin is discarded, so every normal value consumes two fresh draws.
pub fn box_muller(u: f64, v: f64) -> f64 {
    let u = floor_zero(u);
    let v = floor_zero(v);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Draw one standard-normal value, consuming exactly two uniforms from `rng`
pub fn draw_standard_normal(rng: &mut LehmerRng) -> f64 {
    let u = rng.next_unit();
    let v = rng.next_unit();
    box_muller(u, v)
}

fn floor_zero(x: f64) -> f64 {
    if x == 0.0 {
        UNIFORM_FLOOR
    } else {
        x
    }
}
