use crate::aliases::{RandGen, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Uniform over the upper hemisphere (z >= 0), density 1/(2 pi).
pub fn uniform_hemisphere(rng: &mut RandGen) -> Vec3 {
    let x1 = rng.gen::<f32>();
    let x2 = rng.gen::<f32>();
    let z = (1.0 - 2.0 * x1).abs();
    let r = (1.0 - z * z).sqrt();
    let phi = 2.0 * PI * x2;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Cosine-weighted over the upper hemisphere, density cos(theta)/pi.
pub fn cosine_hemisphere(rng: &mut RandGen) -> Vec3 {
    let x1 = rng.gen::<f32>();
    let x2 = rng.gen::<f32>();
    let z = (1.0 - x1).sqrt();
    let r = x1.sqrt();
    let phi = 2.0 * PI * x2;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// GGX half-vector drawn by inverting the D(h)cos(theta_h) CDF,
/// density D(cos theta_h) * cos(theta_h).
pub fn ggx_half_vector(alpha: f32, rng: &mut RandGen) -> Vec3 {
    let x1 = rng.gen::<f32>();
    let x2 = rng.gen::<f32>();
    let a = (1.0 - x1) / (x1 * (alpha * alpha - 1.0) + 1.0);
    let z = a.sqrt();
    let r = (1.0 - a).max(0.0).sqrt();
    let phi = 2.0 * PI * x2;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Uniform over the full unit sphere, density 1/(4 pi).
pub fn uniform_sphere(rng: &mut RandGen) -> Vec3 {
    let x1 = rng.gen::<f32>();
    let x2 = rng.gen::<f32>();
    let z = 1.0 - 2.0 * x1;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * x2;
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}
