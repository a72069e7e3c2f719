pub mod aabb;
pub mod aliases;
pub mod bvh;
pub mod camera;
pub mod hit_record;
pub mod hitable;
pub mod material;
pub mod onb;
pub mod ray;
pub mod sampling;
pub mod scene;

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scene::Scene;
use rand::Rng;

/// Floor for densities used as divisors; also the emission threshold.
pub const EPSILON: f32 = 1e-4;
/// Minimum ray parameter accepted by hit queries, and the forward
/// offset of spawned rays. Both keep a surface from shadowing itself.
pub const RAY_T_MIN: f32 = 1e-3;
/// Squared-distance slack when deciding whether a shadow ray reached
/// the sampled light point.
pub const LIGHT_HIT_EPS: f32 = 1e-3;

/// Outgoing radiance at an intersection already found by the caller.
///
/// The direct term samples one point on the emitters and tests it with
/// a shadow ray; the indirect term continues the path through the
/// material's own distribution under Russian roulette, bounded by
/// `scene.max_depth`. A bounce that lands on an emitter contributes
/// nothing here; that emitter is picked up by the next vertex's direct
/// term instead.
pub fn radiance(ray: &Ray, hit: &HitRecord, scene: &Scene, rng: &mut RandGen, depth: u32) -> Vec3 {
    if hit.material.has_emission() {
        return hit.material.emission;
    }
    let n = hit.normal;
    let wo = -ray.direction.normalize();

    let mut direct = Vec3::zeros();
    if let Some((light, pdf_light)) = scene.sample_light(rng) {
        let to_light = light.point - hit.point;
        let ws = to_light.normalize();
        let shadow_ray = Ray::spawn(&hit.point, &ws);
        if let Some(obstacle) = scene.intersect(&shadow_ray) {
            // the light is visible iff the nearest surface along the
            // shadow ray is the sampled point itself
            if (obstacle.point - light.point).norm_squared() < LIGHT_HIT_EPS {
                let cos_surface = n.dot(&ws).max(0.0);
                let cos_light = light.normal.dot(&-ws).max(0.0);
                direct = light.radiance.component_mul(&hit.material.eval(&ws, &wo, &n))
                    * (cos_surface * cos_light / (to_light.norm_squared() * pdf_light));
            }
        }
    }

    let mut indirect = Vec3::zeros();
    if depth < scene.max_depth && rng.gen::<f32>() < scene.russian_roulette {
        let wi = hit.material.sample(&wo, &n, rng);
        let bounce = Ray::spawn(&hit.point, &wi);
        if let Some(next) = scene.intersect(&bounce) {
            if !next.material.has_emission() {
                let pdf = hit.material.pdf(&wi, &wo, &n).max(EPSILON);
                let cos = n.dot(&wi).max(0.0);
                indirect = radiance(&bounce, &next, scene, rng, depth + 1)
                    .component_mul(&hit.material.eval(&wi, &wo, &n))
                    * (cos / (pdf * scene.russian_roulette));
            }
        }
    }

    let out = direct + indirect;
    debug_assert!(out.iter().all(|c| c.is_finite()), "non-finite radiance");
    out
}
