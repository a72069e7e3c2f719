pub mod empty;
pub mod list;
pub mod rectangle;
pub mod sphere;
pub mod triangle;

use crate::aabb::Aabb;
use crate::aliases::RandGen;
use crate::hit_record::{HitRecord, LightSample};
use crate::ray::Ray;

/// Capability set shared by every geometry variant. All methods are
/// read-only and safe to call from many threads at once.
pub trait Hitable: Send + Sync {
    /// Nearest hit with ray parameter in (t_min, t_max).
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>>;
    fn bounding_box(&self) -> Aabb;
    /// Total surface area, the measure light sampling works in.
    fn area(&self) -> f32;
    fn has_emission(&self) -> bool;
    /// Uniform-area point sample and its density (1/area).
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32);
}
