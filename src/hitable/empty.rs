use crate::aabb::Aabb;
use crate::aliases::RandGen;
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::ray::Ray;

/// Placeholder occupying unused BVH child slots.
pub struct Empty;

impl Hitable for Empty {
    fn hit<'s>(&'s self, _ray: &Ray, _t_min: f32, _t_max: f32) -> Option<HitRecord<'s>> {
        None
    }
    fn bounding_box(&self) -> Aabb {
        Aabb::empty()
    }
    fn area(&self) -> f32 {
        0.0
    }
    fn has_emission(&self) -> bool {
        false
    }
    fn sample_surface(&self, _rng: &mut RandGen) -> (LightSample, f32) {
        (LightSample::invalid(), 0.0)
    }
}
