use crate::aabb::Aabb;
use crate::aliases::RandGen;
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Flat aggregate; a triangle mesh is a list of triangles. Doubles as
/// the BVH's leaf fallback when a split would not pay off.
pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objects: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list: objects }
    }
}

impl Hitable for HitableList {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let mut nearest: Option<HitRecord> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(rec) = obj.hit(ray, t_min, closest_so_far) {
                closest_so_far = rec.t;
                nearest = Some(rec);
            }
        }
        nearest
    }
    fn bounding_box(&self) -> Aabb {
        let mut bbox = Aabb::empty();
        for obj in &self.list {
            bbox = Aabb::unite(&bbox, &obj.bounding_box());
        }
        bbox
    }
    fn area(&self) -> f32 {
        self.list.iter().map(|o| o.area()).sum()
    }
    fn has_emission(&self) -> bool {
        self.list.iter().any(|o| o.has_emission())
    }
    /// Picks a member proportional to area; the density is uniform
    /// over the union of the members' surfaces.
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32) {
        let total = self.area();
        if total <= 0.0 {
            return (LightSample::invalid(), 0.0);
        }
        let p = rng.gen::<f32>() * total;
        let mut running = 0.0;
        for obj in &self.list {
            running += obj.area();
            if p <= running {
                let (sample, _) = obj.sample_surface(rng);
                return (sample, 1.0 / total);
            }
        }
        // roundoff pushed p past the final accumulator
        let (sample, _) = self.list[self.list.len() - 1].sample_surface(rng);
        (sample, 1.0 / total)
    }
}
