use crate::aliases::{RandGen, Vec3};
use crate::bvh::BvhNode;
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::ray::Ray;
use crate::RAY_T_MIN;
use log::info;
use rand::Rng;
use std::sync::Arc;

/// Owns the object collection and the acceleration structure built
/// over it. Mutation ends when `build` runs; every query afterwards is
/// read-only and thread-safe.
pub struct Scene {
    objects: Vec<Arc<dyn Hitable>>,
    accel: Option<BvhNode>,
    /// Survival probability of the Russian-roulette continuation.
    pub russian_roulette: f32,
    /// Hard bound on recursion on top of the roulette.
    pub max_depth: u32,
    /// Returned by the driver for primary rays that miss everything.
    pub background: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            objects: Vec::new(),
            accel: None,
            russian_roulette: 0.8,
            max_depth: 16,
            background: Vec3::zeros(),
        }
    }

    pub fn add(&mut self, object: Arc<dyn Hitable>) {
        self.objects.push(object);
    }

    /// Builds the BVH. Must complete before `intersect` is called and
    /// must not be interleaved with rendering.
    pub fn build(&mut self) {
        info!("building BVH over {} objects", self.objects.len());
        self.accel = Some(BvhNode::new(self.objects.clone()));
    }

    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let accel = self
            .accel
            .as_ref()
            .expect("Scene::build must run before any query");
        accel.hit(ray, RAY_T_MIN, f32::MAX)
    }

    /// Picks a point on one emitter, selecting emitters proportional
    /// to surface area. The returned density is the chosen emitter's
    /// own 1/area; with a single emitter this equals uniform-area
    /// sampling over all emissive surface.
    pub fn sample_light(&self, rng: &mut RandGen) -> Option<(LightSample, f32)> {
        let total: f32 = self
            .objects
            .iter()
            .filter(|o| o.has_emission())
            .map(|o| o.area())
            .sum();
        if total <= 0.0 {
            return None;
        }
        let p = rng.gen::<f32>() * total;
        let mut running = 0.0;
        let mut chosen = None;
        for obj in self.objects.iter().filter(|o| o.has_emission()) {
            running += obj.area();
            // roundoff can leave p past the last accumulator, in which
            // case the final emitter stays chosen
            chosen = Some(obj);
            if p <= running {
                break;
            }
        }
        chosen.map(|obj| obj.sample_surface(rng))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}
