use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// Inflates the bounding box so axis-aligned rectangles do not produce
/// zero-thickness slabs.
const BBOX_MARGIN: f32 = 1e-3;

pub struct Rectangle {
    origin: Vec3,
    // edge_0 and edge_1 must be orthogonal; the front side is the one
    // the normal (edge_0 x edge_1, normalized) points out of.
    edge_0: Vec3,
    edge_1: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Rectangle {
    pub fn new(origin: &Vec3, edge_0: &Vec3, edge_1: &Vec3, material: Arc<Material>) -> Self {
        Rectangle {
            origin: *origin,
            edge_0: *edge_0,
            edge_1: *edge_1,
            normal: edge_0.cross(edge_1).normalize(),
            material,
        }
    }
}

impl Hitable for Rectangle {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let denom = ray.direction.dot(&self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.origin - ray.origin).dot(&self.normal) / denom;
        if t <= t_min || t_max <= t {
            return None;
        }
        let point = ray.evaluate(t);
        let rel = point - self.origin;
        let u = rel.dot(&self.edge_0) / self.edge_0.norm_squared();
        let v = rel.dot(&self.edge_1) / self.edge_1.norm_squared();
        if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
            Some(HitRecord {
                t,
                point,
                normal: self.normal,
                material: self.material.as_ref(),
            })
        } else {
            None
        }
    }
    fn bounding_box(&self) -> Aabb {
        let corners = [
            self.origin,
            self.origin + self.edge_0,
            self.origin + self.edge_1,
            self.origin + self.edge_0 + self.edge_1,
        ];
        let mut bbox = Aabb::from_points(&corners);
        bbox.min -= Vec3::repeat(BBOX_MARGIN);
        bbox.max += Vec3::repeat(BBOX_MARGIN);
        bbox
    }
    fn area(&self) -> f32 {
        self.edge_0.cross(&self.edge_1).norm()
    }
    fn has_emission(&self) -> bool {
        self.material.has_emission()
    }
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32) {
        let sample = LightSample {
            point: self.origin + rng.gen::<f32>() * self.edge_0 + rng.gen::<f32>() * self.edge_1,
            normal: self.normal,
            radiance: self.material.emission,
        };
        (sample, 1.0 / self.area())
    }
}
