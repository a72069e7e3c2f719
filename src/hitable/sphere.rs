use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling::uniform_sphere;
use std::f32::consts::PI;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f32, material: Arc<Material>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    /// Ray parameter of the nearest root inside (t_min, t_max).
    fn hit_core(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let disc = b * b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let t = (-b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        let t = (-b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        None
    }
}

impl Hitable for Sphere {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        self.hit_core(ray, t_min, t_max).map(|t| {
            let point = ray.evaluate(t);
            HitRecord {
                t,
                point,
                normal: (point - self.center) / self.radius,
                material: self.material.as_ref(),
            }
        })
    }
    fn bounding_box(&self) -> Aabb {
        let rad_vec = Vec3::repeat(self.radius);
        Aabb::new(&(self.center - rad_vec), &(self.center + rad_vec))
    }
    fn area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }
    fn has_emission(&self) -> bool {
        self.material.has_emission()
    }
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32) {
        let dir = uniform_sphere(rng);
        let sample = LightSample {
            point: self.center + self.radius * dir,
            normal: dir,
            radiance: self.material.emission,
        };
        (sample, 1.0 / self.area())
    }
}
