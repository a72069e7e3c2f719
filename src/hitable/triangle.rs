use crate::aabb::Aabb;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::{HitRecord, LightSample};
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

pub struct Triangle {
    vertices: [Vec3; 3],
    // unit normal of the front face, (v1-v0) x (v2-v0) normalized
    normal: Vec3,
    material: Arc<Material>,
}

impl Triangle {
    pub fn new(vertices: &[Vec3; 3], material: Arc<Material>) -> Self {
        let cross = (vertices[1] - vertices[0]).cross(&(vertices[2] - vertices[0]));
        Triangle {
            vertices: *vertices,
            normal: cross.normalize(),
            material,
        }
    }
}

impl Hitable for Triangle {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let denom = ray.direction.dot(&self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.vertices[0] - ray.origin).dot(&self.normal) / denom;
        if t <= t_min || t_max <= t {
            return None;
        }
        let point = ray.evaluate(t);
        // barycentric inside-test in the triangle's plane
        let e0 = self.vertices[1] - self.vertices[0];
        let e1 = self.vertices[2] - self.vertices[0];
        let rel = point - self.vertices[0];
        let d00 = e0.dot(&e0);
        let d01 = e0.dot(&e1);
        let d11 = e1.dot(&e1);
        let d20 = rel.dot(&e0);
        let d21 = rel.dot(&e1);
        let det = d00 * d11 - d01 * d01;
        if det == 0.0 {
            return None;
        }
        let beta = (d11 * d20 - d01 * d21) / det;
        let gamma = (d00 * d21 - d01 * d20) / det;
        if beta < 0.0 || gamma < 0.0 || beta + gamma > 1.0 {
            return None;
        }
        Some(HitRecord {
            t,
            point,
            normal: self.normal,
            material: self.material.as_ref(),
        })
    }
    fn bounding_box(&self) -> Aabb {
        let mut bbox = Aabb::from_points(&self.vertices);
        bbox.min -= Vec3::repeat(1e-3);
        bbox.max += Vec3::repeat(1e-3);
        bbox
    }
    fn area(&self) -> f32 {
        0.5 * (self.vertices[1] - self.vertices[0])
            .cross(&(self.vertices[2] - self.vertices[0]))
            .norm()
    }
    fn has_emission(&self) -> bool {
        self.material.has_emission()
    }
    fn sample_surface(&self, rng: &mut RandGen) -> (LightSample, f32) {
        let x = rng.gen::<f32>().sqrt();
        let y = rng.gen::<f32>();
        let point = self.vertices[0] * (1.0 - x)
            + self.vertices[1] * (x * (1.0 - y))
            + self.vertices[2] * (x * y);
        let sample = LightSample {
            point,
            normal: self.normal,
            radiance: self.material.emission,
        };
        (sample, 1.0 / self.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn right_triangle() -> Triangle {
        Triangle::new(
            &[
                Vec3::zeros(),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ],
            Arc::new(Material::diffuse(&Vec3::repeat(0.5))),
        )
    }

    #[test]
    fn hit_respects_the_edges() {
        let tri = right_triangle();
        let inside = Ray::new(&Vec3::new(0.5, 0.5, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        let rec = tri.hit(&inside, 0.001, f32::MAX).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-4);
        // past the hypotenuse
        let outside = Ray::new(&Vec3::new(1.5, 1.5, -1.0), &Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.hit(&outside, 0.001, f32::MAX).is_none());
    }

    #[test]
    fn area_and_samples_match_the_geometry() {
        let tri = right_triangle();
        assert!((tri.area() - 2.0).abs() < 1e-5);
        let mut rng = RandGen::seed_from_u64(23);
        for _ in 0..200 {
            let (sample, pdf) = tri.sample_surface(&mut rng);
            let p = sample.point;
            assert!(p[0] >= -1e-5 && p[1] >= -1e-5);
            assert!(p[0] / 2.0 + p[1] / 2.0 <= 1.0 + 1e-5);
            assert_eq!(p[2], 0.0);
            assert!((pdf - 0.5).abs() < 1e-6);
        }
    }
}
