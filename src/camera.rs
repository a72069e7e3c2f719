use crate::aliases::Vec3;
use crate::ray::Ray;
use std::f32::consts::PI;

/// Pinhole look-at camera.
pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f32, // vertical field of view, degrees
        aspect: f32,
    ) -> Self {
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin = *look_from;
        let w = (look_from - look_at).normalize();
        let u = view_up.cross(&w).normalize();
        let v = w.cross(&u);
        Camera {
            lower_left_corner: origin - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
            origin,
        }
    }

    /// Film coordinates (u, v) in [0, 1) to a world ray.
    pub fn primary_ray(&self, u: f32, v: f32) -> Ray {
        let dir = self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin;
        Ray::new(&self.origin, &dir.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_film_looks_at_the_target() {
        let from = Vec3::new(2.0, 1.0, -5.0);
        let at = Vec3::new(0.0, 0.5, 3.0);
        let camera = Camera::new(&from, &at, &Vec3::new(0.0, 1.0, 0.0), 40.0, 1.5);
        let ray = camera.primary_ray(0.5, 0.5);
        assert!((ray.origin - from).norm() < 1e-5);
        assert!((ray.direction - (at - from).normalize()).norm() < 1e-4);
    }
}
