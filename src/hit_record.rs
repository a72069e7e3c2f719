use crate::aliases::Vec3;
use crate::material::Material;

/// Nearest-hit result produced by the geometry backend.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: &'a Material,
}

/// A point on an emissive surface; the sampler pairs it with an
/// area-measure density.
#[derive(Clone, Copy, Debug)]
pub struct LightSample {
    pub point: Vec3,
    pub normal: Vec3,
    pub radiance: Vec3,
}

impl LightSample {
    /// Returned with zero density where no emissive surface exists.
    pub fn invalid() -> Self {
        LightSample {
            point: Vec3::zeros(),
            normal: Vec3::zeros(),
            radiance: Vec3::zeros(),
        }
    }
}
