use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
/// Seedable generator threaded explicitly through every sampling call.
/// Each render thread owns one instance.
pub type RandGen = rand::rngs::SmallRng;
