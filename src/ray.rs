use crate::aliases::Vec3;
use crate::RAY_T_MIN;

#[derive(Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
        }
    }
    /// Secondary ray starting just off the surface it leaves, so the
    /// surface cannot shadow itself.
    pub fn spawn(origin: &Vec3, direction: &Vec3) -> Self {
        let dir = direction.normalize();
        Ray {
            origin: origin + RAY_T_MIN * dir,
            direction: dir,
        }
    }
    pub fn evaluate(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
