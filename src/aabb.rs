use crate::aliases::Vec3;
use crate::ray::Ray;

/// Axis-aligned bounding box.
#[derive(Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: &Vec3, max: &Vec3) -> Self {
        Aabb {
            min: *min,
            max: *max,
        }
    }
    pub fn empty() -> Self {
        Aabb {
            min: Vec3::repeat(f32::INFINITY),
            max: Vec3::repeat(f32::NEG_INFINITY),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1] || self.min[2] > self.max[2]
    }
    pub fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        let mut t0 = t_min;
        let mut t1 = t_max;
        for axis in 0..3 {
            let inv_d = 1.0 / ray.direction[axis];
            let mut near = (self.min[axis] - ray.origin[axis]) * inv_d;
            let mut far = (self.max[axis] - ray.origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut near, &mut far);
            }
            t0 = f32::max(t0, near);
            t1 = f32::min(t1, far);
            if t0 > t1 {
                return false;
            }
        }
        true
    }
    pub fn unite(lhs: &Aabb, rhs: &Aabb) -> Aabb {
        Aabb {
            min: lhs.min.inf(&rhs.min),
            max: lhs.max.sup(&rhs.max),
        }
    }
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut ret = Aabb::empty();
        for p in points {
            ret.min = ret.min.inf(p);
            ret.max = ret.max.sup(p);
        }
        ret
    }
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let diff = self.max - self.min;
        2.0 * (diff[0] * diff[1] + diff[1] * diff[2] + diff[2] * diff[0])
    }
    pub fn compare_center(&self, rhs: &Aabb, axis: usize) -> std::cmp::Ordering {
        let lhs_center = 0.5 * (self.min + self.max)[axis];
        let rhs_center = 0.5 * (rhs.min + rhs.max)[axis];
        lhs_center
            .partial_cmp(&rhs_center)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
