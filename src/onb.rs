use crate::aliases::Vec3;

/// Orthonormal shading frame with w along the surface normal.
pub struct Onb {
    axis: [Vec3; 3],
}

impl Onb {
    /// The tangent is built from the larger of |n.x| and |n.y|, which
    /// keeps the frame stable when the normal lies near an axis.
    pub fn from_normal(n: &Vec3) -> Self {
        let w = n.normalize();
        let v = if w[0].abs() > w[1].abs() {
            let inv_len = 1.0 / (w[0] * w[0] + w[2] * w[2]).sqrt();
            Vec3::new(w[2] * inv_len, 0.0, -w[0] * inv_len)
        } else {
            let inv_len = 1.0 / (w[1] * w[1] + w[2] * w[2]).sqrt();
            Vec3::new(0.0, w[2] * inv_len, -w[1] * inv_len)
        };
        let u = v.cross(&w);
        Onb { axis: [u, v, w] }
    }
    pub fn u(&self) -> &Vec3 {
        &self.axis[0]
    }
    pub fn v(&self) -> &Vec3 {
        &self.axis[1]
    }
    pub fn w(&self) -> &Vec3 {
        &self.axis[2]
    }
    pub fn to_world(&self, local: &Vec3) -> Vec3 {
        local[0] * self.u() + local[1] * self.v() + local[2] * self.w()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_orthonormal() {
        let normals = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.3, -0.8, 0.6),
            Vec3::new(-2.0, 0.1, 0.05),
        ];
        for n in &normals {
            let onb = Onb::from_normal(n);
            assert!(onb.u().dot(onb.v()).abs() < 1e-5);
            assert!(onb.u().dot(onb.w()).abs() < 1e-5);
            assert!(onb.v().dot(onb.w()).abs() < 1e-5);
            assert!((onb.u().norm() - 1.0).abs() < 1e-5);
            assert!((onb.v().norm() - 1.0).abs() < 1e-5);
            assert!((onb.w().norm() - 1.0).abs() < 1e-5);
            assert!((onb.w() - n.normalize()).norm() < 1e-5);
        }
    }

    #[test]
    fn to_world_maps_z_to_normal() {
        let n = Vec3::new(0.2, 0.9, -0.4);
        let onb = Onb::from_normal(&n);
        let mapped = onb.to_world(&Vec3::new(0.0, 0.0, 1.0));
        assert!((mapped - n.normalize()).norm() < 1e-5);
    }
}
