use crate::aliases::{RandGen, Vec3};
use crate::onb::Onb;
use crate::sampling::{cosine_hemisphere, ggx_half_vector, uniform_hemisphere};
use crate::EPSILON;
use std::f32::consts::PI;

/// Scattering model of a surface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScatterModel {
    Diffuse,
    Microfacet,
}

/// How `sample` draws continuation directions. `pdf` always reports the
/// density of the active strategy; the two form a paired contract.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleStrategy {
    Uniform,
    CosineWeighted,
    MicrofacetImportance,
}

/// Roughness below this makes the GGX density near-singular.
const ALPHA_MIN: f32 = 1e-3;

/// Direction convention: every direction points away from the surface.
/// `wo` is the view direction (toward the previous path vertex), `wi`
/// the sampled direction (toward the light or the next vertex).
#[derive(Clone, Debug)]
pub struct Material {
    pub model: ScatterModel,
    pub strategy: SampleStrategy,
    pub emission: Vec3,
    /// GGX roughness, clamped into (0, 1] at construction.
    pub alpha: f32,
    /// Specular mix weight of the microfacet model.
    pub ks: f32,
    /// Diffuse albedo of the pure diffuse model.
    pub kd: Vec3,
    /// Diffuse component of the microfacet model.
    pub rho: Vec3,
    /// Normal-incidence reflectance.
    pub f0: Vec3,
}

impl Material {
    pub fn diffuse(kd: &Vec3) -> Self {
        Material {
            model: ScatterModel::Diffuse,
            strategy: SampleStrategy::Uniform,
            emission: Vec3::zeros(),
            alpha: 1.0,
            ks: 0.0,
            kd: *kd,
            rho: Vec3::zeros(),
            f0: Vec3::zeros(),
        }
    }

    /// An emitter. Emitters are terminal in the integrator, so the
    /// scattering fields are never consulted.
    pub fn emissive(radiance: &Vec3) -> Self {
        Material {
            emission: *radiance,
            ..Material::diffuse(&Vec3::zeros())
        }
    }

    pub fn microfacet(rho: &Vec3, f0: &Vec3, alpha: f32, ks: f32) -> Self {
        Material {
            model: ScatterModel::Microfacet,
            strategy: SampleStrategy::MicrofacetImportance,
            emission: Vec3::zeros(),
            alpha: alpha.clamp(ALPHA_MIN, 1.0),
            ks,
            kd: Vec3::zeros(),
            rho: *rho,
            f0: *f0,
        }
    }

    pub fn with_strategy(mut self, strategy: SampleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn has_emission(&self) -> bool {
        self.emission.norm() > EPSILON
    }

    /// Draws a world-space direction in the hemisphere of `n`.
    /// Consumes exactly two uniform values.
    pub fn sample(&self, wo: &Vec3, n: &Vec3, rng: &mut RandGen) -> Vec3 {
        let frame = Onb::from_normal(n);
        match self.strategy {
            SampleStrategy::Uniform => frame.to_world(&uniform_hemisphere(rng)).normalize(),
            SampleStrategy::CosineWeighted => frame.to_world(&cosine_hemisphere(rng)).normalize(),
            SampleStrategy::MicrofacetImportance => {
                let wh = frame
                    .to_world(&ggx_half_vector(self.alpha, rng))
                    .normalize();
                (2.0 * wo.dot(&wh) * wh - wo).normalize()
            }
        }
    }

    /// Solid-angle density of `sample` having returned `wi`. Zero for
    /// directions below the surface.
    pub fn pdf(&self, wi: &Vec3, wo: &Vec3, n: &Vec3) -> f32 {
        if n.dot(wi) <= 0.0 {
            return 0.0;
        }
        match self.strategy {
            SampleStrategy::Uniform => 0.5 / PI,
            SampleStrategy::CosineWeighted => n.dot(wi).max(0.0) / PI,
            SampleStrategy::MicrofacetImportance => {
                let half = wi + wo;
                if half.norm_squared() <= 0.0 {
                    return 0.0;
                }
                let wh = half.normalize();
                let n_dot_h = n.dot(&wh).max(0.0);
                let h_dot_wi = wi.dot(&wh);
                if h_dot_wi <= 0.0 {
                    return 0.0;
                }
                // half-vector density over the reflected-direction measure
                0.25 * n_dot_h * ggx_d(n_dot_h, self.alpha) / h_dot_wi
            }
        }
    }

    /// Per-channel reflectance for light arriving along `wi` and
    /// leaving along `wo`.
    pub fn eval(&self, wi: &Vec3, wo: &Vec3, n: &Vec3) -> Vec3 {
        match self.model {
            ScatterModel::Diffuse => {
                if n.dot(wi) > 0.0 {
                    self.kd / PI
                } else {
                    Vec3::zeros()
                }
            }
            ScatterModel::Microfacet => {
                let n_dot_wi = n.dot(wi);
                let n_dot_wo = n.dot(wo);
                if n_dot_wi <= 0.0 || n_dot_wo <= 0.0 {
                    return Vec3::zeros();
                }
                let h = (wi + wo).normalize();
                let n_dot_h = n.dot(&h);
                if n_dot_h <= 0.0 {
                    return Vec3::zeros();
                }
                let fresnel = self.f0 + (Vec3::repeat(1.0) - self.f0) * (1.0 - n_dot_wi).powi(5);
                let d = ggx_d(n_dot_h, self.alpha);
                let k = (self.alpha + 1.0) * (self.alpha + 1.0) * 0.125;
                let g = n_dot_wi * n_dot_wo
                    / ((n_dot_wi * (1.0 - k) + k) * (n_dot_wo * (1.0 - k) + k));
                let specular = fresnel * (d * g / (4.0 * n_dot_wi * n_dot_wo));
                let diffuse = self.rho / PI;
                (1.0 - self.ks) * diffuse + self.ks * specular
            }
        }
    }
}

/// GGX normal distribution term.
fn ggx_d(n_dot_h: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let t = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * t * t)
}
