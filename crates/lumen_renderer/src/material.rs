//! Surface scattering models.

use crate::sampling::{gen_f32, random_in_unit_sphere};
use crate::{HitRecord, Texture};
use lumen_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// The outcome of a ray scattering off a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Fraction of light retained per channel
    pub attenuation: Color,
    /// The continuing ray
    pub scattered: Ray,
}

/// A surface material. The set of variants is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: impl Into<Texture>) -> Self {
        Material::Lambertian(Lambertian::new(albedo))
    }

    /// Specular material; `fuzz` magnitude is capped at 1.
    pub fn metal(albedo: impl Into<Texture>, fuzz: f32) -> Self {
        Material::Metal(Metal::new(albedo, fuzz))
    }

    /// Clear refractive material.
    pub fn dielectric(refractive_index: f32) -> Self {
        Material::Dielectric(Dielectric::new(refractive_index))
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => m.scatter(ray_in, rec, rng),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => m.scatter(ray_in, rec, rng),
        }
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian {
    albedo: Texture,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo.
    pub fn new(albedo: impl Into<Texture>) -> Self {
        Self {
            albedo: albedo.into(),
        }
    }

    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_in_unit_sphere(rng);

        // Catch degenerate scatter direction
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Metal {
    albedo: Texture,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: impl Into<Texture>, fuzz: f32) -> Self {
        Self {
            albedo: albedo.into(),
            // Sign is irrelevant, the fuzz sample is symmetric
            fuzz: fuzz.abs().min(1.0),
        }
    }

    /// The effective fuzz factor, in [0, 1].
    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }

    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzzed reflections that dip below the surface are absorbed
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo.value(rec.u, rec.v, rec.p),
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    refractive_index: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn new(refractive_index: f32) -> Self {
        Self { refractive_index }
    }

    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let direction = ray_in.direction();
        let ior = self.refractive_index;
        let d_dot_n = direction.dot(rec.normal);

        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            // Leaving the medium
            let cosine = d_dot_n / direction.length();
            let cosine = (1.0 - ior * ior * (1.0 - cosine * cosine)).sqrt();
            (-rec.normal, ior, cosine)
        } else {
            (rec.normal, 1.0 / ior, -d_dot_n / direction.length())
        };

        let scattered_dir = match refract(direction, outward_normal, ni_over_nt) {
            Some(refracted) if gen_f32(rng) >= schlick(cosine, ior) => refracted,
            // Total internal reflection, or the Fresnel coin chose reflection
            _ => reflect(direction, rec.normal),
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, scattered_dir),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with normal `n`.
///
/// Returns `None` when no refracted ray exists (total internal reflection).
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for Fresnel reflectance.
pub fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
