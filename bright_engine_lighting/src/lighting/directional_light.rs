//! Directional light descriptor and its GPU uniform mirror.
//!
//! A DirectionalLight is a pure data description of one infinitely-distant
//! light source (parallel rays, a single direction instead of a position).
//! Values are built by scene setup, passed by value into the shading
//! routine once per fragment, and discarded after the call returns.
//!
//! No GPU resources are created at this level. A backend binds the
//! [`DirectionalLightUniform`] mirror produced by [`to_uniform`].
//!
//! [`to_uniform`]: DirectionalLight::to_uniform

use glam::Vec3;
use bytemuck::{Pod, Zeroable};

// ===== LIGHT DESCRIPTOR =====

/// One directional light.
///
/// Sign convention: `direction` is the **to-light** vector, pointing from
/// the shaded surface toward the light source. A light shining straight
/// down on a ground plane has `direction = (0, 1, 0)`. Callers holding
/// the direction the light *travels* (light toward surface) should use
/// [`DirectionalLight::traveling`], which negates for them.
///
/// `direction` does not need to be unit length; the shading routine and
/// the uniform packing normalize it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// To-light vector (surface toward light). Normalized internally.
    pub direction: Vec3,

    /// Scalar intensity multiplier. Reserved: carried on the type and in
    /// the uniform for pipeline compatibility, but the current shading
    /// formula does not reference it.
    pub intensity: f32,

    /// Diffuse light color (linear RGB, components typically in [0, 1]).
    pub color: Vec3,

    /// Shininess exponent for specular falloff. Must be >= 0.
    pub specular_exponent: f32,

    /// Specular highlight color (linear RGB).
    pub specular_color: Vec3,

    /// Uniform ambient term applied equally to all RGB channels.
    pub ambient: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            // Light from the upper-right-front:
            // normalize(0.5, 1.0, 0.3) = (0.431934, 0.863868, 0.259161)
            direction: Vec3::new(0.431934, 0.863868, 0.259161),
            intensity: 1.0,
            // Warm white, approximating daylight
            color: Vec3::new(1.0, 0.96, 0.90),
            specular_exponent: 32.0,
            specular_color: Vec3::ONE,
            ambient: 0.1,
        }
    }
}

impl DirectionalLight {
    /// Create a light from a to-light direction and a diffuse color.
    ///
    /// Remaining fields (intensity, specular, ambient) take the
    /// [`Default`] values; override them with struct update syntax:
    ///
    /// ```
    /// use bright_engine_lighting::bright::lighting::DirectionalLight;
    /// use bright_engine_lighting::glam::Vec3;
    ///
    /// let fill = DirectionalLight {
    ///     specular_color: Vec3::ZERO,
    ///     ambient: 0.0,
    ///     ..DirectionalLight::new(Vec3::new(-1.0, 0.2, 0.0), Vec3::splat(0.2))
    /// };
    /// assert_eq!(fill.specular_color, Vec3::ZERO);
    /// ```
    pub fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction,
            color,
            ..Self::default()
        }
    }

    /// Create a light from the direction the light travels (light toward
    /// surface), the convention used by sun-angle data.
    ///
    /// Negates the vector so the stored `direction` is the to-light
    /// convention this crate shades with.
    pub fn traveling(travel_direction: Vec3, color: Vec3) -> Self {
        Self::new(-travel_direction, color)
    }

    /// Build the GPU-side uniform from this light's properties.
    ///
    /// The packed direction is normalized (zero-tolerant: a degenerate
    /// direction packs as the zero vector) so shader code can use it
    /// without a per-fragment normalize.
    pub fn to_uniform(&self) -> DirectionalLightUniform {
        let dir = self.direction.normalize_or_zero();
        DirectionalLightUniform {
            direction_intensity: [dir.x, dir.y, dir.z, self.intensity],
            color_ambient: [self.color.x, self.color.y, self.color.z, self.ambient],
            specular: [
                self.specular_color.x,
                self.specular_color.y,
                self.specular_color.z,
                self.specular_exponent,
            ],
        }
    }

    /// True if every field is finite (no NaN or infinity anywhere).
    ///
    /// Used by LightRig validation; raw [`shade`](crate::lighting::shade)
    /// callers may skip the check since the routine is total over finite
    /// inputs.
    pub fn is_finite(&self) -> bool {
        self.direction.is_finite()
            && self.intensity.is_finite()
            && self.color.is_finite()
            && self.specular_exponent.is_finite()
            && self.specular_color.is_finite()
            && self.ambient.is_finite()
    }
}

// ===== GPU UNIFORM MIRROR =====

/// GPU-side representation, 48 bytes, std140-compatible.
///
/// Three vec4 slots; scalars ride in the w components so the struct has
/// no padding and a fixed layout on every backend.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = normalized to-light direction, w = intensity.
    pub direction_intensity: [f32; 4],
    /// xyz = diffuse color (linear RGB), w = ambient term.
    pub color_ambient: [f32; 4],
    /// xyz = specular color (linear RGB), w = specular exponent.
    pub specular: [f32; 4],
}

#[cfg(test)]
#[path = "directional_light_tests.rs"]
mod tests;
