//! Per-fragment directional light evaluation.
//!
//! The model is ambient + Lambertian diffuse + Phong reflection specular,
//! evaluated once per fragment. On the GPU path the same formula runs in
//! the fragment stage; this CPU implementation is the reference and the
//! software-rendering path.
//!
//! All routines here are pure: no state, no I/O, no ordering constraints
//! between invocations. They may run concurrently over any number of
//! fragments.

use glam::Vec3;
use crate::engine_error;
use crate::error::{Error, Result};
use super::directional_light::DirectionalLight;

// ===== FRAGMENT INPUT =====

/// Geometric inputs for one shaded point, as interpolated by the
/// rasterizer. The camera position is shared per batch and passed
/// separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Interpolated surface normal (may be non-unit-length).
    pub normal: Vec3,
    /// World-space position of the shaded point.
    pub world_position: Vec3,
}

// ===== SINGLE-FRAGMENT EVALUATION =====

/// Compute the RGB radiance contribution of one directional light at one
/// surface point.
///
/// Steps:
/// 1. `L = normalize(light.direction)` (to-light vector, see
///    [`DirectionalLight`] for the sign convention)
/// 2. `N = normalize(surface_normal)`
/// 3. diffuse = `light.color * max(dot(N, L), 0)`
/// 4. `V = normalize(camera_position - world_position)`
/// 5. `R = reflect(-L, N)`
/// 6. specular = `light.specular_color * max(dot(V, R), 0) ^ light.specular_exponent`
/// 7. result = ambient + diffuse + specular
///
/// Numeric semantics:
/// - A zero-length direction or normal yields the ambient term alone:
///   diffuse and specular are skipped entirely rather than evaluated
///   against a zero vector. The routine is total over finite inputs and
///   never produces NaN.
/// - A zero-length view offset (camera at the fragment) normalizes to
///   zero, so `dot(V, R)` is 0 and the specular term follows the `0^0`
///   rule below.
/// - Both dot products are clamped to >= 0 before use, so back-facing
///   geometry contributes no diffuse or specular.
/// - `0^0` follows IEEE `powf`: a zero exponent yields 1 even for a fully
///   grazing highlight.
/// - The result is NOT clamped to [0, 1]; tone mapping is the caller's
///   concern.
///
/// `specular_exponent` must be >= 0; negative exponents are a caller bug
/// with undefined (possibly infinite) results. [`LightRig`] validation
/// rejects them at setup time.
///
/// [`LightRig`]: super::LightRig
pub fn shade(
    light: DirectionalLight,
    surface_normal: Vec3,
    world_position: Vec3,
    camera_position: Vec3,
) -> Vec3 {
    let l = light.direction.normalize_or_zero();
    let n = surface_normal.normalize_or_zero();

    // Degenerate light or normal: ambient only. reflect(-L, 0) hands
    // back -L, so the lit terms have to be skipped, not just zeroed.
    if l == Vec3::ZERO || n == Vec3::ZERO {
        return Vec3::splat(light.ambient);
    }

    // Lambert term, clamped: back-facing surfaces receive no diffuse
    let diff = n.dot(l).max(0.0);
    let diffuse = light.color * diff;

    // Phong reflection: mirror the incoming ray (-L) about the normal
    let v = (camera_position - world_position).normalize_or_zero();
    let r = (-l).reflect(n);
    let spec = v.dot(r).max(0.0).powf(light.specular_exponent);
    let specular = light.specular_color * spec;

    Vec3::splat(light.ambient) + diffuse + specular
}

// ===== MULTI-LIGHT EVALUATION =====

/// Sum the contributions of several directional lights at one surface
/// point.
///
/// Each light contributes its own ambient term; an empty slice yields
/// black. No clamping is applied.
pub fn shade_all(
    lights: &[DirectionalLight],
    surface_normal: Vec3,
    world_position: Vec3,
    camera_position: Vec3,
) -> Vec3 {
    let mut total = Vec3::ZERO;
    for light in lights {
        total += shade(*light, surface_normal, world_position, camera_position);
    }
    total
}

// ===== BATCH EVALUATION =====

/// Shade a batch of fragments with one light, writing one color per
/// fragment into `out`.
///
/// The camera position is shared across the batch. Fragments are
/// independent; a parallel caller may split the slices and shade tiles
/// concurrently with no coordination.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::bright::Error::InvalidInput)
/// if `fragments` and `out` differ in length.
pub fn shade_into(
    light: DirectionalLight,
    camera_position: Vec3,
    fragments: &[Fragment],
    out: &mut [Vec3],
) -> Result<()> {
    if fragments.len() != out.len() {
        let message = format!(
            "Batch shade output length {} does not match fragment count {}",
            out.len(),
            fragments.len()
        );
        engine_error!("bright::lighting", "{}", message);
        return Err(Error::InvalidInput(message));
    }

    for (fragment, color) in fragments.iter().zip(out.iter_mut()) {
        *color = shade(
            light,
            fragment.normal,
            fragment.world_position,
            camera_position,
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "shade_tests.rs"]
mod tests;
