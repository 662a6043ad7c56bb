//! Named collections of directional lights with setup-time validation.
//!
//! A [`LightRig`] is built once from a [`LightRigDesc`], validated, and
//! then queried by name or index every frame. Construction rejects
//! degenerate lights so the per-frame paths never have to.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::engine_bail;
use crate::error::Result;
use super::directional_light::{DirectionalLight, DirectionalLightUniform};
use super::shade::shade;

// ===== LIGHT RIG DESCRIPTION =====

/// Description used to build a [`LightRig`].
///
/// Lights keep the order given here; that order is also the uniform
/// buffer order. Names must be unique and non-empty.
#[derive(Debug, Clone, Default)]
pub struct LightRigDesc {
    pub lights: Vec<(String, DirectionalLight)>,
}

// ===== LIGHT RIG =====

/// A validated, ordered set of named directional lights.
#[derive(Debug, Clone)]
pub struct LightRig {
    lights: Vec<(String, DirectionalLight)>,
    names: FxHashMap<String, usize>,
}

impl LightRig {
    /// Build a rig from a description, validating every light.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLight`](crate::bright::Error::InvalidLight)
    /// if a name is empty or duplicated, if a light has a non-finite
    /// field, a zero-length direction, or a negative specular exponent.
    pub fn from_desc(desc: LightRigDesc) -> Result<LightRig> {
        let mut names: FxHashMap<String, usize> = FxHashMap::default();

        for (index, (name, light)) in desc.lights.iter().enumerate() {
            if name.is_empty() {
                engine_bail!("bright::lighting", "Light name must not be empty");
            }
            if names.contains_key(name) {
                engine_bail!("bright::lighting", "Duplicate light name '{}'", name);
            }
            validate_light(name, light)?;
            names.insert(name.clone(), index);
        }

        crate::engine_debug!(
            "bright::lighting",
            "Light rig created with {} light(s)",
            desc.lights.len()
        );

        Ok(LightRig {
            lights: desc.lights,
            names,
        })
    }

    /// Replace the light registered under `name`, keeping its position
    /// in the rig order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLight`](crate::bright::Error::InvalidLight)
    /// if no light with that name exists or the replacement fails the
    /// same validation as [`LightRig::from_desc`].
    pub fn update_light(&mut self, name: &str, light: DirectionalLight) -> Result<()> {
        let Some(&index) = self.names.get(name) else {
            engine_bail!("bright::lighting", "No light named '{}' in rig", name);
        };
        validate_light(name, &light)?;
        self.lights[index].1 = light;
        Ok(())
    }

    /// Look up a light by name.
    pub fn light(&self, name: &str) -> Option<&DirectionalLight> {
        self.names.get(name).map(|&index| &self.lights[index].1)
    }

    /// Look up a light by rig order.
    pub fn light_at(&self, index: usize) -> Option<&DirectionalLight> {
        self.lights.get(index).map(|(_, light)| light)
    }

    /// Name of the light at `index` in rig order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.lights.get(index).map(|(name, _)| name.as_str())
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Iterate lights in rig order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectionalLight)> {
        self.lights
            .iter()
            .map(|(name, light)| (name.as_str(), light))
    }

    /// Pack every light into its GPU representation, in rig order.
    pub fn uniforms(&self) -> Vec<DirectionalLightUniform> {
        self.lights
            .iter()
            .map(|(_, light)| light.to_uniform())
            .collect()
    }

    /// Shade one surface point with every light in the rig.
    ///
    /// Contributions are summed; an empty rig yields black.
    pub fn shade(&self, surface_normal: Vec3, world_position: Vec3, camera_position: Vec3) -> Vec3 {
        let mut total = Vec3::ZERO;
        for (_, light) in &self.lights {
            total += shade(*light, surface_normal, world_position, camera_position);
        }
        total
    }
}

fn validate_light(name: &str, light: &DirectionalLight) -> Result<()> {
    if !light.is_finite() {
        engine_bail!(
            "bright::lighting",
            "Light '{}' has a non-finite field: {:?}",
            name,
            light
        );
    }
    if light.direction.length_squared() == 0.0 {
        engine_bail!(
            "bright::lighting",
            "Light '{}' has a zero-length direction",
            name
        );
    }
    if light.specular_exponent < 0.0 {
        engine_bail!(
            "bright::lighting",
            "Light '{}' has a negative specular exponent {}",
            name,
            light.specular_exponent
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "light_rig_tests.rs"]
mod tests;
