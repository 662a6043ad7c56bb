//! Lighting module: directional light model and scene light set.
//!
//! Provides the per-fragment shading routine, the light descriptor value
//! type with its GPU uniform mirror, and the validated LightRig built by
//! scene setup. The engine does NOT store lights globally; a rig is a
//! tool provided by this crate, owned and driven by the caller.

mod directional_light;
mod shade;
mod light_rig;

pub use directional_light::{DirectionalLight, DirectionalLightUniform};
pub use shade::{Fragment, shade, shade_all, shade_into};
pub use light_rig::{LightRig, LightRigDesc};
