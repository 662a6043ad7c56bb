/*!
# Bright Engine Lighting

Lighting core of the Bright rendering engine.

This crate provides the per-fragment directional lighting model used by the
shading pipeline, together with the light descriptor types, a validated
scene light set (`LightRig`), the GPU-ready uniform layout for backends to
bind, and the per-frame telemetry context read by the editor overlay.

The surrounding engine (render device, swapchain, pipelines, scene graph)
lives in sibling crates and consumes this one; nothing here touches a
window or a GPU.

## Architecture

- **lighting::shade**: pure per-fragment evaluation (ambient + diffuse +
  specular) for a single directional light
- **lighting::DirectionalLight**: light descriptor value type and its
  std140-compatible uniform mirror
- **lighting::LightRig**: validated, named set of lights built by scene
  setup; summed evaluation and whole-rig uniform packing
- **telemetry::FrameTelemetry**: explicit frame-timing context, created at
  render-loop start, updated once per frame, read by the UI layer
*/

// Internal modules
mod error;
pub mod log;
pub mod lighting;
pub mod telemetry;

// Main bright namespace module
pub mod bright {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger host, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
        // Note: engine_* macros are NOT re-exported here, they are crate-root exports
    }

    // Lighting sub-module with all shading types
    pub mod lighting {
        pub use crate::lighting::*;
    }

    // Telemetry sub-module
    pub mod telemetry {
        pub use crate::telemetry::FrameTelemetry;
    }
}

// Re-export math library at crate root
pub use glam;
