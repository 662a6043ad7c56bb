//! Headless lighting demo
//!
//! Renders an orthographic view of a unit sphere lit by a two-light rig,
//! nudging the sun around the vertical axis each frame, and writes the
//! final frame to a PNG. Exercises rig construction, per-light additive
//! batch shading, uniform packing, and frame telemetry without touching
//! a GPU or a window.
//!
//! Usage: bright_lighting_demo [output.png]

use anyhow::Context;
use bright_engine_lighting::bright::lighting::{
    shade_into, DirectionalLight, DirectionalLightUniform, Fragment, LightRig, LightRigDesc,
};
use bright_engine_lighting::bright::telemetry::FrameTelemetry;
use bright_engine_lighting::engine_info;
use bright_engine_lighting::glam::{Quat, Vec3};
use image::{Rgb, RgbImage};

const IMAGE_SIZE: u32 = 512;
const FRAME_COUNT: u32 = 8;
const SUN_STEP_RADIANS: f32 = std::f32::consts::TAU / 64.0;

/// Sky color for pixels that miss the sphere.
const BACKGROUND: Vec3 = Vec3::new(0.4, 0.5, 0.6);
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// How far past the sphere silhouette the frame extends.
const VIEW_EXTENT: f32 = 1.1;

fn build_rig() -> anyhow::Result<LightRig> {
    // Warm key light from the upper right, cool dim fill from the left
    // with no highlight of its own.
    let sun = DirectionalLight::new(Vec3::new(0.5, 1.0, 0.8), Vec3::new(1.0, 0.96, 0.90));
    let fill = DirectionalLight {
        specular_color: Vec3::ZERO,
        ambient: 0.0,
        ..DirectionalLight::new(Vec3::new(-1.0, 0.2, 0.3), Vec3::new(0.10, 0.11, 0.16))
    };

    let desc = LightRigDesc {
        lights: vec![("sun".to_string(), sun), ("fill".to_string(), fill)],
    };
    Ok(LightRig::from_desc(desc)?)
}

/// Map a pixel to the unit sphere under an orthographic projection.
///
/// Returns the world position of the hit (which on a unit sphere at the
/// origin is also the surface normal), or None for the background.
fn sphere_hit(px: u32, py: u32) -> Option<Vec3> {
    let size = IMAGE_SIZE as f32;
    let x = ((px as f32 + 0.5) / size * 2.0 - 1.0) * VIEW_EXTENT;
    // Image rows grow downward; world Y grows upward.
    let y = (1.0 - (py as f32 + 0.5) / size * 2.0) * VIEW_EXTENT;

    let r2 = x * x + y * y;
    if r2 > 1.0 {
        return None;
    }
    Some(Vec3::new(x, y, (1.0 - r2).sqrt()))
}

/// Clamp and quantize linear radiance to 8-bit sRGB-ish output. The
/// shading core leaves radiance unclamped; display conversion happens
/// here at the edge.
fn tone_map(color: Vec3) -> Rgb<u8> {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Rgb([c.x as u8, c.y as u8, c.z as u8])
}

/// Shade one frame into `frame`, one additive pass per rig light.
fn render(rig: &LightRig, frame: &mut RgbImage) -> anyhow::Result<()> {
    let mut fragments: Vec<Fragment> = Vec::with_capacity(IMAGE_SIZE as usize);
    let mut columns: Vec<u32> = Vec::with_capacity(IMAGE_SIZE as usize);

    for py in 0..IMAGE_SIZE {
        fragments.clear();
        columns.clear();

        for px in 0..IMAGE_SIZE {
            match sphere_hit(px, py) {
                Some(position) => {
                    fragments.push(Fragment {
                        normal: position,
                        world_position: position,
                    });
                    columns.push(px);
                }
                None => frame.put_pixel(px, py, tone_map(BACKGROUND)),
            }
        }

        // One batch pass per light, summed like a forward renderer's
        // additive light passes.
        let mut totals = vec![Vec3::ZERO; fragments.len()];
        let mut pass = vec![Vec3::ZERO; fragments.len()];
        for (_, light) in rig.iter() {
            shade_into(*light, CAMERA_POSITION, &fragments, &mut pass)?;
            for (total, color) in totals.iter_mut().zip(pass.iter()) {
                *total += *color;
            }
        }

        for (px, color) in columns.iter().zip(totals.iter()) {
            frame.put_pixel(*px, py, tone_map(*color));
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sphere.png".to_string());

    let mut rig = build_rig()?;
    let mut telemetry = FrameTelemetry::new();
    let mut frame = RgbImage::new(IMAGE_SIZE, IMAGE_SIZE);

    engine_info!(
        "bright::demo",
        "Rendering {} frame(s) at {}x{} with {} light(s)",
        FRAME_COUNT,
        IMAGE_SIZE,
        IMAGE_SIZE,
        rig.light_count()
    );

    let sun_step = Quat::from_rotation_y(SUN_STEP_RADIANS);
    for _ in 0..FRAME_COUNT {
        telemetry.begin_frame();

        // Advance the sun a little, as a day cycle would.
        let mut sun = *rig.light("sun").context("sun light missing from rig")?;
        sun.direction = sun_step * sun.direction;
        rig.update_light("sun", sun)?;

        render(&rig, &mut frame)?;

        telemetry.end_frame();
    }

    engine_info!(
        "bright::demo",
        "Shaded {} frame(s), last frame {:.1} ms",
        telemetry.frame_count(),
        telemetry.last_frame_time().as_secs_f32() * 1000.0
    );

    // Stage the rig for a GPU backend, just to show the upload path.
    let uniforms = rig.uniforms();
    engine_info!(
        "bright::demo",
        "Packed {} light uniform(s), {} bytes",
        uniforms.len(),
        uniforms.len() * std::mem::size_of::<DirectionalLightUniform>()
    );

    frame
        .save(&output)
        .with_context(|| format!("Failed to write image to {}", output))?;
    engine_info!("bright::demo", "Wrote {}", output);

    Ok(())
}
