use super::*;
use glam::Vec3;
use std::mem::{align_of, offset_of, size_of};

// ===== DESCRIPTOR TESTS =====

#[test]
fn test_light_default() {
    let light = DirectionalLight::default();

    assert!((light.direction.length() - 1.0).abs() < 1e-4);
    assert!(light.direction.y > 0.0);
    assert_eq!(light.intensity, 1.0);
    assert_eq!(light.color, Vec3::new(1.0, 0.96, 0.90));
    assert_eq!(light.specular_exponent, 32.0);
    assert_eq!(light.specular_color, Vec3::ONE);
    assert_eq!(light.ambient, 0.1);
}

#[test]
fn test_light_new_keeps_default_shading_terms() {
    let light = DirectionalLight::new(Vec3::Y, Vec3::new(0.8, 0.2, 0.2));

    assert_eq!(light.direction, Vec3::Y);
    assert_eq!(light.color, Vec3::new(0.8, 0.2, 0.2));
    let defaults = DirectionalLight::default();
    assert_eq!(light.intensity, defaults.intensity);
    assert_eq!(light.specular_exponent, defaults.specular_exponent);
    assert_eq!(light.specular_color, defaults.specular_color);
    assert_eq!(light.ambient, defaults.ambient);
}

#[test]
fn test_light_traveling_negates_direction() {
    // A light traveling straight down shines from straight above.
    let light = DirectionalLight::traveling(Vec3::NEG_Y, Vec3::ONE);
    assert_eq!(light.direction, Vec3::Y);
}

#[test]
fn test_light_is_finite() {
    assert!(DirectionalLight::default().is_finite());

    let bad = DirectionalLight {
        ambient: f32::NAN,
        ..DirectionalLight::default()
    };
    assert!(!bad.is_finite());

    let bad = DirectionalLight {
        specular_color: Vec3::new(0.0, f32::INFINITY, 0.0),
        ..DirectionalLight::default()
    };
    assert!(!bad.is_finite());
}

// ===== UNIFORM PACKING TESTS =====

#[test]
fn test_light_to_uniform_packing() {
    let light = DirectionalLight {
        direction: Vec3::Y,
        intensity: 2.5,
        color: Vec3::new(0.25, 0.5, 0.75),
        specular_exponent: 16.0,
        specular_color: Vec3::new(1.0, 0.0, 0.0),
        ambient: 0.2,
    };
    let uniform = light.to_uniform();

    assert_eq!(uniform.direction_intensity, [0.0, 1.0, 0.0, 2.5]);
    assert_eq!(uniform.color_ambient, [0.25, 0.5, 0.75, 0.2]);
    assert_eq!(uniform.specular, [1.0, 0.0, 0.0, 16.0]);
}

#[test]
fn test_light_to_uniform_normalizes_direction() {
    let light = DirectionalLight {
        direction: Vec3::new(0.0, 25.0, 0.0),
        ..DirectionalLight::default()
    };
    let uniform = light.to_uniform();
    assert_eq!(uniform.direction_intensity[0], 0.0);
    assert_eq!(uniform.direction_intensity[1], 1.0);
    assert_eq!(uniform.direction_intensity[2], 0.0);
}

#[test]
fn test_light_to_uniform_zero_direction_stays_zero() {
    let light = DirectionalLight {
        direction: Vec3::ZERO,
        ..DirectionalLight::default()
    };
    let uniform = light.to_uniform();
    assert_eq!(uniform.direction_intensity[0], 0.0);
    assert_eq!(uniform.direction_intensity[1], 0.0);
    assert_eq!(uniform.direction_intensity[2], 0.0);
    assert!(uniform.direction_intensity.iter().all(|v| v.is_finite()));
}

// ===== UNIFORM LAYOUT TESTS =====

#[test]
fn test_light_uniform_layout() {
    // The shader block is three vec4 slots: any drift here breaks the
    // GPU side silently, so the offsets are pinned.
    assert_eq!(size_of::<DirectionalLightUniform>(), 48);
    assert_eq!(align_of::<DirectionalLightUniform>(), 4);
    assert_eq!(offset_of!(DirectionalLightUniform, direction_intensity), 0);
    assert_eq!(offset_of!(DirectionalLightUniform, color_ambient), 16);
    assert_eq!(offset_of!(DirectionalLightUniform, specular), 32);
}

#[test]
fn test_light_uniform_bytes() {
    let uniform = DirectionalLight::default().to_uniform();

    let bytes = bytemuck::bytes_of(&uniform);
    assert_eq!(bytes.len(), 48);

    let restored: &DirectionalLightUniform = bytemuck::from_bytes(bytes);
    assert_eq!(*restored, uniform);
}

#[test]
fn test_light_uniform_zeroed() {
    let uniform = DirectionalLightUniform::zeroed();
    assert_eq!(uniform.direction_intensity, [0.0; 4]);
    assert_eq!(uniform.color_ambient, [0.0; 4]);
    assert_eq!(uniform.specular, [0.0; 4]);
}
