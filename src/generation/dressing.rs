use bevy::prelude::*;
use crate::core::environment::EnvironmentType;
use crate::generation::volume::{Volume, VolumeHandle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLight {
    pub color: Color,
    pub illuminance: f32,
    /// Direction the light travels in, normalized.
    pub direction: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSettings {
    pub color: Color,
    pub brightness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogParams {
    pub color: Color,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    pub base_color: Color,
    pub perceptual_roughness: f32,
    pub metallic: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentDressing {
    pub preset: &'static str,
    pub sun: SunLight,
    pub ambient: AmbientSettings,
    pub fog: Option<FogParams>,
    pub ground: SurfaceMaterial,
}

fn sun(color: Color, illuminance: f32, direction: Vec3) -> SunLight {
    SunLight { color, illuminance, direction: direction.normalize() }
}

pub fn greybox_dressing() -> EnvironmentDressing {
    EnvironmentDressing {
        preset: "Greybox",
        sun: sun(Color::WHITE, 10_000.0, Vec3::new(-0.3, -1.0, -0.2)),
        ambient: AmbientSettings { color: Color::WHITE, brightness: 400.0 },
        fog: None,
        ground: SurfaceMaterial {
            base_color: Color::srgb(0.5, 0.5, 0.5),
            perceptual_roughness: 0.9,
            metallic: 0.0,
        },
    }
}

pub fn environment_dressing(environment: EnvironmentType) -> EnvironmentDressing {
    match environment {
        EnvironmentType::Lava => EnvironmentDressing {
            preset: "Lava",
            sun: sun(Color::srgb(1.0, 0.55, 0.35), 8_000.0, Vec3::new(0.2, -0.6, 0.4)),
            ambient: AmbientSettings { color: Color::srgb(0.6, 0.2, 0.1), brightness: 250.0 },
            fog: Some(FogParams { color: Color::srgb(0.35, 0.1, 0.05), start: 40.0, end: 260.0 }),
            ground: SurfaceMaterial {
                base_color: Color::srgb(0.18, 0.12, 0.1),
                perceptual_roughness: 0.95,
                metallic: 0.0,
            },
        },
        EnvironmentType::Ice => EnvironmentDressing {
            preset: "Ice",
            sun: sun(Color::srgb(0.85, 0.92, 1.0), 18_000.0, Vec3::new(-0.4, -0.8, 0.2)),
            ambient: AmbientSettings { color: Color::srgb(0.7, 0.85, 1.0), brightness: 600.0 },
            fog: Some(FogParams { color: Color::srgb(0.82, 0.9, 0.96), start: 60.0, end: 400.0 }),
            ground: SurfaceMaterial {
                base_color: Color::srgb(0.78, 0.88, 0.95),
                perceptual_roughness: 0.15,
                metallic: 0.05,
            },
        },
        EnvironmentType::Toxic => EnvironmentDressing {
            preset: "Toxic",
            sun: sun(Color::srgb(0.75, 1.0, 0.55), 6_000.0, Vec3::new(0.3, -0.7, -0.3)),
            ambient: AmbientSettings { color: Color::srgb(0.3, 0.5, 0.15), brightness: 300.0 },
            fog: Some(FogParams { color: Color::srgb(0.25, 0.4, 0.1), start: 25.0, end: 180.0 }),
            ground: SurfaceMaterial {
                base_color: Color::srgb(0.22, 0.26, 0.14),
                perceptual_roughness: 0.8,
                metallic: 0.1,
            },
        },
        EnvironmentType::Storm => EnvironmentDressing {
            preset: "Storm",
            sun: sun(Color::srgb(0.6, 0.65, 0.8), 4_000.0, Vec3::new(-0.1, -1.0, 0.3)),
            ambient: AmbientSettings { color: Color::srgb(0.35, 0.38, 0.5), brightness: 350.0 },
            fog: Some(FogParams { color: Color::srgb(0.3, 0.32, 0.4), start: 30.0, end: 220.0 }),
            ground: SurfaceMaterial {
                base_color: Color::srgb(0.25, 0.26, 0.3),
                perceptual_roughness: 0.7,
                metallic: 0.2,
            },
        },
        EnvironmentType::Canyon => EnvironmentDressing {
            preset: "Canyon",
            sun: sun(Color::srgb(1.0, 0.9, 0.75), 25_000.0, Vec3::new(0.5, -0.7, 0.1)),
            ambient: AmbientSettings { color: Color::srgb(0.9, 0.75, 0.6), brightness: 500.0 },
            fog: Some(FogParams { color: Color::srgb(0.85, 0.7, 0.55), start: 120.0, end: 600.0 }),
            ground: SurfaceMaterial {
                base_color: Color::srgb(0.6, 0.38, 0.24),
                perceptual_roughness: 0.9,
                metallic: 0.0,
            },
        },
    }
}

pub fn select_dressing(environment: EnvironmentType, greybox: bool) -> EnvironmentDressing {
    if greybox {
        greybox_dressing()
    } else {
        environment_dressing(environment)
    }
}

/// Gives every reported ground surface the dressing's ground material.
pub fn apply_dressing(dressing: &EnvironmentDressing, volumes: &mut [Volume], ground: &[VolumeHandle]) {
    for handle in ground {
        if let Some(volume) = volumes.get_mut(handle.0) {
            volume.surface = Some(dressing.ground);
        } else {
            warn!("Ground handle {} is out of range", handle.0);
        }
    }
}
