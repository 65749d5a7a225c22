use bevy::prelude::*;
use bevy::pbr::{CascadeShadowConfig, DistanceFog, FogFalloff};
use crate::core::components::MainDirectionalLight;
use crate::generation::dressing::{AmbientSettings, FogParams, SunLight};

pub fn directional_light(sun: &SunLight) -> (DirectionalLight, Transform) {
    let light = DirectionalLight {
        color: sun.color,
        illuminance: sun.illuminance,
        shadows_enabled: true,
        ..default()
    };
    let transform = Transform::default().looking_to(sun.direction, Vec3::Y);
    (light, transform)
}

pub fn ambient_light(settings: &AmbientSettings) -> AmbientLight {
    AmbientLight {
        color: settings.color,
        brightness: settings.brightness,
    }
}

/// Without fog params the fog colour is fully transparent, which disables it.
pub fn distance_fog(params: Option<&FogParams>) -> DistanceFog {
    match params {
        Some(fog) => DistanceFog {
            color: fog.color,
            falloff: FogFalloff::Linear { start: fog.start, end: fog.end },
            ..default()
        },
        None => DistanceFog {
            color: Color::NONE,
            ..default()
        },
    }
}

pub(crate) fn spawn_main_directional_light(
    commands: &mut Commands,
    light: DirectionalLight,
    transform: Transform,
) -> Entity {
    commands.spawn_empty()
        .insert(light)
        .insert(transform)
        .insert(Name::new("MainDirectionalLight"))
        .insert(CascadeShadowConfig {
            bounds: vec![0.0, 30.0, 90.0, 270.0],
            overlap_proportion: 0.2,
            minimum_distance: 0.0,
        })
        .insert(MainDirectionalLight)
        .id()
}
