use bevy::prelude::*;
use crate::core::collectible::CollectibleType;
use crate::generation::hazard_table::{HazardKind, ResolvedParameter};
use crate::generation::volume::VolumeKind;

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct MainDirectionalLight;

// Root of everything spawned for one generated course; despawn it to clear the course.
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
pub struct CourseRoot {
    pub name: String,
}

#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct CourseVolume {
    pub kind: VolumeKind,
    pub segment_index: usize,
}

// Marks volumes that received the environment ground material.
#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct GroundSurface;

#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct Checkpoint {
    pub index: u32,
    pub segment_index: usize,
}

#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct StartLine;

#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct FinishLine;

#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct SpawnPoint;

#[derive(Component, Clone, Copy, Debug)]
pub struct Collectible {
    pub collectible_type: CollectibleType,
}

// Static hazard configuration handed to whatever runtime drives hazard behaviour.
#[derive(Component, Clone, Debug)]
pub struct Hazard {
    pub hazard_type: String,
    pub kind: Option<HazardKind>,
    pub parameter: Option<ResolvedParameter>,
    pub scale: f32,
}
