use serde::{Serialize, Deserialize};
use bevy::prelude::*;

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderRole {
    /// Blocks movement.
    Solid,
    /// Overlap-only volume.
    Trigger,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColliderInfo {
    pub collider_type: ColliderType,
    pub role: ColliderRole,
}

impl ColliderInfo {
    pub fn trigger(collider_type: ColliderType) -> Self {
        ColliderInfo { collider_type, role: ColliderRole::Trigger }
    }

    pub fn solid(collider_type: ColliderType) -> Self {
        ColliderInfo { collider_type, role: ColliderRole::Solid }
    }

    pub fn is_trigger(&self) -> bool {
        self.role == ColliderRole::Trigger
    }

    pub fn scaled(&self, scale: f32) -> Self {
        ColliderInfo { collider_type: self.collider_type.scaled(scale), role: self.role }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum ColliderType {
    Ball {
        radius: f32,
    },
    Cylinder {
        half_height: f32,
        radius: f32,
    },
    Cuboid {
        hx: f32,
        hy: f32,
        hz: f32,
    },
}

impl ColliderType {
    /// Cuboid from full extents.
    pub fn cuboid(size: Vec3) -> Self {
        ColliderType::Cuboid { hx: size.x / 2.0, hy: size.y / 2.0, hz: size.z / 2.0 }
    }

    pub fn scaled(&self, scale: f32) -> Self {
        match *self {
            ColliderType::Ball { radius } => ColliderType::Ball { radius: radius * scale },
            ColliderType::Cylinder { half_height, radius } => ColliderType::Cylinder {
                half_height: half_height * scale,
                radius: radius * scale,
            },
            ColliderType::Cuboid { hx, hy, hz } => ColliderType::Cuboid {
                hx: hx * scale,
                hy: hy * scale,
                hz: hz * scale,
            },
        }
    }

    /// Full axis-aligned extents of the shape in its own frame.
    pub fn extents(&self) -> Vec3 {
        match *self {
            ColliderType::Ball { radius } => Vec3::splat(radius * 2.0),
            ColliderType::Cylinder { half_height, radius } => {
                Vec3::new(radius * 2.0, half_height * 2.0, radius * 2.0)
            }
            ColliderType::Cuboid { hx, hy, hz } => Vec3::new(hx, hy, hz) * 2.0,
        }
    }
}
