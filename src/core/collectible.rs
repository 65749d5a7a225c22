use bevy::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectibleType {
    #[default]
    Currency,
    Boost,
    Shield,
    ExtraLife,
}

impl CollectibleType {
    pub fn trigger_radius(self) -> f32 {
        match self {
            CollectibleType::Currency => 0.6,
            CollectibleType::Boost => 1.0,
            CollectibleType::Shield | CollectibleType::ExtraLife => 0.8,
        }
    }

    pub fn marker_color(self) -> Color {
        match self {
            CollectibleType::Currency => Color::srgb(1.0, 0.84, 0.0),
            CollectibleType::Boost => Color::srgb(0.1, 0.6, 1.0),
            CollectibleType::Shield => Color::srgb(0.3, 1.0, 0.5),
            CollectibleType::ExtraLife => Color::srgb(1.0, 0.2, 0.4),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CollectibleEntry {
    #[serde(default)]
    pub offset: Vec3,
    #[serde(default)]
    pub collectible_type: CollectibleType,
}

impl CollectibleEntry {
    pub fn new(offset: Vec3) -> Self {
        CollectibleEntry { offset, collectible_type: CollectibleType::Currency }
    }

    pub fn of_type(mut self, collectible_type: CollectibleType) -> Self {
        self.collectible_type = collectible_type;
        self
    }
}
