use bevy::prelude::*;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementMode {
    Left,
    Center,
    Right,
    Random,
    BothSides,
    Overhead,
    Behind,
}

fn default_scale() -> f32 {
    1.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HazardEntry {
    /// Looked up in the hazard binding table; unknown names fall back to a generic trigger.
    pub hazard_type: String,
    pub mode: PlacementMode,
    #[serde(default)]
    pub offset: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// 0 means the hazard's default timing.
    #[serde(default)]
    pub custom_param: f32,
}

impl HazardEntry {
    pub fn new(hazard_type: impl Into<String>, mode: PlacementMode) -> Self {
        HazardEntry {
            hazard_type: hazard_type.into(),
            mode,
            offset: Vec3::ZERO,
            scale: 1.0,
            custom_param: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_custom_param(mut self, custom_param: f32) -> Self {
        self.custom_param = custom_param;
        self
    }

    pub fn with_mode(&self, mode: PlacementMode) -> Self {
        HazardEntry { mode, ..self.clone() }
    }
}
