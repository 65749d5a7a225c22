use std::fs;
use std::path::Path;
use bevy::prelude::*;
use serde::{Serialize, Deserialize};
use crate::core::course_error::CourseError;

/// Optional override file read when the generator plugin is added.
pub const CONFIG_PATH: &str = "assets/generation.ron";

/// Collision layer bit indices for each kind of generated body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayerConfig {
    pub ground: u32,
    pub wall: u32,
    pub trigger: u32,
    pub hazard: u32,
}

impl Default for LayerConfig {
    fn default() -> Self {
        LayerConfig { ground: 0, wall: 1, trigger: 2, hazard: 3 }
    }
}

/// Tag names attached to generated entities.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TagConfig {
    pub ground: String,
    pub wall: String,
    pub ceiling: String,
    pub checkpoint: String,
    pub start_line: String,
    pub finish_line: String,
    pub spawn_point: String,
    pub collectible: String,
    pub hazard: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            ground: "Ground".to_string(),
            wall: "Wall".to_string(),
            ceiling: "Ceiling".to_string(),
            checkpoint: "Checkpoint".to_string(),
            start_line: "StartLine".to_string(),
            finish_line: "Finish".to_string(),
            spawn_point: "Respawn".to_string(),
            collectible: "Collectible".to_string(),
            hazard: "Hazard".to_string(),
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub ground_thickness: f32,
    pub wall_thickness: f32,
    /// Dress every course with the greybox preset regardless of its environment.
    pub force_greybox: bool,
    pub wall_color: Color,
    pub layers: LayerConfig,
    pub tags: TagConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            ground_thickness: 0.5,
            wall_thickness: 0.5,
            force_greybox: false,
            wall_color: Color::srgb(0.35, 0.35, 0.38),
            layers: LayerConfig::default(),
            tags: TagConfig::default(),
        }
    }
}

impl GenerationConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, CourseError> {
        Ok(ron::de::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CourseError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    /// Defaults when `path` is absent; a file that fails to parse is logged and ignored.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.is_file() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded generation config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring generation config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
