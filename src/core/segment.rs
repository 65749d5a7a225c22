use serde::{Serialize, Deserialize};
use crate::core::collectible::CollectibleEntry;
use crate::core::course_error::CourseError;
use crate::core::hazard_entry::HazardEntry;

pub const DEFAULT_TRACK_WIDTH: f32 = 15.0;
pub const DEFAULT_WALL_HEIGHT: f32 = 3.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    Straight,
    TurnLeft,
    TurnRight,
    SCurve,
    Ramp,
    Gap,
    NarrowCorridor,
    WideOpen,
    Bridge,
    Tunnel,
}

impl SegmentType {
    /// -1 for left, +1 for right, `None` for everything the cursor treats as straight.
    pub fn turn_sign(self) -> Option<f32> {
        match self {
            SegmentType::TurnLeft => Some(-1.0),
            SegmentType::TurnRight => Some(1.0),
            _ => None,
        }
    }

    pub fn is_turn(self) -> bool {
        self.turn_sign().is_some()
    }

    pub fn effective_width(self, width: f32) -> f32 {
        match self {
            SegmentType::NarrowCorridor => width.max(4.0),
            SegmentType::Bridge => width.max(2.0),
            SegmentType::WideOpen => width * 1.5,
            _ => width,
        }
    }
}

fn default_width() -> f32 {
    DEFAULT_TRACK_WIDTH
}

fn default_wall_height() -> f32 {
    DEFAULT_WALL_HEIGHT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Segment {
    pub segment_type: SegmentType,
    pub length: f32,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default)]
    pub elevation: f32,
    #[serde(default)]
    pub has_checkpoint: bool,
    #[serde(default)]
    pub checkpoint_index: u32,
    #[serde(default)]
    pub has_left_wall: bool,
    #[serde(default)]
    pub has_right_wall: bool,
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    #[serde(default)]
    pub hazards: Vec<HazardEntry>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleEntry>,
}

impl Segment {
    pub fn new(segment_type: SegmentType, length: f32, width: f32) -> Self {
        Segment {
            segment_type,
            length,
            width,
            elevation: 0.0,
            has_checkpoint: false,
            checkpoint_index: 0,
            has_left_wall: false,
            has_right_wall: false,
            wall_height: DEFAULT_WALL_HEIGHT,
            hazards: Vec::new(),
            collectibles: Vec::new(),
        }
    }

    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_checkpoint(mut self, checkpoint_index: u32) -> Self {
        self.has_checkpoint = true;
        self.checkpoint_index = checkpoint_index;
        self
    }

    pub fn with_walls(mut self, left: bool, right: bool) -> Self {
        self.has_left_wall = left;
        self.has_right_wall = right;
        self
    }

    pub fn with_wall_height(mut self, wall_height: f32) -> Self {
        self.wall_height = wall_height;
        self
    }

    pub fn with_hazard(mut self, hazard: HazardEntry) -> Self {
        self.hazards.push(hazard);
        self
    }

    pub fn with_collectible(mut self, collectible: CollectibleEntry) -> Self {
        self.collectibles.push(collectible);
        self
    }

    pub fn effective_width(&self) -> f32 {
        self.segment_type.effective_width(self.width)
    }

    /// Rejects geometry the cursor and synthesizer would divide by.
    pub fn validate(&self, index: usize) -> Result<(), CourseError> {
        let invalid = |reason: String| CourseError::InvalidSegment {
            index,
            segment_type: self.segment_type,
            reason,
        };

        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(invalid(format!("length must be positive, got {}", self.length)));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(invalid(format!("width must be positive, got {}", self.width)));
        }
        if !self.elevation.is_finite() {
            return Err(invalid("elevation must be finite".to_string()));
        }
        if !self.wall_height.is_finite() {
            return Err(invalid("wall height must be finite".to_string()));
        }

        Ok(())
    }
}
