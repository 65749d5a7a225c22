use bevy::prelude::*;
use serde::{Serialize, Deserialize};
use crate::core::course_error::CourseError;
use crate::core::environment::EnvironmentType;
use crate::core::pose::Pose;
use crate::core::segment::{Segment, DEFAULT_TRACK_WIDTH};

fn default_track_width() -> f32 {
    DEFAULT_TRACK_WIDTH
}

/// A declarative course: a start pose and the ordered segments that follow it.
///
/// `name` is an opaque scene identifier passed through to the output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseDefinition {
    pub name: String,
    pub environment: EnvironmentType,
    #[serde(default)]
    pub greybox: bool,
    #[serde(default = "default_track_width")]
    pub track_width: f32,
    #[serde(default)]
    pub start_position: Vec3,
    #[serde(default)]
    pub start_heading: f32,
    pub segments: Vec<Segment>,
}

impl CourseDefinition {
    pub fn new(name: impl Into<String>, environment: EnvironmentType) -> Self {
        CourseDefinition {
            name: name.into(),
            environment,
            greybox: false,
            track_width: DEFAULT_TRACK_WIDTH,
            start_position: Vec3::ZERO,
            start_heading: 0.0,
            segments: Vec::new(),
        }
    }

    pub fn with_start(mut self, position: Vec3, heading: f32) -> Self {
        self.start_position = position;
        self.start_heading = heading;
        self
    }

    pub fn with_track_width(mut self, track_width: f32) -> Self {
        self.track_width = track_width;
        self
    }

    pub fn with_greybox(mut self, greybox: bool) -> Self {
        self.greybox = greybox;
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn start_pose(&self) -> Pose {
        Pose::new(self.start_position, self.start_heading)
    }

    pub fn validate(&self) -> Result<(), CourseError> {
        if self.segments.is_empty() {
            return Err(CourseError::EmptyCourse(self.name.clone()));
        }
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(CourseError::InvalidTrackWidth {
                course: self.name.clone(),
                width: self.track_width,
            });
        }
        if !self.start_position.is_finite() || !self.start_heading.is_finite() {
            return Err(CourseError::InvalidStart(self.name.clone()));
        }

        self.segments
            .iter()
            .enumerate()
            .try_for_each(|(index, segment)| segment.validate(index))
    }
}
