use thiserror::Error;
use crate::core::segment::SegmentType;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("course '{0}' has no segments")]
    EmptyCourse(String),
    #[error("course '{course}' has non-positive track width {width}")]
    InvalidTrackWidth { course: String, width: f32 },
    #[error("course '{0}' has a non-finite start pose")]
    InvalidStart(String),
    #[error("segment {index} ({segment_type:?}): {reason}")]
    InvalidSegment {
        index: usize,
        segment_type: SegmentType,
        reason: String,
    },
    #[error("failed to import course '{name}': {reason}")]
    ImportFailed { name: String, reason: String },
    #[error("could not parse course data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
