use std::f32::consts::FRAC_PI_2;
use bevy::prelude::*;
use crate::core::course_error::CourseError;
use crate::core::pose::{yaw, Pose};
use crate::core::segment::Segment;
use crate::core::segment::SegmentType;

pub const MIN_TURN_RADIUS: f32 = 5.0;

/// Quarter-circle arc of a turn segment, shared by the cursor and the turn slicer
/// so both land on exactly the same points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnArc {
    pub center: Vec3,
    pub start_radial: Vec3,
    pub radius: f32,
    pub sign: f32,
    pub elevation: f32,
}

impl TurnArc {
    pub fn new(pose: &Pose, sign: f32, length: f32, elevation: f32) -> Self {
        let radius = turn_radius(length);
        let center = pose.position + pose.right() * sign * radius;

        TurnArc {
            center,
            start_radial: pose.position - center,
            radius,
            sign,
            elevation,
        }
    }

    /// Point at fraction `t` of the sweep, with elevation interpolated linearly.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let rotation = yaw(self.sign * 90.0 * t);
        self.center + rotation * self.start_radial + Vec3::Y * self.elevation * t
    }

    pub fn arc_length(&self) -> f32 {
        self.radius * FRAC_PI_2
    }
}

/// Radius floor keeps very short turns rideable, at the cost of the arc running
/// longer than the declared length.
pub fn turn_radius(length: f32) -> f32 {
    (length / FRAC_PI_2).max(MIN_TURN_RADIUS)
}

pub fn advance(pose: &Pose, segment_index: usize, segment: &Segment) -> Result<Pose, CourseError> {
    segment.validate(segment_index)?;

    let next = match segment.segment_type.turn_sign() {
        Some(sign) => {
            let arc = TurnArc::new(pose, sign, segment.length, segment.elevation);
            Pose::new(arc.point_at(1.0), pose.heading + sign * 90.0)
        }
        None => Pose::new(
            pose.position + pose.forward() * segment.length + Vec3::Y * segment.elevation,
            pose.heading,
        ),
    };

    Ok(next)
}

/// Distance actually travelled along a segment.
pub fn path_length(segment: &Segment) -> f32 {
    if segment.segment_type.is_turn() {
        let arc = turn_radius(segment.length) * FRAC_PI_2;
        arc.hypot(segment.elevation)
    } else {
        segment.length.hypot(segment.elevation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    pub index: usize,
    pub segment_type: SegmentType,
    pub entry: Pose,
    pub exit: Pose,
    pub path_length: f32,
}

/// Owns the single live pose of a generation run and records every segment it crosses.
#[derive(Debug, Clone)]
pub struct PathCursor {
    pose: Pose,
    spans: Vec<SegmentSpan>,
}

impl PathCursor {
    pub fn new(start: Pose) -> Self {
        PathCursor { pose: start, spans: Vec::new() }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn advance(&mut self, segment: &Segment) -> Result<Pose, CourseError> {
        let index = self.spans.len();
        let entry = self.pose;
        let exit = advance(&entry, index, segment)?;

        self.spans.push(SegmentSpan {
            index,
            segment_type: segment.segment_type,
            entry,
            exit,
            path_length: path_length(segment),
        });
        self.pose = exit;

        Ok(exit)
    }

    pub fn spans(&self) -> &[SegmentSpan] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<SegmentSpan> {
        self.spans
    }
}
