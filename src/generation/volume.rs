use bevy::prelude::*;
use crate::core::pose::Pose;
use crate::generation::dressing::SurfaceMaterial;

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeKind {
    Ground,
    Wall,
    Ceiling,
    Ramp,
}

/// Index of a volume inside `GeneratedCourse::volumes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeHandle(pub usize);

/// An oriented box. `transform` carries translation and rotation only; `size` holds full extents.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub kind: VolumeKind,
    pub segment_index: usize,
    pub transform: Transform,
    pub size: Vec3,
    pub surface: Option<SurfaceMaterial>,
}

impl Volume {
    pub fn new(kind: VolumeKind, segment_index: usize, center: Vec3, rotation: Quat, size: Vec3) -> Self {
        Volume {
            kind,
            segment_index,
            transform: Transform::from_translation(center).with_rotation(rotation),
            size,
            surface: None,
        }
    }

    /// Moves a segment-local volume into world space.
    pub fn anchored(self, entry: &Pose) -> Self {
        Volume { transform: entry.anchor(&self.transform), ..self }
    }

    pub fn center(&self) -> Vec3 {
        self.transform.translation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerVolume {
    pub transform: Transform,
    pub size: Vec3,
}

impl TriggerVolume {
    /// Places a local-frame box relative to `frame`, inheriting its orientation.
    pub fn at(frame: &Pose, local_center: Vec3, size: Vec3) -> Self {
        TriggerVolume {
            transform: Transform::from_translation(frame.transform_point(local_center))
                .with_rotation(frame.rotation()),
            size,
        }
    }
}
