use bevy::prelude::*;
use serde::{Serialize, Deserialize};

/// Position plus heading in degrees about the up axis.
///
/// Heading 0 looks down -Z, Bevy's forward. Heading 90 faces +X, which is the
/// rider's right, so a positive heading change turns right.
///
/// Track-local coordinates are x right, y up, z forward. Since Bevy's forward
/// is -Z, the local z axis is flipped when a point or rotation enters the world.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    pub heading: f32,
}

impl Pose {
    pub fn new(position: Vec3, heading: f32) -> Self {
        Pose { position, heading }
    }

    /// World yaw of this pose; `Transform::forward()` under it is `forward()`.
    pub fn rotation(&self) -> Quat {
        yaw(self.heading)
    }

    pub fn forward(&self) -> Vec3 {
        heading_vector(self.heading)
    }

    pub fn right(&self) -> Vec3 {
        right_vector(self.heading)
    }

    /// World transform of an entity standing at this pose and facing its heading.
    pub fn frame(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }

    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation() * flip_forward(local)
    }

    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        flip_forward(self.rotation().inverse() * (world - self.position))
    }

    /// Moves a track-local transform into the world.
    pub fn anchor(&self, local: &Transform) -> Transform {
        Transform {
            translation: self.transform_point(local.translation),
            rotation: self.rotation() * flip_rotation(local.rotation),
            scale: local.scale,
        }
    }

    pub fn lifted(&self, height: f32) -> Self {
        Pose::new(self.position + Vec3::Y * height, self.heading)
    }
}

pub fn yaw(heading: f32) -> Quat {
    Quat::from_rotation_y(-heading.to_radians())
}

pub fn heading_vector(heading: f32) -> Vec3 {
    yaw(heading) * Vec3::NEG_Z
}

pub fn right_vector(heading: f32) -> Vec3 {
    heading_vector(heading + 90.0)
}

fn flip_forward(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, -v.z)
}

// Same rotation seen through the z mirror.
fn flip_rotation(q: Quat) -> Quat {
    Quat::from_xyzw(-q.x, -q.y, q.z, q.w)
}

/// Yaw then pitch, never roll. Keeps slab widths level on sloped slices.
/// Works in track-local coordinates, where +Z is forward.
pub fn orientation_from_forward(forward: Vec3) -> Quat {
    let yaw = forward.x.atan2(forward.z);
    let pitch = forward.y.clamp(-1.0, 1.0).asin();
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch)
}
