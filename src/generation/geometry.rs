use std::f32::consts::TAU;
use bevy::prelude::*;
use itertools::Itertools;
use crate::core::course_error::CourseError;
use crate::core::generation_config::GenerationConfig;
use crate::core::pose::{orientation_from_forward, Pose};
use crate::core::segment::{Segment, SegmentType};
use crate::generation::path_cursor::TurnArc;
use crate::generation::volume::{Volume, VolumeKind};

pub const TURN_SLICES: usize = 8;
pub const SCURVE_SLICES: usize = 10;
pub const MIN_CEILING_HEIGHT: f32 = 2.5;
pub const GAP_PIECE_FRACTION: f32 = 0.3;

/// Volumes for one segment, in the segment's local frame.
#[derive(Debug, Clone, Default)]
pub struct SegmentGeometry {
    pub volumes: Vec<Volume>,
    /// Indices into `volumes` of every walkable surface.
    pub ground: Vec<usize>,
}

pub fn scurve_amplitude(width: f32) -> f32 {
    (width * 0.28).max(1.0)
}

pub fn synthesize(
    segment: &Segment,
    segment_index: usize,
    config: &GenerationConfig,
) -> Result<SegmentGeometry, CourseError> {
    segment.validate(segment_index)?;

    let mut builder = GeometryBuilder::new(segment, segment_index, config);
    let length = segment.length;

    match segment.segment_type {
        SegmentType::Straight
        | SegmentType::NarrowCorridor
        | SegmentType::WideOpen
        | SegmentType::Bridge => {
            builder.panel(VolumeKind::Ground, Vec3::new(0.0, 0.0, length / 2.0), Quat::IDENTITY, length);
        }
        SegmentType::Tunnel => {
            builder.panel(VolumeKind::Ground, Vec3::new(0.0, 0.0, length / 2.0), Quat::IDENTITY, length);
            let height = segment.wall_height.max(MIN_CEILING_HEIGHT) + segment.elevation;
            builder.push(Volume::new(
                VolumeKind::Ceiling,
                segment_index,
                Vec3::new(0.0, height, length / 2.0),
                Quat::IDENTITY,
                Vec3::new(segment.effective_width(), config.ground_thickness, length),
            ));
        }
        SegmentType::Ramp => {
            let tilt = segment.elevation.atan2(length);
            let rotation = Quat::from_rotation_x(-tilt);
            let surface_center = Vec3::new(0.0, segment.elevation / 2.0, length / 2.0);
            builder.panel(VolumeKind::Ramp, surface_center, rotation, length.hypot(segment.elevation));
        }
        SegmentType::Gap => {
            let piece = length * GAP_PIECE_FRACTION;
            builder.panel(VolumeKind::Ground, Vec3::new(0.0, 0.0, piece / 2.0), Quat::IDENTITY, piece);
            builder.panel(VolumeKind::Ground, Vec3::new(0.0, 0.0, length - piece / 2.0), Quat::IDENTITY, piece);
        }
        SegmentType::TurnLeft | SegmentType::TurnRight => {
            let sign = segment.segment_type.turn_sign().unwrap_or(1.0);
            let origin = Pose::default();
            let arc = TurnArc::new(&origin, sign, length, segment.elevation);
            let points = (0..=TURN_SLICES)
                .map(|i| origin.inverse_transform_point(arc.point_at(i as f32 / TURN_SLICES as f32)));
            builder.slices(points);
        }
        SegmentType::SCurve => {
            let amplitude = scurve_amplitude(segment.width);
            let points = (0..=SCURVE_SLICES).map(|i| {
                let t = i as f32 / SCURVE_SLICES as f32;
                Vec3::new((TAU * t).sin() * amplitude, segment.elevation * t, length * t)
            });
            builder.slices(points);
        }
    }

    Ok(builder.finish())
}

struct GeometryBuilder<'a> {
    segment: &'a Segment,
    segment_index: usize,
    config: &'a GenerationConfig,
    geometry: SegmentGeometry,
}

impl<'a> GeometryBuilder<'a> {
    fn new(segment: &'a Segment, segment_index: usize, config: &'a GenerationConfig) -> Self {
        GeometryBuilder { segment, segment_index, config, geometry: SegmentGeometry::default() }
    }

    fn push(&mut self, volume: Volume) -> usize {
        self.geometry.volumes.push(volume);
        self.geometry.volumes.len() - 1
    }

    /// One walkable slab whose top face passes through `surface_center`, plus requested walls.
    fn panel(&mut self, kind: VolumeKind, surface_center: Vec3, rotation: Quat, length: f32) {
        let width = self.segment.effective_width();
        let thickness = self.config.ground_thickness;

        let slab = Volume::new(
            kind,
            self.segment_index,
            surface_center + rotation * Vec3::new(0.0, -thickness / 2.0, 0.0),
            rotation,
            Vec3::new(width, thickness, length),
        );
        let index = self.push(slab);
        self.geometry.ground.push(index);

        let wall_height = self.segment.wall_height;
        let wall_thickness = self.config.wall_thickness;
        let lateral = width / 2.0 + wall_thickness / 2.0;
        let sides = [(-1.0, self.segment.has_left_wall), (1.0, self.segment.has_right_wall)];

        for (side, wanted) in sides {
            if !wanted {
                continue;
            }
            let offset = rotation * Vec3::new(side * lateral, wall_height / 2.0, 0.0);
            self.push(Volume::new(
                VolumeKind::Wall,
                self.segment_index,
                surface_center + offset,
                rotation,
                Vec3::new(wall_thickness, wall_height, length),
            ));
        }
    }

    /// A panel between each consecutive pair of sample points.
    fn slices(&mut self, points: impl Iterator<Item = Vec3>) {
        for (p0, p1) in points.tuple_windows() {
            let chord = p1 - p0;
            let rotation = orientation_from_forward(chord.normalize());
            self.panel(VolumeKind::Ground, (p0 + p1) / 2.0, rotation, chord.length());
        }
    }

    fn finish(self) -> SegmentGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(segment: &Segment) -> SegmentGeometry {
        synthesize(segment, 0, &GenerationConfig::default()).unwrap()
    }

    fn count(geometry: &SegmentGeometry, kind: VolumeKind) -> usize {
        geometry.volumes.iter().filter(|v| v.kind == kind).count()
    }

    #[test]
    fn straight_is_one_slab_below_zero() {
        let geometry = build(&Segment::new(SegmentType::Straight, 50.0, 15.0));
        assert_eq!(geometry.volumes.len(), 1);
        assert_eq!(geometry.ground, vec![0]);

        let slab = &geometry.volumes[0];
        assert_eq!(slab.size, Vec3::new(15.0, 0.5, 50.0));
        assert!((slab.center() - Vec3::new(0.0, -0.25, 25.0)).length() < 1e-5);
    }

    #[test]
    fn width_clamps_reach_the_slab() {
        let narrow = build(&Segment::new(SegmentType::NarrowCorridor, 10.0, 1.0));
        let bridge = build(&Segment::new(SegmentType::Bridge, 10.0, 0.5));
        let wide = build(&Segment::new(SegmentType::WideOpen, 10.0, 12.0));

        assert_eq!(narrow.volumes[0].size.x, 4.0);
        assert_eq!(bridge.volumes[0].size.x, 2.0);
        assert_eq!(wide.volumes[0].size.x, 18.0);
    }

    #[test]
    fn walls_sit_outside_the_track() {
        let segment = Segment::new(SegmentType::Straight, 20.0, 10.0).with_walls(true, true).with_wall_height(4.0);
        let geometry = build(&segment);
        let walls: Vec<_> = geometry.volumes.iter().filter(|v| v.kind == VolumeKind::Wall).collect();

        assert_eq!(walls.len(), 2);
        assert!((walls[0].center() - Vec3::new(-5.25, 2.0, 10.0)).length() < 1e-5);
        assert!((walls[1].center() - Vec3::new(5.25, 2.0, 10.0)).length() < 1e-5);
        assert_eq!(walls[0].size, Vec3::new(0.5, 4.0, 20.0));
        assert_eq!(geometry.ground.len(), 1);
    }

    #[test]
    fn tunnel_adds_a_ceiling() {
        let low = build(&Segment::new(SegmentType::Tunnel, 30.0, 10.0).with_wall_height(1.0));
        let ceiling = low.volumes.iter().find(|v| v.kind == VolumeKind::Ceiling).unwrap();
        assert!((ceiling.center().y - 2.5).abs() < 1e-5);

        let raised = build(&Segment::new(SegmentType::Tunnel, 30.0, 10.0).with_wall_height(4.0).with_elevation(1.0));
        let ceiling = raised.volumes.iter().find(|v| v.kind == VolumeKind::Ceiling).unwrap();
        assert!((ceiling.center().y - 5.0).abs() < 1e-5);
        assert_eq!(raised.ground.len(), 1);
    }

    #[test]
    fn ramp_tilts_toward_its_elevation() {
        let geometry = build(&Segment::new(SegmentType::Ramp, 20.0, 10.0).with_elevation(5.0));
        let ramp = &geometry.volumes[0];
        let forward = ramp.transform.rotation * Vec3::Z;

        assert_eq!(ramp.kind, VolumeKind::Ramp);
        assert_eq!(geometry.ground, vec![0]);
        assert!((forward - Vec3::new(0.0, 5.0, 20.0).normalize()).length() < 1e-5);
        assert!((ramp.size.z - 20.0f32.hypot(5.0)).abs() < 1e-4);
        assert!((ramp.center().y - 2.5).abs() < 0.3);
    }

    #[test]
    fn gap_leaves_the_middle_open() {
        let geometry = build(&Segment::new(SegmentType::Gap, 20.0, 10.0));
        assert_eq!(count(&geometry, VolumeKind::Ground), 2);

        let before = &geometry.volumes[0];
        let after = &geometry.volumes[1];
        assert!((before.center().z - 3.0).abs() < 1e-5);
        assert!((after.center().z - 17.0).abs() < 1e-5);
        assert!((before.size.z - 6.0).abs() < 1e-5);
        assert!((after.size.z - 6.0).abs() < 1e-5);
    }

    #[test]
    fn turn_slices_follow_the_arc() {
        let segment = Segment::new(SegmentType::TurnRight, 30.0, 15.0).with_walls(true, false);
        let geometry = build(&segment);
        let origin = Pose::default();
        let arc = TurnArc::new(&origin, 1.0, 30.0, 0.0);

        assert_eq!(count(&geometry, VolumeKind::Ground), TURN_SLICES);
        assert_eq!(count(&geometry, VolumeKind::Wall), TURN_SLICES);
        assert_eq!(geometry.ground.len(), TURN_SLICES);

        let first = &geometry.volumes[geometry.ground[0]];
        let expected = (origin.inverse_transform_point(arc.point_at(0.0))
            + origin.inverse_transform_point(arc.point_at(1.0 / TURN_SLICES as f32)))
            / 2.0;
        assert!((first.center() - (expected - Vec3::Y * 0.25)).length() < 1e-4);

        let last = &geometry.volumes[geometry.ground[TURN_SLICES - 1]];
        let heading = last.transform.rotation * Vec3::Z;
        assert!(heading.x > 0.9);
    }

    fn walls_of(geometry: &SegmentGeometry) -> Vec<&Volume> {
        geometry.volumes.iter().filter(|v| v.kind == VolumeKind::Wall).collect()
    }

    // Wall centre expressed in the slab's own frame, measured from its top face.
    fn offset_from_surface(slab: &Volume, wall: &Volume) -> Vec3 {
        let rotation = slab.transform.rotation;
        let surface = slab.center() + rotation * Vec3::new(0.0, slab.size.y / 2.0, 0.0);
        rotation.inverse() * (wall.center() - surface)
    }

    #[test]
    fn turn_walls_flank_each_slice() {
        let segment = Segment::new(SegmentType::TurnLeft, 30.0, 15.0).with_walls(true, true);
        let geometry = build(&segment);
        assert_eq!(walls_of(&geometry).len(), 2 * TURN_SLICES);

        let lateral = 15.0 / 2.0 + 0.5 / 2.0;
        for slice in [0, 3, TURN_SLICES - 1] {
            let index = geometry.ground[slice];
            let slab = &geometry.volumes[index];
            let left = &geometry.volumes[index + 1];
            let right = &geometry.volumes[index + 2];

            assert_eq!(left.kind, VolumeKind::Wall);
            assert!((offset_from_surface(slab, left) - Vec3::new(-lateral, 1.5, 0.0)).length() < 1e-4);
            assert!((offset_from_surface(slab, right) - Vec3::new(lateral, 1.5, 0.0)).length() < 1e-4);
            assert_eq!(left.transform.rotation, slab.transform.rotation);
            assert!((left.size.z - slab.size.z).abs() < 1e-5);
        }
    }

    #[test]
    fn scurve_slices_get_walls_like_turns() {
        let segment = Segment::new(SegmentType::SCurve, 40.0, 10.0).with_walls(false, true);
        let geometry = build(&segment);
        assert_eq!(walls_of(&geometry).len(), SCURVE_SLICES);
        assert_eq!(geometry.ground.len(), SCURVE_SLICES);

        for &index in &geometry.ground {
            let slab = &geometry.volumes[index];
            let wall = &geometry.volumes[index + 1];
            assert!((offset_from_surface(slab, wall) - Vec3::new(5.25, 1.5, 0.0)).length() < 1e-4);
        }
    }

    #[test]
    fn gap_pieces_carry_their_own_walls() {
        let segment = Segment::new(SegmentType::Gap, 20.0, 10.0).with_walls(true, true);
        let geometry = build(&segment);
        let walls = walls_of(&geometry);

        assert_eq!(walls.len(), 4);
        assert_eq!(geometry.ground.len(), 2);
        for wall in &walls[..2] {
            assert!((wall.center().z - 3.0).abs() < 1e-5);
            assert!((wall.size.z - 6.0).abs() < 1e-5);
        }
        for wall in &walls[2..] {
            assert!((wall.center().z - 17.0).abs() < 1e-5);
        }
        assert!(walls.iter().all(|w| (w.center().x.abs() - 5.25).abs() < 1e-5));
    }

    #[test]
    fn ramp_walls_share_the_tilt() {
        let segment = Segment::new(SegmentType::Ramp, 20.0, 10.0).with_elevation(5.0).with_walls(true, true);
        let geometry = build(&segment);
        let ramp = &geometry.volumes[geometry.ground[0]];
        let walls = walls_of(&geometry);

        assert_eq!(walls.len(), 2);
        for wall in walls {
            assert_eq!(wall.transform.rotation, ramp.transform.rotation);
            assert!((wall.size.z - ramp.size.z).abs() < 1e-5);
            let offset = offset_from_surface(ramp, wall);
            assert!((offset.x.abs() - 5.25).abs() < 1e-4);
            assert!((offset.y - 1.5).abs() < 1e-4);
            assert!(offset.z.abs() < 1e-4);
        }
    }

    #[test]
    fn scurve_returns_to_centre_line() {
        let geometry = build(&Segment::new(SegmentType::SCurve, 40.0, 10.0));
        assert_eq!(geometry.volumes.len(), SCURVE_SLICES);

        let last = &geometry.volumes[SCURVE_SLICES - 1];
        let end = last.center() + last.transform.rotation * Vec3::new(0.0, 0.25, last.size.z / 2.0);
        assert!((end - Vec3::new(0.0, 0.0, 40.0)).length() < 1e-3);

        let peak = geometry.volumes.iter().map(|v| v.center().x).fold(0.0f32, f32::max);
        assert!(peak > 2.0 && peak <= scurve_amplitude(10.0));
    }

    #[test]
    fn invalid_segment_fails_fast() {
        let segment = Segment::new(SegmentType::TurnLeft, -1.0, 15.0);
        assert!(synthesize(&segment, 3, &GenerationConfig::default()).is_err());
    }
}
