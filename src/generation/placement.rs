use bevy::prelude::*;
use crate::core::collectible::CollectibleType;
use crate::core::hazard_entry::{HazardEntry, PlacementMode};
use crate::core::pose::Pose;
use crate::core::segment::Segment;
use crate::generation::hazard_table::{binding_for, HazardBinding, ResolvedParameter};
use crate::generation::volume::TriggerVolume;

pub const CHECKPOINT_HEIGHT: f32 = 2.5;
pub const CHECKPOINT_DEPTH: f32 = 1.4;
pub const MIN_HAZARD_SCALE: f32 = 0.1;
/// Added to the hazard index of the mirrored half of a `BothSides` entry. Naming only.
pub const MIRRORED_INDEX_OFFSET: usize = 1000;

pub fn checkpoint_volume(segment: &Segment, entry: &Pose) -> TriggerVolume {
    let local = Vec3::new(0.0, 1.0, (segment.length * 0.85).max(2.0));
    let size = Vec3::new(
        (segment.effective_width() * 0.75).max(3.0),
        CHECKPOINT_HEIGHT,
        CHECKPOINT_DEPTH,
    );
    TriggerVolume::at(entry, local, size)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectibleInstance {
    pub name: String,
    pub segment_index: usize,
    pub collectible_type: CollectibleType,
    pub transform: Transform,
}

pub fn place_collectibles(segment: &Segment, segment_index: usize, entry: &Pose) -> Vec<CollectibleInstance> {
    segment
        .collectibles
        .iter()
        .enumerate()
        .map(|(index, collectible)| CollectibleInstance {
            name: format!("{:?}_{}_{}", collectible.collectible_type, segment_index, index),
            segment_index,
            collectible_type: collectible.collectible_type,
            transform: Transform::from_translation(entry.transform_point(collectible.offset))
                .with_rotation(entry.rotation()),
        })
        .collect()
}

/// Stateless hash of the two indices into `[0, 1)`; the same pair always yields the same value.
/// Uses the software `libm::sin` so the value does not depend on the platform's math library.
pub fn placement_random(segment_index: usize, hazard_index: usize) -> f32 {
    let seed = (segment_index as f64 + 1.0) * 12.9898 + (hazard_index as f64 + 1.0) * 78.233;
    libm::sin(seed).abs().fract() as f32
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Base local offset for a placement mode. `BothSides` has none; expand it first.
pub fn base_offset(
    mode: PlacementMode,
    segment: &Segment,
    segment_index: usize,
    hazard_index: usize,
) -> Option<Vec3> {
    let width = segment.width.max(2.0);
    let length = segment.length.max(4.0);
    let mid = 0.5 * length;

    let offset = match mode {
        PlacementMode::Left => Vec3::new(-0.38 * width, 0.6, mid),
        PlacementMode::Right => Vec3::new(0.38 * width, 0.6, mid),
        PlacementMode::Center => Vec3::new(0.0, 0.6, mid),
        PlacementMode::Random => {
            let r = placement_random(segment_index, hazard_index);
            Vec3::new(
                lerp(-0.4 * width, 0.4 * width, r),
                0.6,
                lerp(0.2 * length, 0.8 * length, 1.0 - r),
            )
        }
        PlacementMode::Overhead => Vec3::new(0.0, 8.0, mid),
        PlacementMode::Behind => Vec3::new(0.0, 0.6, 2.5),
        PlacementMode::BothSides => return None,
    };

    Some(offset)
}

/// Splits `BothSides` into a left and a right entry; other entries pass through.
/// Each item carries the hazard index to use for naming.
pub fn expand_entry(entry: &HazardEntry, hazard_index: usize) -> Vec<(usize, HazardEntry)> {
    match entry.mode {
        PlacementMode::BothSides => vec![
            (hazard_index, entry.with_mode(PlacementMode::Left)),
            (hazard_index + MIRRORED_INDEX_OFFSET, entry.with_mode(PlacementMode::Right)),
        ],
        _ => vec![(hazard_index, entry.clone())],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardInstance {
    pub name: String,
    pub hazard_type: String,
    pub segment_index: usize,
    pub hazard_index: usize,
    pub mode: PlacementMode,
    /// World translation and rotation; the scale lives in `scale` and the binding.
    pub transform: Transform,
    pub scale: f32,
    pub binding: HazardBinding,
    pub parameter: Option<ResolvedParameter>,
}

pub fn place_hazard(
    entry: &HazardEntry,
    segment: &Segment,
    segment_index: usize,
    hazard_index: usize,
    frame: &Pose,
) -> Option<HazardInstance> {
    let base = base_offset(entry.mode, segment, segment_index, hazard_index)?;
    let scale = entry.scale.max(MIN_HAZARD_SCALE);
    let binding = binding_for(&entry.hazard_type, scale);
    let label = binding.kind.map_or(entry.hazard_type.as_str(), |kind| kind.name());

    Some(HazardInstance {
        name: format!("Hazard_{}_{}_{}", segment_index, hazard_index, label),
        hazard_type: entry.hazard_type.clone(),
        segment_index,
        hazard_index,
        mode: entry.mode,
        transform: Transform::from_translation(frame.transform_point(base + entry.offset))
            .with_rotation(frame.rotation()),
        scale,
        binding,
        parameter: binding.resolve_parameter(entry.custom_param),
    })
}

pub fn place_hazards(segment: &Segment, segment_index: usize, frame: &Pose) -> Vec<HazardInstance> {
    segment
        .hazards
        .iter()
        .enumerate()
        .flat_map(|(hazard_index, entry)| expand_entry(entry, hazard_index))
        .filter_map(|(hazard_index, entry)| place_hazard(&entry, segment, segment_index, hazard_index, frame))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collectible::CollectibleEntry;
    use crate::core::segment::SegmentType;

    fn straight() -> Segment {
        Segment::new(SegmentType::Straight, 40.0, 10.0)
    }

    #[test]
    fn random_is_deterministic_and_in_range() {
        for segment_index in 0..20 {
            for hazard_index in 0..20 {
                let a = placement_random(segment_index, hazard_index);
                let b = placement_random(segment_index, hazard_index);
                assert_eq!(a.to_bits(), b.to_bits());
                assert!((0.0..1.0).contains(&a));
            }
        }
        assert_ne!(placement_random(0, 0), placement_random(0, 1));
    }

    #[test]
    fn random_matches_known_values() {
        assert!((placement_random(0, 0) - 0.116_348_93).abs() < 1e-6);
        assert!((placement_random(3, 7) - 0.689_510_64).abs() < 1e-6);
    }

    #[test]
    fn random_mode_stays_inside_the_segment() {
        let segment = straight();
        let r = placement_random(3, 1);
        let offset = base_offset(PlacementMode::Random, &segment, 3, 1).unwrap();

        assert!((offset.x - (-4.0 + 8.0 * r)).abs() < 1e-4);
        assert!((offset.z - (8.0 + 24.0 * (1.0 - r))).abs() < 1e-4);
        assert_eq!(base_offset(PlacementMode::Random, &segment, 3, 1), Some(offset));
    }

    fn assert_offset(mode: PlacementMode, segment: &Segment, expected: Vec3) {
        let offset = base_offset(mode, segment, 0, 0).unwrap();
        assert!((offset - expected).length() < 1e-5, "{:?}: {:?} != {:?}", mode, offset, expected);
    }

    #[test]
    fn fixed_modes_use_clamped_dimensions() {
        let tiny = Segment::new(SegmentType::Straight, 1.0, 1.0);
        assert_offset(PlacementMode::Left, &tiny, Vec3::new(-0.76, 0.6, 2.0));
        assert_offset(PlacementMode::Right, &straight(), Vec3::new(3.8, 0.6, 20.0));
        assert_offset(PlacementMode::Center, &straight(), Vec3::new(0.0, 0.6, 20.0));
        assert_offset(PlacementMode::Overhead, &straight(), Vec3::new(0.0, 8.0, 20.0));
        assert_offset(PlacementMode::Behind, &straight(), Vec3::new(0.0, 0.6, 2.5));
        assert_eq!(base_offset(PlacementMode::BothSides, &straight(), 0, 0), None);
    }

    #[test]
    fn both_sides_expands_into_left_and_right() {
        let entry = HazardEntry::new("GasVent", PlacementMode::BothSides)
            .with_offset(Vec3::new(0.5, 0.0, -1.0))
            .with_scale(1.5)
            .with_custom_param(2.0);
        let expanded = expand_entry(&entry, 2);

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].0, 2);
        assert_eq!(expanded[1].0, 1002);
        assert_eq!(expanded[0].1.mode, PlacementMode::Left);
        assert_eq!(expanded[1].1.mode, PlacementMode::Right);
        for (_, half) in &expanded {
            assert_eq!(half.offset, entry.offset);
            assert_eq!(half.scale, entry.scale);
            assert_eq!(half.custom_param, entry.custom_param);
            assert_eq!(half.hazard_type, entry.hazard_type);
        }
    }

    #[test]
    fn both_sides_mirrors_across_the_centre_line() {
        let segment = straight().with_hazard(HazardEntry::new("ToxicPool", PlacementMode::BothSides));
        let hazards = place_hazards(&segment, 0, &Pose::default());

        assert_eq!(hazards.len(), 2);
        let left = hazards[0].transform.translation;
        let right = hazards[1].transform.translation;
        assert!((left.x + right.x).abs() < 1e-5);
        assert_eq!(left.z, right.z);
        assert_ne!(hazards[0].name, hazards[1].name);
    }

    #[test]
    fn hazard_names_use_the_canonical_type() {
        let segment = straight()
            .with_hazard(HazardEntry::new("  gasvent ", PlacementMode::Center))
            .with_hazard(HazardEntry::new("Mystery", PlacementMode::Center));
        let hazards = place_hazards(&segment, 2, &Pose::default());

        assert_eq!(hazards[0].name, "Hazard_2_0_GasVent");
        assert_eq!(hazards[0].hazard_type, "  gasvent ");
        assert_eq!(hazards[1].name, "Hazard_2_1_Mystery");
    }

    #[test]
    fn hazards_follow_the_entry_frame() {
        let segment = straight().with_hazard(
            HazardEntry::new("LavaGeyser", PlacementMode::Center).with_offset(Vec3::new(1.0, 0.0, 0.0)),
        );
        let frame = Pose::new(Vec3::new(10.0, 5.0, 0.0), 90.0);
        let hazards = place_hazards(&segment, 4, &frame);

        let position = hazards[0].transform.translation;
        assert!((position - Vec3::new(30.0, 5.6, 1.0)).length() < 1e-4);
        assert_eq!(hazards[0].parameter.map(|p| p.value), Some(4.0));
    }

    #[test]
    fn sides_match_the_riders_left_and_right() {
        let segment = straight()
            .with_hazard(HazardEntry::new("ElectricFence", PlacementMode::Left))
            .with_hazard(HazardEntry::new("ElectricFence", PlacementMode::Right));

        for heading in [0.0, 90.0, -45.0] {
            let frame = Pose::new(Vec3::new(-3.0, 0.0, 8.0), heading);
            let rider_right = *Transform::default().looking_to(frame.forward(), Vec3::Y).right();
            let hazards = place_hazards(&segment, 0, &frame);

            let left = hazards[0].transform.translation - frame.position;
            let right = hazards[1].transform.translation - frame.position;
            assert!((left.dot(rider_right) + 3.8).abs() < 1e-4);
            assert!((right.dot(rider_right) - 3.8).abs() < 1e-4);
            assert!((left.dot(frame.forward()) - 20.0).abs() < 1e-4);
        }
    }

    #[test]
    fn scale_is_clamped() {
        let segment = straight().with_hazard(HazardEntry::new("NotARealHazard", PlacementMode::Center).with_scale(0.0));
        let hazards = place_hazards(&segment, 0, &Pose::default());

        assert_eq!(hazards[0].scale, MIN_HAZARD_SCALE);
        assert!(hazards[0].binding.is_fallback());
        let extents = hazards[0].binding.collider.collider_type.extents();
        assert!((extents - Vec3::new(0.3, 0.2, 0.3)).length() < 1e-5);
    }

    #[test]
    fn checkpoint_uses_segment_frame() {
        let segment = Segment::new(SegmentType::NarrowCorridor, 2.0, 1.0);
        let volume = checkpoint_volume(&segment, &Pose::default());
        assert!((volume.transform.translation - Vec3::new(0.0, 1.0, -2.0)).length() < 1e-5);
        assert_eq!(volume.size, Vec3::new(3.0, 2.5, 1.4));

        let wide = Segment::new(SegmentType::WideOpen, 40.0, 20.0);
        let volume = checkpoint_volume(&wide, &Pose::default());
        assert!((volume.transform.translation.z + 34.0).abs() < 1e-4);
        assert_eq!(volume.size.x, 22.5);
    }

    #[test]
    fn collectibles_are_transformed_directly() {
        let segment = straight()
            .with_collectible(CollectibleEntry::new(Vec3::new(2.0, 1.0, 5.0)))
            .with_collectible(CollectibleEntry::new(Vec3::ZERO).of_type(CollectibleType::Boost));
        let frame = Pose::new(Vec3::new(0.0, 0.0, 100.0), -90.0);
        let placed = place_collectibles(&segment, 1, &frame);

        assert_eq!(placed.len(), 2);
        assert!((placed[0].transform.translation - Vec3::new(-5.0, 1.0, 98.0)).length() < 1e-4);
        assert_eq!(placed[1].collectible_type, CollectibleType::Boost);
        assert!((placed[1].transform.translation - Vec3::new(0.0, 0.0, 100.0)).length() < 1e-4);
    }
}
