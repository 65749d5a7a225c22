use std::collections::HashSet;
use bevy::prelude::*;
use crate::core::course::CourseDefinition;
use crate::core::course_error::CourseError;
use crate::core::generation_config::GenerationConfig;
use crate::generation::dressing::{apply_dressing, select_dressing};
use crate::generation::generated_course::{CheckpointMarker, GeneratedCourse};
use crate::generation::geometry::synthesize;
use crate::generation::path_cursor::PathCursor;
use crate::generation::placement::{checkpoint_volume, place_collectibles, place_hazards, CHECKPOINT_DEPTH, CHECKPOINT_HEIGHT};
use crate::generation::volume::{TriggerVolume, VolumeHandle};

pub const SPAWN_HEIGHT: f32 = 1.0;
pub const LINE_INSET: f32 = 1.5;

/// Compiles a course definition into geometry, markers, placed objects and dressing.
///
/// Validation happens up front, so a bad definition never yields partial output.
pub fn generate(definition: &CourseDefinition, config: &GenerationConfig) -> Result<GeneratedCourse, CourseError> {
    definition.validate()?;

    let mut cursor = PathCursor::new(definition.start_pose());
    let mut volumes = Vec::new();
    let mut ground = Vec::new();

    for (index, segment) in definition.segments.iter().enumerate() {
        let entry = cursor.pose();
        let geometry = synthesize(segment, index, config)?;

        let base = volumes.len();
        ground.extend(geometry.ground.iter().map(|local| VolumeHandle(base + local)));
        volumes.extend(geometry.volumes.into_iter().map(|volume| volume.anchored(&entry)));

        cursor.advance(segment)?;
    }

    let finish = cursor.pose();
    let spans = cursor.into_spans();

    let mut checkpoints = Vec::new();
    let mut collectibles = Vec::new();
    let mut hazards = Vec::new();
    let mut seen_checkpoints = HashSet::new();

    for (segment, span) in definition.segments.iter().zip(&spans) {
        if segment.has_checkpoint {
            if !seen_checkpoints.insert(segment.checkpoint_index) {
                warn!(
                    "Course {:?}: checkpoint index {} is used more than once (segment {})",
                    definition.name, segment.checkpoint_index, span.index
                );
            }
            checkpoints.push(CheckpointMarker {
                index: segment.checkpoint_index,
                segment_index: span.index,
                volume: checkpoint_volume(segment, &span.entry),
            });
        }

        collectibles.extend(place_collectibles(segment, span.index, &span.entry));
        hazards.extend(place_hazards(segment, span.index, &span.entry));
    }

    let line_size = Vec3::new(definition.track_width.max(3.0), CHECKPOINT_HEIGHT, CHECKPOINT_DEPTH);
    let start = definition.start_pose();
    let start_line = TriggerVolume::at(&start, Vec3::new(0.0, 1.0, LINE_INSET), line_size);
    let finish_line = TriggerVolume::at(&finish, Vec3::new(0.0, 1.0, -LINE_INSET), line_size);

    let dressing = select_dressing(definition.environment, definition.greybox || config.force_greybox);
    apply_dressing(&dressing, &mut volumes, &ground);

    let course = GeneratedCourse {
        name: definition.name.clone(),
        environment: definition.environment,
        volumes,
        ground,
        spans,
        spawn: start.lifted(SPAWN_HEIGHT),
        start_line,
        finish_line,
        finish,
        checkpoints,
        collectibles,
        hazards,
        dressing,
    };

    let stats = course.stats();
    debug!(
        "Generated course {:?}: {} segments, {} volumes, {} checkpoints, {} hazards ({} fallback), path length {:.1}",
        course.name,
        stats.segments,
        course.volumes.len(),
        stats.checkpoints,
        stats.hazards,
        stats.fallback_hazards,
        stats.path_length
    );

    Ok(course)
}
