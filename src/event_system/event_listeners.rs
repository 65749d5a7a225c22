use bevy::prelude::*;
use crate::core::components::{MainCamera, MainDirectionalLight};
use crate::core::course::CourseDefinition;
use crate::core::course_error::CourseError;
use crate::core::generation_config::GenerationConfig;
use crate::event_system::spawn_events::*;
use crate::generation::generated_course::GeneratedCourse;
use crate::generation::pipeline::generate;
use crate::spawning::course_spawning::spawn_course;
use crate::spawning::light_spawning::{ambient_light, directional_light, distance_fog, spawn_main_directional_light};

fn resolve_and_generate(event: &CourseSpawnEvent, config: &GenerationConfig) -> Result<GeneratedCourse, CourseError> {
    let definition = CourseDefinition::try_from(&event.course)?;
    generate(&definition, config)
}

pub fn course_spawn_listener(
    mut commands: Commands,
    mut reader: EventReader<CourseSpawnEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GenerationConfig>,
    mut generated_writer: EventWriter<CourseGeneratedEvent>,
    mut failed_writer: EventWriter<CourseFailedEvent>,
    mut dressing_writer: EventWriter<EnvironmentDressingEvent>,
) {
    for event in reader.read() {
        let label = event.course.label().to_string();

        // Nothing is spawned unless the whole course generated.
        let course = match resolve_and_generate(event, &config) {
            Ok(course) => course,
            Err(e) => {
                error!("Failed to generate course {}: {}", label, e);
                failed_writer.send(CourseFailedEvent { name: label, reason: e.to_string() });
                continue;
            }
        };

        let stats = course.stats();
        let (root, dressing) = spawn_course(&mut commands, &mut meshes, &mut materials, &config, &course, event.parent);

        info!(
            "Spawned course {} ({}): {} segments, {} ground, {} walls, {} checkpoints, {} collectibles, {} hazards",
            course.name, course.environment, stats.segments, stats.ground, stats.walls,
            stats.checkpoints, stats.collectibles, stats.hazards
        );

        if let Some(dressing) = dressing {
            dressing_writer.send(EnvironmentDressingEvent { dressing });
        }
        generated_writer.send(CourseGeneratedEvent { root, name: course.name.clone(), stats });
    }
}

/// Only the most recent dressing of a frame is applied.
pub fn environment_dressing_listener(
    mut commands: Commands,
    mut reader: EventReader<EnvironmentDressingEvent>,
    mut ambient: ResMut<AmbientLight>,
    mut lights: Query<(&mut DirectionalLight, &mut Transform), With<MainDirectionalLight>>,
    mut cameras: Query<(Entity, Option<&mut DistanceFog>), With<MainCamera>>,
) {
    let Some(event) = reader.read().last() else {
        return;
    };
    let dressing = &event.dressing;

    *ambient = ambient_light(&dressing.ambient);

    let (light, transform) = directional_light(&dressing.sun);
    match lights.iter_mut().next() {
        Some((mut existing, mut existing_transform)) => {
            *existing = light;
            *existing_transform = transform;
        }
        None => {
            spawn_main_directional_light(&mut commands, light, transform);
        }
    }

    let fog = distance_fog(dressing.fog.as_ref());
    for (entity, current) in &mut cameras {
        match current {
            Some(mut current) => *current = fog.clone(),
            None => {
                commands.entity(entity).insert(fog.clone());
            }
        }
    }

    debug!("Applied {} dressing", dressing.preset);
}
