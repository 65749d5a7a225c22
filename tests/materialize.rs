use bevy::prelude::*;
use bevy_rapier3d::prelude::{RigidBody, Sensor};
use course_gen::core::components::*;
use course_gen::core::course::CourseDefinition;
use course_gen::core::course_reference::CourseReference;
use course_gen::core::environment::EnvironmentType;
use course_gen::core::generation_config::GenerationConfig;
use course_gen::core::generator_plugin::GeneratorPlugin;
use course_gen::core::hazard_entry::{HazardEntry, PlacementMode};
use course_gen::core::segment::{Segment, SegmentType};
use course_gen::core::tags::Tags;
use course_gen::core::collectible::CollectibleEntry;
use course_gen::event_system::spawn_events::*;
use course_gen::spawn;

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .add_plugins(GeneratorPlugin);
    app
}

fn canyon_run() -> CourseDefinition {
    CourseDefinition::new("canyon_run", EnvironmentType::Canyon)
        .with_segment(Segment::new(SegmentType::Straight, 40.0, 15.0).with_walls(true, true))
        .with_segment(
            Segment::new(SegmentType::TurnRight, 30.0, 15.0)
                .with_checkpoint(0)
                .with_hazard(HazardEntry::new("FallingRock", PlacementMode::Center))
                .with_hazard(HazardEntry::new("NotARealHazard", PlacementMode::Left)),
        )
        .with_segment(
            Segment::new(SegmentType::Straight, 30.0, 15.0)
                .with_collectible(CollectibleEntry::new(Vec3::ZERO))
                .with_collectible(CollectibleEntry::new(Vec3::new(2.0, 0.0, 5.0))),
        )
}

fn count<C: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<C>>().iter(world).count()
}

#[test]
fn spawns_a_course_under_one_root() {
    let mut app = headless_app();
    app.world_mut().spawn(MainCamera);

    let definition = canyon_run();
    app.add_systems(Startup, move |mut commands: Commands| {
        spawn!(commands, CourseSpawnEvent {
            course: CourseReference::Raw(Box::new(definition.clone())),
            parent: None,
        });
    });
    app.update();

    let generated: Vec<CourseGeneratedEvent> = app
        .world()
        .resource::<Events<CourseGeneratedEvent>>()
        .iter_current_update_events()
        .cloned()
        .collect();
    assert_eq!(generated.len(), 1);
    let event = &generated[0];
    assert_eq!(event.name, "canyon_run");

    assert_eq!(count::<CourseRoot>(&mut app), 1);
    assert_eq!(count::<StartLine>(&mut app), 1);
    assert_eq!(count::<FinishLine>(&mut app), 1);
    assert_eq!(count::<SpawnPoint>(&mut app), 1);
    assert_eq!(count::<Checkpoint>(&mut app), 1);
    assert_eq!(count::<Collectible>(&mut app), 2);
    assert_eq!(count::<Hazard>(&mut app), 2);
    assert_eq!(count::<GroundSurface>(&mut app), event.stats.ground);
    assert_eq!(count::<CourseVolume>(&mut app), event.stats.ground + event.stats.walls);

    let children = app.world().get::<Children>(event.root).map(|c| c.len()).unwrap_or(0);
    // spawn point, start, finish, checkpoint, two collectibles, two hazards
    let expected = event.stats.ground + event.stats.walls + 8;
    assert_eq!(children, expected);

    let world = app.world_mut();
    let solid_tags: Vec<Tags> = world
        .query_filtered::<&Tags, (With<CourseVolume>, With<RigidBody>)>()
        .iter(world)
        .cloned()
        .collect();
    assert_eq!(solid_tags.len(), event.stats.ground + event.stats.walls);
    let walls = solid_tags.iter().filter(|t| t.0 == vec!["Wall".to_string()]).count();
    assert_eq!(walls, event.stats.walls);
    let sensors = world
        .query_filtered::<Entity, (With<Sensor>, Without<Hazard>)>()
        .iter(world)
        .count();
    assert_eq!(sensors, 3 + 2);
}

#[test]
fn applies_environment_dressing() {
    let mut app = headless_app();
    let camera = app.world_mut().spawn(MainCamera).id();

    app.world_mut().send_event(CourseSpawnEvent {
        course: CourseReference::Raw(Box::new(canyon_run())),
        parent: None,
    });
    app.update();

    assert_eq!(count::<MainDirectionalLight>(&mut app), 1);
    assert!(app.world().get::<DistanceFog>(camera).is_some());

    app.world_mut().send_event(CourseSpawnEvent {
        course: CourseReference::Raw(Box::new(canyon_run().with_greybox(true))),
        parent: None,
    });
    app.update();

    assert_eq!(count::<MainDirectionalLight>(&mut app), 1);
    assert_eq!(count::<CourseRoot>(&mut app), 2);
    let fog = app.world().get::<DistanceFog>(camera).map(|f| f.color);
    assert_eq!(fog, Some(Color::NONE));
}

#[test]
fn failed_courses_spawn_nothing() {
    let mut app = headless_app();
    app.world_mut().send_event(CourseSpawnEvent::named("no_such_course"));
    app.world_mut().send_event(CourseSpawnEvent {
        course: CourseReference::Raw(Box::new(CourseDefinition::new("hollow", EnvironmentType::Storm))),
        parent: None,
    });
    app.update();

    assert_eq!(count::<CourseRoot>(&mut app), 0);
    assert_eq!(count::<CourseVolume>(&mut app), 0);

    let failures: Vec<String> = app
        .world()
        .resource::<Events<CourseFailedEvent>>()
        .iter_current_update_events()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(failures, vec!["no_such_course".to_string(), "hollow".to_string()]);
}

#[test]
fn nests_under_a_parent() {
    let mut app = headless_app();
    let parent = app.world_mut().spawn((Transform::default(), Visibility::default())).id();

    app.world_mut().send_event(CourseSpawnEvent {
        course: CourseReference::Raw(Box::new(canyon_run())),
        parent: Some(parent),
    });
    app.update();

    let world = app.world_mut();
    let root = world.query_filtered::<Entity, With<CourseRoot>>().single(world);
    assert_eq!(world.get::<Parent>(root).map(|p| p.get()), Some(parent));
}

#[test]
fn keeps_a_config_inserted_before_the_plugin() {
    let mut app = App::new();
    let config = GenerationConfig { force_greybox: true, ..Default::default() };
    app.add_plugins(MinimalPlugins)
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(config.clone())
        .add_plugins(GeneratorPlugin);
    assert_eq!(app.world().resource::<GenerationConfig>(), &config);

    app.world_mut().send_event(CourseSpawnEvent {
        course: CourseReference::Raw(Box::new(canyon_run())),
        parent: None,
    });
    app.update();

    let presets: Vec<String> = app
        .world()
        .resource::<Events<EnvironmentDressingEvent>>()
        .iter_current_update_events()
        .map(|e| e.dressing.preset.clone())
        .collect();
    assert_eq!(presets, vec!["Greybox".to_string()]);
}
