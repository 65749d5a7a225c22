use bevy::prelude::*;
use crate::event_system::spawn_events::*;
use crate::event_system::event_listeners::*;

pub struct EventSystemPlugin;

impl Plugin for EventSystemPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CourseSpawnEvent>()
            .add_event::<CourseGeneratedEvent>()
            .add_event::<CourseFailedEvent>()
            .add_event::<EnvironmentDressingEvent>();

        app.add_systems(Update, (
            course_spawn_listener,
            environment_dressing_listener,
        ).chain());
    }
}
