use bevy::app::{App, Plugin};
use bevy::pbr::AmbientLight;

use crate::core::tags::Tags;
use crate::core::generation_config::{GenerationConfig, CONFIG_PATH};
use crate::core::components::{Checkpoint, CourseRoot, CourseVolume, FinishLine, GroundSurface, SpawnPoint, StartLine};
use crate::event_system::event_system_plugin::EventSystemPlugin;

pub struct GeneratorPlugin;

impl Plugin for GeneratorPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GenerationConfig>() {
            app.insert_resource(GenerationConfig::load_or_default(CONFIG_PATH));
        }

        app
            .init_resource::<AmbientLight>()
            .add_plugins(EventSystemPlugin)
            .register_type::<Tags>()
            .register_type::<CourseRoot>()
            .register_type::<CourseVolume>()
            .register_type::<GroundSurface>()
            .register_type::<Checkpoint>()
            .register_type::<StartLine>()
            .register_type::<FinishLine>()
            .register_type::<SpawnPoint>();
    }
}
