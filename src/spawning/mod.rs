pub mod helpers;
pub mod light_spawning;
pub mod material_cache;
pub mod course_spawning;
