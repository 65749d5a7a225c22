pub mod pose;
pub mod segment;
pub mod hazard_entry;
pub mod collectible;
pub mod environment;
pub mod course;
pub mod course_reference;
pub mod course_error;
pub mod collider;
pub mod generation_config;
pub mod components;
pub mod tags;
pub mod generator_plugin;
