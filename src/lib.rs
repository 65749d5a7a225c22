pub mod core;
pub mod generation;
pub mod spawning;
pub mod event_system;
pub mod management;
