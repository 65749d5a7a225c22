use bevy::prelude::*;
use crate::core::course_reference::CourseReference;
use crate::generation::dressing::EnvironmentDressing;
use crate::generation::generated_course::CourseStats;

/// Generates a course and spawns it, optionally under `parent`.
#[derive(Debug, Clone, Event)]
pub struct CourseSpawnEvent {
    pub course: CourseReference,
    pub parent: Option<Entity>,
}

impl CourseSpawnEvent {
    pub fn named(name: impl Into<String>) -> Self {
        CourseSpawnEvent {
            course: CourseReference::Ref(name.into()),
            parent: None,
        }
    }
}

#[derive(Debug, Clone, Event)]
pub struct CourseGeneratedEvent {
    pub root: Entity,
    pub name: String,
    pub stats: CourseStats,
}

#[derive(Debug, Clone, Event)]
pub struct CourseFailedEvent {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Event)]
pub struct EnvironmentDressingEvent {
    pub dressing: EnvironmentDressing,
}
