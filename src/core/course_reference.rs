use serde::{Serialize, Deserialize};
use crate::core::course::CourseDefinition;
use crate::core::course_error::CourseError;
use crate::management::course_management::import_course;

/// Either an inline definition or the name of a course file under `assets/courses`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum CourseReference {
    Raw(Box<CourseDefinition>),
    Ref(String),
}

impl CourseReference {
    pub fn label(&self) -> &str {
        match self {
            CourseReference::Raw(definition) => &definition.name,
            CourseReference::Ref(name) => name,
        }
    }
}

impl<'a> TryFrom<&'a CourseReference> for CourseDefinition {
    type Error = CourseError;

    fn try_from(value: &'a CourseReference) -> Result<Self, Self::Error> {
        match value {
            CourseReference::Raw(definition) => Ok(definition.as_ref().clone()),
            CourseReference::Ref(name) => import_course(name),
        }
    }
}
