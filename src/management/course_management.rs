use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use lazy_static::lazy_static;
use walkdir::WalkDir;
use crate::core::course::CourseDefinition;
use crate::core::course_error::CourseError;

pub const COURSE_DIR: &str = "assets/courses";
pub const COURSE_EXTENSION: &str = "course";

lazy_static! {
    static ref COURSE_CACHE: Mutex<HashMap<PathBuf, CourseDefinition>> = Mutex::new(HashMap::new());
}

pub fn course_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", name, COURSE_EXTENSION))
}

pub fn parse_course(source: &str) -> Result<CourseDefinition, CourseError> {
    Ok(ron::de::from_str(source)?)
}

/// Reads a course file without touching the cache.
pub fn load_course_file(path: impl AsRef<Path>) -> Result<CourseDefinition, CourseError> {
    let source = fs::read_to_string(path)?;
    parse_course(&source)
}

/// Imports `<name>.course` from the default course directory.
pub fn import_course(name: &str) -> Result<CourseDefinition, CourseError> {
    import_course_from(COURSE_DIR, name)
}

/// Imports and caches a course by path; later imports of the same file return the cached copy.
pub fn import_course_from(dir: impl AsRef<Path>, name: &str) -> Result<CourseDefinition, CourseError> {
    let path = course_path(dir, name);
    let mut cache = COURSE_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(cached) = cache.get(&path) {
        return Ok(cached.clone());
    }

    let source = fs::read_to_string(&path).map_err(|e| CourseError::ImportFailed {
        name: name.to_string(),
        reason: format!("{}: {}", path.display(), e),
    })?;
    let course = parse_course(&source)?;

    cache.insert(path, course.clone());
    Ok(course)
}

/// Names of every `.course` file below `dir`, sorted.
pub fn discover_courses(dir: impl AsRef<Path>) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some(COURSE_EXTENSION))
        .filter_map(|entry| entry.path().file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    names.sort();
    names
}
