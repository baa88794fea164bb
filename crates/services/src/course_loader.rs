use std::path::Path;

use learn_core::model::Course;

use crate::error::CourseLoadError;

/// Course used when no course file is configured.
pub const SAMPLE_COURSE_JSON: &str = include_str!("../assets/sample_course.json");

/// Read and validate a course file, or fall back to the bundled sample.
///
/// # Errors
///
/// Returns `CourseLoadError` if the file cannot be read or is not a valid course.
pub async fn load_course(path: Option<&Path>) -> Result<Course, CourseLoadError> {
    let Some(path) = path else {
        tracing::info!("no course file configured; using bundled sample course");
        return Ok(Course::from_json(SAMPLE_COURSE_JSON)?);
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CourseLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let course = Course::from_json(&raw)?;
    tracing::info!(
        path = %path.display(),
        weeks = course.weeks().len(),
        lessons = course.lesson_count(),
        "course loaded"
    );
    Ok(course)
}
