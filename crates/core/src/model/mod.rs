mod completion;
mod course;
mod ids;
mod snapshot;

pub use completion::CompletionMap;
pub use course::{Course, CourseDraft, CourseError, Lesson, LessonDraft, LessonTotal, Week, WeekDraft};
pub use ids::{LessonId, LessonIdError};
pub use snapshot::{EXPORT_FILE_PREFIX, ProgressSnapshot};
