#![forbid(unsafe_code)]

pub mod app_services;
pub mod course_loader;
pub mod error;
pub mod progress_service;

pub use learn_core::Clock;

pub use app_services::AppServices;
pub use course_loader::{SAMPLE_COURSE_JSON, load_course};
pub use error::{AppServicesError, CourseLoadError, ExportError, ProgressServiceError};
pub use progress_service::{PROGRESS_STORAGE_KEY, PersistOutcome, ProgressService};
