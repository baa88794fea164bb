mod components;
mod course;
mod progress;
mod tracker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{ResetConfirmModal, ToastHost, WeekProgressBar};
pub use course::CourseView;
pub use progress::ProgressView;
pub use tracker::{
    ExportState, LESSON_PULSE_DURATION, PULSE_DURATION, TrackerDispatcher, TrackerIntent,
    TrackerState, use_tracker_dispatcher, use_tracker_provider, use_tracker_state,
};
