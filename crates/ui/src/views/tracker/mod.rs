mod actions;
mod provider;
mod state;

pub use actions::{TrackerDispatcher, TrackerIntent, use_tracker_dispatcher};
pub use provider::use_tracker_provider;
pub use state::{
    ExportState, LESSON_PULSE_DURATION, PULSE_DURATION, TrackerState, use_tracker_state,
};
