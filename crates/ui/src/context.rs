use std::path::PathBuf;
use std::sync::Arc;

use learn_core::ProgressState;
use services::ProgressService;

/// Which optional displays and actions the page renders. Anything switched
/// off is simply not drawn; updates to it become no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PageLayout {
    pub progress_bar: bool,
    pub progress_text: bool,
    pub completed_count: bool,
    pub total_count: bool,
    pub percentage_text: bool,
    pub week_progress: bool,
    pub reset_action: bool,
    pub export_action: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            progress_bar: true,
            progress_text: true,
            completed_count: true,
            total_count: true,
            percentage_text: true,
            week_progress: true,
            reset_action: true,
            export_action: true,
        }
    }
}

pub trait UiApp: Send + Sync {
    fn progress_service(&self) -> Arc<ProgressService>;
    fn initial_state(&self) -> ProgressState;
    fn export_dir(&self) -> PathBuf;
    fn layout(&self) -> PageLayout;
}

#[derive(Clone)]
pub struct AppContext {
    progress_service: Arc<ProgressService>,
    initial_state: ProgressState,
    export_dir: PathBuf,
    layout: PageLayout,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress_service: app.progress_service(),
            initial_state: app.initial_state(),
            export_dir: app.export_dir(),
            layout: app.layout(),
        }
    }

    #[must_use]
    pub fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }

    /// State loaded at startup; the live copy lives in a signal.
    #[must_use]
    pub fn initial_state(&self) -> &ProgressState {
        &self.initial_state
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.layout
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
