use learn_core::ProgressState;
use learn_core::stats::{ProgressSummary, WeekProgress};

/// Overall progress, ready for the bar, counters and text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: u32,
    pub percentage: u8,
    pub progress_text: String,
}

impl From<ProgressSummary> for ProgressVm {
    fn from(summary: ProgressSummary) -> Self {
        Self {
            completed: summary.completed,
            total: summary.total,
            percentage: summary.percentage,
            progress_text: summary.progress_text(),
        }
    }
}

impl ProgressVm {
    #[must_use]
    pub fn from_state(state: &ProgressState) -> Self {
        Self::from(state.summary())
    }

    #[must_use]
    pub fn percentage_text(&self) -> String {
        format!("{}%", self.percentage)
    }

    /// Inline style for the bar. While pulsing the bar is stretched and
    /// transitions are off; afterwards it eases back.
    #[must_use]
    pub fn bar_style(&self, pulsing: bool) -> String {
        if pulsing {
            format!(
                "width: {}%; transition: none; transform: scaleY(1.2);",
                self.percentage
            )
        } else {
            format!(
                "width: {}%; transition: width 0.5s cubic-bezier(0.4, 0, 0.2, 1), transform 0.3s ease; transform: scaleY(1);",
                self.percentage
            )
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekProgressVm {
    pub label: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl From<&WeekProgress> for WeekProgressVm {
    fn from(week: &WeekProgress) -> Self {
        Self {
            label: week.label.clone(),
            completed: week.completed,
            total: week.total,
            percentage: week.percentage(),
        }
    }
}

impl WeekProgressVm {
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%", self.percentage)
    }

    #[must_use]
    pub fn percentage_text(&self) -> String {
        format!("{}%", self.percentage)
    }

    #[must_use]
    pub fn count_text(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

#[must_use]
pub fn map_week_progress(state: &ProgressState) -> Vec<WeekProgressVm> {
    state.week_progress().iter().map(WeekProgressVm::from).collect()
}
