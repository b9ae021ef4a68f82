//! Dashboard-local view state and summary figures.
//!
//! DESIGN
//! ======
//! The dashboard owns exactly one piece of state: whether the user asked to
//! start annotating. It moves forward once and never back; a fresh mount is
//! the only way to see the summary again.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Which layout the dashboard renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    /// Statistics, progress and the "Get Started" affordance.
    #[default]
    Summary,
    /// Terminal: the view is a navigation instruction to the workspace.
    Redirected,
}

/// Local state of one dashboard mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardViewState {
    phase: DashboardPhase,
}

impl DashboardViewState {
    pub fn phase(self) -> DashboardPhase {
        self.phase
    }

    pub fn started(self) -> bool {
        self.phase == DashboardPhase::Redirected
    }

    /// "Get Started": unconditional, idempotent, one-way.
    pub fn set_start(&mut self) {
        self.phase = DashboardPhase::Redirected;
    }
}

/// Colour band of a history row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStatus {
    InProgress,
    Rejected,
    Completed,
}

impl HistoryStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::InProgress => "history-row history-row--warning",
            Self::Rejected => "history-row history-row--danger",
            Self::Completed => "history-row history-row--success",
        }
    }
}

/// A previously opened annotation task the user can resume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub label: String,
    pub status: HistoryStatus,
}

/// Figures shown on the dashboard.
///
/// No endpoint serves these yet; the defaults are the placeholder values the
/// page has always displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub annotated_genes: u32,
    pub annotators: u32,
    pub groups: u32,
    /// 0..=100
    pub progress_percent: u8,
    pub group_name: String,
    pub history: Vec<HistoryEntry>,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self {
            annotated_genes: 1000,
            annotators: 150,
            groups: 15,
            progress_percent: 10,
            group_name: "GroupName".to_owned(),
            history: vec![
                history_entry("gene-1", HistoryStatus::InProgress),
                history_entry("gene-2", HistoryStatus::Rejected),
                history_entry("gene-3", HistoryStatus::Completed),
            ],
        }
    }
}

impl DashboardSummary {
    /// Progress clamped to a valid percentage.
    pub fn progress(&self) -> u8 {
        self.progress_percent.min(100)
    }

    /// The three statistic cards, in display order.
    pub fn stat_cards(&self) -> [(&'static str, u32); 3] {
        [
            ("Annotated genes", self.annotated_genes),
            ("Number of annotators", self.annotators),
            ("Number of groups", self.groups),
        ]
    }
}

fn history_entry(id: &str, status: HistoryStatus) -> HistoryEntry {
    HistoryEntry { id: id.to_owned(), label: "gene".to_owned(), status }
}
