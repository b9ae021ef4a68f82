use super::*;

// =============================================================
// DashboardViewState
// =============================================================

#[test]
fn dashboard_starts_in_summary() {
    let state = DashboardViewState::default();
    assert_eq!(state.phase(), DashboardPhase::Summary);
    assert!(!state.started());
}

#[test]
fn set_start_redirects() {
    let mut state = DashboardViewState::default();
    state.set_start();
    assert_eq!(state.phase(), DashboardPhase::Redirected);
    assert!(state.started());
}

#[test]
fn set_start_never_reverts() {
    let mut state = DashboardViewState::default();
    state.set_start();
    state.set_start();
    assert_eq!(state.phase(), DashboardPhase::Redirected);
}

// =============================================================
// DashboardSummary
// =============================================================

#[test]
fn summary_defaults_match_placeholder_figures() {
    let summary = DashboardSummary::default();
    assert_eq!(
        summary.stat_cards(),
        [("Annotated genes", 1000), ("Number of annotators", 150), ("Number of groups", 15)]
    );
    assert_eq!(summary.progress(), 10);
    assert_eq!(summary.history.len(), 3);
}

#[test]
fn summary_history_ids_are_unique() {
    let summary = DashboardSummary::default();
    let mut ids: Vec<_> = summary.history.iter().map(|h| h.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), summary.history.len());
}

#[test]
fn progress_is_clamped() {
    let summary = DashboardSummary { progress_percent: 250, ..DashboardSummary::default() };
    assert_eq!(summary.progress(), 100);
}

#[test]
fn history_status_classes_are_distinct() {
    assert_eq!(HistoryStatus::InProgress.css_class(), "history-row history-row--warning");
    assert_eq!(HistoryStatus::Rejected.css_class(), "history-row history-row--danger");
    assert_eq!(HistoryStatus::Completed.css_class(), "history-row history-row--success");
}
