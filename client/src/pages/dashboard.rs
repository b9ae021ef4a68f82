//! Account dashboard: progress summary and the "Get Started" entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard reads the session store for the user card and keeps a single
//! local flag. Once "Get Started" is pressed the whole page renders as a
//! redirect to the workspace route. No network calls happen here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::identicon::Identicon;
use crate::config::ClientConfig;
use crate::state::dashboard::{DashboardPhase, DashboardSummary, DashboardViewState, HistoryEntry};
use crate::state::session::{SessionConfig, SessionStore};

pub const GUEST_NAME: &str = "Guest";
pub const PROGRESS_IMAGE: &str = "/static/logo/fauxcamembert.png";

/// Name on the user card; never empty.
pub(crate) fn display_name(config: &SessionConfig) -> String {
    config.username().map_or_else(|| GUEST_NAME.to_owned(), str::to_owned)
}

pub(crate) fn progress_style(percent: u8) -> String {
    format!("width: {percent}%")
}

/// Dashboard page.
///
/// `on_resume` receives the id of the history row whose "Resume" button was
/// pressed; without a handler the press is only logged.
#[component]
pub fn DashboardPage(
    #[prop(optional)] on_resume: Option<Callback<String>>,
    #[prop(optional)] summary: Option<DashboardSummary>,
) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let view_state = RwSignal::new(DashboardViewState::default());
    let summary = summary.unwrap_or_default();
    let on_resume = on_resume
        .unwrap_or_else(|| Callback::new(|id: String| log::info!("resume requested for {id}; no handler attached")));

    view! {
        <DashboardView
            view_state=view_state
            summary=summary
            on_resume=on_resume
            workspace_path=config.workspace_path
        />
    }
}

/// Summary or redirect, depending on the dashboard phase.
#[component]
pub(crate) fn DashboardView(
    view_state: RwSignal<DashboardViewState>,
    summary: DashboardSummary,
    on_resume: Callback<String>,
    workspace_path: String,
) -> impl IntoView {
    let on_start = Callback::new(move |()| view_state.update(DashboardViewState::set_start));

    view! {
        {move || match view_state.get().phase() {
            DashboardPhase::Redirected => view! { <Redirect path=workspace_path.clone()/> }.into_any(),
            DashboardPhase::Summary => {
                view! { <DashboardSummaryView summary=summary.clone() on_start=on_start on_resume=on_resume/> }
                    .into_any()
            }
        }}
    }
}

#[component]
fn DashboardSummaryView(
    summary: DashboardSummary,
    on_start: Callback<()>,
    on_resume: Callback<String>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let name = move || display_name(&session.config());
    let progress = summary.progress();

    view! {
        <div class="container dashboard">
            <div class="row">
                <div class="col">
                    <div class="card dashboard-usercards">
                        <h3 class="card-title">{name}</h3>
                        <h6 class="card-subtitle">{summary.group_name.clone()}</h6>
                        <div class="card-body">
                            <div class="progress">
                                <div
                                    class="progress-bar"
                                    role="progressbar"
                                    style=progress_style(progress)
                                    aria-valuenow=progress.to_string()
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                ></div>
                            </div>
                            {move || view! { <Identicon seed=name() size=100/> }}
                        </div>
                    </div>
                </div>
                <div class="col">
                    <div class="card card-body dashboard-progresscards">
                        <h5 class="card-title">"Project progress"</h5>
                        <img class="card-img" src=PROGRESS_IMAGE alt="Project progress"/>
                        <hr/>
                        <button class="btn btn-success" on:click=move |_| on_start.run(())>
                            "Get Started"
                        </button>
                    </div>
                </div>
                <div class="col">
                    {summary
                        .stat_cards()
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <div class="row">
                                    <div class="card dashboard-statcards">
                                        <div class="card-header">{title}</div>
                                        <div class="card-body">{value}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="row">
                <div class="col">
                    <div class="card dashboard-hystorycards">
                        <ul class="list-group">
                            {summary
                                .history
                                .iter()
                                .cloned()
                                .map(|entry| view! { <HistoryRow entry=entry on_resume=on_resume/> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
                <div class="col">
                    <div class="card">
                        <LeaderboardCard title="Top annotators"/>
                        <LeaderboardCard title="Top groups"/>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry, on_resume: Callback<String>) -> impl IntoView {
    let id = entry.id.clone();
    view! {
        <li class=entry.status.css_class()>
            {entry.label}
            " "
            <button class="btn btn-success" on:click=move |_| on_resume.run(id.clone())>
                "Resume"
            </button>
        </li>
    }
}

#[component]
fn LeaderboardCard(title: &'static str) -> impl IntoView {
    view! {
        <div class="col">
            <div class="card">
                <div class="card-header center-div">{title}</div>
                <div class="card-body">
                    <table class="table center-div">
                        <thead>
                            <tr>
                                <th>"Weekly"</th>
                                <th>"Global"</th>
                            </tr>
                        </thead>
                    </table>
                </div>
            </div>
        </div>
    }
}
