//! Annotator workspace, gated on the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting this page bootstraps the session: if the store has no user, one
//! check-session request is issued and its answer dispatched to the store.
//! The layout below renders the same way whatever that answer is.
//!
//! TRADE-OFFS
//! ==========
//! The check only runs in the browser (`hydrate`). Server rendering shows the
//! workspace with whatever the store holds, which is always anonymous there.

#[cfg(test)]
#[path = "annotator_test.rs"]
mod annotator_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::{CheckStatus, SessionStore};

pub const QUESTIONS: [&str; 5] = [
    "Is the START seq at the right coordinates?",
    "Are the Introns and Exons at the right place?",
    "Other Question",
    "Porta ac consectetur ac",
    "Vestibulum at eros",
];

pub const POSITION_FIELDS: [&str; 5] = ["Chromosome", "Centisome", "Position", "Gene Expression data", "Strand"];

pub(crate) fn answer_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub(crate) fn answer_button_class(value: bool) -> &'static str {
    if value { "btn btn-success" } else { "btn btn-danger" }
}

pub(crate) fn question_class(index: usize, selected: Option<usize>) -> &'static str {
    if selected == Some(index) {
        "list-group-item list-group-item-action active"
    } else {
        "list-group-item list-group-item-action"
    }
}

/// Status line under the heading, if any.
pub(crate) fn check_status_message(status: &CheckStatus) -> Option<String> {
    match status {
        CheckStatus::Idle => None,
        CheckStatus::InFlight => Some("Checking session…".to_owned()),
        CheckStatus::Failed(message) => Some(message.clone()),
    }
}

/// Annotator workspace page.
///
/// `on_answer` receives `true`/`false` from the answer buttons and
/// `on_question` the index of the clicked question. Both default to logging
/// the event.
#[component]
pub fn AnnotatorPage(
    #[prop(optional)] on_answer: Option<Callback<bool>>,
    #[prop(optional)] on_question: Option<Callback<usize>>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let selected = RwSignal::new(None::<usize>);

    let on_answer = on_answer
        .unwrap_or_else(|| Callback::new(|value: bool| log::info!("answer submitted: {value}; no handler attached")));
    let on_question = on_question
        .unwrap_or_else(|| Callback::new(|index: usize| log::debug!("question {index} selected; no handler attached")));

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::util::session_check::{HttpSessionChecker, MountToken, browser_sleep, run_session_check};

        let token = MountToken::new();
        let cleanup_token = token.clone();
        on_cleanup(move || cleanup_token.cancel());

        let policy = config.check_failure;
        let login_path = config.login_path.clone();
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let outcome = run_session_check(&HttpSessionChecker, &session, &token, policy, browser_sleep).await;
            if outcome.redirects_to_login(policy) {
                navigate(&login_path, NavigateOptions::default());
            }
        });
    }

    let status = move || {
        check_status_message(&session.check_status())
            .map(|message| view! { <p class="annotator__status">{message}</p> })
    };

    view! {
        <div class="center-div annotator">
            <br/>
            <h4>"Annotator Tool "</h4>
            {status}
            <hr/>
            <br/>
            <div class="row">
                <div class="col-3">
                    <h3>"Questions "</h3>
                    <div class="list-group">
                        {QUESTIONS
                            .iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || question_class(index, selected.get())
                                        on:click=move |_| {
                                            selected.set(Some(index));
                                            on_question.run(index);
                                        }
                                    >
                                        {*text}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="col-auto">
                    <iframe
                        src=config.media_url
                        width="800px"
                        height="512px"
                        id="annotator-media"
                        class="annotator__media"
                        style="display: initial; position: relative;"
                    ></iframe>
                </div>
                <div class="col-3">
                    <h3>"Current studied position "</h3>
                    <div class="list-group">
                        {POSITION_FIELDS
                            .iter()
                            .map(|field| {
                                view! {
                                    <button type="button" class="list-group-item list-group-item-action">
                                        {format!("{field}: ")}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="card card-body border-secondary annotator__question">
                <h5 class="card-title">"Awesome Question Text"</h5>
                <div class="card-body">
                    <AnswerButton value=true on_answer=on_answer/>
                    <AnswerButton value=false on_answer=on_answer/>
                </div>
            </div>
            <br/>
            <hr/>
            <br/>
        </div>
    }
}

#[component]
fn AnswerButton(value: bool, on_answer: Callback<bool>) -> impl IntoView {
    view! {
        <button class=answer_button_class(value) on:click=move |_| on_answer.run(value)>
            {answer_label(value)}
        </button>
    }
}
