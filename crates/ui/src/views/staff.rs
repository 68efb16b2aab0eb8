use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionRowVm, map_session_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaffRole {
    Admin,
    Hr,
    Facilitator,
    Hse,
}

impl StaffRole {
    fn title(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Hr => "HR",
            Self::Facilitator => "Facilitator",
            Self::Hse => "HSE",
        }
    }
}

#[component]
pub fn AdminView() -> Element {
    rsx! { StaffArea { role: StaffRole::Admin } }
}

#[component]
pub fn HrView() -> Element {
    rsx! { StaffArea { role: StaffRole::Hr } }
}

#[component]
pub fn FacilitatorView() -> Element {
    rsx! { StaffArea { role: StaffRole::Facilitator } }
}

#[component]
pub fn HseView() -> Element {
    rsx! { StaffArea { role: StaffRole::Hse } }
}

#[derive(Clone, Debug, PartialEq)]
struct DirectoryData {
    rows: Vec<SessionRowVm>,
}

/// Scheduled-session directory shared by the staff areas. The areas differ
/// by chrome only; the data is the same read-only listing.
#[component]
fn StaffArea(role: StaffRole) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.session_directory();

    let resource = use_resource(move || {
        let directory = directory.clone();
        async move {
            let sessions = directory
                .list_sessions()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(DirectoryData {
                rows: map_session_rows(&sessions),
            })
        }
    });

    let state = view_state_from_resource(&resource);
    let title = role.title();

    rsx! {
        div { class: "page",
            h2 { "{title}" }
            h3 { "Scheduled sessions" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No sessions scheduled." }
                    } else {
                        ul { class: "session-list",
                            for row in data.rows {
                                SessionRow { row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn SessionRow(row: SessionRowVm) -> Element {
    rsx! {
        li { class: "session-row",
            span { class: "session-training", "{row.training}" }
            span { class: "session-facilitator", "{row.facilitator}" }
            span { class: "session-date", "{row.scheduled_at_str}" }
            Link { class: "session-join", to: Route::Join { session_id: row.id }, "Join" }
        }
    }
}
