use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::map_result_query;

/// Quiz result summary, derived entirely from the route's query parameters.
#[component]
pub fn ResultView(score: Option<String>, status: Option<String>) -> Element {
    let vm = map_result_query(score.as_deref(), status.as_deref());
    let status_class = if vm.passed {
        "result-status result-status--passed"
    } else {
        "result-status result-status--failed"
    };

    rsx! {
        div { class: "page result-page",
            h2 { "Your Result" }
            div { class: "result-card {vm.band_class}",
                p { class: "{status_class}", "{vm.label}" }
                p { class: "result-score", "Score: {vm.score}%" }
                p { class: "result-note",
                    if vm.passed {
                        "Well done. Your certificate will be issued by the facilitator."
                    } else {
                        "Please speak to your facilitator about re-taking the induction."
                    }
                }
            }
            p {
                Link { to: Route::Home {}, "Back to Home" }
            }
        }
    }
}
