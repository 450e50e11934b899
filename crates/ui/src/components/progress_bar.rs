use dioxus::prelude::*;

use crate::vm::ProgressVm;

#[component]
pub fn ProgressBar(progress: ProgressVm, #[props(default = true)] show_details: bool) -> Element {
    rsx! {
        section { class: "progress-card",
            div { class: "progress-head",
                h3 { "Course Progress" }
                span { class: "progress-percent", "{progress.percent}%" }
                if progress.is_complete {
                    span { class: "progress-check", "✓" }
                }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "{progress.bar_style}" }
            }
            if show_details {
                div { class: "progress-details",
                    span { "{progress.summary_label}" }
                    span { class: if progress.is_complete { "progress-done" } else { "" },
                        "{progress.remaining_label}"
                    }
                }
            }
            if progress.is_complete {
                p { class: "progress-congrats", "Congratulations! You have completed the entire course!" }
            }
        }
    }
}
