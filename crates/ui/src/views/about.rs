use course_core::site::{MISSION, VISION, core_values};
use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page about",
            section { class: "mission",
                div {
                    h2 { "Our Mission" }
                    p { "{MISSION}" }
                }
                div {
                    h2 { "Our Vision" }
                    p { "{VISION}" }
                }
            }
            section { class: "values",
                h2 { "Core Values" }
                div { class: "card-grid",
                    for value in core_values() {
                        div { key: "{value.title}", class: "info-card",
                            h3 { "{value.title}" }
                            p { class: "muted", "{value.description}" }
                        }
                    }
                }
            }
        }
    }
}
