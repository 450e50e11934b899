use course_core::site::{InfoCard, edtech_services, multimedia_services};
use dioxus::prelude::*;

#[component]
pub fn ServicesView() -> Element {
    rsx! {
        div { class: "page services",
            OfferingSection { title: "Multimedia Services", cards: multimedia_services() }
            OfferingSection {
                title: "Educational Technology (EdTech) Solutions",
                cards: edtech_services(),
            }
        }
    }
}

#[component]
fn OfferingSection(title: &'static str, cards: Vec<InfoCard>) -> Element {
    rsx! {
        section { class: "offerings",
            h2 { "{title}" }
            div { class: "card-grid",
                for card in cards {
                    div { key: "{card.title}", class: "info-card",
                        h3 { "{card.title}" }
                        p { class: "muted", "{card.description}" }
                    }
                }
            }
        }
    }
}
