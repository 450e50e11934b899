use course_core::site::{PortfolioSection, portfolio};
use dioxus::prelude::*;

#[component]
pub fn PortfolioView() -> Element {
    rsx! {
        div { class: "page portfolio",
            for section in portfolio() {
                PortfolioGallery { key: "{section.title}", section: section.clone() }
            }
        }
    }
}

#[component]
fn PortfolioGallery(section: PortfolioSection) -> Element {
    rsx! {
        section { class: "gallery",
            h2 { "{section.title}" }
            if !section.image_categories.is_empty() {
                ul { class: "tag-list",
                    for category in section.image_categories.iter() {
                        li { key: "{category}", "{category}" }
                    }
                }
            }
            div { class: "card-grid",
                for video in section.videos.iter() {
                    div { key: "{video.video_id}", class: "info-card video",
                        span { class: "play", "▶" }
                        h3 { "{video.title}" }
                        a { href: "{video.watch_url()}", target: "_blank", "Watch" }
                    }
                }
            }
            a { class: "button secondary", href: "{section.more_url}", target: "_blank", "Learn More" }
        }
    }
}
