use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        MissingPage { message: format!("Nothing lives at {path}.") }
    }
}

/// Shared "not found" panel for unknown courses, lessons, and paths.
#[component]
pub fn MissingPage(message: String) -> Element {
    rsx! {
        div { class: "page missing",
            h1 { "Page not found" }
            p { "{message}" }
            Link { class: "button primary", to: Route::Courses {}, "Browse courses" }
        }
    }
}
