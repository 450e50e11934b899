use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::LessonNavVm;

#[component]
pub fn LessonNavButtons(nav: LessonNavVm) -> Element {
    if nav.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "lesson-nav",
            if let Some(previous) = nav.previous {
                Link { class: "button secondary", to: Route::from_path(&previous.path),
                    span { class: "lesson-nav-kind", "Previous Lesson" }
                    span { class: "lesson-nav-title", "{previous.title}" }
                }
            }
            if let Some(next) = nav.next {
                Link { class: "button primary", to: Route::from_path(&next.path),
                    span { class: "lesson-nav-kind", "Next Lesson" }
                    span { class: "lesson-nav-title", "{next.title}" }
                }
            }
        }
    }
}
