use course_core::site::{AGENCY_NAME, AGENCY_TAGLINE};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::ProgressBar;
use crate::context::{AppContext, use_progress_signal};
use crate::routes::Route;
use crate::vm::ProgressVm;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_progress_signal();
    let catalog = ctx.catalog();
    let progress = ProgressVm::from_snapshot(&snapshot.read());
    let course = Route::Course {
        slug: catalog.slug().to_owned(),
    };

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "{AGENCY_NAME} - Transforming Ideas into Reality" }
                h2 { class: "accent", "{AGENCY_TAGLINE}" }
                p { "A multimedia company offering creative digital marketing and EdTech solutions, with hands-on design courses you can take at your own pace." }
                div { class: "hero-actions",
                    Link { class: "button primary", to: Route::Courses {}, "Start Learning" }
                    Link { class: "button secondary", to: Route::Services {}, "Explore Services" }
                }
            }
            section { class: "featured",
                h2 { "Featured course" }
                div { class: "course-card",
                    h3 { "{catalog.title()}" }
                    p { class: "muted", "{catalog.total_lessons()} lessons • {catalog.total_duration_label()}" }
                    if progress.completed > 0 {
                        ProgressBar { progress: progress.clone(), show_details: false }
                    }
                    Link { class: "button secondary", to: course, "View Course" }
                }
            }
        }
    }
}
