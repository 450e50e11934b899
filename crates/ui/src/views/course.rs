use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::ProgressBar;
use crate::context::{AppContext, use_progress_signal};
use crate::routes::Route;
use crate::views::MissingPage;
use crate::vm::{ProgressVm, resume_target};

/// Course landing page: outline, progress, and where to continue.
#[component]
pub fn CourseView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_progress_signal();

    let Some(catalog) = ctx.course(&slug) else {
        return rsx! { MissingPage { message: format!("No course called \"{slug}\".") } };
    };

    let snapshot = snapshot.read().clone();
    let progress = ProgressVm::from_snapshot(&snapshot);
    let resume = resume_target(&catalog, &snapshot);
    let cta = if progress.completed == 0 {
        "Start Course"
    } else {
        "Continue Learning"
    };

    rsx! {
        div { class: "page course",
            header { class: "course-hero",
                h1 { "{catalog.title()}" }
                p { class: "muted", "{catalog.total_lessons()} lessons • {catalog.total_duration_label()}" }
                if let Some(lesson) = resume {
                    Link { class: "button primary", to: Route::from_path(&lesson.path),
                        "{cta}: {lesson.title}"
                    }
                }
            }
            ProgressBar { progress }
            section { class: "modules",
                h2 { "Course Content" }
                for module in catalog.modules().iter() {
                    div { key: "{module.id()}", class: "module-card",
                        div { class: "module-head",
                            h3 { "{module.title()}" }
                            span { class: "muted", "{module.lesson_count_label()} • {module.duration_label()}" }
                        }
                        p { "{module.description()}" }
                        ol { class: "module-lessons",
                            for lesson in module.lessons().iter() {
                                li { key: "{lesson.id()}",
                                    class: if snapshot.is_complete(lesson.id()) { "completed" } else { "" },
                                    Link { to: Route::from_path(lesson.path()), "{lesson.title()}" }
                                    span { class: "muted", " {lesson.duration_label()}" }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "project-cta",
                h2 { "Final project" }
                p { "Finished the lessons? Hand in your project for feedback." }
                Link {
                    class: "button secondary",
                    to: Route::SubmitProject { slug: catalog.slug().to_owned() },
                    "Submit Your Project"
                }
            }
        }
    }
}
