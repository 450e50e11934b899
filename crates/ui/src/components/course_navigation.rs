use std::sync::Arc;

use course_core::model::{Catalog, LessonId, ModuleId};
use dioxus::prelude::*;
use dioxus_router::Link;
use services::ProgressSnapshot;

use crate::routes::Route;
use crate::vm::{CourseNavVm, ExpandedModules, LessonRowVm, LessonStatus, ModuleRowVm};

/// Course outline sidebar. Expanding modules is local UI state only.
#[component]
pub fn CourseNavigation(
    catalog: Arc<Catalog>,
    snapshot: ProgressSnapshot,
    current: Option<LessonId>,
) -> Element {
    let mut expanded = use_signal(ExpandedModules::default);
    let vm = CourseNavVm::build(&catalog, &snapshot, current.as_ref(), &expanded.read());

    rsx! {
        aside { class: "course-nav",
            div { class: "course-nav-head",
                h3 { "Course Content" }
                p { "{vm.header_label}" }
            }
            for module in vm.modules {
                ModuleSection {
                    key: "{module.id}",
                    module: module.clone(),
                    on_toggle: move |module_id: ModuleId| expanded.write().toggle(&module_id),
                }
            }
        }
    }
}

#[component]
fn ModuleSection(module: ModuleRowVm, on_toggle: EventHandler<ModuleId>) -> Element {
    let module_id = module.id.clone();
    let chevron = if module.expanded { "▴" } else { "▾" };

    rsx! {
        div { class: "nav-module",
            button {
                class: "nav-module-toggle",
                onclick: move |_| on_toggle.call(module_id.clone()),
                div {
                    h4 { "{module.title}" }
                    p { class: "muted", "{module.lesson_count_label}" }
                }
                span { class: "chevron", "{chevron}" }
            }
            if module.expanded {
                ul { class: "nav-lessons",
                    for lesson in module.lessons {
                        LessonRow { key: "{lesson.id}", lesson: lesson.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonRow(lesson: LessonRowVm) -> Element {
    let (class, marker) = match lesson.status {
        LessonStatus::Current => ("nav-lesson current", "▶"),
        LessonStatus::Completed => ("nav-lesson completed", "✓"),
        LessonStatus::Pending => ("nav-lesson", "○"),
    };

    rsx! {
        li { class,
            Link { to: Route::from_path(&lesson.path),
                span { class: "marker", "{marker}" }
                span { class: "nav-lesson-text",
                    span { class: "nav-lesson-title", "{lesson.title}" }
                    span { class: "muted", "{lesson.duration_label}" }
                }
            }
        }
    }
}
