use std::sync::Arc;

use course_core::model::LessonId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::{Breadcrumb, CourseNavigation, LessonNavButtons, ProgressBar};
use crate::context::{AppContext, ProgressFeedback, use_progress_feedback, use_progress_signal};
use crate::routes::Route;
use crate::views::MissingPage;
use crate::vm::{LessonNavVm, ProgressVm, breadcrumbs_for_lesson};

/// `/course/:slug/intro` is the lesson page of the `intro` lesson.
#[component]
pub fn IntroView(slug: String) -> Element {
    rsx! {
        LessonPage { slug, lesson_id: "intro".to_owned() }
    }
}

#[component]
pub fn LessonView(slug: String, lesson_id: String) -> Element {
    rsx! {
        LessonPage { slug, lesson_id }
    }
}

/// Flip a lesson's completion and publish the result to the shared snapshot,
/// or the refusal to the shared feedback.
pub(crate) fn use_lesson_toggle() -> Callback<LessonId> {
    let ctx = use_context::<AppContext>();
    let mut snapshot = use_progress_signal();
    let ProgressFeedback(mut feedback) = use_progress_feedback();
    use_callback(move |lesson_id: LessonId| {
        let progress = ctx.progress();
        spawn(async move {
            match progress.toggle(&lesson_id).await {
                Ok(next) => {
                    snapshot.set(next);
                    feedback.set(None);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "toggle rejected");
                    feedback.set(Some(err.to_string()));
                }
            }
        });
    })
}

#[component]
fn LessonPage(slug: String, lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let snapshot = use_progress_signal();
    let ProgressFeedback(feedback) = use_progress_feedback();
    let toggle = use_lesson_toggle();

    let Some(catalog) = ctx.course(&slug) else {
        return rsx! { MissingPage { message: format!("No course called \"{slug}\".") } };
    };
    let Some(lesson) = LessonId::new(lesson_id.as_str())
        .ok()
        .and_then(|id| catalog.lesson(&id).cloned())
    else {
        return rsx! { MissingPage { message: format!("Lesson \"{lesson_id}\" is not part of this course.") } };
    };

    let current = snapshot.read().clone();
    let completed = current.is_complete(lesson.id());
    let progress = ProgressVm::from_snapshot(&current);
    let nav = LessonNavVm::build(&catalog, lesson.id());
    let crumbs = breadcrumbs_for_lesson(&catalog, &lesson);
    let module_title = catalog
        .module_of(lesson.id())
        .map(|module| module.title().to_owned())
        .unwrap_or_default();
    let is_last = nav.next.is_none();

    let toggle_id = lesson.id().clone();
    let rejection = feedback.read().clone();

    rsx! {
        div { class: "page lesson",
            div { class: "lesson-main",
                Breadcrumb { items: crumbs }
                p { class: "eyebrow", "{module_title}" }
                h1 { "{lesson.title()}" }
                div { class: "video-frame",
                    span { class: "play", "▶" }
                    span { class: "muted", "Video lesson • {lesson.duration_label()}" }
                }
                div { class: "lesson-actions",
                    button {
                        class: if completed { "button done" } else { "button primary" },
                        onclick: move |_| toggle.call(toggle_id.clone()),
                        if completed { "✓ Completed" } else { "Mark as Complete" }
                    }
                    if let Some(message) = rejection {
                        p { class: "error", "{message}" }
                    }
                }
                LessonNavButtons { nav }
                if is_last {
                    div { class: "project-cta",
                        p { "You reached the end of the course. Time to build your project!" }
                        Link {
                            class: "button primary",
                            to: Route::SubmitProject { slug: catalog.slug().to_owned() },
                            "Submit Your Project"
                        }
                    }
                }
            }
            div { class: "lesson-side",
                ProgressBar { progress }
                CourseNavigation {
                    catalog: Arc::clone(&catalog),
                    snapshot: current.clone(),
                    current: Some(lesson.id().clone()),
                }
            }
        }
    }
}
