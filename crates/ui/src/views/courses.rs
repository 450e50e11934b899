use course_core::directory::{CourseCategory, course_directory};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// The "Start Learning" directory of course categories.
#[component]
pub fn CoursesView() -> Element {
    let categories = use_hook(course_directory);
    let mut open = use_signal(|| None::<String>);
    let cards: Vec<(String, bool, CourseCategory)> = categories
        .into_iter()
        .map(|category| {
            let expanded = open.read().as_deref() == Some(category.id.as_str());
            (category.id.clone(), expanded, category)
        })
        .collect();

    rsx! {
        div { class: "page courses",
            h1 { "Start Learning" }
            p { class: "muted", "Pick a field to see its courses." }
            div { class: "category-grid",
                for (key, expanded, category) in cards {
                    CategoryCard {
                        key: "{key}",
                        expanded,
                        category,
                        on_select: move |id: String| {
                            let next = if open.read().as_deref() == Some(id.as_str()) {
                                None
                            } else {
                                Some(id)
                            };
                            open.set(next);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: CourseCategory, expanded: bool, on_select: EventHandler<String>) -> Element {
    let id = category.id.clone();
    let can_expand = category.can_expand();

    rsx! {
        div { class: if can_expand { "category" } else { "category disabled" },
            button {
                class: "category-head",
                disabled: !can_expand,
                onclick: move |_| on_select.call(id.clone()),
                span { class: "category-icon", "{category.icon}" }
                div {
                    h3 { "{category.title}" }
                    p { class: "muted", "{category.description}" }
                }
                if !can_expand {
                    span { class: "badge", "Coming Soon" }
                }
            }
            if expanded {
                ul { class: "course-list",
                    for listing in category.courses {
                        li { key: "{listing.title}",
                            match listing.target() {
                                Some(target) => rsx! {
                                    Link { to: Route::from_path(target),
                                        strong { "{listing.title}" }
                                        p { "{listing.description}" }
                                    }
                                },
                                None => rsx! {
                                    div { class: "disabled",
                                        strong { "{listing.title}" }
                                        p { "{listing.description}" }
                                        span { class: "badge", "Coming Soon" }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
