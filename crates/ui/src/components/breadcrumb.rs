use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::CrumbVm;

/// `Home › Courses › Course › Page`. Only the trailing item is plain text.
#[component]
pub fn Breadcrumb(items: Vec<CrumbVm>) -> Element {
    rsx! {
        nav { class: "breadcrumb",
            Link { class: "crumb-home", to: Route::Home {}, "Home" }
            for (index, item) in items.into_iter().enumerate() {
                span { key: "{index}", class: "crumb",
                    span { class: "crumb-sep", "›" }
                    match item.path {
                        Some(path) => rsx! {
                            Link { to: Route::from_path(&path), "{item.label}" }
                        },
                        None => rsx! {
                            span { class: "crumb-current", "{item.label}" }
                        },
                    }
                }
            }
        }
    }
}
