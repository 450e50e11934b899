use course_core::site::AGENCY_NAME;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    AboutView, ContactView, CourseView, CoursesView, HomeView, IntroView, LessonView,
    NotFoundView, PortfolioView, ServicesView, SubmissionView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/about", AboutView)] About {},
        #[route("/services", ServicesView)] Services {},
        #[route("/portfolio", PortfolioView)] Portfolio {},
        #[route("/contact", ContactView)] Contact {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/course/:slug", CourseView)] Course { slug: String },
        #[route("/course/:slug/intro", IntroView)] Intro { slug: String },
        #[route("/course/:slug/lesson/:lesson_id", LessonView)] Lesson { slug: String, lesson_id: String },
        #[route("/course/:slug/submit-project", SubmissionView)] SubmitProject { slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// Resolve an in-app path (as stored on lessons and course listings).
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Self::NotFound {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        })
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        header { class: "topbar",
            Link { class: "brand", to: Route::Home {}, "{AGENCY_NAME}" }
            nav {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Services {}, "Services" }
                Link { to: Route::Portfolio {}, "Portfolio" }
                Link { to: Route::Contact {}, "Contact" }
                Link { class: "nav-cta", to: Route::Courses {}, "Start Learning" }
            }
        }
    }
}
