use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use course_core::course::{ILLUSTRATOR_SLUG, illustrator_expert};
use course_core::model::LessonId;
use course_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, Clock, LessonIdPolicy, ServicesConfig};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, provide_progress_signal};
use crate::views::lesson::use_lesson_toggle;
use crate::views::{
    AboutView, ContactView, CourseView, CoursesView, HomeView, LessonView, PortfolioView,
    ServicesView, SubmissionView,
};

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
    Courses,
    Course(&'static str),
    Lesson(&'static str),
    Submission,
}

/// Hooks registered by the harness so tests can act like a user.
#[derive(Clone, Default)]
pub struct HarnessHandles {
    toggle: Rc<RefCell<Option<Callback<LessonId>>>>,
}

impl HarnessHandles {
    pub fn toggle(&self) -> Callback<LessonId> {
        self.toggle
            .borrow()
            .as_ref()
            .copied()
            .expect("toggle registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    provide_progress_signal(&ctx);
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn ToggleRegistrar() -> Element {
    let handles = use_context::<HarnessHandles>();
    let toggle = use_lesson_toggle();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.toggle.borrow_mut() = Some(toggle);
    }
    rsx! {}
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let slug = ILLUSTRATOR_SLUG.to_owned();
    let page = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Services => rsx! { ServicesView {} },
        ViewKind::Portfolio => rsx! { PortfolioView {} },
        ViewKind::Contact => rsx! { ContactView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Course(slug) => rsx! { CourseView { slug: slug.to_owned() } },
        ViewKind::Lesson(lesson_id) => rsx! { LessonView { slug, lesson_id: lesson_id.to_owned() } },
        ViewKind::Submission => rsx! { SubmissionView { slug } },
    };
    rsx! {
        ToggleRegistrar {}
        {page}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn lesson(raw: &str) -> LessonId {
    LessonId::new(raw).expect("lesson id")
}

/// Render `view` over fresh in-memory storage with `completed` lessons done.
pub async fn setup_view_harness(view: ViewKind, completed: &[&str]) -> ViewHarness {
    setup_view_harness_with(view, completed, Storage::in_memory(), LessonIdPolicy::Permissive)
        .await
}

pub async fn setup_view_harness_with(
    view: ViewKind,
    completed: &[&str],
    storage: Storage,
    lesson_policy: LessonIdPolicy,
) -> ViewHarness {
    let config = ServicesConfig {
        clock: Clock::fixed(fixed_now()),
        lesson_policy,
        form_delay: Duration::ZERO,
    };
    let services = AppServices::new(&storage, illustrator_expert(), &config).await;
    for id in completed {
        services
            .progress()
            .mark_complete(&lesson(id))
            .await
            .expect("mark complete");
    }

    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(services.clone()),
            view,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        services,
        handles,
    };
    harness.rebuild();
    harness
}
