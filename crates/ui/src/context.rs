use std::sync::Arc;

use course_core::model::Catalog;
use dioxus::prelude::*;
use services::{AppServices, ContactService, ProgressService, ProgressSnapshot, SubmissionService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn submissions(&self) -> Arc<SubmissionService>;
    fn contact(&self) -> Arc<ContactService>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<Catalog> {
        AppServices::catalog(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        AppServices::progress(self)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        AppServices::submissions(self)
    }

    fn contact(&self) -> Arc<ContactService> {
        AppServices::contact(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    submissions: Arc<SubmissionService>,
    contact: Arc<ContactService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            submissions: app.submissions(),
            contact: app.contact(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// The catalog behind `slug`, if this app serves that course.
    #[must_use]
    pub fn course(&self, slug: &str) -> Option<Arc<Catalog>> {
        (self.catalog.slug() == slug).then(|| self.catalog())
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    #[must_use]
    pub fn contact(&self) -> Arc<ContactService> {
        Arc::clone(&self.contact)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The last progress change the store refused, shown beside the lesson
/// completion button until a later change succeeds.
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressFeedback(pub Signal<Option<String>>);

/// Share one progress snapshot with every view below the caller.
///
/// Views that change progress write the snapshot the service hands back, so
/// the sidebar and progress bars re-render together.
pub fn provide_progress_signal(ctx: &AppContext) -> Signal<ProgressSnapshot> {
    let progress = ctx.progress();
    use_context_provider(|| ProgressFeedback(Signal::new(None)));
    use_context_provider(move || Signal::new(progress.snapshot()))
}

/// The snapshot signal installed by `provide_progress_signal`.
#[must_use]
pub fn use_progress_signal() -> Signal<ProgressSnapshot> {
    use_context::<Signal<ProgressSnapshot>>()
}

#[must_use]
pub fn use_progress_feedback() -> ProgressFeedback {
    use_context::<ProgressFeedback>()
}
