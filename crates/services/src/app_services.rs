use std::sync::Arc;
use std::time::Duration;

use course_core::model::Catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::contact_service::ContactService;
use crate::error::AppServicesError;
use crate::progress_service::{LessonIdPolicy, ProgressService};
use crate::submission_service::{DEFAULT_FORM_DELAY, SubmissionService};

/// Knobs the composition root passes down to services.
#[derive(Debug, Clone, Copy)]
pub struct ServicesConfig {
    pub clock: Clock,
    pub lesson_policy: LessonIdPolicy,
    pub form_delay: Duration,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            clock: Clock::System,
            lesson_policy: LessonIdPolicy::Permissive,
            form_delay: DEFAULT_FORM_DELAY,
        }
    }
}

/// Assembles app-facing services over one storage backend and one course.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    submissions: Arc<SubmissionService>,
    contact: Arc<ContactService>,
}

impl AppServices {
    /// Build services over an already opened storage backend.
    pub async fn new(storage: &Storage, catalog: Catalog, config: &ServicesConfig) -> Self {
        let catalog = Arc::new(catalog);
        let progress = Arc::new(
            ProgressService::load(
                Arc::clone(&catalog),
                Arc::clone(&storage.local),
                config.lesson_policy,
            )
            .await,
        );
        let submissions = Arc::new(SubmissionService::new(
            config.clock,
            Arc::clone(&storage.local),
            config.form_delay,
        ));
        let contact = Arc::new(ContactService::new(config.clock, config.form_delay));

        Self {
            catalog,
            progress,
            submissions,
            contact,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(
        db_url: &str,
        catalog: Catalog,
        config: &ServicesConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, catalog, config).await)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
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
