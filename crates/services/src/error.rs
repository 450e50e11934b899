//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::{ContactError, LessonId, SubmissionError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
///
/// Storage failures never show up here: reads degrade to empty progress and
/// writes are logged and skipped.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("lesson {id} is not part of the course")]
    UnknownLesson { id: LessonId },
}

/// Errors emitted by `SubmissionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Invalid(#[from] SubmissionError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ContactService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactServiceError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
