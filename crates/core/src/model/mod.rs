mod catalog;
mod contact;
mod ids;
mod lesson;
mod module;
mod progress;
mod submission;

pub use catalog::{Catalog, CatalogError};
pub use contact::{ContactDraft, ContactError, ContactMessage, ContactReceipt};
pub use ids::{IdError, LessonId, ModuleId};
pub use lesson::Lesson;
pub use module::{CourseModule, pluralize_lessons};
pub use progress::{ProgressPayloadError, ProgressState};
pub use submission::{
    MAX_SUBMISSION_FILE_BYTES, MAX_SUBMISSION_FILES, ProjectSubmission, ProjectSubmissionDraft,
    SubmissionError, SubmissionFile, SubmissionReceipt,
};
