#![forbid(unsafe_code)]

pub mod app_services;
pub mod contact_service;
pub mod error;
pub mod progress_service;
pub mod submission_service;

pub use course_core::Clock;

pub use app_services::{AppServices, ServicesConfig};
pub use contact_service::ContactService;
pub use error::{AppServicesError, ContactServiceError, ProgressError, SubmissionServiceError};
pub use progress_service::{LessonIdPolicy, ProgressService, ProgressSnapshot};
pub use submission_service::{DEFAULT_FORM_DELAY, SubmissionService};
