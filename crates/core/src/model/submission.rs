use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on attached files per submission.
pub const MAX_SUBMISSION_FILES: usize = 3;

/// Upper bound on a single attachment (50 MiB).
pub const MAX_SUBMISSION_FILE_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("full name cannot be empty")]
    EmptyName,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("select at least one file to upload")]
    NoFiles,

    #[error("at most 3 files may be uploaded, got {count}")]
    TooManyFiles { count: usize },

    #[error("{name} exceeds the 50MB size limit ({size_bytes} bytes)")]
    FileTooLarge { name: String, size_bytes: u64 },
}

/// A file picked for upload. Only metadata is tracked; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
}

impl SubmissionFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Unvalidated form state of the "Submit Your Project" page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSubmissionDraft {
    pub full_name: String,
    pub email: String,
    pub course: String,
    pub description: String,
    pub files: Vec<SubmissionFile>,
}

impl ProjectSubmissionDraft {
    /// Checks the form the same way the upload page does before sending.
    ///
    /// # Errors
    ///
    /// Returns the first `SubmissionError` found: name, email, then files.
    pub fn validate(self) -> Result<ProjectSubmission, SubmissionError> {
        let full_name = self.full_name.trim().to_owned();
        if full_name.is_empty() {
            return Err(SubmissionError::EmptyName);
        }

        let email = self.email.trim().to_owned();
        if !looks_like_email(&email) {
            return Err(SubmissionError::InvalidEmail);
        }

        if self.files.is_empty() {
            return Err(SubmissionError::NoFiles);
        }
        if let Some(file) = self
            .files
            .iter()
            .find(|file| file.size_bytes > MAX_SUBMISSION_FILE_BYTES)
        {
            return Err(SubmissionError::FileTooLarge {
                name: file.name.clone(),
                size_bytes: file.size_bytes,
            });
        }
        if self.files.len() > MAX_SUBMISSION_FILES {
            return Err(SubmissionError::TooManyFiles {
                count: self.files.len(),
            });
        }

        Ok(ProjectSubmission {
            full_name,
            email,
            course: self.course.trim().to_owned(),
            description: self.description.trim().to_owned(),
            files: self.files,
        })
    }
}

/// Text on both sides of a single `@`, and no whitespace.
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmission {
    full_name: String,
    email: String,
    course: String,
    description: String,
    files: Vec<SubmissionFile>,
}

impl ProjectSubmission {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn files(&self) -> &[SubmissionFile] {
        &self.files
    }

    /// Stamp the submission as received at `now`.
    #[must_use]
    pub fn receipt(&self, now: DateTime<Utc>) -> SubmissionReceipt {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            course: self.course.clone(),
            file_count: self.files.len(),
            submitted_at: now,
        }
    }
}

/// What is kept locally once a project has been handed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub course: String,
    pub file_count: usize,
    pub submitted_at: DateTime<Utc>,
}
