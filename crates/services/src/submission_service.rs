use std::sync::Arc;
use std::time::Duration;

use course_core::model::{ProjectSubmissionDraft, SubmissionReceipt};
use storage::repository::{LocalStorageRepository, SUBMISSION_KEY};
use tracing::{info, warn};

use crate::Clock;
use crate::error::SubmissionServiceError;

/// Pause that stands in for a form round trip to the agency.
pub const DEFAULT_FORM_DELAY: Duration = Duration::from_secs(2);

/// Accepts final-project uploads.
///
/// There is no upload backend: a valid submission waits out `delay`, then a
/// receipt is saved to local storage so the page can show "submitted" later.
#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    repo: Arc<dyn LocalStorageRepository>,
    delay: Duration,
}

impl SubmissionService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn LocalStorageRepository>, delay: Duration) -> Self {
        Self { clock, repo, delay }
    }

    /// Validate and "send" a project.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionServiceError::Invalid` if the form fails validation.
    /// Saving the receipt is best effort and never fails the submission.
    pub async fn submit(
        &self,
        draft: ProjectSubmissionDraft,
    ) -> Result<SubmissionReceipt, SubmissionServiceError> {
        let submission = draft.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = submission.receipt(self.clock.now());
        match serde_json::to_string(&receipt) {
            Ok(payload) => {
                if let Err(err) = self.repo.set_item(SUBMISSION_KEY, &payload).await {
                    warn!(error = %err, "could not save submission receipt");
                }
            }
            Err(err) => warn!(error = %err, "could not encode submission receipt"),
        }

        info!(
            receipt = %receipt.id,
            files = receipt.file_count,
            "project submitted"
        );
        Ok(receipt)
    }

    /// The last saved receipt, if any. An unreadable record counts as none.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionServiceError::Storage` when storage cannot be read.
    pub async fn status(&self) -> Result<Option<SubmissionReceipt>, SubmissionServiceError> {
        let Some(raw) = self.repo.get_item(SUBMISSION_KEY).await? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw)
            .inspect_err(|err| warn!(error = %err, "discarding unreadable submission receipt"))
            .ok())
    }

    /// Drop the saved receipt so the project can be handed in again.
    pub async fn clear(&self) {
        if let Err(err) = self.repo.remove_item(SUBMISSION_KEY).await {
            warn!(error = %err, "could not clear submission receipt");
        }
    }
}
