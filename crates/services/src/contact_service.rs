use std::time::Duration;

use course_core::model::{ContactDraft, ContactReceipt};
use tracing::info;

use crate::Clock;
use crate::error::ContactServiceError;

/// Sends "Contact Us" messages.
///
/// Nothing leaves the device: a valid message waits out `delay` and is
/// acknowledged with a receipt. Messages are not stored.
#[derive(Clone)]
pub struct ContactService {
    clock: Clock,
    delay: Duration,
}

impl ContactService {
    #[must_use]
    pub fn new(clock: Clock, delay: Duration) -> Self {
        Self { clock, delay }
    }

    /// # Errors
    ///
    /// Returns `ContactServiceError::Invalid` if the form fails validation.
    pub async fn send(&self, draft: ContactDraft) -> Result<ContactReceipt, ContactServiceError> {
        let message = draft.validate()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = message.receipt(self.clock.now());
        info!(receipt = %receipt.id, "contact message sent");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use course_core::model::ContactError;
    use course_core::time::fixed_now;

    use crate::DEFAULT_FORM_DELAY;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            message: "We need a promo video.".into(),
        }
    }

    #[tokio::test]
    async fn send_acknowledges_valid_message() {
        let service = ContactService::new(Clock::fixed(fixed_now()), Duration::ZERO);
        let receipt = service.send(draft()).await.unwrap();
        assert_eq!(receipt.name, "Grace Hopper");
        assert_eq!(receipt.sent_at, fixed_now());
    }

    #[tokio::test]
    async fn send_rejects_blank_message() {
        let service = ContactService::new(Clock::fixed(fixed_now()), Duration::ZERO);
        let mut blank = draft();
        blank.message.clear();
        let err = service.send(blank).await.unwrap_err();
        assert!(matches!(
            err,
            ContactServiceError::Invalid(ContactError::EmptyMessage)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn send_waits_for_form_delay() {
        let service = ContactService::new(Clock::fixed(fixed_now()), DEFAULT_FORM_DELAY);
        let started = tokio::time::Instant::now();
        service.send(draft()).await.unwrap();
        assert!(started.elapsed() >= DEFAULT_FORM_DELAY);
    }
}
