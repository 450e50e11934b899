use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::submission::looks_like_email;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Unvalidated state of the "Contact Us" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// # Errors
    ///
    /// Returns the first `ContactError` found, in field order.
    pub fn validate(self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        let email = self.email.trim().to_owned();
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = self.message.trim().to_owned();
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn receipt(&self, now: DateTime<Utc>) -> ContactReceipt {
        ContactReceipt {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            email: self.email.clone(),
            sent_at: now,
        }
    }
}

/// Acknowledgement for a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub sent_at: DateTime<Utc>,
}
