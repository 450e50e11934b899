use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::ids::LessonId;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressPayloadError {
    #[error("progress payload is not a JSON array of lesson ids: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The set of lessons completed on this device.
///
/// Membership is all that matters: ordering is irrelevant and duplicates are
/// impossible. The persisted form is a JSON array of id strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    completed: BTreeSet<LessonId>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the lesson. Returns `true` if the set changed.
    pub fn mark_complete(&mut self, lesson_id: LessonId) -> bool {
        self.completed.insert(lesson_id)
    }

    /// Removes the lesson. Returns `true` if the set changed.
    pub fn mark_incomplete(&mut self, lesson_id: &LessonId) -> bool {
        self.completed.remove(lesson_id)
    }

    #[must_use]
    pub fn is_complete(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LessonId> {
        self.completed.iter()
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    /// Whole-number completion percentage against `total` lessons.
    ///
    /// Halves round up, the result never exceeds 100, and an empty course
    /// reports 0.
    #[must_use]
    pub fn percent_of(&self, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let count = self.completed.len();
        let rounded = (200 * count + total) / (2 * total);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }

    /// Serializes the set for storage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressPayloadError::Malformed` if JSON encoding fails.
    pub fn to_payload(&self) -> Result<String, ProgressPayloadError> {
        Ok(serde_json::to_string(&self.completed)?)
    }

    /// Strictly parses a stored payload.
    ///
    /// # Errors
    ///
    /// Returns `ProgressPayloadError::Malformed` unless the payload is a JSON
    /// array of non-empty strings.
    pub fn from_payload(raw: &str) -> Result<Self, ProgressPayloadError> {
        let ids: Vec<LessonId> = serde_json::from_str(raw)?;
        Ok(ids.into_iter().collect())
    }
}

impl FromIterator<LessonId> for ProgressState {
    fn from_iter<I: IntoIterator<Item = LessonId>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}
