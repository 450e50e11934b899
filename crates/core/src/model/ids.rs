use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for building an id from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },
}

/// Identifier of a single lesson (`"intro"`, `"a1"`, `"c2"`, ...).
///
/// Ids are trimmed and never empty. On the wire a `LessonId` is a bare JSON
/// string, so a progress payload reads `["intro","a1"]`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonId(String);

impl LessonId {
    /// Creates a validated `LessonId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Empty` if the value is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty { kind: "LessonId" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds an id from trusted, hard-coded course data.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a course module (`"intro"`, `"section-a"`, ...).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a validated `ModuleId`.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Empty` if the value is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty { kind: "ModuleId" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

impl FromStr for LessonId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for ModuleId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LessonId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ModuleId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LessonId> for String {
    fn from(id: LessonId) -> Self {
        id.0
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_id_is_trimmed() {
        let id = LessonId::new("  a1 ").unwrap();
        assert_eq!(id.as_str(), "a1");
        assert_eq!(id.to_string(), "a1");
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert_eq!(
            LessonId::new("   "),
            Err(IdError::Empty { kind: "LessonId" })
        );
        assert!("".parse::<ModuleId>().is_err());
    }

    #[test]
    fn lesson_id_serializes_as_plain_string() {
        let id: LessonId = "intro".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"intro\"");

        let back: LessonId = serde_json::from_str("\"b2\"").unwrap();
        assert_eq!(back.as_str(), "b2");
        assert!(serde_json::from_str::<LessonId>("\"\"").is_err());
    }

    #[test]
    fn debug_format_names_the_kind() {
        let id = LessonId::new("c1").unwrap();
        assert_eq!(format!("{id:?}"), "LessonId(c1)");
    }
}
