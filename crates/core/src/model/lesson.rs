use serde::Serialize;

use crate::model::ids::LessonId;

/// One lesson of a course, as listed in the course navigation.
///
/// `duration_label` is display text ("17 min 47 sec") and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration_label: String,
    path: String,
}

impl Lesson {
    #[must_use]
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        duration_label: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration_label: duration_label.into(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Routable location of the lesson page.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
