use serde::Serialize;

use crate::model::ids::ModuleId;
use crate::model::lesson::Lesson;

/// An ordered group of lessons inside a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    id: ModuleId,
    title: String,
    description: String,
    duration_label: String,
    lessons: Vec<Lesson>,
}

impl CourseModule {
    #[must_use]
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_label: impl Into<String>,
        lessons: Vec<Lesson>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            duration_label: duration_label.into(),
            lessons,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// "1 lesson", "12 lessons".
    #[must_use]
    pub fn lesson_count_label(&self) -> String {
        pluralize_lessons(self.lessons.len())
    }
}

/// Formats a lesson count the way course listings print it.
#[must_use]
pub fn pluralize_lessons(count: usize) -> String {
    if count == 1 {
        "1 lesson".to_owned()
    } else {
        format!("{count} lessons")
    }
}
