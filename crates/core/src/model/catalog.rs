use std::collections::{HashMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{LessonId, ModuleId};
use crate::model::lesson::Lesson;
use crate::model::module::CourseModule;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one lesson")]
    Empty,

    #[error("lesson id {id} appears more than once")]
    DuplicateLesson { id: LessonId },

    #[error("module id {id} appears more than once")]
    DuplicateModule { id: ModuleId },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Static, ordered definition of a course.
///
/// Catalog order defines the global lesson ordering used for previous/next
/// navigation, and the number of lessons is the only lesson total the rest of
/// the system uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    slug: String,
    title: String,
    total_duration_label: String,
    modules: Vec<CourseModule>,
    /// `(module index, lesson index)` for every lesson, in flattened order.
    #[serde(skip)]
    positions: Vec<(usize, usize)>,
    #[serde(skip)]
    index: HashMap<LessonId, usize>,
}

impl Catalog {
    /// Builds a catalog, checking lesson and module id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no module has lessons, or a
    /// duplicate error when an id is reused.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        total_duration_label: impl Into<String>,
        modules: Vec<CourseModule>,
    ) -> Result<Self, CatalogError> {
        let mut seen_modules = HashSet::new();
        for module in &modules {
            if !seen_modules.insert(module.id().clone()) {
                return Err(CatalogError::DuplicateModule {
                    id: module.id().clone(),
                });
            }
        }

        let mut positions = Vec::new();
        let mut index = HashMap::new();
        for (module_idx, module) in modules.iter().enumerate() {
            for (lesson_idx, lesson) in module.lessons().iter().enumerate() {
                if index.insert(lesson.id().clone(), positions.len()).is_some() {
                    return Err(CatalogError::DuplicateLesson {
                        id: lesson.id().clone(),
                    });
                }
                positions.push((module_idx, lesson_idx));
            }
        }

        if positions.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            slug: slug.into(),
            title: title.into(),
            total_duration_label: total_duration_label.into(),
            modules,
            positions,
            index,
        })
    }

    /// URL slug of the course (`adobe-illustrator-expert`).
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn total_duration_label(&self) -> &str {
        &self.total_duration_label
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    /// Every lesson in catalog order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(CourseModule::lessons)
    }

    /// Every lesson in catalog order, collected.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Lesson> {
        self.lessons().collect()
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.positions.len()
    }

    /// Position of a lesson in the flattened order, or `None` if the id is
    /// not part of this catalog.
    #[must_use]
    pub fn index_of(&self, lesson_id: &LessonId) -> Option<usize> {
        self.index.get(lesson_id).copied()
    }

    #[must_use]
    pub fn contains(&self, lesson_id: &LessonId) -> bool {
        self.index.contains_key(lesson_id)
    }

    /// Lesson at a flattened position.
    #[must_use]
    pub fn lesson_at(&self, position: usize) -> Option<&Lesson> {
        let (module_idx, lesson_idx) = *self.positions.get(position)?;
        self.modules
            .get(module_idx)
            .and_then(|module| module.lessons().get(lesson_idx))
    }

    #[must_use]
    pub fn lesson(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        self.index_of(lesson_id).and_then(|pos| self.lesson_at(pos))
    }

    /// Module that owns the given lesson.
    #[must_use]
    pub fn module_of(&self, lesson_id: &LessonId) -> Option<&CourseModule> {
        let (module_idx, _) = *self.positions.get(self.index_of(lesson_id)?)?;
        self.modules.get(module_idx)
    }

    #[must_use]
    pub fn previous(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        let pos = self.index_of(lesson_id)?;
        pos.checked_sub(1).and_then(|prev| self.lesson_at(prev))
    }

    #[must_use]
    pub fn next(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        let pos = self.index_of(lesson_id)?;
        self.lesson_at(pos + 1)
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lesson_at(0)
    }

    #[must_use]
    pub fn last_lesson(&self) -> Option<&Lesson> {
        self.total_lessons()
            .checked_sub(1)
            .and_then(|pos| self.lesson_at(pos))
    }
}
