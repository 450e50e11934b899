use std::collections::BTreeSet;

use course_core::model::{Catalog, Lesson, LessonId, ModuleId};
use services::ProgressSnapshot;

/// How a lesson row is drawn in the course sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonStatus {
    /// The lesson being viewed. Wins over `Completed`.
    Current,
    Completed,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub title: String,
    pub duration_label: String,
    pub path: String,
    pub status: LessonStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: ModuleId,
    pub title: String,
    pub lesson_count_label: String,
    pub expanded: bool,
    pub lessons: Vec<LessonRowVm>,
}

/// Sidebar outline of a course.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseNavVm {
    pub title: String,
    pub header_label: String,
    pub modules: Vec<ModuleRowVm>,
}

impl CourseNavVm {
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        snapshot: &ProgressSnapshot,
        current: Option<&LessonId>,
        expanded: &ExpandedModules,
    ) -> Self {
        let modules = catalog
            .modules()
            .iter()
            .map(|module| ModuleRowVm {
                id: module.id().clone(),
                title: module.title().to_owned(),
                lesson_count_label: module.lesson_count_label(),
                expanded: expanded.contains(module.id()),
                lessons: module
                    .lessons()
                    .iter()
                    .map(|lesson| LessonRowVm {
                        id: lesson.id().clone(),
                        title: lesson.title().to_owned(),
                        duration_label: lesson.duration_label().to_owned(),
                        path: lesson.path().to_owned(),
                        status: status_of(lesson, snapshot, current),
                    })
                    .collect(),
            })
            .collect();

        Self {
            title: catalog.title().to_owned(),
            header_label: format!(
                "{} lessons • {}",
                catalog.total_lessons(),
                catalog.total_duration_label()
            ),
            modules,
        }
    }
}

fn status_of(lesson: &Lesson, snapshot: &ProgressSnapshot, current: Option<&LessonId>) -> LessonStatus {
    if current == Some(lesson.id()) {
        LessonStatus::Current
    } else if snapshot.is_complete(lesson.id()) {
        LessonStatus::Completed
    } else {
        LessonStatus::Pending
    }
}

/// Modules whose lesson list is open in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedModules(BTreeSet<ModuleId>);

impl ExpandedModules {
    #[must_use]
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn contains(&self, module_id: &ModuleId) -> bool {
        self.0.contains(module_id)
    }

    /// Open a closed module or close an open one.
    pub fn toggle(&mut self, module_id: &ModuleId) {
        if !self.0.remove(module_id) {
            self.0.insert(module_id.clone());
        }
    }
}

impl Default for ExpandedModules {
    /// The introduction and the first section start open.
    fn default() -> Self {
        Self(
            ["intro", "section-a"]
                .into_iter()
                .filter_map(|id| ModuleId::new(id).ok())
                .collect(),
        )
    }
}

/// One side of the previous/next buttons under a lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonLinkVm {
    pub id: LessonId,
    pub title: String,
    pub path: String,
}

impl From<&Lesson> for LessonLinkVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id().clone(),
            title: lesson.title().to_owned(),
            path: lesson.path().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonNavVm {
    pub previous: Option<LessonLinkVm>,
    pub next: Option<LessonLinkVm>,
}

impl LessonNavVm {
    /// Neighbors in course order. Unknown lessons have neither.
    #[must_use]
    pub fn build(catalog: &Catalog, lesson_id: &LessonId) -> Self {
        Self {
            previous: catalog.previous(lesson_id).map(LessonLinkVm::from),
            next: catalog.next(lesson_id).map(LessonLinkVm::from),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Where "Continue Learning" goes: the first lesson not yet completed, or
/// the first lesson once everything is done.
#[must_use]
pub fn resume_target(catalog: &Catalog, snapshot: &ProgressSnapshot) -> Option<LessonLinkVm> {
    catalog
        .lessons()
        .find(|lesson| !snapshot.is_complete(lesson.id()))
        .or_else(|| catalog.first_lesson())
        .map(LessonLinkVm::from)
}
