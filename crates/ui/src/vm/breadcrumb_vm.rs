use course_core::model::{Catalog, Lesson};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrumbVm {
    pub label: String,
    /// `None` for the page being viewed.
    pub path: Option<String>,
}

impl CrumbVm {
    fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    fn here(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }
}

fn course_trail(catalog: &Catalog, current: &str) -> Vec<CrumbVm> {
    vec![
        CrumbVm::link("Courses", "/courses"),
        CrumbVm::link(catalog.title(), format!("/course/{}", catalog.slug())),
        CrumbVm::here(current),
    ]
}

/// `Courses > <course> > <lesson>`.
#[must_use]
pub fn breadcrumbs_for_lesson(catalog: &Catalog, lesson: &Lesson) -> Vec<CrumbVm> {
    course_trail(catalog, lesson.title())
}

/// `Courses > <course> > Submit Your Project`.
#[must_use]
pub fn breadcrumbs_for_submission(catalog: &Catalog) -> Vec<CrumbVm> {
    course_trail(catalog, "Submit Your Project")
}
