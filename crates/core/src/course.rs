//! The hard-coded course shipped with the app.

use crate::model::{Catalog, CourseModule, Lesson, LessonId, ModuleId};

pub const ILLUSTRATOR_SLUG: &str = "adobe-illustrator-expert";
pub const ILLUSTRATOR_TITLE: &str = "Become an Adobe Illustrator Expert";

/// Path of the lesson page for a lesson of the given course.
#[must_use]
pub fn lesson_path(slug: &str, lesson_id: &str) -> String {
    if lesson_id == "intro" {
        format!("/course/{slug}/intro")
    } else {
        format!("/course/{slug}/lesson/{lesson_id}")
    }
}

/// Path of the project upload page of the given course.
#[must_use]
pub fn submission_path(slug: &str) -> String {
    format!("/course/{slug}/submit-project")
}

fn lesson(id: &'static str, title: &str, duration: &str) -> Lesson {
    Lesson::new(
        LessonId::from_static(id),
        title,
        duration,
        lesson_path(ILLUSTRATOR_SLUG, id),
    )
}

fn module(
    id: &'static str,
    title: &str,
    description: &str,
    duration: &str,
    lessons: Vec<Lesson>,
) -> CourseModule {
    CourseModule::new(ModuleId::from_static(id), title, description, duration, lessons)
}

fn illustrator_modules() -> Vec<CourseModule> {
    vec![
        module(
            "intro",
            "Course Introduction",
            "Get a complete overview of what the course covers, from Illustrator essentials to creative practicals and bonus tips.",
            "3 min 50 sec",
            vec![lesson("intro", "Course Overview", "3 min 50 sec")],
        ),
        module(
            "section-a",
            "Section A: Illustrator Essentials",
            "Master fundamental Adobe Illustrator tools, interface, and essential techniques for professional vector design.",
            "1h 49min",
            vec![
                lesson("a1", "What is Adobe Illustrator?", "17 min 47 sec"),
                lesson("a2", "Artboards, Interface & Tools", "16 min 45 sec"),
                lesson("a3", "Text, Colour & Gradients", "11 min 26 sec"),
                lesson("a4", "Drawing Shapes & Pathfinder", "11 min"),
                lesson("a5", "Mastering Layers & Grouping", "10 min 15 sec"),
                lesson("a6", "Grouping & Alignment", "3 min 3 sec"),
                lesson("a7", "Creating Character Puppet", "24 min 29 sec"),
                lesson("a8", "Saving Files & Export Formats", "14 min 1 sec"),
                lesson("a9", "Templates & Keyboard Shortcuts", "4 min 45 sec"),
                lesson("a10", "Free Resources & Assets", "12 min 24 sec"),
                lesson("a11", "Design Inspiration & Portfolio", "6 min 33 sec"),
                lesson("a12", "Clipping Masks Comparison", "3 min 9 sec"),
            ],
        ),
        module(
            "section-b",
            "Section B: Creative Practical",
            "Apply your skills to real-world projects including professional logo design and 3D packaging.",
            "1h 1min",
            vec![
                lesson("b1", "Wordmark Logo Design", "41 min 41 sec"),
                lesson("b2", "3D Bottle Design", "19 min 13 sec"),
            ],
        ),
        module(
            "section-c",
            "Section C: Advanced Projects",
            "Create professional flyers and marketing materials using advanced design principles and techniques.",
            "52 min",
            vec![
                lesson("c1", "Flyer Design Part 1", "21 min 2 sec"),
                lesson("c2", "Flyer Design Part 2", "31 min 26 sec"),
            ],
        ),
    ]
}

/// The "Become an Adobe Illustrator Expert" course.
///
/// # Panics
///
/// Panics if the hard-coded course data reuses a lesson or module id.
#[must_use]
pub fn illustrator_expert() -> Catalog {
    Catalog::new(
        ILLUSTRATOR_SLUG,
        ILLUSTRATOR_TITLE,
        "4h 36m",
        illustrator_modules(),
    )
    .expect("built-in course data should be a valid catalog")
}
