//! Course categories shown on the "Start Learning" page.

use serde::Serialize;

use crate::course::{ILLUSTRATOR_SLUG, ILLUSTRATOR_TITLE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseListing {
    pub title: String,
    pub description: String,
    pub available: bool,
    pub link: Option<String>,
}

impl CourseListing {
    fn coming_soon(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            available: false,
            link: None,
        }
    }

    /// Where clicking the listing navigates. Unavailable courses go nowhere.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        if self.available {
            self.link.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub available: bool,
    pub courses: Vec<CourseListing>,
}

impl CourseCategory {
    fn coming_soon(id: &str, title: &str, icon: &str, description: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            icon: icon.to_owned(),
            description: description.to_owned(),
            available: false,
            courses: Vec::new(),
        }
    }

    /// Only categories with published courses can be opened.
    #[must_use]
    pub fn can_expand(&self) -> bool {
        self.available
    }
}

#[must_use]
pub fn course_directory() -> Vec<CourseCategory> {
    vec![
        CourseCategory {
            id: "graphic-design".to_owned(),
            title: "Graphic Design".to_owned(),
            icon: "🎨".to_owned(),
            description: "Master visual communication, branding, and composition using Adobe's industry-standard tools.".to_owned(),
            available: true,
            courses: vec![
                CourseListing {
                    title: ILLUSTRATOR_TITLE.to_owned(),
                    description: "Design logos, icons, and vector illustrations like a professional designer.".to_owned(),
                    available: true,
                    link: Some(format!("/course/{ILLUSTRATOR_SLUG}")),
                },
                CourseListing::coming_soon(
                    "Become a Photoshop Expert",
                    "Master photo editing, digital art, and advanced image manipulation techniques.",
                ),
                CourseListing::coming_soon(
                    "Become an InDesign Expert",
                    "Create stunning layouts for magazines, brochures, and digital publications.",
                ),
            ],
        },
        CourseCategory::coming_soon(
            "audio-visual",
            "Audio-Visual Editing",
            "🎬",
            "Master video editing tools and storytelling techniques to bring ideas to life through motion and sound.",
        ),
        CourseCategory::coming_soon(
            "motion-graphics",
            "Motion Graphics",
            "🎞",
            "Create compelling animated content with Adobe After Effects and modern motion design principles.",
        ),
        CourseCategory::coming_soon(
            "product-design",
            "Product Design (UI/UX)",
            "🧩",
            "Learn the end-to-end process of designing digital experiences using Figma and Adobe XD.",
        ),
        CourseCategory::coming_soon(
            "3d-modeling",
            "3D Modeling & Architectural Design",
            "🏛",
            "Explore modeling tools like AutoCAD, 3Ds Max, Maya, and Unreal Engine to visualize architectural spaces.",
        ),
        CourseCategory::coming_soon(
            "digital-marketing",
            "Digital Marketing",
            "📢",
            "Build campaigns, understand analytics, and leverage social media for digital impact.",
        ),
        CourseCategory::coming_soon(
            "web-design",
            "Web Design",
            "💻",
            "Design visually stunning, responsive websites using HTML, CSS, and no-code tools.",
        ),
    ]
}
