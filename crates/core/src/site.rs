//! Agency pages around the course viewer: about, services, portfolio, contact.

use serde::Serialize;

pub const AGENCY_NAME: &str = "Cre8tiverse";
pub const AGENCY_TAGLINE: &str = "Innovate, Create and Inspire";
pub const CONTACT_EMAIL: &str = "cre8tiverse@gmail.com";

pub const MISSION: &str = "To empower individuals with practical digital and creative skills, and help brands and organisations bring their visions to life through clear, compelling multimedia solutions.";
pub const VISION: &str = "To be a global leader in digital creativity and EdTech, nurturing talent for a dynamic digital world and enabling brands to achieve their goals through innovative multimedia solutions.";

/// A titled blurb: core values and service offerings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: String,
    pub description: String,
}

impl InfoCard {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// A portfolio video, referenced by its video-host id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseVideo {
    pub video_id: String,
    pub title: String,
}

impl ShowcaseVideo {
    fn new(video_id: &str, title: &str) -> Self {
        Self {
            video_id: video_id.to_owned(),
            title: title.to_owned(),
        }
    }

    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// One portfolio gallery: image categories plus project videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSection {
    pub title: String,
    pub image_categories: Vec<String>,
    pub videos: Vec<ShowcaseVideo>,
    pub more_url: String,
}

#[must_use]
pub fn core_values() -> Vec<InfoCard> {
    vec![
        InfoCard::new(
            "Creativity",
            "We believe in the power of creativity to transform brands and educational experiences, connecting with audiences in meaningful ways.",
        ),
        InfoCard::new(
            "Integrity",
            "We operate with honesty and transparency in all our client and educational interactions.",
        ),
        InfoCard::new(
            "Innovation",
            "We stay ahead of industry trends to provide cutting-edge multimedia and EdTech solutions.",
        ),
        InfoCard::new(
            "Customer-Centric",
            "Our client's success, both in business and education, is our top priority.",
        ),
    ]
}

#[must_use]
pub fn multimedia_services() -> Vec<InfoCard> {
    vec![
        InfoCard::new(
            "3D Modeling and Architectural Designs",
            "Expert services including animation, rendering, and digital sculpting.",
        ),
        InfoCard::new(
            "Video Editing and Motion Graphics",
            "Seamless editing, colour correction, sound design, and dynamic animations.",
        ),
        InfoCard::new(
            "Graphics Design",
            "Branding, logo design, marketing materials, and digital illustrations.",
        ),
        InfoCard::new(
            "Product Design (UI/UX Design)",
            "User research, wireframing, prototyping, and interface design.",
        ),
        InfoCard::new(
            "Web Design",
            "Custom themes, responsive layouts, e-commerce solutions, and content management.",
        ),
        InfoCard::new(
            "Digital Marketing",
            "Content strategy, SEO, paid ads, social media marketing, and analytics.",
        ),
    ]
}

#[must_use]
pub fn edtech_services() -> Vec<InfoCard> {
    vec![
        InfoCard::new(
            "Digital Learning Tools",
            "Interactive learning materials and digital resources.",
        ),
        InfoCard::new(
            "Customized E-learning Platforms",
            "Tailored online learning environments.",
        ),
        InfoCard::new(
            "Content Development",
            "Educational content creation and curation.",
        ),
        InfoCard::new("Virtual Classrooms", "Real-time online learning environments."),
        InfoCard::new(
            "Online Workshops and Webinars",
            "Interactive online training sessions.",
        ),
        InfoCard::new(
            "Learning Management System",
            "Comprehensive learning platform solutions.",
        ),
    ]
}

#[must_use]
pub fn portfolio() -> Vec<PortfolioSection> {
    vec![
        PortfolioSection {
            title: "Multimedia Portfolio".to_owned(),
            image_categories: ["UI/UX Design", "Flier Design", "Floor Plan", "Page Design"]
                .map(str::to_owned)
                .to_vec(),
            videos: vec![
                ShowcaseVideo::new("c-bJjYeTZo8", "Multimedia Project 1"),
                ShowcaseVideo::new("cKY6RJtAlqo", "Multimedia Project 2"),
                ShowcaseVideo::new("DV20YWYSP7c", "Multimedia Project 3"),
                ShowcaseVideo::new("O6_RaKyjxIg", "Multimedia Project 4"),
            ],
            more_url: "https://www.behance.net/samuel-aku".to_owned(),
        },
        PortfolioSection {
            title: "EdTech Portfolio".to_owned(),
            image_categories: Vec::new(),
            videos: vec![
                ShowcaseVideo::new("9EnGrJhNl2Y", "EdTech Project 1"),
                ShowcaseVideo::new("rUndTvq04mg", "EdTech Project 2"),
            ],
            more_url: "https://www.youtube.com/@cre8tiverse".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_lists_have_six_entries_each() {
        assert_eq!(multimedia_services().len(), 6);
        assert_eq!(edtech_services().len(), 6);
        assert_eq!(core_values().len(), 4);
    }

    #[test]
    fn portfolio_videos_link_to_host() {
        let sections = portfolio();
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections[1].videos[0].watch_url(),
            "https://www.youtube.com/watch?v=9EnGrJhNl2Y"
        );
        assert!(sections[1].image_categories.is_empty());
    }
}
