use async_trait::async_trait;
use course_core::model::LessonId;
use services::LessonIdPolicy;
use storage::repository::{LocalStorageRepository, Storage, StorageError};

use super::test_harness::{ViewKind, lesson, setup_view_harness, setup_view_harness_with};

struct UnreadableStorage;

#[async_trait]
impl LocalStorageRepository for UnreadableStorage {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("locked".into()))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("locked".into()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("locked".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_outline_and_actions() {
    let harness = setup_view_harness(ViewKind::Lesson("a1"), &[]).await;
    let html = harness.render();

    for expected in [
        "What is Adobe Illustrator?",
        "Mark as Complete",
        "0 of 17 lessons completed",
        "Previous Lesson",
        "Next Lesson",
        "Course Overview",
        "17 lessons • 4h 36m",
        "Section A: Illustrator Essentials",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn completed_lesson_shows_progress() {
    let harness = setup_view_harness(ViewKind::Lesson("a1"), &["intro", "a1"]).await;
    let html = harness.render();
    assert!(html.contains("Completed"), "{html}");
    assert!(!html.contains("Mark as Complete"), "{html}");
    assert!(html.contains("2 of 17 lessons completed"), "{html}");
    assert!(html.contains("12%"), "{html}");
    assert_eq!(harness.services.progress().completed_count(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn first_and_last_lessons_have_one_neighbor() {
    let first = setup_view_harness(ViewKind::Lesson("intro"), &[]).await.render();
    assert!(!first.contains("Previous Lesson"), "{first}");
    assert!(first.contains("Next Lesson"), "{first}");

    let last = setup_view_harness(ViewKind::Lesson("c2"), &[]).await.render();
    assert!(last.contains("Previous Lesson"), "{last}");
    assert!(!last.contains("Next Lesson"), "{last}");
    assert!(last.contains("Submit Your Project"), "{last}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lesson_renders_not_found() {
    let html = setup_view_harness(ViewKind::Lesson("zz"), &[]).await.render();
    assert!(html.contains("Page not found"), "{html}");
    assert!(html.contains("is not part of this course"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_view_offers_start_then_continue() {
    let fresh = setup_view_harness(ViewKind::Course("adobe-illustrator-expert"), &[])
        .await
        .render();
    assert!(fresh.contains("Start Course"), "{fresh}");
    assert!(fresh.contains("Section C: Advanced Projects"), "{fresh}");

    let started = setup_view_harness(ViewKind::Course("adobe-illustrator-expert"), &["intro"])
        .await
        .render();
    assert!(started.contains("Continue Learning"), "{started}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_course_renders_not_found() {
    let html = setup_view_harness(ViewKind::Course("photoshop"), &[]).await.render();
    assert!(html.contains("Page not found"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_lists_categories_collapsed() {
    let html = setup_view_harness(ViewKind::Courses, &[]).await.render();
    assert!(html.contains("Graphic Design"), "{html}");
    assert!(html.contains("Coming Soon"), "{html}");
    assert!(!html.contains("Become a Photoshop Expert"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_view_renders_form() {
    let html = setup_view_harness(ViewKind::Submission, &[]).await.render();
    for expected in ["Submit Your Project", "Full Name", "Email Address", "Submit Project", "Courses"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_features_course() {
    let harness = setup_view_harness(ViewKind::Home, &[]).await;
    let html = harness.render();
    assert!(html.contains("Cre8tiverse - Transforming Ideas into Reality"), "{html}");
    assert!(html.contains("Start Learning"), "{html}");
    assert!(html.contains("Become an Adobe Illustrator Expert"), "{html}");
    assert!(!harness.services.progress().is_complete(&LessonId::new("intro").unwrap()));
}

#[tokio::test(flavor = "current_thread")]
async fn marking_complete_updates_bar_and_sidebar() {
    let mut harness = setup_view_harness(ViewKind::Lesson("a1"), &[]).await;
    let toggle = harness.handles.toggle();

    toggle.call(lesson("a1"));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("✓ Completed"), "{html}");
    assert!(html.contains("1 of 17 lessons completed"), "{html}");
    assert!(html.contains("6%"), "{html}");

    toggle.call(lesson("a2"));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("nav-lesson completed"), "{html}");
    assert!(html.contains("2 of 17 lessons completed"), "{html}");
    assert_eq!(harness.services.progress().completed_count(), 2);

    toggle.call(lesson("a1"));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Mark as Complete"), "{html}");
    assert!(html.contains("1 of 17 lessons completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn strict_policy_rejection_is_shown_until_next_change() {
    let mut harness = setup_view_harness_with(
        ViewKind::Lesson("a1"),
        &[],
        Storage::in_memory(),
        LessonIdPolicy::Strict,
    )
    .await;
    let toggle = harness.handles.toggle();

    toggle.call(lesson("z9"));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("lesson z9 is not part of the course"), "{html}");
    assert!(html.contains("0 of 17 lessons completed"), "{html}");

    toggle.call(lesson("a1"));
    harness.drive();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("is not part of the course"), "{html}");
    assert!(html.contains("1 of 17 lessons completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submission_view_reports_unreadable_storage() {
    let mut harness = setup_view_harness_with(
        ViewKind::Submission,
        &[],
        Storage::from_repository(UnreadableStorage),
        LessonIdPolicy::Permissive,
    )
    .await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Your saved course data could not be read."), "{html}");
    assert!(html.contains("Submit Project"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn brochure_pages_render_agency_content() {
    let about = setup_view_harness(ViewKind::About, &[]).await.render();
    assert!(about.contains("Our Mission"), "{about}");
    assert!(about.contains("Customer-Centric"), "{about}");

    let services = setup_view_harness(ViewKind::Services, &[]).await.render();
    assert!(services.contains("Multimedia Services"), "{services}");
    assert!(services.contains("Learning Management System"), "{services}");

    let portfolio = setup_view_harness(ViewKind::Portfolio, &[]).await.render();
    assert!(portfolio.contains("EdTech Portfolio"), "{portfolio}");
    assert!(portfolio.contains("https://www.youtube.com/watch?v=9EnGrJhNl2Y"), "{portfolio}");
}

#[tokio::test(flavor = "current_thread")]
async fn contact_view_renders_form() {
    let html = setup_view_harness(ViewKind::Contact, &[]).await.render();
    for expected in ["Contact Us", "Send Message", "cre8tiverse@gmail.com"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Thanks for reaching out"), "{html}");
}
