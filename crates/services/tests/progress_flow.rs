use std::sync::Arc;
use std::time::Duration;

use course_core::course::illustrator_expert;
use course_core::model::{Catalog, CourseModule, LessonId};
use course_core::time::fixed_now;
use services::{AppServices, Clock, LessonIdPolicy, ProgressService, ServicesConfig};
use storage::repository::{InMemoryRepository, LocalStorageRepository, PROGRESS_KEY, Storage};

fn id(raw: &str) -> LessonId {
    LessonId::new(raw).unwrap()
}

fn test_config() -> ServicesConfig {
    ServicesConfig {
        clock: Clock::fixed(fixed_now()),
        lesson_policy: LessonIdPolicy::Permissive,
        form_delay: Duration::ZERO,
    }
}

/// The built-in course without its last Section A lesson.
fn sixteen_lesson_catalog() -> Catalog {
    let full = illustrator_expert();
    let modules = full
        .modules()
        .iter()
        .map(|module| {
            let lessons = module
                .lessons()
                .iter()
                .filter(|lesson| lesson.id().as_str() != "a12")
                .cloned()
                .collect();
            CourseModule::new(
                module.id().clone(),
                module.title(),
                module.description(),
                module.duration_label(),
                lessons,
            )
        })
        .collect();
    Catalog::new(full.slug(), full.title(), full.total_duration_label(), modules).unwrap()
}

#[tokio::test]
async fn two_lessons_of_sixteen_is_thirteen_percent() {
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage, sixteen_lesson_catalog(), &test_config()).await;
    let progress = services.progress();

    progress.mark_complete(&id("intro")).await.unwrap();
    progress.mark_complete(&id("a1")).await.unwrap();

    assert_eq!(progress.total_lessons(), 16);
    assert_eq!(progress.completed_count(), 2);
    assert_eq!(progress.percent_complete(), 13);
}

#[tokio::test]
async fn two_lessons_of_builtin_course_is_twelve_percent() {
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage, illustrator_expert(), &test_config()).await;
    let progress = services.progress();

    progress.mark_complete(&id("intro")).await.unwrap();
    progress.mark_complete(&id("a1")).await.unwrap();

    assert_eq!(progress.completed_count(), 2);
    assert_eq!(progress.percent_complete(), 12);
}

#[tokio::test]
async fn progress_survives_a_fresh_session() {
    let repo = InMemoryRepository::new();
    let catalog = Arc::new(illustrator_expert());

    let first =
        ProgressService::load(Arc::clone(&catalog), Arc::new(repo.clone()), LessonIdPolicy::Permissive)
            .await;
    for raw in ["intro", "a1", "b2", "c1"] {
        first.mark_complete(&id(raw)).await.unwrap();
    }
    first.mark_incomplete(&id("b2")).await;
    let before = first.snapshot();
    drop(first);

    let second =
        ProgressService::load(catalog, Arc::new(repo.clone()), LessonIdPolicy::Permissive).await;
    assert_eq!(second.snapshot(), before);
    assert!(second.is_complete(&id("c1")));
    assert!(!second.is_complete(&id("b2")));
}

#[tokio::test]
async fn every_lesson_complete_is_one_hundred_percent() {
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage, illustrator_expert(), &test_config()).await;
    let progress = services.progress();

    let catalog = services.catalog();
    for lesson in catalog.lessons() {
        progress.mark_complete(lesson.id()).await.unwrap();
    }
    assert_eq!(progress.completed_count(), 17);
    assert_eq!(progress.percent_complete(), 100);
}

#[tokio::test]
async fn concurrent_marks_all_reach_storage() {
    let repo = InMemoryRepository::new();
    let progress = Arc::new(
        ProgressService::load(
            Arc::new(illustrator_expert()),
            Arc::new(repo.clone()),
            LessonIdPolicy::Permissive,
        )
        .await,
    );

    let mut handles = Vec::new();
    for raw in ["a1", "a2", "a3", "a4", "a5", "a6"] {
        let progress = Arc::clone(&progress);
        handles.push(tokio::spawn(async move {
            progress.mark_complete(&id(raw)).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stored = repo.get_item(PROGRESS_KEY).await.unwrap().unwrap();
    assert_eq!(stored, r#"["a1","a2","a3","a4","a5","a6"]"#);
}

#[tokio::test]
async fn sqlite_backed_progress_round_trips() {
    let url = "sqlite:file:memdb_progress_flow?mode=memory&cache=shared";
    let config = test_config();

    let first = AppServices::new_sqlite(url, illustrator_expert(), &config)
        .await
        .expect("open sqlite");
    first.progress().mark_complete(&id("a7")).await.unwrap();
    first.progress().mark_complete(&id("b1")).await.unwrap();

    let second = AppServices::new_sqlite(url, illustrator_expert(), &config)
        .await
        .expect("reopen sqlite");
    let progress = second.progress();
    assert_eq!(progress.completed_count(), 2);
    assert!(progress.is_complete(&id("a7")));
    assert!(progress.is_complete(&id("b1")));
}
