use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use course_core::model::{Catalog, LessonId, ProgressState};
use storage::repository::{LocalStorageRepository, PROGRESS_KEY};
use tracing::{debug, warn};

use crate::error::ProgressError;

/// How mark operations treat ids that are not in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LessonIdPolicy {
    /// Accept any id. Unknown ids are stored and counted like lessons.
    #[default]
    Permissive,
    /// Reject ids the catalog does not contain with `ProgressError::UnknownLesson`.
    Strict,
}

/// Point-in-time view of course progress, cheap to hand to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    state: ProgressState,
    total_lessons: usize,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(state: ProgressState, total_lessons: usize) -> Self {
        Self {
            state,
            total_lessons,
        }
    }

    #[must_use]
    pub fn is_complete(&self, lesson_id: &LessonId) -> bool {
        self.state.is_complete(lesson_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.total_lessons
    }

    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        self.state.percent_of(self.total_lessons)
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }
}

/// The course progress store.
///
/// Built once per session from a catalog and a local storage repository. The
/// completed set is read from storage only in [`ProgressService::load`];
/// after that the in-memory set is authoritative and every change is written
/// back in full.
pub struct ProgressService {
    catalog: Arc<Catalog>,
    repo: Arc<dyn LocalStorageRepository>,
    policy: LessonIdPolicy,
    state: Mutex<ProgressState>,
    // Held across a mutation and its write so payloads land in call order.
    write_gate: tokio::sync::Mutex<()>,
}

impl ProgressService {
    /// Read persisted progress and build the store.
    ///
    /// A missing record, a storage failure, or a payload that is not a JSON
    /// array of lesson ids all start the session with no progress.
    pub async fn load(
        catalog: Arc<Catalog>,
        repo: Arc<dyn LocalStorageRepository>,
        policy: LessonIdPolicy,
    ) -> Self {
        let state = match repo.get_item(PROGRESS_KEY).await {
            Ok(Some(raw)) => ProgressState::from_payload(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding unreadable course progress");
                ProgressState::default()
            }),
            Ok(None) => ProgressState::default(),
            Err(err) => {
                warn!(error = %err, "could not read course progress");
                ProgressState::default()
            }
        };
        debug!(
            completed = state.completed_count(),
            total = catalog.total_lessons(),
            "loaded course progress"
        );

        Self {
            catalog,
            repo,
            policy,
            state: Mutex::new(state),
            write_gate: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn is_complete(&self, lesson_id: &LessonId) -> bool {
        self.lock_state().is_complete(lesson_id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lock_state().completed_count()
    }

    /// Lesson total, always taken from the catalog.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.catalog.total_lessons()
    }

    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        self.lock_state().percent_of(self.total_lessons())
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::new(self.lock_state().clone(), self.total_lessons())
    }

    /// Mark a lesson complete. No-op if it already is.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownLesson` under [`LessonIdPolicy::Strict`]
    /// when the catalog has no such lesson.
    pub async fn mark_complete(
        &self,
        lesson_id: &LessonId,
    ) -> Result<ProgressSnapshot, ProgressError> {
        self.check_known(lesson_id)?;
        let id = lesson_id.clone();
        Ok(self.apply(move |state| state.mark_complete(id)).await)
    }

    /// Mark a lesson incomplete. No-op if it is not complete.
    ///
    /// Unknown ids are always accepted here so stray entries can be removed.
    pub async fn mark_incomplete(&self, lesson_id: &LessonId) -> ProgressSnapshot {
        self.apply(|state| state.mark_incomplete(lesson_id)).await
    }

    /// Flip a lesson between complete and incomplete.
    ///
    /// The direction is decided under the write gate, so queued toggles each
    /// see the state left by the one before.
    ///
    /// # Errors
    ///
    /// Same as [`ProgressService::mark_complete`] when the flip would complete it.
    pub async fn toggle(&self, lesson_id: &LessonId) -> Result<ProgressSnapshot, ProgressError> {
        let id = lesson_id.clone();
        self.try_apply(move |state| {
            if state.is_complete(&id) {
                Ok(state.mark_incomplete(&id))
            } else {
                self.check_known(&id)?;
                Ok(state.mark_complete(id))
            }
        })
        .await
    }

    /// Forget all progress on this device.
    pub async fn reset(&self) -> ProgressSnapshot {
        self.apply(|state| {
            let changed = !state.is_empty();
            state.clear();
            changed
        })
        .await
    }

    fn check_known(&self, lesson_id: &LessonId) -> Result<(), ProgressError> {
        if self.policy == LessonIdPolicy::Strict && !self.catalog.contains(lesson_id) {
            return Err(ProgressError::UnknownLesson {
                id: lesson_id.clone(),
            });
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn apply(&self, mutate: impl FnOnce(&mut ProgressState) -> bool) -> ProgressSnapshot {
        match self
            .try_apply(|state| Ok::<_, Infallible>(mutate(state)))
            .await
        {
            Ok(snapshot) => snapshot,
            Err(never) => match never {},
        }
    }

    /// Run `mutate` and write the result while holding the write gate.
    ///
    /// A rejected mutation must leave the state untouched.
    async fn try_apply<E>(
        &self,
        mutate: impl FnOnce(&mut ProgressState) -> Result<bool, E>,
    ) -> Result<ProgressSnapshot, E> {
        let _gate = self.write_gate.lock().await;
        let (changed, snapshot) = {
            let mut state = self.lock_state();
            let changed = mutate(&mut state)?;
            (
                changed,
                ProgressSnapshot::new(state.clone(), self.total_lessons()),
            )
        };
        if changed {
            self.persist(snapshot.state()).await;
        }
        Ok(snapshot)
    }

    async fn persist(&self, state: &ProgressState) {
        let payload = match state.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "could not encode course progress");
                return;
            }
        };
        match self.repo.set_item(PROGRESS_KEY, &payload).await {
            Ok(()) => debug!(completed = state.completed_count(), "saved course progress"),
            Err(err) => warn!(
                error = %err,
                "could not save course progress; keeping it for this session only"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use course_core::course::illustrator_expert;
    use storage::repository::{InMemoryRepository, StorageError};

    fn id(raw: &str) -> LessonId {
        LessonId::new(raw).unwrap()
    }

    async fn service_over(repo: &InMemoryRepository, policy: LessonIdPolicy) -> ProgressService {
        ProgressService::load(
            Arc::new(illustrator_expert()),
            Arc::new(repo.clone()),
            policy,
        )
        .await
    }

    /// Reads succeed with a fixed payload, writes always fail.
    struct ReadOnlyRepository(Option<String>);

    #[async_trait]
    impl LocalStorageRepository for ReadOnlyRepository {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.clone())
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk full".into()))
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk full".into()))
        }
    }

    /// Both reads and writes fail.
    struct BrokenRepository;

    #[async_trait]
    impl LocalStorageRepository for BrokenRepository {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("unavailable".into()))
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("unavailable".into()))
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("unavailable".into()))
        }
    }

    /// In-memory storage whose writes yield once before landing.
    struct YieldingRepository(InMemoryRepository);

    #[async_trait]
    impl LocalStorageRepository for YieldingRepository {
        async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key).await
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            tokio::task::yield_now().await;
            self.0.set_item(key, value).await
        }

        async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove_item(key).await
        }
    }

    #[tokio::test]
    async fn mark_then_query() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;

        service.mark_complete(&id("a3")).await.unwrap();
        assert!(service.is_complete(&id("a3")));

        service.mark_incomplete(&id("a3")).await;
        assert!(!service.is_complete(&id("a3")));
    }

    #[tokio::test]
    async fn mark_complete_is_idempotent_in_storage() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;

        let first = service.mark_complete(&id("b1")).await.unwrap();
        let payload_once = repo.get_item(PROGRESS_KEY).await.unwrap();
        let second = service.mark_complete(&id("b1")).await.unwrap();
        let payload_twice = repo.get_item(PROGRESS_KEY).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(payload_once, payload_twice);
        assert_eq!(payload_once.as_deref(), Some(r#"["b1"]"#));
    }

    #[tokio::test]
    async fn unchanged_state_is_not_written() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;

        service.mark_incomplete(&id("a1")).await;
        assert_eq!(repo.get_item(PROGRESS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn toggle_flips_completion() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;

        let on = service.toggle(&id("a2")).await.unwrap();
        assert!(on.is_complete(&id("a2")));
        let off = service.toggle(&id("a2")).await.unwrap();
        assert!(!off.is_complete(&id("a2")));
        assert_eq!(repo.get_item(PROGRESS_KEY).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn percent_tracks_catalog_total() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;
        assert_eq!(service.total_lessons(), 17);

        for raw in ["intro", "a1", "a2", "a3"] {
            service.mark_complete(&id(raw)).await.unwrap();
        }
        // 4 / 17 = 23.5%
        assert_eq!(service.percent_complete(), 24);
        assert_eq!(service.snapshot().percent_complete(), 24);
    }

    #[tokio::test]
    async fn corrupt_payload_loads_as_empty() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(PROGRESS_KEY, "not-json").unwrap();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;
        assert_eq!(service.completed_count(), 0);
        assert_eq!(service.percent_complete(), 0);
    }

    #[tokio::test]
    async fn read_failure_loads_as_empty() {
        let service = ProgressService::load(
            Arc::new(illustrator_expert()),
            Arc::new(BrokenRepository),
            LessonIdPolicy::Permissive,
        )
        .await;
        assert_eq!(service.completed_count(), 0);
    }

    #[tokio::test]
    async fn write_failure_keeps_session_state() {
        let service = ProgressService::load(
            Arc::new(illustrator_expert()),
            Arc::new(ReadOnlyRepository(Some(r#"["intro"]"#.into()))),
            LessonIdPolicy::Permissive,
        )
        .await;
        assert!(service.is_complete(&id("intro")));

        let snapshot = service.mark_complete(&id("a1")).await.unwrap();
        assert_eq!(snapshot.completed_count(), 2);
        assert!(service.is_complete(&id("a1")));
    }

    #[tokio::test]
    async fn permissive_policy_counts_unknown_ids() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;

        service.mark_complete(&id("submit")).await.unwrap();
        assert!(service.is_complete(&id("submit")));
        assert_eq!(service.completed_count(), 1);
    }

    #[tokio::test]
    async fn strict_policy_rejects_unknown_ids() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Strict).await;

        let err = service.mark_complete(&id("z9")).await.unwrap_err();
        assert!(matches!(err, ProgressError::UnknownLesson { ref id } if id.as_str() == "z9"));
        assert!(service.toggle(&id("z9")).await.is_err());
        assert_eq!(service.completed_count(), 0);
        assert_eq!(repo.get_item(PROGRESS_KEY).await.unwrap(), None);

        service.mark_complete(&id("c2")).await.unwrap();
        assert_eq!(service.completed_count(), 1);
    }

    #[tokio::test]
    async fn strict_policy_still_allows_removing_stray_ids() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(PROGRESS_KEY, r#"["intro","stray"]"#).unwrap();
        let service = service_over(&repo, LessonIdPolicy::Strict).await;
        assert_eq!(service.completed_count(), 2);

        service.toggle(&id("stray")).await.unwrap();
        assert_eq!(service.completed_count(), 1);
    }

    #[tokio::test]
    async fn strict_policy_holds_for_toggles_queued_behind_a_write() {
        let repo = InMemoryRepository::new();
        repo.insert_raw(PROGRESS_KEY, r#"["stray"]"#).unwrap();
        let service = ProgressService::load(
            Arc::new(illustrator_expert()),
            Arc::new(YieldingRepository(repo.clone())),
            LessonIdPolicy::Strict,
        )
        .await;

        let intro = id("intro");
        let stray = id("stray");
        let (marked, first, second) = tokio::join!(
            service.mark_complete(&intro),
            service.toggle(&stray),
            service.toggle(&stray),
        );

        assert!(marked.is_ok());
        assert!(!first.unwrap().is_complete(&stray));
        assert!(matches!(
            second,
            Err(ProgressError::UnknownLesson { ref id }) if id.as_str() == "stray"
        ));
        assert!(!service.is_complete(&stray));
        assert_eq!(
            repo.get_item(PROGRESS_KEY).await.unwrap().as_deref(),
            Some(r#"["intro"]"#)
        );
    }

    #[tokio::test]
    async fn reset_clears_storage_payload() {
        let repo = InMemoryRepository::new();
        let service = service_over(&repo, LessonIdPolicy::Permissive).await;
        service.mark_complete(&id("intro")).await.unwrap();

        let snapshot = service.reset().await;
        assert_eq!(snapshot.completed_count(), 0);
        assert_eq!(repo.get_item(PROGRESS_KEY).await.unwrap().as_deref(), Some("[]"));
    }
}
