#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, LocalStorageRepository, PROGRESS_KEY, SUBMISSION_KEY, Storage,
    StorageError,
};
