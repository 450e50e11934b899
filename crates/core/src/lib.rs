#![forbid(unsafe_code)]

pub mod course;
pub mod directory;
pub mod model;
pub mod site;
pub mod time;

pub use time::Clock;
