use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_DB_URL;

/// Track progress through the Adobe Illustrator course.
#[derive(Debug, Parser)]
#[command(name = "course-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lesson progress tracker and course catalog", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `ui`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// SQLite database holding device-local progress
    #[arg(long, env = "COURSE_DB_URL", default_value = DEFAULT_DB_URL, global = true)]
    pub db: String,

    /// Reject lesson ids that are not part of the course
    #[arg(long, env = "COURSE_STRICT_LESSONS", global = true)]
    pub strict_lessons: bool,

    /// Simulated round trip for the project and contact forms
    #[arg(long, env = "COURSE_FORM_DELAY_MS", default_value_t = 2000, global = true)]
    pub form_delay_ms: u64,

    /// Log at debug level, on top of any RUST_LOG filter
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the desktop course viewer
    Ui,

    /// Show overall progress
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List every lesson with its completion mark
    Lessons,

    /// Mark a lesson complete
    Complete { lesson: String },

    /// Mark a lesson incomplete
    Incomplete { lesson: String },

    /// Flip a lesson between complete and incomplete
    Toggle { lesson: String },

    /// Show the lessons before and after one lesson
    Neighbors { lesson: String },

    /// List course categories and their courses
    Courses,

    /// Forget all progress and the saved project submission
    Reset,
}
