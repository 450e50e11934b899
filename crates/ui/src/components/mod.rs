mod breadcrumb;
mod course_navigation;
mod lesson_nav;
mod progress_bar;

pub use breadcrumb::Breadcrumb;
pub use course_navigation::CourseNavigation;
pub use lesson_nav::LessonNavButtons;
pub use progress_bar::ProgressBar;
