mod about;
mod contact;
mod course;
mod courses;
mod home;
mod lesson;
mod not_found;
mod offerings;
mod portfolio;
mod state;
mod submission;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use contact::ContactView;
pub use course::CourseView;
pub use courses::CoursesView;
pub use home::HomeView;
pub use lesson::{IntroView, LessonView};
pub use not_found::{MissingPage, NotFoundView};
pub use offerings::ServicesView;
pub use portfolio::PortfolioView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use submission::SubmissionView;
