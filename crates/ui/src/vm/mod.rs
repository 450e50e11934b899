mod breadcrumb_vm;
mod navigation_vm;
mod progress_vm;
mod submission_vm;
pub(crate) mod time_fmt;

pub use breadcrumb_vm::{CrumbVm, breadcrumbs_for_lesson, breadcrumbs_for_submission};
pub use navigation_vm::{
    CourseNavVm, ExpandedModules, LessonLinkVm, LessonNavVm, LessonRowVm, LessonStatus,
    ModuleRowVm, resume_target,
};
pub use progress_vm::ProgressVm;
pub use submission_vm::{ReceiptVm, describe_local_file, media_type_for, size_label};
