use course_core::model::pluralize_lessons;
use services::ProgressSnapshot;

/// Everything the progress bar shows, precomputed from a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub completed: usize,
    pub total: usize,
    pub remaining: usize,
    pub is_complete: bool,
    pub summary_label: String,
    pub remaining_label: String,
    pub bar_style: String,
}

impl ProgressVm {
    #[must_use]
    pub fn from_snapshot(snapshot: &ProgressSnapshot) -> Self {
        let percent = snapshot.percent_complete();
        let completed = snapshot.completed_count();
        let total = snapshot.total_lessons();
        let remaining = total.saturating_sub(completed);
        let is_complete = percent == 100;

        let remaining_label = if is_complete {
            "Course Complete!".to_owned()
        } else {
            format!("{} remaining", pluralize_lessons(remaining))
        };

        Self {
            percent,
            completed,
            total,
            remaining,
            is_complete,
            summary_label: format!("{completed} of {total} lessons completed"),
            remaining_label,
            bar_style: format!("width: {percent}%"),
        }
    }
}
