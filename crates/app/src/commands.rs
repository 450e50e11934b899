use std::error::Error;

use course_core::course::submission_path;
use course_core::directory::CourseCategory;
use course_core::model::{Catalog, LessonId};
use services::{AppServices, ProgressSnapshot};
use tracing::info;
use ui::vm::{LessonNavVm, ProgressVm};

use crate::cli::Command;

/// Run one non-UI subcommand and print its result to stdout.
pub async fn execute(command: Command, services: &AppServices) -> Result<(), Box<dyn Error>> {
    let catalog = services.catalog();
    let progress = services.progress();

    let output = match command {
        Command::Ui => return Ok(()),
        Command::Status { json } => {
            let snapshot = progress.snapshot();
            let receipt = services.submissions().status().await?;
            if json {
                status_json(&snapshot, receipt.is_some())?
            } else {
                render_status(&catalog, &snapshot, receipt.is_some())
            }
        }
        Command::Lessons => render_lessons(&catalog, &progress.snapshot()),
        Command::Complete { lesson } => {
            let snapshot = progress.mark_complete(&LessonId::new(lesson)?).await?;
            render_progress_line(&snapshot)
        }
        Command::Incomplete { lesson } => {
            let snapshot = progress.mark_incomplete(&LessonId::new(lesson)?).await;
            render_progress_line(&snapshot)
        }
        Command::Toggle { lesson } => {
            let lesson_id = LessonId::new(lesson)?;
            let snapshot = progress.toggle(&lesson_id).await?;
            let state = if snapshot.is_complete(&lesson_id) {
                "complete"
            } else {
                "incomplete"
            };
            format!("{lesson_id} is now {state}\n{}", render_progress_line(&snapshot))
        }
        Command::Neighbors { lesson } => render_neighbors(&catalog, &LessonId::new(lesson)?),
        Command::Courses => render_courses(&course_core::directory::course_directory()),
        Command::Reset => {
            let snapshot = progress.reset().await;
            services.submissions().clear().await;
            info!("progress reset");
            render_progress_line(&snapshot)
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn render_progress_line(snapshot: &ProgressSnapshot) -> String {
    let vm = ProgressVm::from_snapshot(snapshot);
    format!("{}% ({})", vm.percent, vm.summary_label)
}

fn render_status(catalog: &Catalog, snapshot: &ProgressSnapshot, submitted: bool) -> String {
    let vm = ProgressVm::from_snapshot(snapshot);
    let project = if submitted {
        "submitted".to_owned()
    } else {
        format!("not submitted ({})", submission_path(catalog.slug()))
    };
    format!(
        "{}\nProgress: {}%\n{}\n{}\nProject: {project}\n",
        catalog.title(),
        vm.percent,
        vm.summary_label,
        vm.remaining_label,
    )
}

fn status_json(snapshot: &ProgressSnapshot, submitted: bool) -> Result<String, serde_json::Error> {
    let completed: Vec<&str> = snapshot.state().iter().map(LessonId::as_str).collect();
    serde_json::to_string_pretty(&serde_json::json!({
        "percent": snapshot.percent_complete(),
        "completed": completed,
        "completedCount": snapshot.completed_count(),
        "totalLessons": snapshot.total_lessons(),
        "projectSubmitted": submitted,
    }))
}

fn render_lessons(catalog: &Catalog, snapshot: &ProgressSnapshot) -> String {
    let mut lines = Vec::new();
    for module in catalog.modules() {
        lines.push(format!("{} ({})", module.title(), module.lesson_count_label()));
        for lesson in module.lessons() {
            let mark = if snapshot.is_complete(lesson.id()) {
                "x"
            } else {
                " "
            };
            lines.push(format!(
                "  [{mark}] {:<5} {} ({})",
                lesson.id(),
                lesson.title(),
                lesson.duration_label()
            ));
        }
    }
    lines.join("\n")
}

fn render_neighbors(catalog: &Catalog, lesson_id: &LessonId) -> String {
    if !catalog.contains(lesson_id) {
        return format!("{lesson_id} is not part of the course");
    }
    let nav = LessonNavVm::build(catalog, lesson_id);
    let describe = |link: Option<ui::vm::LessonLinkVm>| {
        link.map_or_else(
            || "none".to_owned(),
            |link| format!("{} {} ({})", link.id, link.title, link.path),
        )
    };
    format!(
        "previous: {}\nnext:     {}",
        describe(nav.previous),
        describe(nav.next)
    )
}

fn render_courses(categories: &[CourseCategory]) -> String {
    let mut lines = Vec::new();
    for category in categories {
        let badge = if category.can_expand() { "" } else { " (coming soon)" };
        lines.push(format!("{} {}{badge}", category.icon, category.title));
        for course in &category.courses {
            lines.push(match course.target() {
                Some(link) => format!("    - {} -> {link}", course.title),
                None => format!("    - {} (coming soon)", course.title),
            });
        }
    }
    lines.join("\n")
}
