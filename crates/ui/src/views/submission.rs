use std::sync::Arc;

use course_core::model::{MAX_SUBMISSION_FILES, ProjectSubmissionDraft, SubmissionFile};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::Breadcrumb;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{MissingPage, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ReceiptVm, breadcrumbs_for_submission, describe_local_file, size_label};

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Editing,
    Submitting,
    Submitted(ReceiptVm),
    Failed(String),
}

/// Apply one "Add File" attempt and return the phase to show next.
///
/// A successful add clears an earlier failure message.
fn attach_file(files: &mut Vec<SubmissionFile>, phase: Phase, path: &str) -> Phase {
    match describe_local_file(path) {
        Some(file) => {
            files.push(file);
            match phase {
                Phase::Failed(_) => Phase::Editing,
                other => other,
            }
        }
        None => Phase::Failed("That file could not be read.".to_owned()),
    }
}

/// Final project upload form.
#[component]
pub fn SubmissionView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let submissions = ctx.submissions();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut attachment_path = use_signal(String::new);
    let mut files = use_signal(Vec::<SubmissionFile>::new);
    let mut phase = use_signal(|| Phase::Editing);

    let status_service = Arc::clone(&submissions);
    let previous = use_resource(move || {
        let status_service = Arc::clone(&status_service);
        async move {
            status_service
                .status()
                .await
                .map_err(ViewError::from)
        }
    });

    let Some(catalog) = ctx.course(&slug) else {
        return rsx! { MissingPage { message: format!("No course called \"{slug}\".") } };
    };
    let course_title = catalog.title().to_owned();
    let draft_course = course_title.clone();
    let back_to_course = Route::Course {
        slug: catalog.slug().to_owned(),
    };
    let (earlier, status_error) = match view_state_from_resource(previous) {
        ViewState::Ready(Some(receipt)) => (Some(ReceiptVm::from(&receipt)), None),
        ViewState::Error(err) => (None, Some(err.message())),
        _ => (None, None),
    };
    let submitting = phase() == Phase::Submitting;

    rsx! {
        div { class: "page submission",
            Breadcrumb { items: breadcrumbs_for_submission(&catalog) }
            match phase() {
                Phase::Submitted(receipt) => rsx! {
                    div { class: "success-card",
                        h1 { "Project Submitted Successfully!" }
                        p { "Thank you for submitting your project! Our team will review it and provide feedback shortly." }
                        ReceiptCard { receipt }
                        Link { class: "button primary", to: back_to_course, "Back to Course" }
                    }
                },
                _ => rsx! {
                    h1 { "Submit Your Project" }
                    ul { class: "guidelines",
                        li { "Submit up to {MAX_SUBMISSION_FILES} files (max 50MB each)" }
                        li { "Accepted formats: AI, EPS, PDF, PNG, JPG, SVG" }
                        li { "Include a short description of your process" }
                    }
                    if let Some(message) = status_error {
                        p { class: "error", "{message}" }
                    }
                    if let Some(receipt) = earlier {
                        div { class: "notice",
                            p { "You already submitted this project. Sending it again replaces the earlier submission." }
                            ReceiptCard { receipt }
                        }
                    }
                    div { class: "form",
                        label { r#for: "fullName", "Full Name *" }
                        input {
                            id: "fullName",
                            r#type: "text",
                            placeholder: "John Doe",
                            value: "{full_name}",
                            oninput: move |evt| full_name.set(evt.value()),
                        }
                        label { r#for: "email", "Email Address *" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "john@example.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        label { r#for: "course", "Course" }
                        input { id: "course", r#type: "text", value: "{course_title}", readonly: true }
                        label { r#for: "attachment", "Project Files *" }
                        div { class: "attach-row",
                            input {
                                id: "attachment",
                                r#type: "text",
                                placeholder: "/path/to/your/design.ai",
                                value: "{attachment_path}",
                                oninput: move |evt| attachment_path.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "button secondary",
                                onclick: move |_| {
                                    let path = attachment_path.peek().clone();
                                    let next = attach_file(&mut files.write(), phase.peek().clone(), &path);
                                    if !matches!(next, Phase::Failed(_)) {
                                        attachment_path.set(String::new());
                                    }
                                    phase.set(next);
                                },
                                "Add File"
                            }
                        }
                        ul { class: "attachments",
                            for (index, file) in files().into_iter().enumerate() {
                                li { key: "{index}",
                                    span { if file.is_image() { "🖼 " } else { "📄 " } "{file.name}" }
                                    span { class: "muted", " {size_label(file.size_bytes)}" }
                                    button {
                                        r#type: "button",
                                        class: "link",
                                        onclick: move |_| {
                                            files.write().remove(index);
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                        label { r#for: "description", "Project Description" }
                        textarea {
                            id: "description",
                            rows: "4",
                            placeholder: "Tell us about your project, the techniques you used, and any challenges you faced...",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                        if let Phase::Failed(message) = phase() {
                            p { class: "error", "{message}" }
                        }
                        button {
                            r#type: "button",
                            class: "button primary",
                            disabled: submitting || files.read().is_empty(),
                            onclick: move |_| {
                                let draft = ProjectSubmissionDraft {
                                    full_name: full_name(),
                                    email: email(),
                                    course: draft_course.clone(),
                                    description: description(),
                                    files: files(),
                                };
                                let submissions = Arc::clone(&submissions);
                                phase.set(Phase::Submitting);
                                spawn(async move {
                                    match submissions.submit(draft).await {
                                        Ok(receipt) => phase.set(Phase::Submitted(ReceiptVm::from(&receipt))),
                                        Err(err) => phase.set(Phase::Failed(err.to_string())),
                                    }
                                });
                            },
                            if submitting { "Submitting..." } else { "Submit Project" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ReceiptCard(receipt: ReceiptVm) -> Element {
    rsx! {
        dl { class: "receipt",
            dt { "Reference" }
            dd { "{receipt.reference}" }
            dt { "Submitted by" }
            dd { "{receipt.submitted_by}" }
            dt { "Received" }
            dd { "{receipt.submitted_at}" }
            dt { "Files" }
            dd { "{receipt.files_label}" }
        }
    }
}
