use std::sync::Arc;

use course_core::model::ContactDraft;
use course_core::site::CONTACT_EMAIL;
use dioxus::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Editing,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn ContactView() -> Element {
    let ctx = use_context::<AppContext>();
    let contact = ctx.contact();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut phase = use_signal(|| Phase::Editing);
    let sending = phase() == Phase::Sending;

    rsx! {
        div { class: "page contact",
            h1 { "Contact Us" }
            p { class: "muted", "Have a question or want to work together? We'd love to hear from you." }
            if phase() == Phase::Sent {
                div { class: "success-card",
                    p { "Thanks for reaching out! We'll get back to you shortly." }
                }
            } else {
                div { class: "form",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { r#for: "contactEmail", "Email" }
                    input {
                        id: "contactEmail",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    label { r#for: "message", "Message" }
                    textarea {
                        id: "message",
                        rows: "6",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    if let Phase::Failed(reason) = phase() {
                        p { class: "error", "{reason}" }
                    }
                    button {
                        r#type: "button",
                        class: "button primary",
                        disabled: sending,
                        onclick: move |_| {
                            let draft = ContactDraft {
                                name: name(),
                                email: email(),
                                message: message(),
                            };
                            let contact = Arc::clone(&contact);
                            phase.set(Phase::Sending);
                            spawn(async move {
                                match contact.send(draft).await {
                                    Ok(_) => {
                                        name.set(String::new());
                                        email.set(String::new());
                                        message.set(String::new());
                                        phase.set(Phase::Sent);
                                    }
                                    Err(err) => phase.set(Phase::Failed(err.to_string())),
                                }
                            });
                        },
                        if sending { "Sending..." } else { "Send Message" }
                    }
                }
            }
            p { class: "contact-mail",
                a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
            }
        }
    }
}
