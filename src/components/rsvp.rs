use dioxus::prelude::*;

use crate::models::{Attendance, EventChoice, RsvpEntry};
use crate::services::timer;

/// RSVP form. Pure local state; a valid submission waits out a short
/// simulated network call and then shows the thank-you panel.
#[component]
pub fn RsvpForm() -> Element {
    let mut entry = use_signal(RsvpEntry::default);
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let on_submit = move |_| {
        match entry.read().validate() {
            Err(e) => error_message.set(Some(e.user_message())),
            Ok(()) => {
                error_message.set(None);
                submitting.set(true);
                spawn(async move {
                    timer::sleep_ms(2000).await;
                    submitting.set(false);
                    submitted.set(true);
                });
            }
        }
    };

    if submitted() {
        return rsx! {
            section { id: "rsvp", class: "rsvp-section",
                div { class: "thanks-card",
                    div { class: "thanks-check", "✓" }
                    h2 { "Thank You!" }
                    p { "Your RSVP has been received successfully. We can't wait to celebrate with you! 💕" }
                    p { class: "thanks-small",
                        "You'll receive a confirmation shortly with all the event details."
                    }
                }
            }
        };
    }

    let form = entry.read();
    let attending = form.attendance == Attendance::Yes;

    rsx! {
        section { id: "rsvp", class: "rsvp-section",
            div { class: "section-heading",
                h2 { "RSVP" }
                p { "Please let us know if you'll be joining us for our special celebration! Your presence would mean the world to us 💕" }
            }

            div { class: "form-card",
                if let Some(error) = error_message() {
                    div { class: "form-error", "{error}" }
                }

                div { class: "form-grid",
                    div { class: "form-group",
                        label { "Full Name *" }
                        input {
                            r#type: "text",
                            value: "{form.name}",
                            placeholder: "Enter your full name",
                            oninput: move |e| entry.write().name = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Email Address" }
                        input {
                            r#type: "email",
                            value: "{form.email}",
                            placeholder: "your.email@example.com",
                            oninput: move |e| entry.write().email = e.value(),
                        }
                    }
                }

                div { class: "form-grid",
                    div { class: "form-group",
                        label { "Phone Number" }
                        input {
                            r#type: "tel",
                            value: "{form.phone}",
                            placeholder: "+91 9876543210",
                            oninput: move |e| entry.write().phone = e.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Number of Guests" }
                        select {
                            value: "{form.guest_count}",
                            onchange: move |e| {
                                if let Ok(count) = e.value().parse::<u8>() {
                                    entry.write().guest_count = count;
                                }
                            },
                            for n in 1..=10u8 {
                                option {
                                    value: "{n}",
                                    if n == 1 { "1 Guest" } else { "{n} Guests" }
                                }
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { "Will you be attending? *" }
                    div { class: "choice-row",
                        button {
                            class: if attending { "choice-button choice-button-yes" } else { "choice-button" },
                            onclick: move |_| entry.write().attendance = Attendance::Yes,
                            "Yes, I'll be there! 🎉"
                        }
                        button {
                            class: if attending { "choice-button" } else { "choice-button choice-button-no" },
                            onclick: move |_| {
                                let mut form = entry.write();
                                form.attendance = Attendance::No;
                                form.events.clear();
                            },
                            "Sorry, can't make it 😢"
                        }
                    }
                }

                if attending {
                    div { class: "form-group",
                        label { "Which events will you attend? *" }
                        div { class: "choice-row",
                            for choice in [EventChoice::Wedding, EventChoice::Reception] {
                                button {
                                    key: "{choice.label()}",
                                    class: if form.attends(choice) { "event-choice event-choice-selected" } else { "event-choice" },
                                    onclick: move |_| entry.write().toggle_event(choice),
                                    div { class: "event-choice-icon", "{choice.icon()}" }
                                    div { "{choice.label()}" }
                                }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { "Dietary Restrictions or Special Requests" }
                        input {
                            r#type: "text",
                            value: "{form.dietary_notes}",
                            placeholder: "Vegetarian, Vegan, Allergies, etc.",
                            oninput: move |e| entry.write().dietary_notes = e.value(),
                        }
                    }
                }

                div { class: "form-group",
                    label { "Personal Message or Blessing for the Couple" }
                    textarea {
                        value: "{form.message}",
                        rows: 4,
                        placeholder: "Share your best wishes, memories, or blessings...",
                        oninput: move |e| entry.write().message = e.value(),
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "primary-button",
                        disabled: submitting(),
                        onclick: on_submit,
                        if submitting() { "Sending..." } else { "Send RSVP" }
                    }
                }
            }
        }
    }
}
