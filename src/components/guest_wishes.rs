use std::rc::Rc;

use dioxus::prelude::*;

use crate::models::GuestWish;
use crate::services::wish_service::{self, BrowserStore, WishStore};

/// Guest wishes board: a submission form plus the persisted list,
/// paginated with wrap-around navigation.
#[component]
pub fn GuestWishes(hashtags: Vec<String>) -> Element {
    let store: Rc<dyn WishStore> = use_hook(|| Rc::new(BrowserStore) as Rc<dyn WishStore>);
    let mut wishes = use_signal(Vec::<GuestWish>::new);
    let mut current_page = use_signal(|| 0usize);
    let mut show_form = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut relationship = use_signal(String::new);
    let mut message = use_signal(String::new);

    {
        let store = store.clone();
        use_effect(move || {
            wishes.set(wish_service::load_wishes(store.as_ref()));
        });
    }

    let on_submit = {
        let store = store.clone();
        move |_| {
            let result = wish_service::submit_wish(
                store.as_ref(),
                &mut wishes.write(),
                &name(),
                &message(),
                &relationship(),
            );
            match result {
                Ok(()) => {
                    name.set(String::new());
                    relationship.set(String::new());
                    message.set(String::new());
                    error_message.set(None);
                    show_form.set(false);
                    current_page.set(0);
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
        }
    };

    let total = wish_service::total_pages(wishes.read().len());
    let visible: Vec<GuestWish> =
        wish_service::page_of(&wishes.read(), current_page()).to_vec();

    rsx! {
        section { id: "wishes", class: "wishes-section",
            div { class: "section-heading",
                h2 { "Guest Wishes & Blessings" }
                p { "Beautiful messages from our loved ones who are celebrating our journey with us 💕" }
                button {
                    class: "primary-button",
                    onclick: move |_| show_form.set(!show_form()),
                    "💬 Leave a Blessing"
                }
            }

            if show_form() {
                div { class: "form-card wishes-form",
                    h3 { "Share Your Blessing" }

                    if let Some(error) = error_message() {
                        div { class: "form-error", "{error}" }
                    }

                    div { class: "form-grid",
                        div { class: "form-group",
                            label { "Your Name" }
                            input {
                                r#type: "text",
                                value: "{name}",
                                placeholder: "Enter your name",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Relationship" }
                            input {
                                r#type: "text",
                                value: "{relationship}",
                                placeholder: "Friend, Family, Colleague...",
                                oninput: move |e| relationship.set(e.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { "Your Message *" }
                        textarea {
                            value: "{message}",
                            rows: 4,
                            placeholder: "Share your wishes, blessings, or memories with the couple...",
                            oninput: move |e| message.set(e.value()),
                        }
                    }

                    div { class: "form-actions",
                        button {
                            class: "secondary-button",
                            onclick: move |_| show_form.set(false),
                            "Cancel"
                        }
                        button { class: "primary-button", onclick: on_submit, "Send Blessing" }
                    }
                }
            }

            if visible.is_empty() && !show_form() {
                p { class: "wishes-empty", "No blessings yet. Be the first to leave one! ✨" }
            }

            div { class: "wishes-grid",
                for wish in visible {
                    div { key: "{wish.id}", class: "wish-card",
                        div { class: "wish-stars", "★★★★★" }
                        p { class: "wish-message", "\"{wish.message}\"" }
                        div { class: "wish-author",
                            div {
                                p { class: "wish-name", "{wish.name}" }
                                p { class: "wish-relationship", "{wish.relationship}" }
                            }
                            span { class: "wish-heart", "❤" }
                        }
                        p { class: "wish-date", "{wish.date}" }
                    }
                }
            }

            if total > 1 {
                div { class: "wishes-pager",
                    button {
                        class: "pager-arrow",
                        onclick: move |_| {
                            current_page.set(wish_service::prev_page(current_page(), total));
                        },
                        "‹"
                    }
                    div { class: "pager-dots",
                        for page in 0..total {
                            button {
                                key: "{page}",
                                class: if page == current_page() { "pager-dot pager-dot-active" } else { "pager-dot" },
                                onclick: move |_| current_page.set(page),
                            }
                        }
                    }
                    button {
                        class: "pager-arrow",
                        onclick: move |_| {
                            current_page.set(wish_service::next_page(current_page(), total));
                        },
                        "›"
                    }
                }
            }

            div { class: "hashtag-banner",
                h3 { "Share the Love!" }
                p { "Use our wedding hashtags on social media" }
                div { class: "footer-hashtags",
                    for tag in hashtags {
                        span { key: "{tag}", class: "hashtag-chip", "{tag}" }
                    }
                }
            }
        }
    }
}
