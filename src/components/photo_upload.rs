use dioxus::prelude::*;

use crate::components::FooterSection;
use crate::config::SiteConfig;
use crate::services::upload_service::{self, StagedPhoto};
use crate::Screen;

/// Guest photo sharing screen: pick images, preview them, and "upload".
#[component]
pub fn PhotoUploadScreen(site: SiteConfig, on_navigate: EventHandler<Screen>) -> Element {
    let mut guest_name = use_signal(String::new);
    let mut guest_email = use_signal(String::new);
    let mut guest_message = use_signal(String::new);
    let mut staged = use_signal(Vec::<StagedPhoto>::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut uploading = use_signal(|| false);
    let mut uploaded = use_signal(|| false);

    let on_files = move |evt: FormEvent| {
        spawn(async move {
            for file in evt.files() {
                match file.read_bytes().await {
                    Ok(bytes) => {
                        upload_service::stage_file(&mut staged.write(), &file.name(), &bytes);
                    }
                    Err(e) => log::warn!("Could not read {}: {}", file.name(), e),
                }
            }
        });
    };

    let on_submit = move |_| {
        if guest_name().trim().is_empty() {
            error_message.set(Some("Please enter your name.".to_string()));
            return;
        }
        let count = staged.read().len();
        if count == 0 {
            return;
        }
        error_message.set(None);
        uploading.set(true);
        spawn(async move {
            let sent = upload_service::submit_photos(count).await;
            log::info!("Shared {} photos", sent);
            uploading.set(false);
            uploaded.set(true);
        });
    };

    if uploaded() {
        return rsx! {
            div { class: "upload-page",
                div { class: "thanks-card upload-thanks",
                    div { class: "thanks-check", "✓" }
                    h1 { "Thank You!" }
                    p {
                        "Your photos have been uploaded successfully! Thank you for sharing these precious memories with {site.couple.display_names()} 💕"
                    }
                    p { class: "thanks-small",
                        "Your photos will be reviewed and added to the wedding gallery soon."
                    }
                    div { class: "form-actions",
                        button {
                            class: "primary-button",
                            onclick: move |_| {
                                uploaded.set(false);
                                staged.set(Vec::new());
                                guest_name.set(String::new());
                                guest_email.set(String::new());
                                guest_message.set(String::new());
                            },
                            "Upload More Photos"
                        }
                        button {
                            class: "secondary-button",
                            onclick: move |_| on_navigate.call(Screen::Home),
                            "Back to Wedding Site"
                        }
                    }
                }
            }
        };
    }

    let photo_count = staged.read().len();

    rsx! {
        div { class: "upload-page",
            header { class: "site-header",
                div { class: "site-header-inner",
                    button {
                        class: "brand",
                        onclick: move |_| on_navigate.call(Screen::Home),
                        span { "← " }
                        span { class: "brand-heart", "❤" }
                        span { class: "brand-name", "{site.couple.monogram}" }
                    }
                    nav { class: "site-nav",
                        button {
                            class: "nav-button",
                            onclick: move |_| on_navigate.call(Screen::Home),
                            "Home"
                        }
                        button {
                            class: "nav-button",
                            onclick: move |_| on_navigate.call(Screen::LiveGallery),
                            "Gallery"
                        }
                    }
                }
            }

            div { class: "upload-body",
                div { class: "section-heading",
                    h1 { "Share Your Photos" }
                    p {
                        "Help us capture every beautiful moment! Upload your photos from the wedding celebrations and be part of our eternal memory book 💝"
                    }
                    div { class: "footer-hashtags",
                        for tag in site.couple.hashtags.clone() {
                            span { key: "{tag}", class: "hashtag-chip", "{tag}" }
                        }
                    }
                }

                div { class: "form-card",
                    if let Some(error) = error_message() {
                        div { class: "form-error", "{error}" }
                    }

                    div { class: "form-grid",
                        div { class: "form-group",
                            label { "Your Name *" }
                            input {
                                r#type: "text",
                                value: "{guest_name}",
                                placeholder: "Enter your name",
                                oninput: move |e| guest_name.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "Email (Optional)" }
                            input {
                                r#type: "email",
                                value: "{guest_email}",
                                placeholder: "your.email@example.com",
                                oninput: move |e| guest_email.set(e.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { "Message (Optional)" }
                        textarea {
                            value: "{guest_message}",
                            rows: 3,
                            placeholder: "Share a memory or message about these photos...",
                            oninput: move |e| guest_message.set(e.value()),
                        }
                    }

                    div { class: "dropzone",
                        div { class: "dropzone-icon", "⬆" }
                        h3 { "Upload Your Wedding Photos" }
                        p {
                            "Select photos to share. Supports JPG, PNG, GIF and WebP."
                        }
                        input {
                            r#type: "file",
                            multiple: true,
                            accept: "image/*",
                            onchange: on_files,
                        }
                    }

                    if photo_count > 0 {
                        div { class: "staged-photos",
                            h3 { "Selected Photos ({photo_count})" }
                            div { class: "staged-grid",
                                for (index, photo) in staged.read().iter().cloned().enumerate() {
                                    div { key: "{photo.name}-{index}", class: "staged-cell",
                                        img { src: "{photo.data_url}", alt: "{photo.name}" }
                                        button {
                                            class: "staged-remove",
                                            onclick: move |_| {
                                                upload_service::remove_photo(&mut staged.write(), index);
                                            },
                                            "×"
                                        }
                                        div { class: "staged-name", "{photo.name}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "form-actions",
                        button {
                            class: "primary-button",
                            disabled: photo_count == 0 || uploading(),
                            onclick: on_submit,
                            if uploading() {
                                "Uploading Photos..."
                            } else {
                                "📷 Share Photos ({photo_count})"
                            }
                        }
                    }
                }

                div { class: "upload-guidelines",
                    h3 { "Photo Upload Guidelines" }
                    div { class: "guidelines-grid",
                        div { class: "guideline",
                            div { class: "guideline-icon", "✓" }
                            p { class: "guideline-title", "High Quality Images" }
                            p { "Upload clear, high-resolution photos" }
                        }
                        div { class: "guideline",
                            div { class: "guideline-icon", "❤" }
                            p { class: "guideline-title", "Wedding Moments" }
                            p { "Any photos from the celebration" }
                        }
                        div { class: "guideline",
                            div { class: "guideline-icon", "⬆" }
                            p { class: "guideline-title", "Easy Upload" }
                            p { "Pick several photos at once" }
                        }
                    }
                }
            }

            FooterSection { couple: site.couple }
        }
    }
}
