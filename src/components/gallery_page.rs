use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;
use drive_gallery::{platform, probe_folder, DriveGallery, RequestScheduler};

use crate::components::gallery::{now_photos, AssetPhoto};
use crate::components::{FooterSection, HeaderBar};
use crate::config::SiteConfig;
use crate::services::{countdown, timer};
use crate::Screen;

/// Live gallery screen: the two Drive-backed galleries with their
/// coming-soon placeholders, plus the Save the Date grid.
///
/// This container owns the request scheduler, so both gallery sections
/// and both folder probes share one throttled request queue.
#[component]
pub fn GalleryScreen(site: SiteConfig, on_navigate: EventHandler<Screen>) -> Element {
    let scheduler = use_context_provider(RequestScheduler::new);

    let mut wedding_live = use_signal(|| false);
    let mut reception_live = use_signal(|| false);

    {
        let scheduler = scheduler.clone();
        let wedding_config = site.drive.gallery_config(&site.drive.wedding_gallery);
        let reception_config = site.drive.gallery_config(&site.drive.reception_gallery);
        use_future(move || {
            let scheduler = scheduler.clone();
            let wedding_config = wedding_config.clone();
            let reception_config = reception_config.clone();
            async move {
                wedding_live.set(probe_folder(scheduler.clone(), wedding_config).await);
                reception_live.set(probe_folder(scheduler, reception_config).await);
            }
        });
    }

    rsx! {
        div { class: "gallery-page",
            HeaderBar {
                monogram: site.couple.monogram.clone(),
                on_navigate: move |s| on_navigate.call(s),
            }

            div { class: "gallery-page-body",
                if !wedding_live() {
                    ComingSoonCard {
                        title: "Wedding Photos Coming Soon".to_string(),
                        note: "Live uploads and the complete wedding gallery will appear here on the wedding day."
                            .to_string(),
                        target: site.wedding.date,
                        over_label: "🎉 The Wedding Day is Here! 🎉".to_string(),
                        thumbs: vec![
                            "/assets/photos/11.jpg".to_string(),
                            "/assets/photos/12.jpg".to_string(),
                            "/assets/photos/13.jpg".to_string(),
                        ],
                    }
                }
                DriveGallery {
                    config: site.drive.gallery_config(&site.drive.wedding_gallery),
                    title: site.drive.wedding_gallery.title.clone(),
                    description: site.drive.wedding_gallery.description.clone(),
                    accent: site.drive.wedding_gallery.accent.clone(),
                }

                if !reception_live() {
                    ComingSoonCard {
                        title: "Reception".to_string(),
                        note: "Live uploads and the reception gallery will appear here during and after the reception."
                            .to_string(),
                        target: site.reception.date,
                        over_label: "🎉 Reception Time is Here! 🎉".to_string(),
                        thumbs: vec![
                            "/assets/photos/14.jpg".to_string(),
                            "/assets/photos/15.jpg".to_string(),
                            "/assets/photos/16.jpg".to_string(),
                        ],
                    }
                }
                DriveGallery {
                    config: site.drive.gallery_config(&site.drive.reception_gallery),
                    title: site.drive.reception_gallery.title.clone(),
                    description: site.drive.reception_gallery.description.clone(),
                    accent: site.drive.reception_gallery.accent.clone(),
                }

                SaveTheDateGrid {}
            }

            FooterSection { couple: site.couple }
        }
    }
}

/// Placeholder shown while a folder has no photos yet: a countdown to
/// the event and a small teaser strip.
#[component]
fn ComingSoonCard(
    title: String,
    note: String,
    target: NaiveDateTime,
    over_label: String,
    thumbs: Vec<String>,
) -> Element {
    let mut remaining =
        use_signal(|| countdown::remaining_until(Local::now().naive_local(), target));

    use_future(move || async move {
        loop {
            timer::sleep_ms(1000).await;
            remaining.set(countdown::remaining_until(Local::now().naive_local(), target));
        }
    });

    rsx! {
        div { class: "coming-soon-card",
            h4 { class: "coming-soon-title", "{title}" }
            p { class: "coming-soon-note", "{note}" }

            if remaining().is_over() {
                p { class: "countdown-over", "{over_label}" }
            } else {
                div { class: "countdown-row",
                    for (label, value) in remaining().segments() {
                        div { key: "{label}", class: "countdown-tile countdown-tile-light",
                            div { class: "countdown-value", "{value}" }
                            div { class: "countdown-label", "{label}" }
                        }
                    }
                }
            }

            div { class: "thumb-strip",
                for src in thumbs {
                    img { key: "{src}", src: "{src}", alt: "preview", loading: "lazy" }
                }
            }
        }
    }
}

/// Static Save the Date photos with per-photo share/download and a
/// sequential download-all action.
#[component]
fn SaveTheDateGrid() -> Element {
    let photos = now_photos();

    let download_all = {
        let photos = photos.clone();
        move |_| {
            let photos = photos.clone();
            spawn(async move {
                for (index, photo) in photos.iter().enumerate() {
                    if let Err(e) =
                        platform::save_link(&photo.src, &save_the_date_filename(index))
                    {
                        log::error!("Failed to download {}: {}", photo.src, e);
                    }
                    timer::sleep_ms(200).await;
                }
                platform::alert("Downloads started. Check your browser's downloads.");
            });
        }
    };

    rsx! {
        div { class: "save-the-date",
            div { class: "section-heading",
                h3 { class: "save-the-date-title", "Save the Date" }
                p { "These are our Save-the-Date photos. Download and share with loved ones." }
                button { class: "primary-button", onclick: download_all, "⬇ Download All" }
            }

            div { class: "std-grid",
                for (index, photo) in photos.into_iter().enumerate() {
                    SaveTheDateCell { key: "{index}", photo, index }
                }
            }
        }
    }
}

#[component]
fn SaveTheDateCell(photo: AssetPhoto, index: usize) -> Element {
    let share_src = photo.src.clone();
    let download_src = photo.src.clone();

    rsx! {
        div { class: "std-cell",
            img { src: "{photo.src}", alt: "{photo.alt}", loading: "lazy" }

            div { class: "std-actions",
                button {
                    class: "std-action",
                    aria_label: "Share photo {index + 1}",
                    onclick: move |_| {
                        let url = absolute_url(&share_src);
                        spawn(async move {
                            platform::share_link(
                                    "Live Wedding Photo",
                                    "Check out this photo from our wedding gallery",
                                    &url,
                                )
                                .await;
                        });
                    },
                    "↗ Share"
                }
                button {
                    class: "std-action",
                    aria_label: "Download photo {index + 1}",
                    onclick: move |_| {
                        if let Err(e) = platform::save_link(
                            &download_src,
                            &save_the_date_filename(index),
                        ) {
                            log::error!("Download failed: {}", e);
                            platform::alert("Unable to download the photo.");
                        }
                    },
                    "⬇ Download"
                }
            }
        }
    }
}

fn save_the_date_filename(index: usize) -> String {
    format!("save-the-date-{:02}.jpg", index + 1)
}

/// Sharing needs a URL that works outside this page, so asset paths are
/// anchored to the page origin when one exists.
fn absolute_url(path: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{}{}", origin, path);
            }
        }
    }
    path.to_string()
}
