//! Dioxus UI components for the Drive folder gallery.
//!
//! The gallery section owns its [`FetchState`] and renders loading, error
//! (with a manual retry button), and grid states. An empty folder renders
//! nothing at all, so pages can stack several sections and only the ones
//! with photos appear.

#[cfg(feature = "components")]
use dioxus::prelude::*;

#[cfg(feature = "components")]
use crate::models::{DriveGalleryConfig, FetchState};
#[cfg(feature = "components")]
use crate::models::DriveImage;
#[cfg(feature = "components")]
use crate::platform;
#[cfg(feature = "components")]
use crate::scheduler::RequestScheduler;
#[cfg(feature = "components")]
use crate::service::HttpDriveListService;
#[cfg(feature = "components")]
use crate::urls;

#[cfg(feature = "components")]
/// Kick off one listing run and drive `state` through it. A run finishing
/// after the view moved on just overwrites state idempotently.
fn start_fetch(scheduler: RequestScheduler, config: DriveGalleryConfig, mut state: Signal<FetchState>) {
    spawn(async move {
        state.set(FetchState::Loading);

        let result = match HttpDriveListService::http(&config.api_key) {
            Ok(service) => {
                scheduler
                    .run(|| async { service.list_folder_images(&config.folder_id).await })
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(images) => state.set(FetchState::Loaded(images)),
            Err(e) => {
                log::error!("Error fetching Drive images: {}", e);
                state.set(FetchState::Failed(e.user_message()));
            }
        }
    });
}

#[cfg(feature = "components")]
/// Whether a folder currently holds any image, through the shared
/// scheduler. Probe failures are treated as "no photos yet": the caller
/// keeps its placeholder and the real gallery section reports errors.
pub async fn probe_folder(scheduler: RequestScheduler, config: DriveGalleryConfig) -> bool {
    match HttpDriveListService::http(&config.api_key) {
        Ok(service) => scheduler
            .run(|| async { service.folder_has_images(&config.folder_id).await })
            .await
            .unwrap_or_else(|e| {
                log::warn!("Folder probe failed for {}: {}", config.folder_id, e);
                false
            }),
        Err(e) => {
            log::warn!("Folder probe failed for {}: {}", config.folder_id, e);
            false
        }
    }
}

#[cfg(feature = "components")]
/// Image element that walks the display-URL fallback chain on load
/// errors: thumbnail link, content link, constructed direct URL. After
/// the last candidate it stops retrying.
#[component]
pub fn FallbackImage(image: DriveImage) -> Element {
    let candidates = urls::display_url_candidates(&image);
    let total = candidates.len();
    let mut index = use_signal(|| 0usize);
    let mut loaded = use_signal(|| false);

    let src = candidates.get(index()).cloned().unwrap_or_default();

    rsx! {
        div { style: "position: relative; width: 100%; height: 100%; background: #f3f4f6; overflow: hidden;",
            if !loaded() {
                div { style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #9ca3af; font-size: 28px;",
                    "📷"
                }
            }
            img {
                src: "{src}",
                alt: "{image.name}",
                loading: "lazy",
                style: format!(
                    "width: 100%; height: 100%; object-fit: cover; transition: opacity 0.3s; opacity: {};",
                    if loaded() { "1" } else { "0" },
                ),
                onload: move |_| loaded.set(true),
                onerror: move |_| {
                    let next = index() + 1;
                    if next < total {
                        log::debug!("Image failed to load, trying fallback {}/{}", next + 1, total);
                        index.set(next);
                    }
                },
            }
        }
    }
}

#[cfg(feature = "components")]
/// A live gallery section backed by one Drive folder.
///
/// Expects a [`RequestScheduler`] in context, provided by the page
/// container so every section on the page shares one request queue.
#[component]
pub fn DriveGallery(
    config: DriveGalleryConfig,
    title: String,
    description: String,
    /// CSS background for the title chip and buttons.
    accent: String,
) -> Element {
    let scheduler = use_context::<RequestScheduler>();
    let state = use_signal(FetchState::default);

    {
        let scheduler = scheduler.clone();
        let config = config.clone();
        use_effect(move || {
            start_fetch(scheduler.clone(), config.clone(), state);
        });
    }

    let refresh = {
        let scheduler = scheduler.clone();
        let config = config.clone();
        move |_| start_fetch(scheduler.clone(), config.clone(), state)
    };

    match state() {
        FetchState::Idle | FetchState::Loading => rsx! {
            div { style: "background: rgba(255,255,255,0.6); border-radius: 12px; padding: 32px; text-align: center; margin-bottom: 32px;",
                div { style: "font-size: 32px; margin-bottom: 12px;", "⏳" }
                h3 { style: "margin: 0 0 8px; color: #374151;", "Loading Live Wedding Photos" }
                p { style: "margin: 0; color: #6b7280;", "Fetching the latest photos from our wedding..." }
            }
        },
        FetchState::Failed(message) => rsx! {
            div { style: "background: #fef2f2; border: 1px solid #fecaca; border-radius: 12px; padding: 32px; text-align: center; margin-bottom: 32px;",
                div { style: "font-size: 32px; margin-bottom: 12px;", "⚠️" }
                h3 { style: "margin: 0 0 8px; color: #b91c1c;", "Unable to Load Photos" }
                p { style: "margin: 0 0 16px; color: #dc2626;", "{message}" }
                button {
                    style: "padding: 10px 20px; background: #ef4444; color: white; border: none; border-radius: 8px; font-size: 15px; cursor: pointer;",
                    onclick: refresh,
                    "Try Again"
                }
            }
        },
        FetchState::Loaded(images) if images.is_empty() => rsx! {},
        FetchState::Loaded(images) => rsx! {
            div { style: "margin-bottom: 32px;",
                div { style: "text-align: center; margin-bottom: 24px;",
                    h3 {
                        style: format!(
                            "display: inline-block; margin: 0 0 8px; padding: 6px 14px; border-radius: 10px; color: white; font-size: 24px; background: {};",
                            accent,
                        ),
                        "{title}"
                    }
                    p { style: "margin: 0 0 16px; color: #4b5563;",
                        "{description} ({images.len()} photos)"
                    }
                    button {
                        style: format!(
                            "padding: 10px 20px; border: none; border-radius: 8px; color: white; font-size: 15px; cursor: pointer; background: {};",
                            accent,
                        ),
                        onclick: refresh,
                        "Refresh"
                    }
                }

                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px;",
                    for image in images {
                        GalleryCard { key: "{image.id}", image: image.clone() }
                    }
                }
            }
        },
    }
}

#[cfg(feature = "components")]
/// One grid cell: fallback image plus download and share actions.
#[component]
fn GalleryCard(image: DriveImage) -> Element {
    let download_image = image.clone();
    let share_image = image.clone();

    rsx! {
        div { class: "gallery-card",
            style: "position: relative; aspect-ratio: 1; border-radius: 10px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,0.12);",
            FallbackImage { image: image.clone() }

            div { style: "position: absolute; top: 8px; right: 8px; display: flex; gap: 8px;",
                button {
                    title: "Download Photo",
                    style: "width: 32px; height: 32px; border: none; border-radius: 50%; background: rgba(255,255,255,0.9); cursor: pointer;",
                    onclick: move |_| platform::download_image(&download_image),
                    "⬇"
                }
                button {
                    title: "Share Photo",
                    style: "width: 32px; height: 32px; border: none; border-radius: 50%; background: rgba(255,255,255,0.9); cursor: pointer;",
                    onclick: move |_| {
                        let image = share_image.clone();
                        spawn(async move {
                            platform::share_image(&image).await;
                        });
                    },
                    "↗"
                }
            }

            div { style: "position: absolute; bottom: 8px; left: 8px; right: 8px;",
                p { style: "margin: 0; padding: 4px 8px; border-radius: 6px; background: rgba(0,0,0,0.5); color: white; font-size: 12px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{image.name}"
                }
            }
        }
    }
}
