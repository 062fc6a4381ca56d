use dioxus::prelude::*;

/// One photo shipped with the site under `assets/photos/`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPhoto {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// The "Then" photos: lettered files a.jpg through p.jpg.
pub fn then_photos() -> Vec<AssetPhoto> {
    ('a'..='p')
        .map(|letter| AssetPhoto {
            src: format!("/assets/photos/{}.jpg", letter),
            alt: format!("Memory {}", letter.to_ascii_uppercase()),
            caption: "Beautiful memory 💕".to_string(),
        })
        .collect()
}

/// The "Now" photos: numbered files 01.jpg through 20.jpg.
pub fn now_photos() -> Vec<AssetPhoto> {
    (1..=20)
        .map(|n| AssetPhoto {
            src: format!("/assets/photos/{:02}.jpg", n),
            alt: format!("Recent photo {}", n),
            caption: "Recent moments together ✨".to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GalleryTab {
    Then,
    Now,
}

/// Static photo gallery: two tabs, an auto-advancing highlight, and a
/// lightbox with wrap-around navigation.
#[component]
pub fn PhotoGallery() -> Element {
    let mut active_tab = use_signal(|| GalleryTab::Then);
    let mut selected = use_signal(|| None::<usize>);
    let mut autoplay = use_signal(|| true);
    let mut highlight = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            crate::services::timer::sleep_ms(3000).await;
            if autoplay() {
                let count = match active_tab() {
                    GalleryTab::Then => then_photos().len(),
                    GalleryTab::Now => now_photos().len(),
                };
                highlight.set((highlight() + 1) % count);
            }
        }
    });

    let photos = match active_tab() {
        GalleryTab::Then => then_photos(),
        GalleryTab::Now => now_photos(),
    };
    let count = photos.len();

    rsx! {
        section { id: "gallery", class: "gallery-section",
            div { class: "section-heading",
                h2 { "Our Photo Gallery" }
                p { "Capturing precious moments from our beautiful journey together 📸" }
            }

            div { class: "gallery-tabs",
                button {
                    class: if active_tab() == GalleryTab::Then { "tab-button tab-button-active" } else { "tab-button" },
                    onclick: move |_| {
                        active_tab.set(GalleryTab::Then);
                        highlight.set(0);
                        selected.set(None);
                    },
                    "Then (2019-2023)"
                }
                button {
                    class: if active_tab() == GalleryTab::Now { "tab-button tab-button-active" } else { "tab-button" },
                    onclick: move |_| {
                        active_tab.set(GalleryTab::Now);
                        highlight.set(0);
                        selected.set(None);
                    },
                    "Now (2024-2025)"
                }
                button {
                    class: "tab-button",
                    onclick: move |_| autoplay.set(!autoplay()),
                    if autoplay() { "⏸ Pause" } else { "▶ Play" }
                }
            }

            div { class: "gallery-grid",
                for (index, photo) in photos.iter().cloned().enumerate() {
                    div {
                        key: "{photo.src}",
                        class: if index == highlight() { "gallery-cell gallery-cell-highlight" } else { "gallery-cell" },
                        onclick: move |_| selected.set(Some(index)),

                        img {
                            src: "{photo.src}",
                            alt: "{photo.alt}",
                            loading: "lazy",
                        }
                        div { class: "gallery-caption", "{photo.caption}" }
                    }
                }
            }

            if let Some(index) = selected() {
                div { class: "lightbox",
                    div { class: "lightbox-bar",
                        span { class: "lightbox-counter", "{index + 1} / {count}" }
                        button {
                            class: "lightbox-close",
                            onclick: move |_| selected.set(None),
                            "×"
                        }
                    }
                    div { class: "lightbox-stage",
                        button {
                            class: "lightbox-arrow lightbox-arrow-left",
                            onclick: move |_| {
                                selected.set(Some(if index == 0 { count - 1 } else { index - 1 }));
                            },
                            "‹"
                        }
                        img {
                            src: "{photos[index].src}",
                            alt: "{photos[index].alt}",
                        }
                        button {
                            class: "lightbox-arrow lightbox-arrow-right",
                            onclick: move |_| selected.set(Some((index + 1) % count)),
                            "›"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_photos_cover_letters() {
        let photos = then_photos();
        assert_eq!(photos.len(), 16);
        assert_eq!(photos[0].src, "/assets/photos/a.jpg");
        assert_eq!(photos[15].src, "/assets/photos/p.jpg");
    }

    #[test]
    fn test_now_photos_are_zero_padded() {
        let photos = now_photos();
        assert_eq!(photos.len(), 20);
        assert_eq!(photos[0].src, "/assets/photos/01.jpg");
        assert_eq!(photos[19].src, "/assets/photos/20.jpg");
    }
}
