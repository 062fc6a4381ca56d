use dioxus::prelude::*;

use crate::Screen;

/// Sticky top bar: monogram on the left, section links and the two
/// secondary screens on the right. Section anchors only do something on
/// the home screen, so the bar always offers a way back there first.
#[component]
pub fn HeaderBar(monogram: String, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                button {
                    class: "brand",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    span { class: "brand-heart", "❤" }
                    span { class: "brand-name", "{monogram}" }
                }

                nav { class: "site-nav",
                    a { href: "#home", "Home" }
                    a { href: "#timeline", "Our Story" }
                    a { href: "#gallery", "Gallery" }
                    a { href: "#events", "Events" }
                    a { href: "#rsvp", "RSVP" }
                    a { href: "#wishes", "Wishes" }
                    button {
                        class: "nav-button",
                        onclick: move |_| on_navigate.call(Screen::LiveGallery),
                        "Live Gallery"
                    }
                    button {
                        class: "nav-button nav-button-accent",
                        onclick: move |_| on_navigate.call(Screen::PhotoUpload),
                        "Share Photos"
                    }
                }
            }
        }
    }
}
