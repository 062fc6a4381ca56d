use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod services;

use components::{GalleryScreen, HomeScreen, PhotoUploadScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

/// Screen navigation for the site
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    LiveGallery,
    PhotoUpload,
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Home);
    let site = use_hook(|| std::rc::Rc::new(config::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match site.as_ref() {
            Ok(site) => rsx! {
                div { class: "app-root",
                    match current_screen() {
                        Screen::Home => rsx! {
                            HomeScreen {
                                site: site.clone(),
                                on_navigate: move |s| current_screen.set(s),
                            }
                        },
                        Screen::LiveGallery => rsx! {
                            GalleryScreen {
                                site: site.clone(),
                                on_navigate: move |s| current_screen.set(s),
                            }
                        },
                        Screen::PhotoUpload => rsx! {
                            PhotoUploadScreen {
                                site: site.clone(),
                                on_navigate: move |s| current_screen.set(s),
                            }
                        },
                    }
                }
            },
            Err(e) => {
                rsx! {
                    div { class: "config-error",
                        "{e.user_message()}"
                    }
                }
            }
        }
    }
}
