use dioxus::prelude::*;

use crate::config::Couple;

#[component]
pub fn FooterSection(couple: Couple) -> Element {
    rsx! {
        footer { class: "site-footer",
            h3 { class: "footer-names", "{couple.display_names()}" }
            p { class: "footer-line", "Thank you for being part of our story 💕" }

            div { class: "footer-hashtags",
                for tag in couple.hashtags {
                    span { key: "{tag}", class: "hashtag-chip", "{tag}" }
                }
            }

            p { class: "footer-small", "Made with love for our wedding day · 2025" }
        }
    }
}
