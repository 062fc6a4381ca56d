use chrono::Local;
use dioxus::prelude::*;

use crate::config::{CelebrationEvent, Couple};
use crate::services::{countdown, timer};

/// Full-screen landing section with the couple, the date and a live
/// countdown to the ceremony.
#[component]
pub fn HeroSection(couple: Couple, wedding: CelebrationEvent) -> Element {
    let target = wedding.date;
    let mut remaining =
        use_signal(|| countdown::remaining_until(Local::now().naive_local(), target));

    // One-second tick for the whole lifetime of the section.
    use_future(move || async move {
        loop {
            timer::sleep_ms(1000).await;
            remaining.set(countdown::remaining_until(Local::now().naive_local(), target));
        }
    });

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-overlay" }

            div { class: "hero-card",
                div { class: "hero-portrait-ring",
                    img {
                        class: "hero-portrait",
                        src: "/assets/photos/04.jpg",
                        alt: "{couple.display_names()}",
                    }
                }

                p { class: "hero-quote", "\"{couple.quote}\"" }

                h1 { class: "hero-names", "{couple.display_names()}" }
                p { class: "hero-subtitle", "Are Getting Married!" }

                div { class: "hero-date-row",
                    span { class: "hero-date-icon", "📅" }
                    span { class: "hero-date", "{wedding.date_label}" }
                }
                p { class: "hero-line", "{wedding.time_label}" }
                p { class: "hero-line", "{wedding.venue}" }

                if remaining().is_over() {
                    p { class: "countdown-over", "🎉 The Wedding Day is Here! 🎉" }
                } else {
                    div { class: "countdown-grid",
                        for (label, value) in remaining().segments() {
                            div { key: "{label}", class: "countdown-tile",
                                div { class: "countdown-value", "{value}" }
                                div { class: "countdown-label", "{label}" }
                            }
                        }
                    }
                    p { class: "hero-line hero-countdown-caption", "Until We Say \"I Do\" 💕" }
                }
            }
        }
    }
}
