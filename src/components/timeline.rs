use dioxus::prelude::*;

use crate::models::TimelineMilestone;

/// Vertical story timeline with alternating cards.
#[component]
pub fn LoveTimeline(milestones: Vec<TimelineMilestone>) -> Element {
    rsx! {
        section { id: "timeline", class: "timeline-section",
            div { class: "section-heading",
                h2 { "Our Love Story" }
                p { "Every chapter of our journey, from the first hello to forever 💕" }
            }

            div { class: "timeline",
                for (index, milestone) in milestones.into_iter().enumerate() {
                    div {
                        key: "{milestone.year}-{milestone.title}",
                        class: if index % 2 == 0 { "timeline-row" } else { "timeline-row timeline-row-reverse" },

                        div { class: "timeline-card",
                            img {
                                class: "timeline-image",
                                src: "{milestone.image}",
                                alt: "{milestone.title}",
                                loading: "lazy",
                            }
                            div { class: "timeline-body",
                                h3 { "{milestone.title}" }
                                p { class: "timeline-date", "{milestone.date_label}" }
                                p { class: "timeline-text", "{milestone.description}" }
                            }
                        }

                        div { class: "timeline-year-badge", "{milestone.year}" }
                    }
                }
            }
        }
    }
}
