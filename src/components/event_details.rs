use dioxus::prelude::*;

use crate::config::CelebrationEvent;

#[component]
pub fn EventDetails(wedding: CelebrationEvent, reception: CelebrationEvent) -> Element {
    rsx! {
        section { id: "events", class: "events-section",
            div { class: "section-heading",
                h2 { "Event Details" }
                p { "Join us for these special moments as we celebrate our love and unity 💕" }
            }

            div { class: "events-grid",
                EventCard { event: wedding }
                EventCard { event: reception }
            }

            div { class: "qr-block",
                img {
                    class: "qr-image",
                    src: "/assets/photos/qr.webp",
                    alt: "Venue location QR code",
                }
                p { "Scan to open the venue location on your phone" }
            }
        }
    }
}

#[component]
fn EventCard(event: CelebrationEvent) -> Element {
    rsx! {
        div { class: "event-card",
            div { class: "event-icon", "📅" }
            h3 { "{event.title}" }

            div { class: "event-facts",
                p { span { class: "event-fact-icon", "📅" } " {event.date_label}" }
                p { span { class: "event-fact-icon", "🕐" } " {event.time_label}" }
                p { span { class: "event-fact-icon", "📍" } " {event.venue}" }
            }

            p { class: "event-description", "{event.description}" }

            div { class: "event-contact",
                h4 { "Contact Information" }
                p { class: "event-contact-family", "{event.contact.family}" }
                p { "{event.contact.address}" }
                p { "📞 {event.contact.phone}" }
            }

            a {
                class: "event-map-link",
                href: "{event.map_url}",
                target: "_blank",
                rel: "noopener",
                "View on Map ↗"
            }
        }
    }
}
