use dioxus::prelude::*;

use crate::components::{
    EventDetails, FooterSection, GuestWishes, HeaderBar, HeroSection, LoveTimeline, PhotoGallery,
    RsvpForm,
};
use crate::config::SiteConfig;
use crate::Screen;

/// The single-page home: every section stacked in order.
#[component]
pub fn HomeScreen(site: SiteConfig, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        HeaderBar {
            monogram: site.couple.monogram.clone(),
            on_navigate: move |s| on_navigate.call(s),
        }
        HeroSection { couple: site.couple.clone(), wedding: site.wedding.clone() }
        LoveTimeline { milestones: site.timeline.clone() }
        PhotoGallery {}
        EventDetails { wedding: site.wedding.clone(), reception: site.reception.clone() }
        RsvpForm {}
        GuestWishes { hashtags: site.couple.hashtags.clone() }
        FooterSection { couple: site.couple }
    }
}
