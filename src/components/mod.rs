mod event_details;
mod footer;
mod gallery;
mod gallery_page;
mod guest_wishes;
mod header;
mod hero;
mod home;
mod photo_upload;
mod rsvp;
mod timeline;

pub use event_details::EventDetails;
pub use footer::FooterSection;
pub use gallery::PhotoGallery;
pub use gallery_page::GalleryScreen;
pub use guest_wishes::GuestWishes;
pub use header::HeaderBar;
pub use hero::HeroSection;
pub use home::HomeScreen;
pub use photo_upload::PhotoUploadScreen;
pub use rsvp::RsvpForm;
pub use timeline::LoveTimeline;
