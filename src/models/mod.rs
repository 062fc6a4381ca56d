pub mod guest_wish;
pub mod rsvp;
pub mod timeline;

pub use guest_wish::GuestWish;
pub use rsvp::{Attendance, EventChoice, RsvpEntry};
pub use timeline::TimelineMilestone;
