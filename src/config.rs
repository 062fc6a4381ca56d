//! Site configuration, embedded at build time from `assets/site.toml`.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::TimelineMilestone;

const SITE_TOML: &str = include_str!("../assets/site.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub couple: Couple,
    pub wedding: CelebrationEvent,
    pub reception: CelebrationEvent,
    pub drive: DriveSettings,
    pub timeline: Vec<TimelineMilestone>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Couple {
    pub bride: String,
    pub groom: String,
    pub monogram: String,
    pub quote: String,
    pub hashtags: Vec<String>,
}

impl Couple {
    pub fn display_names(&self) -> String {
        format!("{} & {}", self.bride, self.groom)
    }
}

/// One celebration (ceremony or reception) with everything the event
/// cards and countdowns need.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CelebrationEvent {
    pub title: String,
    pub date: NaiveDateTime,
    pub date_label: String,
    pub time_label: String,
    pub venue: String,
    pub description: String,
    pub map_url: String,
    pub contact: FamilyContact,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FamilyContact {
    pub family: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriveSettings {
    /// Public, link-scoped API key; folder permissions are enforced by
    /// Drive itself.
    pub api_key: String,
    pub wedding_gallery: GallerySection,
    pub reception_gallery: GallerySection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GallerySection {
    pub folder_id: String,
    pub title: String,
    pub description: String,
    pub accent: String,
}

impl DriveSettings {
    pub fn gallery_config(&self, section: &GallerySection) -> drive_gallery::DriveGalleryConfig {
        drive_gallery::DriveGalleryConfig {
            api_key: self.api_key.clone(),
            folder_id: section.folder_id.clone(),
        }
    }
}

pub fn load() -> Result<SiteConfig, AppError> {
    toml::from_str(SITE_TOML).map_err(|e| AppError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_shipped_config_parses() {
        let site = load().unwrap();

        assert_eq!(site.couple.display_names(), "Akshara & Pradheesh");
        assert_eq!(site.couple.hashtags.len(), 3);
        assert!(!site.couple.quote.is_empty());
    }

    #[test]
    fn test_event_dates() {
        let site = load().unwrap();

        assert_eq!(site.wedding.date.year(), 2025);
        assert_eq!(site.wedding.date.month(), 8);
        assert_eq!(site.wedding.date.day(), 31);
        assert_eq!(site.wedding.date.hour(), 10);
        assert!(site.reception.date > site.wedding.date);
    }

    #[test]
    fn test_gallery_sections() {
        let site = load().unwrap();

        assert!(!site.drive.api_key.is_empty());
        assert!(!site.drive.wedding_gallery.folder_id.is_empty());
        assert!(!site.drive.reception_gallery.folder_id.is_empty());
        assert_ne!(
            site.drive.wedding_gallery.folder_id,
            site.drive.reception_gallery.folder_id
        );

        let config = site.drive.gallery_config(&site.drive.wedding_gallery);
        assert_eq!(config.api_key, site.drive.api_key);
    }

    #[test]
    fn test_timeline_complete() {
        let site = load().unwrap();

        assert_eq!(site.timeline.len(), 8);
        assert_eq!(site.timeline.first().unwrap().year, "2019");
        assert_eq!(site.timeline.last().unwrap().year, "2025");
        assert!(site.timeline.iter().all(|m| !m.image.is_empty()));
    }
}
