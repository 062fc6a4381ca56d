//! # Drive Gallery
//!
//! A reusable gallery library for images hosted in a shared Google Drive
//! folder.
//!
//! This crate provides the machinery for "live" photo galleries:
//! - Folder listing with pagination, a courtesy throttle, and bounded
//!   exponential-backoff retry on rate limiting
//! - An injectable request scheduler so several galleries on one page
//!   share a single request queue
//! - Layered URL fallbacks for display, download, and sharing
//! - Browser glue for anchor downloads, the native share sheet, and the
//!   clipboard
//!
//! ## Platform Separation
//!
//! Listing and URL logic is platform-neutral and fully testable without a
//! network or timers. Browser-only behavior lives in [`platform`] and is
//! stubbed out on native targets.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use drive_gallery::{DriveGalleryConfig, HttpDriveListService, RequestScheduler};
//!
//! let scheduler = RequestScheduler::new();
//! let service = HttpDriveListService::http("api-key")?;
//! let images = scheduler
//!     .run(|| async { service.list_folder_images("folder-id").await })
//!     .await?;
//! ```

pub mod models;
pub mod platform;
pub mod scheduler;
pub mod service;
pub mod urls;

#[cfg(feature = "components")]
pub mod components;

pub use models::{DriveFileRecord, DriveGalleryConfig, DriveImage, FetchState, FileListResponse};
pub use platform::PlatformError;
pub use scheduler::{Clock, MonotonicClock, RequestScheduler, MIN_REQUEST_GAP_MS};
pub use service::{
    backoff_delay, DelaySleeper, DriveError, DriveListService, HttpDriveListService, HttpTransport,
    ListTransport, Sleeper,
};
pub use urls::{
    display_url_candidates, download_url_candidates, safe_filename, share_url,
};

#[cfg(feature = "components")]
pub use components::{probe_folder, DriveGallery, FallbackImage};
