//! Staged-photo handling for the upload page.
//!
//! There is no upload backend; submission waits out a fixed delay and
//! reports success, which is all the page needs. The staging list and
//! its image filter are real and tested.

use base64::{engine::general_purpose, Engine as _};

use crate::services::timer;

/// How long a simulated upload takes.
pub const UPLOAD_SIMULATION_MS: u64 = 3000;

/// One picked file, ready for preview and (pretend) upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedPhoto {
    pub name: String,
    pub data_url: String,
}

/// Mime type guessed from the filename extension; `None` for anything
/// that is not an image we can preview.
pub fn image_mime_type(filename: &str) -> Option<&'static str> {
    let extension = filename.rsplit('.').next()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Inline preview URL for picked bytes.
pub fn preview_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Stage a picked file. Non-image files are skipped; returns whether the
/// file was accepted.
pub fn stage_file(staged: &mut Vec<StagedPhoto>, filename: &str, bytes: &[u8]) -> bool {
    match image_mime_type(filename) {
        Some(mime_type) => {
            staged.push(StagedPhoto {
                name: filename.to_string(),
                data_url: preview_data_url(mime_type, bytes),
            });
            true
        }
        None => {
            log::debug!("Skipping non-image file {}", filename);
            false
        }
    }
}

pub fn remove_photo(staged: &mut Vec<StagedPhoto>, index: usize) {
    if index < staged.len() {
        staged.remove(index);
    }
}

/// Pretend to upload the staged photos.
pub async fn submit_photos(count: usize) -> usize {
    log::info!("Uploading {} photos...", count);
    timer::sleep_ms(UPLOAD_SIMULATION_MS).await;
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_filter() {
        assert_eq!(image_mime_type("IMG_0042.JPG"), Some("image/jpeg"));
        assert_eq!(image_mime_type("dance.webp"), Some("image/webp"));
        assert_eq!(image_mime_type("speech.mp4"), None);
        assert_eq!(image_mime_type("README"), None);
    }

    #[test]
    fn test_stage_file_skips_non_images() {
        let mut staged = Vec::new();

        assert!(stage_file(&mut staged, "a.png", &[1, 2, 3]));
        assert!(!stage_file(&mut staged, "notes.txt", &[1, 2, 3]));

        assert_eq!(staged.len(), 1);
        assert!(staged[0].data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_remove_photo_by_index() {
        let mut staged = Vec::new();
        stage_file(&mut staged, "a.jpg", &[1]);
        stage_file(&mut staged, "b.jpg", &[2]);

        remove_photo(&mut staged, 0);
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].name, "b.jpg");

        // Out-of-range removals are ignored.
        remove_photo(&mut staged, 5);
        assert_eq!(staged.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_reports_count() {
        assert_eq!(submit_photos(4).await, 4);
    }
}
