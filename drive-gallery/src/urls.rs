//! URL construction and fallback chains for Drive-hosted images.
//!
//! Every fallback order is an ordered list of candidates evaluated in
//! sequence, so callers try each once and stop after the last.

use crate::models::DriveImage;

/// Thumbnail URL constructed from a file id, used when the API record
/// carries no thumbnail link.
pub fn default_thumbnail_url(id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={}&sz=w400-h300", id)
}

/// Direct view URL constructed from a file id.
pub fn direct_view_url(id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={}", id)
}

/// Export-download URL constructed from a file id.
pub fn export_download_url(id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", id)
}

/// The file's Drive page, used as the manual-download fallback target.
pub fn file_view_url(id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view", id)
}

/// Shareable link for a file.
pub fn share_url(id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view?usp=sharing", id)
}

/// Display candidates in preference order: thumbnail link, content link,
/// constructed direct-view URL. Empty links are skipped and duplicates
/// removed, so advancing past the final candidate means giving up, never
/// looping.
pub fn display_url_candidates(image: &DriveImage) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    for url in [
        image.thumbnail_link.clone(),
        image.web_content_link.clone(),
        direct_view_url(&image.id),
    ] {
        if !url.is_empty() && !candidates.contains(&url) {
            candidates.push(url);
        }
    }
    candidates
}

/// Download candidates in preference order: explicit content link, then
/// the constructed export-download URL.
pub fn download_url_candidates(image: &DriveImage) -> Vec<String> {
    let mut candidates = Vec::with_capacity(2);
    for url in [
        image.web_content_link.clone(),
        export_download_url(&image.id),
    ] {
        if !url.is_empty() && !candidates.contains(&url) {
            candidates.push(url);
        }
    }
    candidates
}

/// Sanitize an image name into a filename safe to hand to the browser's
/// download attribute. Falls back to a name derived from the id when the
/// display name has no usable characters.
pub fn safe_filename(name: &str, id: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_matches(['_', ' ', '.']).to_string();
    if cleaned.is_empty() {
        return format!("wedding-photo-{}.jpg", id);
    }

    if cleaned.rsplit('.').next().is_some_and(|ext| {
        !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
    }) && cleaned.contains('.')
    {
        cleaned
    } else {
        format!("{}.jpg", cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(thumbnail: &str, content: &str) -> DriveImage {
        DriveImage {
            id: "file1".to_string(),
            name: "photo.jpg".to_string(),
            web_view_link: String::new(),
            web_content_link: content.to_string(),
            thumbnail_link: thumbnail.to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn test_display_candidates_full_chain() {
        let candidates = display_url_candidates(&image(
            "https://example.com/thumb",
            "https://example.com/content",
        ));

        assert_eq!(
            candidates,
            vec![
                "https://example.com/thumb".to_string(),
                "https://example.com/content".to_string(),
                "https://drive.google.com/uc?export=view&id=file1".to_string(),
            ]
        );
    }

    #[test]
    fn test_display_candidates_skip_empty_and_duplicate_links() {
        let candidates = display_url_candidates(&image("", ""));
        assert_eq!(
            candidates,
            vec!["https://drive.google.com/uc?export=view&id=file1".to_string()]
        );

        // A thumbnail equal to the content link is listed once.
        let candidates =
            display_url_candidates(&image("https://example.com/a", "https://example.com/a"));
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_download_candidates_prefer_content_link() {
        let candidates = download_url_candidates(&image("", "https://example.com/content"));
        assert_eq!(candidates[0], "https://example.com/content");
        assert_eq!(
            candidates[1],
            "https://drive.google.com/uc?export=download&id=file1"
        );

        let candidates = download_url_candidates(&image("", ""));
        assert_eq!(
            candidates,
            vec!["https://drive.google.com/uc?export=download&id=file1".to_string()]
        );
    }

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("file1"),
            "https://drive.google.com/file/d/file1/view?usp=sharing"
        );
    }

    #[test]
    fn test_safe_filename() {
        assert_eq!(safe_filename("our day.jpg", "x"), "our day.jpg");
        assert_eq!(safe_filename("a/b\\c:d.png", "x"), "a_b_c_d.png");
        assert_eq!(safe_filename("   ", "x"), "wedding-photo-x.jpg");
        // No recognizable extension gets a default one.
        assert_eq!(safe_filename("ceremony", "x"), "ceremony.jpg");
    }
}
