use serde::Deserialize;

use crate::urls;

/// One image file visible in a shared Drive folder.
///
/// Produced from raw API records via [`DriveImage::from_record`]. The `id`
/// is the only field guaranteed non-empty; the link fields may be empty
/// strings when the API omits them, in which case the URL helpers in
/// [`crate::urls`] fall back to constructed URLs keyed by the id.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveImage {
    pub id: String,
    pub name: String,
    pub web_view_link: String,
    pub web_content_link: String,
    pub thumbnail_link: String,
    pub mime_type: String,
}

impl DriveImage {
    /// Convert a raw API file record, filling defaults for missing fields.
    ///
    /// Returns `None` for records without an id; nothing else about the
    /// record is usable without one.
    pub fn from_record(record: DriveFileRecord) -> Option<Self> {
        let id = record.id.filter(|id| !id.is_empty())?;
        let thumbnail_link = record
            .thumbnail_link
            .filter(|link| !link.is_empty())
            .unwrap_or_else(|| urls::default_thumbnail_url(&id));

        Some(Self {
            name: record.name.unwrap_or_else(|| "Untitled".to_string()),
            web_view_link: record.web_view_link.unwrap_or_default(),
            web_content_link: record.web_content_link.unwrap_or_default(),
            thumbnail_link,
            mime_type: record.mime_type.unwrap_or_else(|| "image/jpeg".to_string()),
            id,
        })
    }
}

/// Raw file record as returned by the Drive v3 `files` listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFileRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub web_view_link: Option<String>,
    pub web_content_link: Option<String>,
    pub thumbnail_link: Option<String>,
    pub mime_type: Option<String>,
}

/// One page of a folder listing. `next_page_token` is present while more
/// pages remain.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<DriveFileRecord>,
    pub next_page_token: Option<String>,
}

/// Lifecycle of one gallery fetch, driven solely by the listing operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<DriveImage>),
    Failed(String),
}

/// Configuration for one gallery section.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveGalleryConfig {
    pub api_key: String,
    pub folder_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_fills_defaults() {
        let record = DriveFileRecord {
            id: Some("abc123".to_string()),
            ..Default::default()
        };

        let image = DriveImage::from_record(record).unwrap();

        assert_eq!(image.id, "abc123");
        assert_eq!(image.name, "Untitled");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.web_view_link, "");
        assert_eq!(image.web_content_link, "");
        assert!(image.thumbnail_link.contains("abc123"));
    }

    #[test]
    fn test_from_record_without_id_is_dropped() {
        assert!(DriveImage::from_record(DriveFileRecord::default()).is_none());

        let empty_id = DriveFileRecord {
            id: Some(String::new()),
            ..Default::default()
        };
        assert!(DriveImage::from_record(empty_id).is_none());
    }

    #[test]
    fn test_file_list_response_parses_page_token() {
        let json = r#"{
            "files": [
                {"id": "a", "name": "one.jpg", "mimeType": "image/jpeg"},
                {"id": "b", "webViewLink": "https://example.com/view"}
            ],
            "nextPageToken": "token-1"
        }"#;

        let page: FileListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(page.files.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("token-1"));
        assert_eq!(page.files[0].name.as_deref(), Some("one.jpg"));
        assert_eq!(
            page.files[1].web_view_link.as_deref(),
            Some("https://example.com/view")
        );
    }

    #[test]
    fn test_file_list_response_last_page() {
        let page: FileListResponse = serde_json::from_str(r#"{"files": []}"#).unwrap();
        assert!(page.files.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
