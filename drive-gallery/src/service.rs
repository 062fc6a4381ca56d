//! Folder listing client: pagination, throttle-friendly retry, error taxonomy.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{DriveImage, FileListResponse};

/// Error type for folder listing operations
#[derive(Debug)]
pub enum DriveError {
    /// The folder is not shared with link-level read access (HTTP 403).
    PermissionDenied,
    /// Rate limit retries exhausted (HTTP 429 past the retry budget).
    RateLimited,
    /// Any other non-2xx status.
    Http(u16),
    /// Transport-level failure before a status was received.
    Network(String),
    /// The response body did not parse as a file listing.
    Json(String),
}

impl std::fmt::Display for DriveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriveError::PermissionDenied => write!(f, "Permission denied (folder not public)"),
            DriveError::RateLimited => write!(f, "Rate limit exceeded"),
            DriveError::Http(status) => write!(f, "Unexpected status code: {}", status),
            DriveError::Network(msg) => write!(f, "Network error: {}", msg),
            DriveError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for DriveError {}

impl DriveError {
    /// Message shown in the gallery's error banner.
    pub fn user_message(&self) -> String {
        match self {
            DriveError::PermissionDenied => {
                "Access denied. Please ensure the Google Drive folder is publicly shared \
                 with \"Anyone with the link can view\"."
                    .to_string()
            }
            DriveError::RateLimited => {
                "API rate limit exceeded. Please try again later.".to_string()
            }
            DriveError::Http(status) => format!("Failed to fetch images: HTTP {}", status),
            DriveError::Network(_) | DriveError::Json(_) => {
                "Failed to load images from Google Drive. Please try again.".to_string()
            }
        }
    }
}

/// Drive v3 listing endpoint.
pub const LIST_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";

const FILE_FIELDS: &str =
    "files(id,name,webViewLink,webContentLink,thumbnailLink,mimeType),nextPageToken";

/// Retries of a single page on 429 before the whole operation fails.
const MAX_PAGE_RETRIES: u32 = 3;

/// Backoff before retry `attempt` (0-based) of a rate-limited page:
/// 2s, 4s, 8s.
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(2000u64.saturating_mul(2u64.saturating_pow(attempt)))
}

/// Fetches one page of a folder listing. Implementations map HTTP status
/// codes onto [`DriveError`]; retry policy lives in [`DriveListService`].
#[async_trait(?Send)]
pub trait ListTransport {
    async fn fetch_page(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> Result<FileListResponse, DriveError>;
}

/// Suspends the current logical flow. Injected so tests observe backoff
/// delays without real timers.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper: browser timer on wasm, tokio timer elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaySleeper;

#[async_trait(?Send)]
impl Sleeper for DelaySleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

/// HTTP transport against the real listing API.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: String) -> Result<Self, DriveError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("DriveGallery/0.1.0")
            .build()
            .map_err(|e| DriveError::Network(format!("Client build failed: {}", e)))?;

        // The wasm backend exposes no timeout knobs; the browser's own
        // fetch behavior applies.
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Ok(Self { client, api_key })
    }
}

#[async_trait(?Send)]
impl ListTransport for HttpTransport {
    async fn fetch_page(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> Result<FileListResponse, DriveError> {
        let query = format!("'{}' in parents and mimeType contains 'image/'", folder_id);

        let mut request = self.client.get(LIST_ENDPOINT).query(&[
            ("q", query.as_str()),
            ("fields", FILE_FIELDS),
            ("key", self.api_key.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DriveError::Network(format!("Request failed: {}", e)))?;

        match response.status().as_u16() {
            200 => response
                .json::<FileListResponse>()
                .await
                .map_err(|e| DriveError::Json(format!("Failed to parse response: {}", e))),
            403 => Err(DriveError::PermissionDenied),
            429 => Err(DriveError::RateLimited),
            status => Err(DriveError::Http(status)),
        }
    }
}

/// Folder listing service.
///
/// Accumulates every image record of a folder across pages, retrying
/// rate-limited pages with bounded exponential backoff. Permission and
/// generic failures surface immediately.
pub struct DriveListService<T: ListTransport, S: Sleeper> {
    transport: T,
    sleeper: S,
}

/// Service wired to the real API and timer.
pub type HttpDriveListService = DriveListService<HttpTransport, DelaySleeper>;

impl DriveListService<HttpTransport, DelaySleeper> {
    pub fn http(api_key: &str) -> Result<Self, DriveError> {
        Ok(Self::new(HttpTransport::new(api_key.to_string())?, DelaySleeper))
    }
}

impl<T: ListTransport, S: Sleeper> DriveListService<T, S> {
    pub fn new(transport: T, sleeper: S) -> Self {
        Self { transport, sleeper }
    }

    /// List every image in the folder, in response order.
    ///
    /// An empty folder is a valid outcome and returns an empty list.
    pub async fn list_folder_images(&self, folder_id: &str) -> Result<Vec<DriveImage>, DriveError> {
        let mut images = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .fetch_page_with_retry(folder_id, page_token.as_deref())
                .await?;

            images.extend(page.files.into_iter().filter_map(DriveImage::from_record));

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        log::debug!("Listed {} images in folder {}", images.len(), folder_id);
        Ok(images)
    }

    /// Whether the folder currently has at least one image. Looks at the
    /// first page only; a folder with any content has a non-empty first
    /// page.
    pub async fn folder_has_images(&self, folder_id: &str) -> Result<bool, DriveError> {
        let page = self.fetch_page_with_retry(folder_id, None).await?;
        Ok(page
            .files
            .iter()
            .any(|record| record.id.as_deref().is_some_and(|id| !id.is_empty())))
    }

    /// Fetch one page, retrying only that page on 429. The retry counter
    /// starts fresh for every page.
    async fn fetch_page_with_retry(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
    ) -> Result<FileListResponse, DriveError> {
        let mut attempt: u32 = 0;
        loop {
            match self.transport.fetch_page(folder_id, page_token).await {
                Err(DriveError::RateLimited) if attempt < MAX_PAGE_RETRIES => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "Rate limited on folder {}. Retrying in {}ms...",
                        folder_id,
                        delay.as_millis()
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DriveFileRecord;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<FileListResponse, DriveError>>>,
        seen_tokens: RefCell<Vec<Option<String>>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<FileListResponse, DriveError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                seen_tokens: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ListTransport for ScriptedTransport {
        async fn fetch_page(
            &self,
            _folder_id: &str,
            page_token: Option<&str>,
        ) -> Result<FileListResponse, DriveError> {
            self.seen_tokens
                .borrow_mut()
                .push(page_token.map(str::to_string));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(FileListResponse::default()))
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        slept: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    fn page(ids: &[&str], token: Option<&str>) -> FileListResponse {
        FileListResponse {
            files: ids
                .iter()
                .map(|id| DriveFileRecord {
                    id: Some(id.to_string()),
                    name: Some(format!("{}.jpg", id)),
                    ..Default::default()
                })
                .collect(),
            next_page_token: token.map(str::to_string),
        }
    }

    fn service(
        responses: Vec<Result<FileListResponse, DriveError>>,
    ) -> DriveListService<ScriptedTransport, RecordingSleeper> {
        DriveListService::new(ScriptedTransport::new(responses), RecordingSleeper::default())
    }

    #[test]
    fn test_backoff_delays() {
        assert_eq!(backoff_delay(0), Duration::from_millis(2000));
        assert_eq!(backoff_delay(1), Duration::from_millis(4000));
        assert_eq!(backoff_delay(2), Duration::from_millis(8000));
    }

    #[tokio::test]
    async fn test_accumulates_all_pages_in_order() {
        let svc = service(vec![
            Ok(page(&["a", "b"], Some("t1"))),
            Ok(page(&["c"], Some("t2"))),
            Ok(page(&["d", "e"], None)),
        ]);

        let images = svc.list_folder_images("folder").await.unwrap();

        let ids: Vec<&str> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(
            *svc.transport.seen_tokens.borrow(),
            vec![None, Some("t1".to_string()), Some("t2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_folder_is_loaded_not_error() {
        let svc = service(vec![Ok(page(&[], None))]);
        let images = svc.list_folder_images("folder").await.unwrap();
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_retries_with_doubling_backoff() {
        let svc = service(vec![
            Err(DriveError::RateLimited),
            Err(DriveError::RateLimited),
            Err(DriveError::RateLimited),
            Ok(page(&["a"], None)),
        ]);

        let images = svc.list_folder_images("folder").await.unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(
            *svc.sleeper.slept.borrow(),
            vec![
                Duration::from_millis(2000),
                Duration::from_millis(4000),
                Duration::from_millis(8000),
            ]
        );
    }

    #[tokio::test]
    async fn test_fourth_rate_limit_is_terminal() {
        let svc = service(vec![
            Err(DriveError::RateLimited),
            Err(DriveError::RateLimited),
            Err(DriveError::RateLimited),
            Err(DriveError::RateLimited),
        ]);

        let err = svc.list_folder_images("folder").await.unwrap_err();

        assert!(matches!(err, DriveError::RateLimited));
        assert_eq!(svc.sleeper.slept.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_retry_budget_is_per_page() {
        let svc = service(vec![
            Err(DriveError::RateLimited),
            Ok(page(&["a"], Some("t1"))),
            Err(DriveError::RateLimited),
            Ok(page(&["b"], None)),
        ]);

        let images = svc.list_folder_images("folder").await.unwrap();

        assert_eq!(images.len(), 2);
        // Fresh counter per page, so both retries use the first delay.
        assert_eq!(
            *svc.sleeper.slept.borrow(),
            vec![Duration::from_millis(2000), Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn test_permission_denied_is_immediate() {
        let svc = service(vec![Err(DriveError::PermissionDenied)]);

        let err = svc.list_folder_images("folder").await.unwrap_err();

        assert!(matches!(err, DriveError::PermissionDenied));
        assert!(svc.sleeper.slept.borrow().is_empty());
        assert_eq!(svc.transport.seen_tokens.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_is_immediate() {
        let svc = service(vec![Err(DriveError::Http(500))]);

        let err = svc.list_folder_images("folder").await.unwrap_err();

        assert!(matches!(err, DriveError::Http(500)));
        assert!(svc.sleeper.slept.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_records_without_id_are_dropped() {
        let mut listing = page(&["a"], None);
        listing.files.push(DriveFileRecord::default());

        let svc = service(vec![Ok(listing)]);
        let images = svc.list_folder_images("folder").await.unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "a");
    }

    #[tokio::test]
    async fn test_folder_probe() {
        let svc = service(vec![Ok(page(&["a"], Some("t1")))]);
        assert!(svc.folder_has_images("folder").await.unwrap());

        let svc = service(vec![Ok(page(&[], None))]);
        assert!(!svc.folder_has_images("folder").await.unwrap());
    }
}
