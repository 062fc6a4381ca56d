//! Browser platform glue: anchor-click downloads, the native share sheet,
//! clipboard writes, and user-facing alerts.
//!
//! The real implementations exist on wasm only; on native targets every
//! entry point reports [`PlatformError::Unsupported`] so the crate builds
//! and tests run everywhere.

use crate::models::DriveImage;
use crate::urls;

#[derive(Debug)]
pub enum PlatformError {
    /// Not running in a browser.
    Unsupported,
    /// A DOM or browser API call failed.
    Browser(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Unsupported => write!(f, "Not supported on this platform"),
            PlatformError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Download an image via its best-available URL, named after the image.
///
/// On failure the item's Drive page opens in a new browsing context and
/// the user is told to download manually; if even that fails, a final
/// alert is shown. No tier is retried.
pub fn download_image(image: &DriveImage) {
    // The constructed export URL is always present, so the candidate
    // list is never empty.
    let url = urls::download_url_candidates(image)
        .into_iter()
        .next()
        .unwrap_or_default();
    let filename = urls::safe_filename(&image.name, &image.id);

    match save_link(&url, &filename) {
        Ok(()) => log::info!("Download initiated for {}", image.name),
        Err(e) => {
            log::error!("Error downloading image: {}", e);
            match open_in_new_tab(&urls::file_view_url(&image.id)) {
                Ok(()) => alert(
                    "Download failed. The image has been opened in a new tab. \
                     You can download it manually from there.",
                ),
                Err(fallback) => {
                    log::error!("Fallback also failed: {}", fallback);
                    alert("Download failed. Please try refreshing the page or contact support.");
                }
            }
        }
    }
}

/// Share an image's Drive link: native share sheet, then clipboard, then
/// a manual-copy prompt. Each tier is attempted at most once.
pub async fn share_image(image: &DriveImage) {
    let title = format!("Wedding Photo: {}", image.name);
    share_link(
        &title,
        "Check out this beautiful photo from our wedding!",
        &urls::share_url(&image.id),
    )
    .await;
}

/// Three-tier share for any URL.
pub async fn share_link(title: &str, text: &str, url: &str) {
    if share_supported() {
        match native_share(title, text, url).await {
            Ok(()) => {
                log::info!("Shared successfully via native share sheet");
                return;
            }
            Err(e) => log::warn!("Native share failed: {}", e),
        }
    }

    match copy_to_clipboard(url).await {
        Ok(()) => alert("Photo link copied to clipboard! Share it with your friends."),
        Err(e) => {
            log::warn!("Clipboard access failed: {}", e);
            prompt_copy("Copy this link to share the photo:", url);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::PlatformError;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn browser(value: JsValue) -> PlatformError {
        PlatformError::Browser(format!("{:?}", value))
    }

    fn window() -> Result<web_sys::Window, PlatformError> {
        web_sys::window().ok_or(PlatformError::Unsupported)
    }

    /// Synthesized anchor click with a download attribute.
    pub fn save_link(url: &str, filename: &str) -> Result<(), PlatformError> {
        let window = window()?;
        let document = window.document().ok_or(PlatformError::Unsupported)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser)?
            .dyn_into()
            .map_err(|_| PlatformError::Unsupported)?;
        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.set_target("_blank");

        let body = document.body().ok_or(PlatformError::Unsupported)?;
        body.append_child(&anchor).map_err(browser)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }

    pub fn open_in_new_tab(url: &str) -> Result<(), PlatformError> {
        window()?
            .open_with_url_and_target(url, "_blank")
            .map_err(browser)?
            .ok_or_else(|| PlatformError::Browser("Popup blocked".to_string()))?;
        Ok(())
    }

    pub fn share_supported() -> bool {
        web_sys::window().is_some_and(|w| {
            js_sys::Reflect::has(w.navigator().as_ref(), &JsValue::from_str("share"))
                .unwrap_or(false)
        })
    }

    pub async fn native_share(title: &str, text: &str, url: &str) -> Result<(), PlatformError> {
        let data = web_sys::ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(url);

        let promise = window()?.navigator().share_with_data(&data);
        JsFuture::from(promise).await.map_err(browser)?;
        Ok(())
    }

    pub async fn copy_to_clipboard(text: &str) -> Result<(), PlatformError> {
        let navigator = window()?.navigator();
        if !js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("clipboard"))
            .unwrap_or(false)
        {
            return Err(PlatformError::Unsupported);
        }

        let promise = navigator.clipboard().write_text(text);
        JsFuture::from(promise).await.map_err(browser)?;
        Ok(())
    }

    pub fn alert(message: &str) {
        if let Ok(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn prompt_copy(message: &str, url: &str) {
        if let Ok(window) = window() {
            let _ = window.prompt_with_message_and_default(message, url);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{
    alert, copy_to_clipboard, native_share, open_in_new_tab, prompt_copy, save_link,
    share_supported,
};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::PlatformError;

    pub fn save_link(_url: &str, _filename: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    pub fn open_in_new_tab(_url: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    pub fn share_supported() -> bool {
        false
    }

    pub async fn native_share(_title: &str, _text: &str, _url: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    pub async fn copy_to_clipboard(_text: &str) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    pub fn alert(message: &str) {
        log::warn!("alert (no browser): {}", message);
    }

    pub fn prompt_copy(message: &str, url: &str) {
        log::warn!("prompt (no browser): {} {}", message, url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{
    alert, copy_to_clipboard, native_share, open_in_new_tab, prompt_copy, save_link,
    share_supported,
};
