//! Guest wish persistence: a single browser-local-storage key holding a
//! JSON array, newest first. Storage sits behind [`WishStore`] so tests
//! (and native builds) run against an in-memory store.

use crate::error::AppError;
use crate::models::GuestWish;

pub const STORAGE_KEY: &str = "guest_wishes";
pub const WISHES_PER_PAGE: usize = 3;

pub trait WishStore {
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&self, payload: &str) -> Result<(), AppError>;
}

/// localStorage-backed store. Outside a browser it holds nothing and
/// saves are dropped with a log line, keeping the board session-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl WishStore for BrowserStore {
    fn load_raw(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }

    fn save_raw(&self, payload: &str) -> Result<(), AppError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(STORAGE_KEY, payload)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl WishStore for BrowserStore {
    fn load_raw(&self) -> Option<String> {
        None
    }

    fn save_raw(&self, _payload: &str) -> Result<(), AppError> {
        log::debug!("No browser storage on this target, keeping wishes in memory");
        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl WishStore for MemoryStore {
    fn load_raw(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    fn save_raw(&self, payload: &str) -> Result<(), AppError> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Load the persisted list. An unreadable payload is treated as empty
/// rather than breaking the board.
pub fn load_wishes(store: &dyn WishStore) -> Vec<GuestWish> {
    match store.load_raw() {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Stored wishes unreadable, starting fresh: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}

/// Validate, prepend and persist a new wish. Only the message is
/// required; a blank name is stored as "Anonymous". Persistence failures
/// are logged and the in-memory list still updates.
pub fn submit_wish(
    store: &dyn WishStore,
    wishes: &mut Vec<GuestWish>,
    name: &str,
    message: &str,
    relationship: &str,
) -> Result<(), AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation(
            "Please write a message before sending.".to_string(),
        ));
    }

    wishes.insert(0, GuestWish::new(name, message, relationship));

    match serde_json::to_string(wishes) {
        Ok(payload) => {
            if let Err(e) = store.save_raw(&payload) {
                log::warn!("Could not persist wishes: {}", e);
            }
        }
        Err(e) => log::warn!("Could not serialize wishes: {}", e),
    }

    Ok(())
}

/// Number of display pages; always at least one so the board renders.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(WISHES_PER_PAGE).max(1)
}

pub fn page_of(wishes: &[GuestWish], page: usize) -> &[GuestWish] {
    let start = (page * WISHES_PER_PAGE).min(wishes.len());
    let end = (start + WISHES_PER_PAGE).min(wishes.len());
    &wishes[start..end]
}

pub fn next_page(current: usize, total: usize) -> usize {
    (current + 1) % total
}

pub fn prev_page(current: usize, total: usize) -> usize {
    (current + total - 1) % total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wish(name: &str) -> GuestWish {
        GuestWish::new(name, "message", "")
    }

    #[test]
    fn test_submit_prepends_and_persists() {
        let store = MemoryStore::default();
        let mut wishes = vec![wish("First")];

        submit_wish(&store, &mut wishes, "Second", "Wonderful day!", "Friend").unwrap();

        assert_eq!(wishes.len(), 2);
        assert_eq!(wishes[0].name, "Second");

        let reloaded = load_wishes(&store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[0].name, "Second");
        assert_eq!(reloaded[1].name, "First");
    }

    #[test]
    fn test_submit_defaults_anonymous() {
        let store = MemoryStore::default();
        let mut wishes = Vec::new();

        submit_wish(&store, &mut wishes, "", "Best wishes to you both", "").unwrap();

        assert_eq!(wishes[0].name, "Anonymous");
        assert_eq!(load_wishes(&store)[0].name, "Anonymous");
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let store = MemoryStore::default();
        let mut wishes = Vec::new();

        let result = submit_wish(&store, &mut wishes, "Meera", "   ", "");

        assert!(result.is_err());
        assert!(wishes.is_empty());
        assert!(store.load_raw().is_none());
    }

    #[test]
    fn test_corrupt_payload_starts_fresh() {
        let store = MemoryStore::default();
        store.save_raw("not json at all").unwrap();

        assert!(load_wishes(&store).is_empty());
    }

    #[test]
    fn test_pagination_slices() {
        let wishes: Vec<GuestWish> = (0..7).map(|i| wish(&format!("Guest {}", i))).collect();

        assert_eq!(total_pages(wishes.len()), 3);
        assert_eq!(page_of(&wishes, 0).len(), 3);
        assert_eq!(page_of(&wishes, 2).len(), 1);
        assert_eq!(page_of(&wishes, 2)[0].name, "Guest 6");
    }

    #[test]
    fn test_empty_board_has_one_page() {
        assert_eq!(total_pages(0), 1);
        let wishes: Vec<GuestWish> = Vec::new();
        assert!(page_of(&wishes, 0).is_empty());
    }

    #[test]
    fn test_page_navigation_wraps() {
        assert_eq!(next_page(2, 3), 0);
        assert_eq!(next_page(0, 3), 1);
        assert_eq!(prev_page(0, 3), 2);
        assert_eq!(prev_page(1, 3), 0);
    }
}
