//! Timer shim: browser timers on wasm, tokio elsewhere.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
