use std::time::Duration;

use async_trait::async_trait;
use desa::Timer;

/// Delay source for the login form: browser timers on wasm, tokio elsewhere.
pub struct BrowserTimer;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
