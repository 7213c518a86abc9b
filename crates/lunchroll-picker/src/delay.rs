//! The wait between nearby-search pages.

use std::future::Future;
use std::time::Duration;

/// Blocks pipeline progress for a fixed duration. Injected so tests can
/// observe the waits without sleeping.
pub trait PageDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl PageDelay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
