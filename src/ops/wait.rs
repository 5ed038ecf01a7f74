// ABOUTME: Injectable time suspension used between status polls.
// ABOUTME: Production sleeps on the tokio timer; tests substitute instant fakes.

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Wait: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWait;

#[async_trait]
impl Wait for TokioWait {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
