use crate::domain::ports::Delay;
use async_trait::async_trait;
use std::time::Duration;

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately regardless of the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateDelay;

#[async_trait]
impl Delay for ImmediateDelay {
    async fn wait(&self, _duration: Duration) {}
}
