//! Cancellable debounce window for coalescing fetch bursts.
//!
//! Rapid filter changes would otherwise fire one aggregate-production POST
//! per keystroke. Each caller arms a fresh window, cancelling whatever was
//! pending; only the call that survives the quiet period proceeds, and only
//! its outcome reaches a caller.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// A cancel-and-replace debounce timer.
///
/// Shared by reference across callers; the interior mutex is held only long
/// enough to swap tokens, never across an await.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    current: Mutex<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            current: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending window and open a new one for this caller.
    fn arm(&self) -> CancellationToken {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        current.cancel();
        *current = CancellationToken::new();
        current.clone()
    }

    /// Wait out the quiet period.
    ///
    /// Returns `true` if this caller survived (no newer call arrived during
    /// the delay) and should proceed; `false` if it was superseded.
    pub async fn quiesce(&self) -> bool {
        let token = self.arm();

        tokio::select! {
            () = token.cancelled() => false,
            () = tokio::time::sleep(self.delay) => !token.is_cancelled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_lone_caller_survives() {
        let debouncer = Debouncer::from_millis(10);
        assert!(debouncer.quiesce().await);
    }

    #[tokio::test]
    async fn test_newer_call_supersedes_pending_one() {
        let debouncer = Arc::new(Debouncer::from_millis(50));

        let first = tokio::spawn({
            let d = Arc::clone(&debouncer);
            async move { d.quiesce().await }
        });

        // Let the first call arm its window, then supersede it.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = debouncer.quiesce().await;

        assert!(!first.await.unwrap(), "superseded call must not proceed");
        assert!(second, "final call proceeds");
    }

    #[tokio::test]
    async fn test_sequential_calls_each_survive() {
        let debouncer = Debouncer::from_millis(5);
        assert!(debouncer.quiesce().await);
        assert!(debouncer.quiesce().await);
    }
}
