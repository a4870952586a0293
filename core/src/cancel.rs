use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

/// Cooperative cancellation for a wake request.
///
/// Clones share one flag. Senders check it before every transmission; a transmission already
/// in flight is allowed to finish. Tasks that are only waiting can await [`cancelled`](Self::cancelled)
/// instead of polling.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone.
    pub async fn cancelled(&self) {
        loop {
            // Registered before the flag is read, so a concurrent cancel cannot be missed.
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::time::timeout;

    #[test]
    fn clones_share_the_flag() {
        let token = Cancellation::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());

        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_wakes_a_waiting_task() {
        let token = Cancellation::new();
        let waiter = token.clone();
        let handle = tokio::spawn(async move { waiter.cancelled().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();

        timeout(Duration::from_secs(2), handle)
            .await
            .expect("waiter was not woken")
            .unwrap();
    }

    #[tokio::test]
    async fn cancelled_returns_at_once_when_already_cancelled() {
        let token = Cancellation::new();
        token.cancel();

        assert!(timeout(Duration::from_millis(100), token.cancelled()).await.is_ok());
    }

    #[tokio::test]
    async fn cancelled_stays_pending_without_cancel() {
        let token = Cancellation::new();
        assert!(timeout(Duration::from_millis(50), token.cancelled()).await.is_err());
    }
}
