use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Visibility of the quick menu. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct ContextMenu {
    visible: Arc<AtomicBool>,
}

impl ContextMenu {
    pub fn is_open(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Shows the menu and spawns a timer that hides it after [`AUTO_CLOSE_DELAY`].
    ///
    /// Timers are never cancelled: every call starts an independent one, so a
    /// menu reopened shortly after a previous open is hidden by the older timer.
    /// Must be called from within a tokio runtime.
    pub fn open(&self) {
        self.visible.store(true, Ordering::SeqCst);
        debug!("Context menu opened");

        let visible = self.visible.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_CLOSE_DELAY).await;
            visible.store(false, Ordering::SeqCst);
            debug!("Context menu auto-closed");
        });
    }

    pub fn close(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn opens_immediately_and_closes_after_three_seconds() {
        let menu = ContextMenu::default();
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.is_open());

        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert!(menu.is_open());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!menu.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn reopening_does_not_cancel_the_earlier_timer() {
        let menu = ContextMenu::default();

        menu.open();
        tokio::time::sleep(Duration::from_secs(2)).await;
        menu.open();
        assert!(menu.is_open());

        // The first timer fires at 3s even though the menu was reopened at 2s.
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(!menu.is_open());
    }

    #[tokio::test]
    async fn can_be_closed_manually() {
        let menu = ContextMenu::default();
        menu.open();
        menu.close();
        assert!(!menu.is_open());
    }
}
