//! Inline banners with timed dismissal.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio::runtime::Handle;

use crate::presenter::Presenter;

/// Unique identifier for a shown banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

impl BannerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__banner_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// A banner shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    /// Heading line
    pub title: String,
    /// Detail text
    pub body: String,
}

impl Banner {
    pub fn new(kind: BannerKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: BannerId::new(),
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Banner shown after a successful submission.
    pub fn success() -> Self {
        Self::new(
            BannerKind::Success,
            "Message Sent Successfully!",
            "Thank you for contacting us. We'll get back to you within 24 hours.",
        )
    }

    /// Banner shown after a failed submission.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Failure, "Error Sending Message", message)
    }
}

/// Tracks visible banners and removes them after their lifetime.
///
/// Removal is idempotent: a banner that was already dismissed (by hand or by
/// its timer) is skipped without touching the presenter again.
#[derive(Clone)]
pub struct BannerBoard {
    visible: Arc<DashMap<BannerId, Banner>>,
    presenter: Arc<dyn Presenter>,
}

impl BannerBoard {
    pub fn new(presenter: Arc<dyn Presenter>) -> Self {
        Self {
            visible: Arc::new(DashMap::new()),
            presenter,
        }
    }

    /// Show a banner and schedule its dismissal after `ttl`.
    ///
    /// Without a tokio runtime the banner stays until [`dismiss`](Self::dismiss) is called.
    pub fn show(&self, banner: Banner, ttl: Duration) -> BannerId {
        let id = banner.id;
        self.presenter.show_banner(&banner);
        self.visible.insert(id, banner);

        match Handle::try_current() {
            Ok(handle) => {
                let board = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    board.dismiss(id);
                });
            }
            Err(_) => {
                log::warn!("BannerBoard: no runtime, banner {} will not auto-dismiss", id);
            }
        }

        id
    }

    /// Remove a banner. Returns false if it was already gone.
    pub fn dismiss(&self, id: BannerId) -> bool {
        if self.visible.remove(&id).is_some() {
            self.presenter.dismiss_banner(id);
            log::debug!("BannerBoard: dismissed {}", id);
            true
        } else {
            false
        }
    }

    /// Whether a banner is still visible.
    pub fn is_visible(&self, id: BannerId) -> bool {
        self.visible.contains_key(&id)
    }

    /// Number of visible banners.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::presenter::FieldState;

    #[derive(Default)]
    struct Recorder {
        shown: Mutex<Vec<BannerId>>,
        dismissed: Mutex<Vec<BannerId>>,
    }

    impl Presenter for Recorder {
        fn decorate(&self, _field: &str, _state: &FieldState) {}

        fn show_banner(&self, banner: &Banner) {
            self.shown.lock().unwrap().push(banner.id);
        }

        fn dismiss_banner(&self, id: BannerId) {
            self.dismissed.lock().unwrap().push(id);
        }
    }

    #[test]
    fn test_double_dismiss_is_noop() {
        let recorder = Arc::new(Recorder::default());
        let board = BannerBoard::new(recorder.clone());

        let id = board.show(Banner::failure("Network error"), Duration::from_secs(5));
        assert!(board.is_visible(id));
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert_eq!(recorder.dismissed.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_ttl() {
        let recorder = Arc::new(Recorder::default());
        let board = BannerBoard::new(recorder.clone());

        let id = board.show(Banner::success(), Duration::from_millis(5000));
        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(board.is_visible(id));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!board.is_visible(id));
        assert_eq!(*recorder.dismissed.lock().unwrap(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_after_manual_dismiss() {
        let recorder = Arc::new(Recorder::default());
        let board = BannerBoard::new(recorder.clone());

        let id = board.show(Banner::success(), Duration::from_millis(100));
        assert!(board.dismiss(id));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(board.is_empty());
        assert_eq!(recorder.dismissed.lock().unwrap().len(), 1);
        assert_eq!(recorder.shown.lock().unwrap().len(), 1);
    }
}
