//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use contactform_lib::draft::{DraftStore, MemoryDraftStore};
use contactform_lib::error::SubmissionError;
use contactform_lib::notify::{Banner, BannerId, Notification, NotificationSink};
use contactform_lib::presenter::{FieldState, Presenter};
use contactform_lib::transport::{Submission, SubmissionTransport};
use contactform_lib::{FieldKind, FieldSpec, FormConfig, FormValidator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Decorate(String, FieldState),
    Value(String, String),
    Loading(bool, String),
    Banner(Banner),
    Dismiss(BannerId),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Shown>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn decorations(&self, field: &str) -> Vec<FieldState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Decorate(f, state) if f == field => Some(state),
                _ => None,
            })
            .collect()
    }

    pub fn loading(&self) -> Vec<(bool, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Loading(on, label) => Some((on, label)),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Shown::Banner(banner) => Some(banner),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Shown) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn decorate(&self, field: &str, state: &FieldState) {
        self.push(Shown::Decorate(field.to_string(), state.clone()));
    }

    fn set_value(&self, field: &str, value: &str) {
        self.push(Shown::Value(field.to_string(), value.to_string()));
    }

    fn set_loading(&self, loading: bool, label: &str) {
        self.push(Shown::Loading(loading, label.to_string()));
    }

    fn show_banner(&self, banner: &Banner) {
        self.push(Shown::Banner(banner.clone()));
    }

    fn dismiss_banner(&self, id: BannerId) {
        self.push(Shown::Dismiss(id));
    }
}

#[derive(Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Transport that counts calls, waits `delay` and fails while `failing` is set.
#[derive(Default)]
pub struct FakeTransport {
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
    pub delay: Duration,
    pub last: Mutex<Option<Submission>>,
}

impl FakeTransport {
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl SubmissionTransport for FakeTransport {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(submission.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            Err(SubmissionError::transport("Network error. Please try again."))
        } else {
            Ok(())
        }
    }
}

pub struct Harness {
    pub form: FormValidator,
    pub store: Arc<MemoryDraftStore>,
    pub presenter: Arc<RecordingPresenter>,
    pub sink: Arc<RecordingSink>,
    pub transport: Arc<FakeTransport>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(Arc::new(MemoryDraftStore::new()), FakeTransport::default())
    }

    pub fn with(store: Arc<MemoryDraftStore>, transport: FakeTransport) -> Self {
        let presenter = Arc::new(RecordingPresenter::default());
        let sink = Arc::new(RecordingSink::default());
        let transport = Arc::new(transport);
        let form = FormValidator::new(
            FormConfig::default(),
            store.clone() as Arc<dyn DraftStore>,
            presenter.clone(),
            sink.clone(),
            transport.clone(),
        );
        Self {
            form,
            store,
            presenter,
            sink,
            transport,
        }
    }

    /// Register a required `name` and a required `email` field.
    pub fn with_name_and_email(self) -> Self {
        self.form
            .register_fields([
                FieldSpec::new("name", FieldKind::Text).required(),
                FieldSpec::new("email", FieldKind::Email).required(),
            ])
            .unwrap();
        self
    }

    pub fn fill_valid(&self) {
        self.form.on_input("name", "Ada Lovelace").unwrap();
        self.form.on_input("email", "ada@example.com").unwrap();
    }
}
