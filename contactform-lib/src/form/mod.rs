//! The form validator.
//!
//! A [`FormValidator`] owns a set of fields, validates them, keeps drafts of
//! what the user typed and submits through an injected transport. All of its
//! collaborators (draft store, presenter, notification sink, transport) are
//! passed in at construction.
//!
//! # Example
//!
//! ```ignore
//! let form = FormValidator::new(
//!     FormConfig::default(),
//!     Arc::new(MemoryDraftStore::new()),
//!     presenter,
//!     notifier,
//!     Arc::new(HttpTransport::new(endpoint)),
//! );
//! form.register_fields(contact::fields())?;
//!
//! form.handle(FormEvent::input("email", "ada@example.com")).await?;
//! match form.submit().await? {
//!     SubmitOutcome::Succeeded => {}
//!     SubmitOutcome::Rejected(report) => { /* errors already decorated */ }
//!     SubmitOutcome::Failed(err) => log::warn!("{}", err),
//!     SubmitOutcome::Busy => {}
//! }
//! ```

pub mod contact;
mod state;
mod subscription;

pub use state::{FormPhase, SubmitOutcome};
pub use subscription::{EventKind, FormEvent, Subscription, Subscriptions};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::FormConfig;
use crate::draft::{DraftStore, Drafts};
use crate::error::{DraftError, FormError, SubmissionError};
use crate::field::{FieldKind, FieldSpec};
use crate::notify::{Banner, BannerBoard, Notification, NotificationSink};
use crate::phone::format_phone;
use crate::presenter::{FieldState, Presenter};
use crate::transport::{Submission, SubmissionTransport};
use crate::validation::{EMAIL_MESSAGE, ValidationReport, ValidationResult, rules};

const SUCCESS_TOAST: &str = "Message sent successfully!";
const FAILURE_TOAST: &str = "Failed to send message. Please try again.";

#[derive(Debug, Default)]
struct FormInner {
    fields: Vec<FieldSpec>,
    subscriptions: Subscriptions,
    phase: FormPhase,
}

impl FormInner {
    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldSpec> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    fn ensure_live(&self) -> Result<(), FormError> {
        if self.phase == FormPhase::Disposed {
            Err(FormError::Disposed)
        } else {
            Ok(())
        }
    }
}

/// Validates, persists and submits a set of named fields.
pub struct FormValidator {
    inner: RwLock<FormInner>,
    /// Set while a submission is in flight.
    loading: AtomicBool,
    config: FormConfig,
    drafts: Drafts,
    presenter: Arc<dyn Presenter>,
    notifier: Arc<dyn NotificationSink>,
    transport: Arc<dyn SubmissionTransport>,
    banners: BannerBoard,
}

impl FormValidator {
    /// Create an empty form wired to its collaborators.
    pub fn new(
        config: FormConfig,
        store: Arc<dyn DraftStore>,
        presenter: Arc<dyn Presenter>,
        notifier: Arc<dyn NotificationSink>,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        let mut inner = FormInner::default();
        inner.subscriptions.subscribe(EventKind::Submit, None);

        Self {
            inner: RwLock::new(inner),
            loading: AtomicBool::new(false),
            drafts: Drafts::new(store, config.draft_prefix.clone()),
            banners: BannerBoard::new(presenter.clone()),
            config,
            presenter,
            notifier,
            transport,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_phase(&self, phase: FormPhase) {
        let mut inner = self.write();
        if inner.phase != FormPhase::Disposed && inner.phase != phase {
            log::debug!("FormValidator: {:?} -> {:?}", inner.phase, phase);
            inner.phase = phase;
        }
    }

    fn report_draft_error(&self, action: &str, field: &str, err: DraftError) {
        log::warn!("FormValidator: failed to {} draft for '{}': {}", action, field, err);
        self.notifier.notify(
            Notification::warning(format!("Could not {} draft for {}: {}", action, field, err))
                .with_duration(self.config.toast_ttl()),
        );
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Add a field to the form.
    ///
    /// A saved draft for the field replaces its initial value and is pushed to
    /// the presenter.
    pub fn register_field(&self, mut spec: FieldSpec) -> Result<(), FormError> {
        let restored = {
            let mut inner = self.write();
            inner.ensure_live()?;
            if inner.field(&spec.name).is_some() {
                return Err(FormError::duplicate(spec.name));
            }

            let restored = if spec.persists() {
                Some(self.drafts.load(&spec.name))
            } else {
                None
            };
            if let Some(Ok(Some(saved))) = &restored {
                spec.current_value = saved.clone();
            }

            inner
                .subscriptions
                .subscribe(EventKind::Input, Some(spec.name.clone()));
            if spec.kind == FieldKind::Email {
                inner
                    .subscriptions
                    .subscribe(EventKind::Blur, Some(spec.name.clone()));
            }
            log::debug!("FormValidator: registered '{}' ({:?})", spec.name, spec.kind);
            inner.fields.push(spec.clone());
            restored
        };

        match restored {
            Some(Ok(Some(saved))) => {
                log::debug!("FormValidator: restored draft for '{}'", spec.name);
                self.presenter.set_value(&spec.name, &saved);
            }
            Some(Err(err)) => self.report_draft_error("restore", &spec.name, err),
            _ => {}
        }

        Ok(())
    }

    /// Register several fields, stopping at the first failure.
    pub fn register_fields(
        &self,
        specs: impl IntoIterator<Item = FieldSpec>,
    ) -> Result<(), FormError> {
        specs
            .into_iter()
            .try_for_each(|spec| self.register_field(spec))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Route an event through the subscription list.
    ///
    /// Events nobody subscribed to, and every event after [`dispose`](Self::dispose),
    /// are ignored. Only `Submit` produces an outcome.
    pub async fn handle(&self, event: FormEvent) -> Result<Option<SubmitOutcome>, FormError> {
        let subscribed = {
            let inner = self.read();
            inner.phase != FormPhase::Disposed && inner.subscriptions.matches(&event)
        };
        if !subscribed {
            log::debug!("FormValidator: ignoring {:?}", event);
            return Ok(None);
        }

        match event {
            FormEvent::Input { field, value } => {
                self.on_input(&field, &value)?;
                Ok(None)
            }
            FormEvent::Blur { field } => {
                self.on_blur(&field)?;
                Ok(None)
            }
            FormEvent::Submit => self.submit().await.map(Some),
        }
    }

    /// Record an edit to a field.
    ///
    /// Phone input is reformatted, the field's error is cleared and, if the
    /// new value satisfies the field's rules, it is marked valid. The value
    /// is then saved as a draft.
    pub fn on_input(&self, field: &str, raw: &str) -> Result<(), FormError> {
        let (value, check, persists) = {
            let mut inner = self.write();
            inner.ensure_live()?;
            let spec = inner
                .field_mut(field)
                .ok_or_else(|| FormError::unknown(field))?;

            spec.current_value = match spec.kind {
                FieldKind::Phone => format_phone(raw),
                _ => raw.to_string(),
            };
            (spec.current_value.clone(), rules::check(spec), spec.persists())
        };

        if value != raw {
            self.presenter.set_value(field, &value);
        }
        self.presenter.decorate(field, &FieldState::Neutral);
        if check.is_ok() {
            self.presenter.decorate(field, &FieldState::Valid);
        }

        if persists {
            if let Err(err) = self.drafts.save(field, &value) {
                self.report_draft_error("save", field, err);
            }
        }

        Ok(())
    }

    /// Check an email field when it loses focus.
    ///
    /// Returns the failure when a non-empty address is malformed; other
    /// fields and empty values are left alone.
    pub fn on_blur(&self, field: &str) -> Result<Option<ValidationResult>, FormError> {
        let invalid = {
            let inner = self.read();
            inner.ensure_live()?;
            let spec = inner.field(field).ok_or_else(|| FormError::unknown(field))?;
            spec.kind == FieldKind::Email
                && !spec.current_value.is_empty()
                && !rules::is_valid_email(&spec.current_value)
        };

        if !invalid {
            return Ok(None);
        }

        let result = ValidationResult::invalid(field, EMAIL_MESSAGE);
        self.presenter.decorate(field, &FieldState::from(&result));
        Ok(Some(result))
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Re-check every field and decorate the ones that fail.
    pub fn validate(&self) -> ValidationReport {
        let idle = self.phase() == FormPhase::Idle;
        if idle {
            self.set_phase(FormPhase::Validating);
        }
        let report = self.run_validation();
        if idle {
            self.set_phase(FormPhase::Idle);
        }
        report
    }

    fn run_validation(&self) -> ValidationReport {
        let results: Vec<ValidationResult> = {
            let inner = self.read();
            inner
                .fields
                .iter()
                .filter(|spec| spec.is_input())
                .map(|spec| match rules::check(spec) {
                    Ok(()) => ValidationResult::valid(&spec.name),
                    Err(message) => ValidationResult::invalid(&spec.name, message),
                })
                .collect()
        };

        let report = ValidationReport::new(results);
        for failure in report.failures() {
            self.presenter
                .decorate(&failure.field_name, &FieldState::from(failure));
        }

        log::debug!(
            "FormValidator: validated {} fields, {} invalid",
            report.results().len(),
            report.failures().count()
        );
        report
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate and, if everything passes, submit through the transport.
    ///
    /// Only one submission runs at a time; a call made while another is in
    /// flight returns [`SubmitOutcome::Busy`] without doing anything. The
    /// loading state is left on every path, including when the returned
    /// future is dropped before completion.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        self.read().ensure_live()?;

        let Some(mut guard) = LoadingGuard::acquire(self) else {
            log::debug!("FormValidator: submission already in flight");
            return Ok(SubmitOutcome::Busy);
        };

        self.set_phase(FormPhase::Validating);
        let report = self.run_validation();
        if report.is_invalid() {
            self.set_phase(FormPhase::Idle);
            return Ok(SubmitOutcome::Rejected(report));
        }

        guard.show();
        self.set_phase(FormPhase::Submitting);

        // Captured now so a dispose during the await cannot hide them.
        let drafted = self.drafted_fields();
        let submission = self.submission();
        let outcome = match self.transport.submit(&submission).await {
            Ok(()) => {
                self.on_submitted(&drafted);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.on_submit_failed(&err);
                SubmitOutcome::Failed(err)
            }
        };

        drop(guard);
        Ok(outcome)
    }

    /// Snapshot of the current input values.
    pub fn submission(&self) -> Submission {
        let inner = self.read();
        Submission::new(
            inner
                .fields
                .iter()
                .filter(|spec| spec.is_input())
                .map(|spec| (spec.name.clone(), spec.current_value.clone()))
                .collect(),
        )
    }

    fn on_submitted(&self, drafted: &[String]) {
        log::debug!("FormValidator: submission succeeded");
        self.banners
            .show(Banner::success(), self.config.banner_ttl());
        self.notifier
            .notify(Notification::success(SUCCESS_TOAST).with_duration(self.config.toast_ttl()));
        self.discard_drafts_of(drafted);
        self.reset();
    }

    fn on_submit_failed(&self, err: &SubmissionError) {
        log::warn!("FormValidator: submission failed: {}", err);
        self.banners
            .show(Banner::failure(err.message()), self.config.banner_ttl());
        self.notifier
            .notify(Notification::error(FAILURE_TOAST).with_duration(self.config.toast_ttl()));
    }

    /// Clear every value and decoration.
    pub fn reset(&self) {
        let names: Vec<String> = {
            let mut inner = self.write();
            inner
                .fields
                .iter_mut()
                .filter(|spec| spec.is_input())
                .map(|spec| {
                    spec.current_value.clear();
                    spec.name.clone()
                })
                .collect()
        };

        for name in &names {
            self.presenter.set_value(name, "");
            self.presenter.decorate(name, &FieldState::Neutral);
        }
    }

    /// Remove the drafts of every field.
    pub fn discard_drafts(&self) {
        self.discard_drafts_of(&self.drafted_fields());
    }

    fn discard_drafts_of(&self, names: &[String]) {
        for name in names {
            if let Err(err) = self.drafts.discard(name) {
                self.report_draft_error("discard", name, err);
            }
        }
    }

    /// Names of the fields whose values are kept as drafts.
    fn drafted_fields(&self) -> Vec<String> {
        self.read()
            .fields
            .iter()
            .filter(|spec| spec.persists())
            .map(|spec| spec.name.clone())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Tear the form down: drop all subscriptions and fields in one step.
    ///
    /// Returns the number of subscriptions removed. Drafts are kept.
    pub fn dispose(&self) -> usize {
        let mut inner = self.write();
        let removed = inner.subscriptions.clear();
        inner.fields.clear();
        inner.phase = FormPhase::Disposed;
        log::debug!("FormValidator: disposed, {} subscriptions removed", removed);
        removed
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current value of a field.
    pub fn value(&self, field: &str) -> Option<String> {
        self.read().field(field).map(|spec| spec.current_value.clone())
    }

    /// Declaration of a field, with its current value.
    pub fn field(&self, field: &str) -> Option<FieldSpec> {
        self.read().field(field).cloned()
    }

    /// Names of the registered fields, in registration order.
    pub fn field_names(&self) -> Vec<String> {
        self.read().fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn phase(&self) -> FormPhase {
        self.read().phase
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn subscription_count(&self) -> usize {
        self.read().subscriptions.len()
    }

    pub fn banners(&self) -> &BannerBoard {
        &self.banners
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("inner", &self.inner)
            .field("loading", &self.loading)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Holds the loading flag for one submission.
///
/// Dropping the guard leaves the loading state and returns the form to
/// `Idle`, whichever way the submission ended.
struct LoadingGuard<'a> {
    form: &'a FormValidator,
    shown: bool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(form: &'a FormValidator) -> Option<Self> {
        form.loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self { form, shown: false })
    }

    /// Disable the submit control and swap its label.
    fn show(&mut self) {
        self.shown = true;
        self.form
            .presenter
            .set_loading(true, &self.form.config.loading_label);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.shown {
            self.form
                .presenter
                .set_loading(false, &self.form.config.submit_label);
        }
        self.form.set_phase(FormPhase::Idle);
        self.form.loading.store(false, Ordering::SeqCst);
    }
}
