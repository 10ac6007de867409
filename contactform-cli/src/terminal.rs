//! Terminal rendering of form state.

use async_trait::async_trait;
use contactform_lib::error::SubmissionError;
use contactform_lib::notify::{Banner, BannerId, Notification, NotificationSink, Severity};
use contactform_lib::presenter::{FieldState, Presenter};
use contactform_lib::transport::{Submission, SubmissionTransport};

/// Prints field errors, banners and the loading label to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn decorate(&self, field: &str, state: &FieldState) {
        match state {
            FieldState::Invalid(message) => println!("  x {}: {}", field, message),
            FieldState::Valid => log::debug!("{} is valid", field),
            FieldState::Neutral => {}
        }
    }

    fn set_value(&self, field: &str, value: &str) {
        log::debug!("{} <- {:?}", field, value);
    }

    fn set_loading(&self, loading: bool, label: &str) {
        if loading {
            println!("{}", label);
        }
    }

    fn show_banner(&self, banner: &Banner) {
        println!();
        println!("{}", banner.title);
        println!("  {}", banner.body);
    }

    fn dismiss_banner(&self, id: BannerId) {
        log::debug!("banner {} expired", id);
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        log::info!("notification ({}): {}", notification.severity, notification.message);
        let marker = match notification.severity {
            Severity::Success => "ok",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        };
        eprintln!("[{}] {}", marker, notification.message);
    }
}

/// Transport for commands that never submit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransport;

#[async_trait]
impl SubmissionTransport for NoTransport {
    async fn submit(&self, _submission: &Submission) -> Result<(), SubmissionError> {
        Err(SubmissionError::transport("No submission endpoint configured"))
    }
}
