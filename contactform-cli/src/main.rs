mod paths;
mod settings;
mod terminal;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use contactform_lib::draft::SqliteDraftStore;
use contactform_lib::error::{DraftError, FormError};
use contactform_lib::form::contact;
use contactform_lib::transport::{HttpTransport, SubmissionTransport};
use contactform_lib::{FormValidator, SubmitOutcome};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use url::Url;

use settings::{Settings, SettingsError};
use terminal::{NoTransport, TerminalNotifier, TerminalPresenter};

/// Fill in and send the college contact form from a terminal.
///
/// Values are kept as drafts between runs until the form is sent.
#[derive(Debug, Parser)]
#[command(name = "contactform", version)]
struct Cli {
    /// Settings file (defaults to contactform.toml in the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the form fields
    Fields,
    /// Set a field value
    Fill { field: String, value: String },
    /// Show the saved draft
    Show,
    /// Check the draft against the form rules
    Validate,
    /// Send the form
    Submit {
        /// Endpoint to post to (overrides the settings file)
        #[arg(long)]
        endpoint: Option<Url>,
    },
    /// Discard the saved draft
    Clear,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("draft store: {0}")]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("cannot create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot determine a data directory")]
    NoDataDir,
    #[error("no endpoint configured; pass --endpoint or set it in the settings file")]
    NoEndpoint,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    if let Err(e) = paths::rotate_logs() {
        eprintln!("Failed to rotate logs: {}", e);
    }
    let Some(path) = paths::log_file() else { return };
    match paths::create_log(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let settings = Settings::load(cli.config.as_deref())?;

    if let Command::Fields = cli.command {
        print_fields();
        return Ok(ExitCode::SUCCESS);
    }

    let transport: Arc<dyn SubmissionTransport> = match &cli.command {
        Command::Submit { endpoint } => {
            let endpoint = endpoint
                .clone()
                .or_else(|| settings.endpoint.clone())
                .ok_or(CliError::NoEndpoint)?;
            Arc::new(HttpTransport::new(endpoint))
        }
        _ => Arc::new(NoTransport),
    };
    let form = open_form(&settings, transport)?;

    let code = match cli.command {
        Command::Fields => ExitCode::SUCCESS,
        Command::Fill { field, value } => {
            form.on_input(&field, &value)?;
            println!("{} = {}", field, form.value(&field).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Command::Show => {
            for name in input_fields(&form) {
                println!("{:<14} {}", name, form.value(&name).unwrap_or_default());
            }
            ExitCode::SUCCESS
        }
        Command::Validate => {
            let report = form.validate();
            if report.is_valid() {
                println!("All fields valid");
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Command::Submit { .. } => match form.submit().await? {
            SubmitOutcome::Succeeded => ExitCode::SUCCESS,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) | SubmitOutcome::Busy => {
                ExitCode::from(1)
            }
        },
        Command::Clear => {
            form.discard_drafts();
            println!("Draft cleared");
            ExitCode::SUCCESS
        }
    };

    form.dispose();
    Ok(code)
}

fn open_form(
    settings: &Settings,
    transport: Arc<dyn SubmissionTransport>,
) -> Result<FormValidator, CliError> {
    let db = paths::drafts_db().ok_or(CliError::NoDataDir)?;
    if let Some(dir) = db.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let store = SqliteDraftStore::open(&db)?;
    log::debug!("Using draft store at {}", db.display());

    let form = FormValidator::new(
        settings.form.clone(),
        Arc::new(store),
        Arc::new(TerminalPresenter),
        Arc::new(TerminalNotifier),
        transport,
    );
    form.register_fields(contact::fields())?;
    Ok(form)
}

fn input_fields(form: &FormValidator) -> Vec<String> {
    form.field_names()
        .into_iter()
        .filter(|name| name != contact::SUBMIT_FIELD)
        .collect()
}

fn print_fields() {
    for spec in contact::fields().iter().filter(|spec| spec.is_input()) {
        let required = if spec.required { " (required)" } else { "" };
        println!("{} [{:?}]{}", spec.name, spec.kind, required);
        if let Some(choices) = contact::choices_for(&spec.name) {
            for (value, label) in choices.iter().filter(|(value, _)| !value.is_empty()) {
                println!("    {:<18} {}", value, label);
            }
        }
    }
}
