//! Login form controller: field values, validity, submission lifecycle and
//! the transient banner messages.
//!
//! The controller is synchronous. A driver (the Dioxus screen, or a test)
//! calls `begin_submit`, awaits the auth collaborator itself, then feeds the
//! result back through `finish_submit`. The success banner clear is a
//! generation-stamped [`ClearTicket`] the driver redeems after sleeping.

use crate::auth::LoginOutcome;
use crate::config::FormConfig;
use crate::controls::{ActionView, ButtonType, ButtonVariant, FieldView, InputKind};
use crate::models::User;
use crate::timer;
use crate::validation::{Field, FieldErrors, FormValues, Rules};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

pub const SUBMIT_LABEL: &str = "🚀 Login";
pub const SUBMIT_BUSY_LABEL: &str = "🔄 Memproses...";
pub const FALLBACK_ERROR: &str = "Login gagal";

/// Where the form is in its edit → validate → submit → feedback cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Valid,
    Invalid,
    Submitting,
    SubmitSucceeded,
    SubmitFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }
}

/// Credentials handed to the auth collaborator.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Permission to clear the success banner once `delay` has elapsed.
/// Stale once a newer submission starts or the form is torn down.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTicket {
    generation: u64,
    delay: Duration,
}

impl ClearTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep out the delay, then hand the ticket back for `expire_success`.
    pub async fn wait(self) -> ClearTicket {
        timer::sleep(self.delay).await;
        self
    }
}

/// Rows of the diagnostics block shown when `FormConfig::debug` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugInfo {
    pub form_valid: bool,
    pub loading: bool,
    pub user: String,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    config: FormConfig,
    rules: Rules,
    values: FormValues,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    state: FormState,
    submission: SubmissionState,
    password_visible: bool,
    generation: u64,
}

impl LoginForm {
    pub fn new(config: FormConfig) -> Self {
        let rules = config.rules();
        let values = FormValues::default();
        let errors = rules.validate(&values);
        Self {
            config,
            rules,
            values,
            touched: BTreeSet::new(),
            errors,
            state: FormState::Idle,
            submission: SubmissionState::Idle,
            password_visible: false,
            generation: 0,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Errors for fields the user has touched (or all, after a submit attempt).
    pub fn errors(&self) -> FieldErrors {
        self.errors.filtered(|f| self.touched.contains(&f))
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Every rule passes, touched or not.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submission.is_in_flight()
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Succeeded(m) => Some(m),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(m) => Some(m),
            _ => None,
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn password_kind(&self) -> InputKind {
        if self.password_visible {
            InputKind::Text
        } else {
            InputKind::Password
        }
    }

    /// Store a keystroke and re-run the rules. Banners are left alone.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(
            field = field.name(),
            len = value.chars().count(),
            "form value changed"
        );
        self.values.set(field, value);
        self.touched.insert(field);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        tracing::trace!("validating");
        self.errors = self.rules.validate(&self.values);
        if self.submission.is_in_flight() {
            return;
        }
        self.state = if self.errors.is_empty() {
            FormState::Valid
        } else {
            FormState::Invalid
        };
    }

    /// Returns the new visibility.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        tracing::debug!(
            visible = self.password_visible,
            "password visibility: {}",
            if self.password_visible { "shown" } else { "hidden" }
        );
        self.password_visible
    }

    /// Start a submission. `None` (a no-op) while one is in flight or while any
    /// rule fails; in the latter case every field becomes touched so its error shows.
    ///
    /// On acceptance the previous banner is dropped and any pending success
    /// clear is invalidated.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submission.is_in_flight() {
            tracing::debug!("submit ignored: already in flight");
            return None;
        }
        self.touched.extend(Field::ALL);
        self.revalidate();
        if !self.is_valid() {
            tracing::debug!(errors = self.errors.len(), "submit blocked by validation");
            return None;
        }
        self.generation += 1;
        self.submission = SubmissionState::InFlight;
        self.state = FormState::Submitting;
        tracing::info!(email = %self.values.email, "form submitted");
        Some(Credentials {
            email: self.values.email.clone(),
            password: self.values.password.clone(),
        })
    }

    /// Apply the collaborator's answer. `auth_error` is its current error
    /// string, used as the banner text on failure.
    pub fn finish_submit(
        &mut self,
        outcome: &LoginOutcome,
        auth_error: Option<&str>,
    ) -> Option<ClearTicket> {
        if !self.submission.is_in_flight() {
            tracing::warn!("login resolved with no submission in flight; ignoring");
            return None;
        }
        match outcome {
            LoginOutcome::Success(user) => {
                self.submission =
                    SubmissionState::Succeeded(format!("Login berhasil! Selamat datang {}", user.name));
                self.state = FormState::SubmitSucceeded;
                self.reset_fields();
                Some(ClearTicket {
                    generation: self.generation,
                    delay: self.config.success_message_ttl,
                })
            }
            LoginOutcome::Failure => {
                let message = auth_error
                    .filter(|m| !m.is_empty())
                    .unwrap_or(FALLBACK_ERROR)
                    .to_string();
                self.submission = SubmissionState::Failed(message);
                self.state = FormState::SubmitFailed;
                None
            }
        }
    }

    /// Clear the welcome banner if `ticket` is still current. Returns whether it did.
    pub fn expire_success(&mut self, ticket: ClearTicket) -> bool {
        if ticket.generation != self.generation
            || !matches!(self.submission, SubmissionState::Succeeded(_))
        {
            tracing::trace!("stale success clear ignored");
            return false;
        }
        self.submission = SubmissionState::Idle;
        if self.state == FormState::SubmitSucceeded {
            self.state = FormState::Idle;
        }
        true
    }

    /// Invalidate outstanding clear tickets. Called when the view goes away.
    pub fn teardown(&mut self) {
        self.generation += 1;
    }

    fn reset_fields(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.errors = self.rules.validate(&self.values);
    }

    pub fn field_view(&self, field: Field) -> FieldView {
        let error = self.error(field).map(str::to_string);
        match field {
            Field::Email => FieldView {
                name: field.name(),
                label: "Email Address",
                kind: InputKind::Email,
                required: true,
                placeholder: "contoh: user@email.com",
                autocomplete: "email",
                disabled: false,
                error,
            },
            Field::Password => FieldView {
                name: field.name(),
                label: "Password",
                kind: self.password_kind(),
                required: true,
                placeholder: "masukkan password Anda",
                autocomplete: "current-password",
                disabled: false,
                error,
            },
        }
    }

    pub fn submit_action(&self) -> ActionView {
        ActionView {
            variant: ButtonVariant::Primary,
            button_type: ButtonType::Submit,
            disabled: !self.is_valid(),
            loading: self.submission.is_in_flight(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_in_flight() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// `None` unless the debug flag is on.
    pub fn debug_info(&self, user: Option<&User>, auth_loading: bool) -> Option<DebugInfo> {
        if !self.config.debug {
            return None;
        }
        Some(DebugInfo {
            form_valid: self.is_valid(),
            loading: auth_loading || self.submission.is_in_flight(),
            user: match user {
                Some(u) => format!("Logged in as {}", u.email),
                None => "Not logged in".to_string(),
            },
        })
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}
