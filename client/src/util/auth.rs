//! Simulated authentication collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page collects a login or registration form, validates it field by
//! field, waits out a simulated network delay and hands the resulting
//! [`Session`] to the navigation coordinator. No credentials leave the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use shell::session::Session;

/// Simulated round-trip time of a sign-in request.
pub const SIMULATED_DELAY_MS: u32 = 1_000;

/// Minimum accepted lengths.
const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Fields that are shown and validated in this mode.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => &[Field::Email, Field::Password],
            Self::Register => &[Field::Name, Field::Email, Field::Password, Field::ConfirmPassword],
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Join MonsoonRecipes",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to your account to continue",
            Self::Register => "Create an account to start sharing recipes",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }

    /// Prompt and button text for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("Don't have an account?", "Sign Up"),
            Self::Register => ("Already have an account?", "Sign In"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm password",
        })
    }
}

/// Raw form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a single field. Returns the message to show, if any.
pub fn validate_field(mode: AuthMode, form: &AuthForm, field: Field) -> Option<&'static str> {
    let value = form.value(field);
    match field {
        Field::Name => {
            let name = value.trim();
            if name.is_empty() {
                Some("Name is required")
            } else if name.chars().count() < MIN_NAME_CHARS {
                Some("Name must be at least 2 characters")
            } else {
                None
            }
        }
        Field::Email => {
            if value.trim().is_empty() {
                Some("Email is required")
            } else if !is_valid_email(value) {
                Some("Please enter a valid email address")
            } else {
                None
            }
        }
        Field::Password => {
            if value.is_empty() {
                Some("Password is required")
            } else if value.chars().count() < MIN_PASSWORD_CHARS {
                Some("Password must be at least 6 characters")
            } else {
                None
            }
        }
        Field::ConfirmPassword => match mode {
            AuthMode::Login => None,
            AuthMode::Register if value.is_empty() => Some("Please confirm your password"),
            AuthMode::Register if value != form.password => Some("Passwords do not match"),
            AuthMode::Register => None,
        },
    }
}

/// Per-field error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn put(&mut self, field: Field, error: Option<&'static str>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

/// Validate every field of `mode`.
///
/// # Errors
///
/// Returns the messages of every failing field.
pub fn validate_form(mode: AuthMode, form: &AuthForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for &field in mode.fields() {
        errors.put(field, validate_field(mode, form, field));
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("an authentication request is already in flight")]
    Busy,
}

/// Session created from a submitted form.
pub fn session_for(mode: AuthMode, form: &AuthForm) -> Session {
    match mode {
        AuthMode::Login => Session::from_login(&form.name, &form.email),
        AuthMode::Register => Session::from_register(&form.name, &form.email),
    }
}

/// Validate, wait out the simulated delay, and produce a session.
///
/// # Errors
///
/// Returns [`AuthError::Invalid`] when any field of `mode` fails validation.
pub async fn authenticate(mode: AuthMode, form: AuthForm) -> Result<Session, AuthError> {
    validate_form(mode, &form).map_err(AuthError::Invalid)?;
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;
    Ok(session_for(mode, &form))
}

/// Auth page form model: values, touched fields, errors and the in-flight flag.
///
/// Fields are validated on blur and, once touched, on every input.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub form: AuthForm,
    pub errors: FieldErrors,
    pub in_flight: bool,
    touched: BTreeSet<Field>,
}

impl AuthFormState {
    pub fn input(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
        // A changed password can fix or break an already-touched confirmation.
        if field == Field::Password && self.touched.contains(&Field::ConfirmPassword) {
            self.revalidate(Field::ConfirmPassword);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Flip between login and register, clearing everything.
    pub fn switch_mode(&mut self) {
        *self = Self { mode: self.mode.toggled(), ..Self::default() };
    }

    /// Validate the whole form and mark the request in flight.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] while a request is pending, [`AuthError::Invalid`]
    /// when validation fails (every field is then marked touched).
    pub fn begin_submit(&mut self) -> Result<AuthForm, AuthError> {
        if self.in_flight {
            return Err(AuthError::Busy);
        }
        self.touched.extend(self.mode.fields().iter().copied());
        match validate_form(self.mode, &self.form) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.in_flight = true;
                Ok(self.form.clone())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(AuthError::Invalid(errors))
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    fn revalidate(&mut self, field: Field) {
        let error = validate_field(self.mode, &self.form, field);
        self.errors.put(field, error);
    }
}
