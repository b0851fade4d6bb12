use super::*;

fn register_form() -> AuthForm {
    AuthForm {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "monsoon1".to_owned(),
        confirm_password: "monsoon1".to_owned(),
    }
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_shape_accepts_plain_address() {
    assert!(is_valid_email("asha@example.com"));
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.in"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "asha", "asha@", "@example.com", "asha@example", "asha@.com", "asha@example.", "a b@c.d", "a@b@c.d"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// validate_field
// =============================================================

#[test]
fn name_rules() {
    let mut form = register_form();
    form.name = "   ".to_owned();
    assert_eq!(validate_field(AuthMode::Register, &form, Field::Name), Some("Name is required"));
    form.name = " A ".to_owned();
    assert_eq!(validate_field(AuthMode::Register, &form, Field::Name), Some("Name must be at least 2 characters"));
    form.name = "Al".to_owned();
    assert_eq!(validate_field(AuthMode::Register, &form, Field::Name), None);
}

#[test]
fn email_rules() {
    let mut form = register_form();
    form.email = String::new();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::Email), Some("Email is required"));
    form.email = "asha.example.com".to_owned();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::Email), Some("Please enter a valid email address"));
}

#[test]
fn password_rules() {
    let mut form = register_form();
    form.password = String::new();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::Password), Some("Password is required"));
    form.password = "12345".to_owned();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::Password), Some("Password must be at least 6 characters"));
    form.password = "123456".to_owned();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::Password), None);
}

#[test]
fn confirmation_only_checked_when_registering() {
    let mut form = register_form();
    form.confirm_password = "different".to_owned();
    assert_eq!(validate_field(AuthMode::Login, &form, Field::ConfirmPassword), None);
    assert_eq!(validate_field(AuthMode::Register, &form, Field::ConfirmPassword), Some("Passwords do not match"));
    form.confirm_password = String::new();
    assert_eq!(validate_field(AuthMode::Register, &form, Field::ConfirmPassword), Some("Please confirm your password"));
}

// =============================================================
// validate_form
// =============================================================

#[test]
fn login_ignores_name_and_confirmation() {
    let form = AuthForm { email: "asha@example.com".to_owned(), password: "monsoon1".to_owned(), ..AuthForm::default() };
    assert_eq!(validate_form(AuthMode::Login, &form), Ok(()));
}

#[test]
fn empty_register_form_reports_every_field() {
    let errors = validate_form(AuthMode::Register, &AuthForm::default()).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Please confirm your password"));
}

// =============================================================
// AuthFormState
// =============================================================

#[test]
fn untouched_field_is_not_validated_on_input() {
    let mut state = AuthFormState::default();
    state.input(Field::Email, "nope".to_owned());
    assert_eq!(state.error(Field::Email), None);
    state.blur(Field::Email);
    assert_eq!(state.error(Field::Email), Some("Please enter a valid email address"));
    state.input(Field::Email, "asha@example.com".to_owned());
    assert_eq!(state.error(Field::Email), None);
}

#[test]
fn password_change_revalidates_touched_confirmation() {
    let mut state = AuthFormState { mode: AuthMode::Register, ..AuthFormState::default() };
    state.input(Field::Password, "monsoon1".to_owned());
    state.input(Field::ConfirmPassword, "monsoon1".to_owned());
    state.blur(Field::ConfirmPassword);
    assert_eq!(state.error(Field::ConfirmPassword), None);
    state.input(Field::Password, "monsoon2".to_owned());
    assert_eq!(state.error(Field::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn invalid_submit_touches_every_field() {
    let mut state = AuthFormState::default();
    let err = state.begin_submit().unwrap_err();
    assert!(matches!(err, AuthError::Invalid(ref errors) if errors.len() == 2));
    assert!(state.is_touched(Field::Email));
    assert!(state.is_touched(Field::Password));
    assert!(!state.in_flight);
}

#[test]
fn second_submit_while_in_flight_is_busy() {
    let mut state = AuthFormState { form: register_form(), ..AuthFormState::default() };
    let snapshot = state.begin_submit().unwrap();
    assert_eq!(snapshot.email, "asha@example.com");
    assert_eq!(state.begin_submit(), Err(AuthError::Busy));
    state.finish_submit();
    assert!(state.begin_submit().is_ok());
}

#[test]
fn switching_mode_clears_form() {
    let mut state = AuthFormState::default();
    state.input(Field::Email, "asha@example.com".to_owned());
    state.blur(Field::Password);
    state.switch_mode();
    assert_eq!(state.mode, AuthMode::Register);
    assert_eq!(state.form, AuthForm::default());
    assert!(state.errors.is_empty());
    assert!(!state.is_touched(Field::Password));
}

// =============================================================
// session_for
// =============================================================

#[test]
fn login_without_name_uses_default_name() {
    let form = AuthForm { email: "asha@example.com".to_owned(), ..AuthForm::default() };
    let session = session_for(AuthMode::Login, &form);
    assert_eq!(session.display_name.as_deref(), Some(shell::session::DEFAULT_LOGIN_NAME));
    assert_eq!(session.email.as_deref(), Some("asha@example.com"));
}

#[test]
fn register_keeps_submitted_name() {
    let session = session_for(AuthMode::Register, &register_form());
    assert_eq!(session.greeting(), "Hi, Asha");
}

#[test]
fn error_messages_read_well() {
    let errors = validate_form(AuthMode::Login, &AuthForm::default()).unwrap_err();
    assert_eq!(AuthError::Invalid(errors).to_string(), "2 field(s) failed validation");
    assert_eq!(AuthError::Busy.to_string(), "an authentication request is already in flight");
}
