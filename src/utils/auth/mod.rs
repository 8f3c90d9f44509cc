pub mod errors;
pub mod models;
pub mod session;

use crate::api::auth::models::{LoginCredentials, RegisterCredentials};
use crate::api::auth::AuthApi;
use crate::api::users::models::User;
use crate::app_errors::DefaultContext;
use secrecy::{ExposeSecret, SecretString};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

use self::errors::AuthError;
use self::models::RegisterForm;
use self::session::SessionStore;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration: the whole validation ladder runs before any network
/// traffic, each rung with its own error. On success the returned user
/// becomes the current session.
pub async fn try_register_user(
    api: &AuthApi,
    session: &SessionStore,
    form: RegisterForm,
) -> Result<User, AuthError> {
    if form.username.trim().is_empty() {
        return Err(AuthError::MissingCredential);
    }
    if form.email.trim().is_empty() {
        return Err(AuthError::MissingCredential);
    }
    if !validator::validate_email(form.email.trim()) {
        return Err(AuthError::InvalidEmail);
    }
    if form.password.expose_secret().is_empty() {
        return Err(AuthError::MissingCredential);
    }
    if form.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(MIN_PASSWORD_LENGTH));
    }
    if form.password.expose_secret() != form.confirm_password.expose_secret() {
        return Err(AuthError::PasswordMismatch);
    }

    let birthday = match form.birthday {
        Some(birthday) => birthday,
        None => OffsetDateTime::now_utc().format(&Rfc3339).dc()?,
    };

    let res = api
        .register(RegisterCredentials::new(
            form.username.trim(),
            form.email.trim(),
            form.password.expose_secret(),
            Some(birthday),
        ))
        .await?;

    session.save(&res.user)?;
    debug!(
        "User {} ({}) registered successfully",
        res.user.id, res.user.username
    );
    Ok(res.user)
}

/// Login; blank credentials are rejected locally, a 401 maps to
/// [`AuthError::WrongLoginOrPassword`].
pub async fn login_user(
    api: &AuthApi,
    session: &SessionStore,
    username: &str,
    password: SecretString,
) -> Result<User, AuthError> {
    if username.trim().is_empty() || password.expose_secret().trim().is_empty() {
        return Err(AuthError::MissingCredential);
    }

    let res = api
        .login(LoginCredentials::new(username, password.expose_secret()))
        .await?;

    session.save(&res.user)?;
    debug!(
        "User {} ({}) logged in successfully",
        res.user.id, res.user.username
    );
    Ok(res.user)
}

pub fn logout_user(session: &SessionStore) -> Result<(), AuthError> {
    session.clear()
}

pub fn restore_session(session: &SessionStore) -> Result<Option<User>, AuthError> {
    session.load()
}
