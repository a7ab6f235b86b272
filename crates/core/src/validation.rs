//! Field constraints for users, projects, and tasks.
//!
//! Handlers run these before touching the database so a violation surfaces
//! as a 400 with a readable message instead of a constraint error.

use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a project name, in characters.
pub const PROJECT_NAME_MAX_LEN: usize = 100;

/// Maximum length of a username, in characters.
pub const USERNAME_MAX_LEN: usize = 50;

/// Maximum length of a user's full name, in characters.
pub const FULL_NAME_MAX_LEN: usize = 100;

/// Maximum length of a task title, in characters.
pub const TASK_TITLE_MAX_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Generic rules
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Reject values longer than `max` characters (not bytes).
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entity fields
// ---------------------------------------------------------------------------

pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_required("name", name)?;
    validate_max_len("name", name, PROJECT_NAME_MAX_LEN)
}

pub fn validate_task_title(title: &str) -> Result<(), CoreError> {
    validate_required("title", title)?;
    validate_max_len("title", title, TASK_TITLE_MAX_LEN)
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_required("username", username)?;
    validate_max_len("username", username, USERNAME_MAX_LEN)
}

/// Required, and must look like an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_required("email", email)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "email has an invalid format: {email}"
        )));
    }
    Ok(())
}

/// Full name is optional; only the length is checked.
pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    validate_max_len("full_name", full_name, FULL_NAME_MAX_LEN)
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    validate_required("password", password)
}
