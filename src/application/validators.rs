use validator::ValidateEmail;

use crate::app_error::{AppError, AppResult};
use crate::use_cases::school::SignupRequest;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// School and administrator names: letters, spaces and (.,'-) only.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '.' | ',' | '\'' | '-'))
}

/// Administrator names are stricter than school names: letters, spaces and
/// (.') only — no commas or hyphens.
pub fn is_valid_admin_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '.' | '\''))
}

/// Contact numbers are exactly 11 digits.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == 11 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Postal addresses: letters, numbers, spaces and (.,'-) only.
pub fn is_valid_contact_address(address: &str) -> bool {
    !address.trim().is_empty()
        && address.chars().all(|c| {
            c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | ',' | '\'' | '-')
        })
}

/// Checks every signup precondition, reporting the first violation.
/// Runs strictly before any store interaction.
pub fn validate_signup(req: &SignupRequest) -> AppResult<()> {
    if !is_valid_name(&req.school_name) {
        return Err(AppError::Validation(
            "School name must contain letters, spaces and (.,'-) only.".into(),
        ));
    }
    if !is_valid_email(&req.email) {
        return Err(AppError::Validation(
            "Email is not a valid email address.".into(),
        ));
    }
    if !is_valid_phone_number(&req.phone_number) {
        return Err(AppError::Validation(
            "Contact number must be an 11 digit long number.".into(),
        ));
    }
    if !is_valid_contact_address(&req.contact_address) {
        return Err(AppError::Validation(
            "Contact address must contain letters, numbers, spaces and (.,'-) only.".into(),
        ));
    }
    if !is_valid_admin_name(&req.admin_name) {
        return Err(AppError::Validation(
            "Administrator name must contain letters, spaces and (.') only.".into(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long."
        )));
    }
    if req.password != req.password_confirm {
        return Err(AppError::Validation("Passwords do not match.".into()));
    }
    Ok(())
}

pub fn validate_licence(licence: &str) -> AppResult<()> {
    if licence.trim().is_empty() {
        return Err(AppError::Validation("Please provide a licence number.".into()));
    }
    Ok(())
}

pub fn validate_signin(email: &str, password: &str) -> AppResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Please provide email and password.".into(),
        ));
    }
    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "Email is not a valid email address.".into(),
        ));
    }
    Ok(())
}
