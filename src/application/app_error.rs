use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Validation(String),

    #[error("A school with this email address already exists")]
    DuplicateEmail,

    #[error("Invalid Licence Number")]
    InvalidLicence,

    #[error("Incorrect email or password.")]
    InvalidCredentials,

    #[error("You have not activated your account. Please do so to gain access.")]
    AccountNotActivated,

    #[error("Email delivery failed: {0}")]
    Delivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    ValidationError,
    DuplicateEmail,
    InvalidLicence,
    InvalidCredentials,
    AccountNotActivated,
    DeliveryError,
    NotFound,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::InvalidLicence => "INVALID_LICENCE",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::AccountNotActivated => "ACCOUNT_NOT_ACTIVATED",
            ErrorCode::DeliveryError => "DELIVERY_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
