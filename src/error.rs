use thiserror::Error;

/// Shown when the order service fails without a usable message in its body.
pub const GENERIC_SERVICE_ERROR: &str = "something went wrong, please try again";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("transport error")]
    Transport(#[from] reqwest::Error),
}

impl AppError {
    /// Validation errors are detected before any network round trip.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyCart | AppError::MissingField(_))
    }

    /// Message suitable for direct display to the operator.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Service { message, .. } => message.clone(),
            AppError::Transport(_) => GENERIC_SERVICE_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
