use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// JSON body returned when a listing request cannot be served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::Form(form) => Self::new(form.to_string()),
            ServiceError::Repository(_) => Self::new("internal server error"),
        }
    }
}
