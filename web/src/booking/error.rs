use thiserror::Error;

use super::documents::DocumentKind;

/// A missing or malformed input. Recoverable by correcting the field and retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a service")]
    MissingService,
    #[error("Please select a center")]
    MissingCenter,
    #[error("Please enter your first name")]
    MissingFirstName,
    #[error("Please enter your last name")]
    MissingLastName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter your phone")]
    MissingPhone,
    #[error("Please upload {}", .0.prompt())]
    MissingDocument(DocumentKind),
    #[error("{} is empty", .0.label())]
    EmptyFile(DocumentKind),
    #[error("{} is too large (>10MB)", .0.label())]
    FileTooLarge(DocumentKind),
}

/// Failure reported by an external store. Carries the store's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<leptos::prelude::ServerFnError> for StoreError {
    fn from(error: leptos::prelude::ServerFnError) -> Self {
        match error {
            leptos::prelude::ServerFnError::ServerError(message) => Self(message),
            other => Self(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Upload failed for {kind}: {source}")]
    Upload {
        kind: DocumentKind,
        source: StoreError,
    },
    #[error("Failed to save appointment: {0}")]
    Store(StoreError),
    #[error("Error generating PDF: {0}")]
    Export(String),
}
