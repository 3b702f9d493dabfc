use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Largest document accepted by the file store.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Passport,
    Photo,
    OLevel,
    ALevel,
    Bachelor,
    Transcript,
    Others,
}

impl DocumentKind {
    /// Upload order.
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::Passport,
        DocumentKind::Photo,
        DocumentKind::OLevel,
        DocumentKind::ALevel,
        DocumentKind::Bachelor,
        DocumentKind::Transcript,
        DocumentKind::Others,
    ];

    /// Key used in the stored record's `documents` map.
    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::Passport => "passport",
            DocumentKind::Photo => "photo",
            DocumentKind::OLevel => "oLevel",
            DocumentKind::ALevel => "aLevel",
            DocumentKind::Bachelor => "bachelor",
            DocumentKind::Transcript => "transcript",
            DocumentKind::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Passport => "Passport (scanned page)",
            DocumentKind::Photo => "Passport-sized Photo",
            DocumentKind::OLevel => "O-Level Certificate",
            DocumentKind::ALevel => "A-Level Certificate",
            DocumentKind::Bachelor => "Bachelor Certificate",
            DocumentKind::Transcript => "Transcript",
            DocumentKind::Others => "Other Documents",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            DocumentKind::Passport => "passport scan",
            DocumentKind::Photo => "passport photo",
            other => other.label(),
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, DocumentKind::Passport | DocumentKind::Photo)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A file picked by the applicant, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn validate(&self, kind: DocumentKind) -> Result<(), ValidationError> {
        validate_size(kind, self.len())
    }
}

pub fn validate_size(kind: DocumentKind, size: usize) -> Result<(), ValidationError> {
    if size == 0 {
        return Err(ValidationError::EmptyFile(kind));
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(ValidationError::FileTooLarge(kind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_record_format() {
        let keys: Vec<_> = DocumentKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(
            keys,
            ["passport", "photo", "oLevel", "aLevel", "bachelor", "transcript", "others"]
        );
        assert_eq!(
            serde_json::to_string(&DocumentKind::OLevel).unwrap(),
            "\"oLevel\""
        );
    }

    #[test]
    fn only_passport_and_photo_are_required() {
        let required: Vec<_> = DocumentKind::ALL
            .into_iter()
            .filter(|k| k.is_required())
            .collect();
        assert_eq!(required, [DocumentKind::Passport, DocumentKind::Photo]);
    }

    #[test]
    fn size_limits() {
        assert_eq!(
            validate_size(DocumentKind::Photo, 0),
            Err(ValidationError::EmptyFile(DocumentKind::Photo))
        );
        assert!(validate_size(DocumentKind::Photo, MAX_DOCUMENT_BYTES).is_ok());
        assert_eq!(
            validate_size(DocumentKind::Transcript, MAX_DOCUMENT_BYTES + 1),
            Err(ValidationError::FileTooLarge(DocumentKind::Transcript))
        );
    }
}
