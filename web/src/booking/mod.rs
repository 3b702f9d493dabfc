//! Appointment booking: the wizard state machine, the calendar and slot generators,
//! and submission to the file and booking stores.
//!
//! Everything here except [`remote`] is free of reactive state so it can be driven
//! from components and tests alike.

pub mod calendar;
pub mod catalog;
pub mod documents;
pub mod draft;
pub mod error;
pub mod export;
pub mod remote;
pub mod slots;
pub mod steps;
pub mod submission;
pub mod summary;
pub mod tracking;

pub use calendar::{AvailabilitySnapshot, CalendarCell, DayStatus, MonthGrid, YearMonth};
pub use documents::{Attachment, DocumentKind, MAX_DOCUMENT_BYTES};
pub use draft::{AddressField, ApplicantField, BookingDraft, BookingStatus, DraftAction};
pub use error::{BookingError, StoreError, ValidationError};
pub use steps::{StepEffect, WizardState, WizardStep};
pub use submission::{submit_booking, BookingStore, FileStore};
pub use summary::ConfirmationSummary;
