use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::json;
use shared_types::{Addresses, Applicant, ServiceOption};
use uuid::Uuid;

use super::documents::{Attachment, DocumentKind};
use super::tracking::generate_tracking_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Processing,
    Submitted,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Processing => "Processing",
            BookingStatus::Submitted => "Submitted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantField {
    FirstName,
    LastName,
    Email,
    Phone,
    Program,
    Course,
    AdditionalEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Secondary,
    HighSchool,
    University,
}

/// Every way the wizard can change the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SelectService(Option<ServiceOption>),
    SelectCenter(Option<String>),
    SelectVisaType(Option<String>),
    SelectDate(NaiveDate),
    ClearDate,
    SelectTime(String),
    SetApplicant(ApplicantField, String),
    SetAddress(AddressField, String),
    Attach(DocumentKind, Attachment),
    Detach(DocumentKind),
}

/// The in-progress booking. Lives for one visit to the appointment page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub service: Option<ServiceOption>,
    pub center: Option<String>,
    pub visa_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub applicant: Applicant,
    pub documents: BTreeMap<DocumentKind, Attachment>,
    pub addresses: Addresses,
    tracking_number: Option<String>,
    submission_id: Option<Uuid>,
    status: BookingStatus,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::SelectService(service) => {
                if !service.as_ref().is_some_and(ServiceOption::requires_visa_type) {
                    self.visa_type = None;
                }
                self.service = service;
            }
            DraftAction::SelectCenter(center) => self.center = non_empty(center),
            DraftAction::SelectVisaType(visa_type) => self.visa_type = non_empty(visa_type),
            DraftAction::SelectDate(date) => self.date = Some(date),
            DraftAction::ClearDate => self.date = None,
            DraftAction::SelectTime(time) => self.time = Some(time),
            DraftAction::SetApplicant(field, value) => {
                let applicant = &mut self.applicant;
                let slot = match field {
                    ApplicantField::FirstName => &mut applicant.first_name,
                    ApplicantField::LastName => &mut applicant.last_name,
                    ApplicantField::Email => &mut applicant.email,
                    ApplicantField::Phone => &mut applicant.phone,
                    ApplicantField::Program => &mut applicant.program,
                    ApplicantField::Course => &mut applicant.course,
                    ApplicantField::AdditionalEmail => &mut applicant.additional_email,
                };
                *slot = value;
            }
            DraftAction::SetAddress(field, value) => {
                let addresses = &mut self.addresses;
                let slot = match field {
                    AddressField::Secondary => &mut addresses.secondary,
                    AddressField::HighSchool => &mut addresses.high_school,
                    AddressField::University => &mut addresses.university,
                };
                *slot = value;
            }
            DraftAction::Attach(kind, attachment) => {
                self.documents.insert(kind, attachment);
            }
            DraftAction::Detach(kind) => {
                self.documents.remove(&kind);
            }
        }
    }

    pub fn shows_visa_type(&self) -> bool {
        self.service
            .as_ref()
            .is_some_and(ServiceOption::requires_visa_type)
    }

    pub fn document(&self, kind: DocumentKind) -> Option<&Attachment> {
        self.documents.get(&kind)
    }

    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    /// Assigns a tracking number on first use; later calls return the same one.
    pub fn ensure_tracking_number(&mut self) -> &str {
        self.tracking_number
            .get_or_insert_with(generate_tracking_number)
            .as_str()
    }

    pub fn submission_id(&self) -> Option<Uuid> {
        self.submission_id
    }

    /// Key of the stored record. Like the tracking number it is drawn once per draft.
    pub fn ensure_submission_id(&mut self) -> Uuid {
        *self.submission_id.get_or_insert_with(Uuid::new_v4)
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn mark_submitted(&mut self) {
        self.status = BookingStatus::Submitted;
    }

    /// Carries the tracking number and status of a draft that went through submission
    /// back onto this one, leaving all user input untouched.
    pub fn adopt_outcome(&mut self, submitted: &BookingDraft) {
        if self.tracking_number.is_none() {
            self.tracking_number = submitted.tracking_number.clone();
        }
        if self.submission_id.is_none() {
            self.submission_id = submitted.submission_id;
        }
        self.status = submitted.status;
    }

    /// Snapshot of the draft kept alongside the record for auditing.
    /// Documents appear by file name only.
    pub fn raw_payload(&self) -> serde_json::Value {
        let documents: BTreeMap<&str, &str> = DocumentKind::ALL
            .iter()
            .map(|kind| {
                let name = self
                    .document(*kind)
                    .map(|a| a.file_name.as_str())
                    .unwrap_or("");
                (kind.key(), name)
            })
            .collect();

        json!({
            "service": self.service,
            "center": self.center,
            "visaType": self.visa_type,
            "date": self.date,
            "time": self.time,
            "applicant": self.applicant,
            "documents": documents,
            "addresses": self.addresses,
            "trackingNumber": self.tracking_number,
            "status": BookingStatus::Processing.label(),
        })
    }
}
