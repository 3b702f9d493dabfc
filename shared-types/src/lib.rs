use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service from the fixed catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: u32,
    pub name: String,
    pub sort_code: String,
}

impl ServiceOption {
    /// Visa services additionally ask for a visa type.
    pub fn requires_visa_type(&self) -> bool {
        self.name.contains("Visa")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub course: String,
    pub additional_email: String,
}

impl Applicant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Addresses {
    pub secondary: String,
    pub high_school: String,
    pub university: String,
}

/// The composite row written to the booking store once all documents are uploaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppointmentRecord {
    /// Unique key of the stored row. Drawn once per draft, so retries reuse it.
    pub submission_id: Uuid,
    /// Display reference shown to the applicant; not guaranteed unique.
    pub tracking_number: String,
    pub service: Option<ServiceOption>,
    pub center: Option<String>,
    pub visa_type: Option<String>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub appointment_time: Option<String>,
    pub applicant: Applicant,
    pub addresses: Addresses,
    /// Document key (`passport`, `photo`, ...) to hosted URL. Omitted documents have no entry.
    pub documents: BTreeMap<String, String>,
    pub status: String,
    pub raw_payload: serde_json::Value,
}

/// Inclusive date window for the reserved-dates query.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// A single document on its way to the file store. `data` is standard base64.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub key: String,
    pub file_name: String,
    pub content_type: String,
    pub folder: String,
    pub data: String,
}

/// Fields printed on the downloadable appointment slip.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SlipFields {
    pub tracking_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub center: String,
}

impl SlipFields {
    pub fn file_name(&self) -> String {
        let tracking = if self.tracking_number.is_empty() {
            "x"
        } else {
            self.tracking_number.as_str()
        };
        format!("appointment_slip_{}.pdf", tracking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_option_uses_camel_case_sort_code() {
        let service: ServiceOption =
            serde_json::from_str(r#"{"id":6,"name":"USA Visa","sortCode":"USV"}"#).unwrap();
        assert_eq!(service.sort_code, "USV");
        assert!(service.requires_visa_type());
    }

    #[test]
    fn slip_file_name_falls_back_without_tracking_number() {
        let mut fields = SlipFields::default();
        assert_eq!(fields.file_name(), "appointment_slip_x.pdf");
        fields.tracking_number = "REF-123456".to_string();
        assert_eq!(fields.file_name(), "appointment_slip_REF-123456.pdf");
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let applicant = Applicant {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(applicant.full_name(), "Ada");
    }
}
