use chrono::NaiveDate;

use super::catalog::center_label;
use super::draft::BookingDraft;

const NOT_SELECTED: &str = "Not selected";

/// Read-only view of the draft shown on the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub status: String,
    pub time: String,
    pub tracking_number: String,
    pub date: String,
    pub center: String,
}

/// e.g. `Tuesday, October 20, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `10/20/2026`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Catalog label for the draft's center, or the raw id when it is not in the catalog.
pub fn center_display(draft: &BookingDraft) -> String {
    draft
        .center
        .as_deref()
        .map(|id| center_label(id).map(str::to_string).unwrap_or_else(|| id.to_string()))
        .unwrap_or_default()
}

impl ConfirmationSummary {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            name: draft.applicant.full_name(),
            email: draft.applicant.email.clone(),
            phone: draft.applicant.phone.clone(),
            service: draft
                .service
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            status: draft.status().label().to_string(),
            time: draft.time.clone().unwrap_or_else(|| NOT_SELECTED.to_string()),
            tracking_number: draft.tracking_number().unwrap_or_default().to_string(),
            date: draft
                .date
                .map(long_date)
                .unwrap_or_else(|| NOT_SELECTED.to_string()),
            center: center_display(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::catalog::find_service;
    use crate::booking::draft::{ApplicantField, DraftAction};

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(long_date(date), "Tuesday, October 20, 2026");
        assert_eq!(short_date(date), "10/20/2026");
    }

    #[test]
    fn unselected_schedule_reads_not_selected() {
        let mut draft = BookingDraft::new();
        draft.apply(DraftAction::SelectService(find_service(2)));
        draft.apply(DraftAction::SelectCenter(Some("7".to_string())));
        draft.apply(DraftAction::SetApplicant(ApplicantField::LastName, "Hopper".to_string()));

        let summary = ConfirmationSummary::from_draft(&draft);
        assert_eq!(summary.service, "BVN Enrolment");
        assert_eq!(summary.center, "Manchester, UK");
        assert_eq!(summary.name, "Hopper");
        assert_eq!(summary.date, "Not selected");
        assert_eq!(summary.time, "Not selected");
        assert_eq!(summary.status, "Processing");
        assert_eq!(summary.tracking_number, "");
    }
}
