use chrono::{Datelike, NaiveDate};
use shared_types::ServiceOption;
use visa_portal::booking::calendar::month_grid;
use visa_portal::booking::catalog::find_service;
use visa_portal::booking::slots::time_slots;
use visa_portal::booking::tracking::is_tracking_number;
use visa_portal::booking::{
    ApplicantField, Attachment, AvailabilitySnapshot, CalendarCell, ConfirmationSummary, DayStatus,
    DocumentKind, DraftAction, StepEffect, ValidationError, WizardState, WizardStep, YearMonth,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pdf(name: &str) -> Attachment {
    Attachment::new(name, "application/pdf", b"%PDF-1.4 test".to_vec())
}

fn fill_applicant(wizard: &mut WizardState) {
    for (field, value) in [
        (ApplicantField::FirstName, "Ada"),
        (ApplicantField::LastName, "Lovelace"),
        (ApplicantField::Email, "ada@example.com"),
        (ApplicantField::Phone, "555-0100"),
    ] {
        wizard.dispatch(DraftAction::SetApplicant(field, value.to_string()));
    }
}

#[test]
fn every_month_has_offset_plus_days_cells() {
    let today = date(2026, 10, 19);
    let snapshot = AvailabilitySnapshot::empty();

    for year in [2024, 2025, 2026, 2100] {
        for month in 1..=12 {
            let view = YearMonth::new(year, month).unwrap();
            let grid = month_grid(view, today, &snapshot);
            let offset = view.first_day().weekday().num_days_from_sunday() as usize;

            assert_eq!(grid.leading_blanks(), offset);
            assert_eq!(grid.cells.len(), offset + view.days_in_month() as usize);
        }
    }
}

#[test]
fn exactly_the_days_before_today_are_disabled() {
    let today = date(2026, 10, 19);
    let grid = month_grid(YearMonth::of(today), today, &AvailabilitySnapshot::empty());

    for (day, status) in grid.days() {
        if day < today {
            assert_eq!(status, DayStatus::Past);
            assert!(!status.is_selectable());
        } else if day == today {
            assert_eq!(status, DayStatus::Today);
            assert!(status.is_selectable());
        } else {
            assert_eq!(status, DayStatus::Open);
        }
    }
}

#[test]
fn reserved_dates_are_booked_even_when_today() {
    let today = date(2026, 10, 19);
    let snapshot = AvailabilitySnapshot::new([today, date(2026, 10, 27)]);
    let grid = month_grid(YearMonth::of(today), today, &snapshot);

    let booked: Vec<_> = grid
        .cells
        .iter()
        .filter_map(|cell| match cell {
            CalendarCell::Day { date, status: DayStatus::Booked } => Some(*date),
            _ => None,
        })
        .collect();

    assert_eq!(booked, vec![today, date(2026, 10, 27)]);
}

#[test]
fn fifteen_slots_end_at_four_pm() {
    let slots: Vec<String> = time_slots().collect();
    assert_eq!(slots.len(), 15);
    assert_eq!(slots.first().map(String::as_str), Some("9:00 AM"));
    assert_eq!(slots.last().map(String::as_str), Some("4:00 PM"));
    assert!(!slots.iter().any(|s| s == "4:30 PM"));
}

#[test]
fn service_step_needs_service_and_center() {
    let mut wizard = WizardState::new(date(2026, 10, 19));
    assert_eq!(wizard.advance(), Err(ValidationError::MissingService));

    wizard.dispatch(DraftAction::SelectService(find_service(1)));
    assert_eq!(wizard.can_advance(), Err(ValidationError::MissingCenter));

    wizard.dispatch(DraftAction::SelectCenter(Some("1".to_string())));
    assert_eq!(wizard.can_advance(), Ok(()));
    assert_eq!(wizard.advance(), Ok(StepEffect::RefreshAvailability));
    assert_eq!(wizard.step(), WizardStep::DateTime);
}

#[test]
fn applicant_step_needs_valid_email_and_both_required_files() {
    let mut wizard = WizardState::new(date(2026, 10, 19));
    wizard.dispatch(DraftAction::SelectService(find_service(3)));
    wizard.dispatch(DraftAction::SelectCenter(Some("7".to_string())));
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::ApplicantDetails);

    fill_applicant(&mut wizard);
    wizard.dispatch(DraftAction::SetApplicant(ApplicantField::Email, "ada.example.com".to_string()));
    assert_eq!(wizard.advance(), Err(ValidationError::InvalidEmail));

    wizard.dispatch(DraftAction::SetApplicant(ApplicantField::Email, "ada@example.com".to_string()));
    assert_eq!(
        wizard.advance(),
        Err(ValidationError::MissingDocument(DocumentKind::Passport))
    );

    wizard.dispatch(DraftAction::Attach(DocumentKind::Passport, pdf("passport.pdf")));
    assert_eq!(
        wizard.advance(),
        Err(ValidationError::MissingDocument(DocumentKind::Photo))
    );

    wizard.dispatch(DraftAction::Attach(DocumentKind::Photo, pdf("photo.pdf")));
    assert_eq!(wizard.advance(), Ok(StepEffect::RenderSummary));
    assert_eq!(wizard.step(), WizardStep::Confirmation);
}

#[test]
fn reentering_confirmation_keeps_tracking_number() {
    let mut wizard = WizardState::new(date(2026, 10, 19));
    wizard.dispatch(DraftAction::SelectService(find_service(2)));
    wizard.dispatch(DraftAction::SelectCenter(Some("8".to_string())));
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    fill_applicant(&mut wizard);
    wizard.dispatch(DraftAction::Attach(DocumentKind::Passport, pdf("passport.pdf")));
    wizard.dispatch(DraftAction::Attach(DocumentKind::Photo, pdf("photo.pdf")));
    wizard.advance().unwrap();

    let first = wizard.draft.tracking_number().map(str::to_string);
    wizard.back();
    wizard.advance().unwrap();

    assert!(first.is_some());
    assert_eq!(wizard.draft.tracking_number().map(str::to_string), first);
}

#[test]
fn end_to_end_usa_visa_booking_summary() {
    let today = date(2026, 10, 19);
    let mut wizard = WizardState::new(today);

    let service: ServiceOption =
        serde_json::from_str(r#"{"id":6,"name":"USA Visa","sortCode":"USV"}"#).unwrap();
    wizard.dispatch(DraftAction::SelectService(Some(service)));
    wizard.dispatch(DraftAction::SelectCenter(Some("21".to_string())));
    assert_eq!(wizard.advance(), Ok(StepEffect::RefreshAvailability));

    wizard.set_availability(AvailabilitySnapshot::new([date(2026, 10, 20)]));
    assert!(!wizard.select_date(date(2026, 10, 20), today));
    assert!(wizard.select_date(date(2026, 10, 22), today));
    assert!(wizard.select_time("10:00 AM"));
    wizard.advance().unwrap();

    fill_applicant(&mut wizard);
    wizard.dispatch(DraftAction::Attach(DocumentKind::Passport, pdf("passport.pdf")));
    wizard.dispatch(DraftAction::Attach(DocumentKind::Photo, pdf("photo.pdf")));
    assert_eq!(wizard.advance(), Ok(StepEffect::RenderSummary));

    let summary = ConfirmationSummary::from_draft(&wizard.draft);
    assert_eq!(summary.service, "USA Visa");
    assert_eq!(summary.name, "Ada Lovelace");
    assert_eq!(summary.time, "10:00 AM");
    assert_eq!(summary.date, "Thursday, October 22, 2026");
    assert_eq!(summary.center, "New York, US");
    assert_eq!(summary.status, "Processing");
    assert!(is_tracking_number(&summary.tracking_number));
}
