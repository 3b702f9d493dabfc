use chrono::NaiveDate;

use super::calendar::{day_status, month_grid, AvailabilitySnapshot, MonthGrid, YearMonth};
use super::documents::DocumentKind;
use super::draft::{BookingDraft, DraftAction};
use super::error::ValidationError;
use super::slots::is_slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    ServiceSelection,
    DateTime,
    ApplicantDetails,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::ServiceSelection,
        WizardStep::DateTime,
        WizardStep::ApplicantDetails,
        WizardStep::Confirmation,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::ServiceSelection => 0,
            WizardStep::DateTime => 1,
            WizardStep::ApplicantDetails => 2,
            WizardStep::Confirmation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ServiceSelection => "Service",
            WizardStep::DateTime => "Date & Time",
            WizardStep::ApplicantDetails => "Applicant Details",
            WizardStep::Confirmation => "Confirmation",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn progress_percent(self) -> f64 {
        self.index() as f64 / (Self::ALL.len() - 1) as f64 * 100.0
    }
}

/// Work the caller must do after the wizard enters a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    None,
    /// Fetch a fresh availability snapshot, then render the calendar.
    RefreshAvailability,
    /// Render the read-only summary; the tracking number is already assigned.
    RenderSummary,
}

pub fn check_service_selection(draft: &BookingDraft) -> Result<(), ValidationError> {
    if draft.service.is_none() {
        return Err(ValidationError::MissingService);
    }
    if draft.center.is_none() {
        return Err(ValidationError::MissingCenter);
    }
    Ok(())
}

pub fn check_applicant_details(draft: &BookingDraft) -> Result<(), ValidationError> {
    let applicant = &draft.applicant;
    if applicant.first_name.trim().is_empty() {
        return Err(ValidationError::MissingFirstName);
    }
    if applicant.last_name.trim().is_empty() {
        return Err(ValidationError::MissingLastName);
    }
    if !applicant.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if applicant.phone.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    for kind in [DocumentKind::Passport, DocumentKind::Photo] {
        if draft.document(kind).is_none() {
            return Err(ValidationError::MissingDocument(kind));
        }
    }
    Ok(())
}

/// The wizard: which step is active, the draft it is filling in, and the calendar view.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    pub draft: BookingDraft,
    view_month: YearMonth,
    availability: AvailabilitySnapshot,
    availability_request: u64,
}

impl WizardState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            step: WizardStep::ServiceSelection,
            draft: BookingDraft::new(),
            view_month: YearMonth::of(today),
            availability: AvailabilitySnapshot::empty(),
            availability_request: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Guard for leaving the current step forwards.
    pub fn can_advance(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::ServiceSelection => check_service_selection(&self.draft),
            // Date and time are not enforced before moving on.
            WizardStep::DateTime => Ok(()),
            WizardStep::ApplicantDetails => check_applicant_details(&self.draft),
            WizardStep::Confirmation => Ok(()),
        }
    }

    pub fn advance(&mut self) -> Result<StepEffect, ValidationError> {
        self.can_advance()?;
        match self.step.next() {
            Some(next) => Ok(self.enter(next)),
            None => Ok(StepEffect::None),
        }
    }

    pub fn back(&mut self) -> StepEffect {
        match self.step.previous() {
            Some(previous) => self.enter(previous),
            None => StepEffect::None,
        }
    }

    fn enter(&mut self, step: WizardStep) -> StepEffect {
        self.step = step;
        match step {
            WizardStep::DateTime => StepEffect::RefreshAvailability,
            WizardStep::Confirmation => {
                self.draft.ensure_tracking_number();
                StepEffect::RenderSummary
            }
            _ => StepEffect::None,
        }
    }

    pub fn dispatch(&mut self, action: DraftAction) {
        self.draft.apply(action);
    }

    /// Selects `date` if its calendar cell is selectable. Returns whether it was accepted.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let selectable = day_status(date, today, &self.availability).is_selectable();
        if selectable {
            self.draft.apply(DraftAction::SelectDate(date));
        }
        selectable
    }

    pub fn select_time(&mut self, label: &str) -> bool {
        let known = is_slot(label);
        if known {
            self.draft.apply(DraftAction::SelectTime(label.to_string()));
        }
        known
    }

    pub fn view_month(&self) -> YearMonth {
        self.view_month
    }

    pub fn show_previous_month(&mut self) {
        self.view_month = self.view_month.previous();
    }

    pub fn show_next_month(&mut self) {
        self.view_month = self.view_month.next();
    }

    pub fn availability(&self) -> &AvailabilitySnapshot {
        &self.availability
    }

    /// Replaces the snapshot. A selected date that is now reserved is dropped.
    pub fn set_availability(&mut self, snapshot: AvailabilitySnapshot) {
        if self.draft.date.is_some_and(|date| snapshot.is_reserved(date)) {
            tracing::info!(date = ?self.draft.date, "selected date was reserved meanwhile");
            self.draft.apply(DraftAction::ClearDate);
        }
        self.availability = snapshot;
    }

    /// Starts an availability fetch. Only the result carrying the latest ticket is applied.
    pub fn begin_availability_refresh(&mut self) -> u64 {
        self.availability_request += 1;
        self.availability_request
    }

    pub fn is_current_availability_request(&self, ticket: u64) -> bool {
        ticket == self.availability_request
    }

    /// Applies a fetched snapshot unless a newer fetch has started since. Returns whether it was applied.
    pub fn complete_availability_refresh(&mut self, ticket: u64, snapshot: AvailabilitySnapshot) -> bool {
        if !self.is_current_availability_request(ticket) {
            tracing::debug!(ticket, latest = self.availability_request, "discarding stale availability");
            return false;
        }
        self.set_availability(snapshot);
        true
    }

    pub fn calendar(&self, today: NaiveDate) -> MonthGrid {
        month_grid(self.view_month, today, &self.availability)
    }
}
