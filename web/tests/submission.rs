use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDate;
use shared_types::{AppointmentRecord, DateWindow};
use visa_portal::booking::catalog::find_service;
use visa_portal::booking::documents::MAX_DOCUMENT_BYTES;
use visa_portal::booking::submission::load_availability;
use visa_portal::booking::{
    submit_booking, ApplicantField, Attachment, BookingDraft, BookingError, BookingStatus,
    BookingStore, DocumentKind, DraftAction, FileStore, StoreError, ValidationError,
};

#[derive(Default)]
struct FakeFiles {
    uploads: RefCell<Vec<(DocumentKind, String)>>,
    discarded: RefCell<Vec<String>>,
    fail_on: Option<DocumentKind>,
}

#[async_trait(?Send)]
impl FileStore for FakeFiles {
    async fn upload(
        &self,
        kind: DocumentKind,
        attachment: &Attachment,
        folder: &str,
    ) -> Result<String, StoreError> {
        if self.fail_on == Some(kind) {
            return Err(StoreError::new("upload rejected"));
        }
        self.uploads.borrow_mut().push((kind, folder.to_string()));
        Ok(format!("https://files.test/{}/{}", folder, attachment.file_name))
    }

    async fn discard(&self, url: &str) -> Result<(), StoreError> {
        self.discarded.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct FakeBookings {
    inserts: RefCell<Vec<AppointmentRecord>>,
    queries: Cell<usize>,
    reject: bool,
}

#[async_trait(?Send)]
impl BookingStore for FakeBookings {
    async fn reserved_dates(&self, _window: DateWindow) -> Result<Vec<NaiveDate>, StoreError> {
        self.queries.set(self.queries.get() + 1);
        if self.reject {
            Err(StoreError::new("database unavailable"))
        } else {
            Ok(vec![NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()])
        }
    }

    async fn insert_booking(&self, record: &AppointmentRecord) -> Result<(), StoreError> {
        if self.reject {
            return Err(StoreError::new("duplicate key value"));
        }
        let mut inserts = self.inserts.borrow_mut();
        if inserts.iter().any(|r| r.submission_id == record.submission_id) {
            return Err(StoreError::new(
                "duplicate key value violates unique constraint \"appointments_submission_id_key\"",
            ));
        }
        inserts.push(record.clone());
        Ok(())
    }
}

fn file(name: &str, size: usize) -> Attachment {
    Attachment::new(name, "image/jpeg", vec![7u8; size])
}

fn ready_draft() -> BookingDraft {
    let mut draft = BookingDraft::new();
    draft.apply(DraftAction::SelectService(find_service(6)));
    draft.apply(DraftAction::SelectCenter(Some("21".to_string())));
    draft.apply(DraftAction::SelectDate(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()));
    draft.apply(DraftAction::SelectTime("10:00 AM".to_string()));
    draft.apply(DraftAction::SetApplicant(ApplicantField::FirstName, "Ada".to_string()));
    draft.apply(DraftAction::SetApplicant(ApplicantField::LastName, "Lovelace".to_string()));
    draft.apply(DraftAction::SetApplicant(ApplicantField::Email, "ada@example.com".to_string()));
    draft.apply(DraftAction::SetApplicant(ApplicantField::Phone, "555-0100".to_string()));
    draft.apply(DraftAction::Attach(DocumentKind::Passport, file("passport.jpg", 2048)));
    draft.apply(DraftAction::Attach(DocumentKind::Photo, file("photo.jpg", 1024)));
    draft
}

#[tokio::test]
async fn optional_documents_are_absent_from_the_record() {
    let files = FakeFiles::default();
    let bookings = FakeBookings::default();
    let mut draft = ready_draft();

    let tracking = submit_booking(&mut draft, &files, &bookings).await.unwrap();

    let inserts = bookings.inserts.borrow();
    assert_eq!(inserts.len(), 1);
    let record = &inserts[0];
    assert_eq!(record.tracking_number, tracking);
    assert_eq!(record.status, "Processing");
    assert_eq!(
        record.documents.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["passport", "photo"]
    );
    assert_eq!(
        record.appointment_date.map(|d| d.to_rfc3339()),
        Some("2026-10-22T00:00:00+00:00".to_string())
    );

    let folder = format!("appointments/{}", tracking);
    assert!(files.uploads.borrow().iter().all(|(_, f)| *f == folder));
    assert_eq!(draft.status(), BookingStatus::Submitted);
}

#[tokio::test]
async fn empty_file_fails_before_any_store_call() {
    let files = FakeFiles::default();
    let bookings = FakeBookings::default();
    let mut draft = ready_draft();
    draft.apply(DraftAction::Attach(DocumentKind::Transcript, file("transcript.pdf", 0)));

    let result = submit_booking(&mut draft, &files, &bookings).await;

    assert_eq!(
        result,
        Err(BookingError::Validation(ValidationError::EmptyFile(DocumentKind::Transcript)))
    );
    assert!(files.uploads.borrow().is_empty());
    assert!(bookings.inserts.borrow().is_empty());
    assert_eq!(draft.status(), BookingStatus::Processing);
}

#[tokio::test]
async fn oversized_file_fails_before_any_upload() {
    let files = FakeFiles::default();
    let bookings = FakeBookings::default();
    let mut draft = ready_draft();
    draft.apply(DraftAction::Attach(
        DocumentKind::Others,
        file("scans.zip", MAX_DOCUMENT_BYTES + 1),
    ));

    let result = submit_booking(&mut draft, &files, &bookings).await;

    assert_eq!(
        result,
        Err(BookingError::Validation(ValidationError::FileTooLarge(DocumentKind::Others)))
    );
    assert!(files.uploads.borrow().is_empty());
    assert!(files.discarded.borrow().is_empty());
    assert!(bookings.inserts.borrow().is_empty());
    assert_eq!(draft.status(), BookingStatus::Processing);
}

#[tokio::test]
async fn failed_upload_discards_earlier_uploads() {
    let files = FakeFiles {
        fail_on: Some(DocumentKind::Bachelor),
        ..Default::default()
    };
    let bookings = FakeBookings::default();
    let mut draft = ready_draft();
    draft.apply(DraftAction::Attach(DocumentKind::Bachelor, file("degree.pdf", 512)));

    let result = submit_booking(&mut draft, &files, &bookings).await;

    assert!(matches!(
        result,
        Err(BookingError::Upload { kind: DocumentKind::Bachelor, .. })
    ));
    assert_eq!(files.uploads.borrow().len(), 2);
    assert_eq!(files.discarded.borrow().len(), 2);
    assert!(bookings.inserts.borrow().is_empty());
}

#[tokio::test]
async fn failed_insert_keeps_draft_retriable() {
    let files = FakeFiles::default();
    let bookings = FakeBookings {
        reject: true,
        ..Default::default()
    };
    let mut draft = ready_draft();

    let result = submit_booking(&mut draft, &files, &bookings).await;

    assert_eq!(
        result.map_err(|e| e.to_string()),
        Err("Failed to save appointment: duplicate key value".to_string())
    );
    assert_eq!(files.discarded.borrow().len(), 2);
    assert_eq!(draft.status(), BookingStatus::Processing);
    assert!(draft.tracking_number().is_some());
    assert_eq!(draft.applicant.first_name, "Ada");
}

#[tokio::test]
async fn retry_reuses_tracking_number() {
    let files = FakeFiles::default();
    let failing = FakeBookings {
        reject: true,
        ..Default::default()
    };
    let mut draft = ready_draft();

    assert!(submit_booking(&mut draft, &files, &failing).await.is_err());
    let first = draft.tracking_number().map(str::to_string);

    let key = draft.submission_id();
    assert!(key.is_some());

    let working = FakeBookings::default();
    let tracking = submit_booking(&mut draft, &files, &working).await.unwrap();
    assert_eq!(Some(tracking), first);
    assert_eq!(working.inserts.borrow()[0].submission_id, key.unwrap());
}

#[tokio::test]
async fn tracking_number_already_on_file_does_not_block_the_insert() {
    let files = FakeFiles::default();
    let bookings = FakeBookings::default();

    let mut earlier = ready_draft();
    submit_booking(&mut earlier, &files, &bookings).await.unwrap();

    let mut draft = ready_draft();
    let tracking = draft.ensure_tracking_number().to_string();
    bookings.inserts.borrow_mut()[0].tracking_number = tracking.clone();

    let saved = submit_booking(&mut draft, &files, &bookings).await;

    assert_eq!(saved, Ok(tracking.clone()));
    let inserts = bookings.inserts.borrow();
    assert_eq!(inserts.len(), 2);
    assert!(inserts.iter().all(|r| r.tracking_number == tracking));
    assert_ne!(inserts[0].submission_id, inserts[1].submission_id);
    assert_eq!(draft.status(), BookingStatus::Submitted);
}

#[tokio::test]
async fn resubmitting_a_saved_draft_is_rejected_by_its_key() {
    let files = FakeFiles::default();
    let bookings = FakeBookings::default();
    let mut draft = ready_draft();

    submit_booking(&mut draft, &files, &bookings).await.unwrap();
    let again = submit_booking(&mut draft, &files, &bookings).await;

    assert!(matches!(again, Err(BookingError::Store(_))));
    assert_eq!(bookings.inserts.borrow().len(), 1);
    assert_eq!(files.discarded.borrow().len(), 2);
}

#[tokio::test]
async fn availability_failure_yields_empty_snapshot() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let broken = FakeBookings {
        reject: true,
        ..Default::default()
    };
    let snapshot = load_availability(&broken, today).await;
    assert!(snapshot.is_empty());
    assert_eq!(broken.queries.get(), 1);

    let working = FakeBookings::default();
    let snapshot = load_availability(&working, today).await;
    assert!(snapshot.is_reserved(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()));
}
