use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use shared_types::{AppointmentRecord, DateWindow};
use uuid::Uuid;

use super::calendar::AvailabilitySnapshot;
use super::documents::{Attachment, DocumentKind};
use super::draft::{BookingDraft, BookingStatus};
use super::error::{BookingError, StoreError, ValidationError};

/// Hosted binary storage for applicant documents.
#[async_trait(?Send)]
pub trait FileStore {
    /// Uploads `attachment` under `folder` and returns its public URL.
    async fn upload(
        &self,
        kind: DocumentKind,
        attachment: &Attachment,
        folder: &str,
    ) -> Result<String, StoreError>;

    /// Removes a file uploaded earlier in an attempt that did not complete.
    async fn discard(&self, url: &str) -> Result<(), StoreError>;
}

/// Structured storage for booking records.
#[async_trait(?Send)]
pub trait BookingStore {
    async fn reserved_dates(&self, window: DateWindow) -> Result<Vec<NaiveDate>, StoreError>;

    async fn insert_booking(&self, record: &AppointmentRecord) -> Result<(), StoreError>;
}

pub fn upload_folder(tracking_number: &str) -> String {
    format!("appointments/{}", tracking_number)
}

/// Fetches the snapshot for the scheduling step. A failed fetch yields an empty snapshot.
pub async fn load_availability(store: &dyn BookingStore, today: NaiveDate) -> AvailabilitySnapshot {
    let window = AvailabilitySnapshot::window(today);
    match store.reserved_dates(window).await {
        Ok(dates) => {
            tracing::debug!(reserved = dates.len(), from = %window.from, to = %window.to, "loaded availability");
            AvailabilitySnapshot::new(dates)
        }
        Err(e) => {
            tracing::warn!(error = %e, "availability fetch failed, showing all dates as free");
            AvailabilitySnapshot::empty()
        }
    }
}

/// Checks every attached document before anything is sent anywhere.
pub fn validate_documents(draft: &BookingDraft) -> Result<(), ValidationError> {
    draft
        .documents
        .iter()
        .try_for_each(|(kind, attachment)| attachment.validate(*kind))
}

/// Uploads all attached documents in order. If one fails, the ones already uploaded in
/// this attempt are discarded and the failure is returned.
pub async fn upload_documents(
    draft: &BookingDraft,
    folder: &str,
    files: &dyn FileStore,
) -> Result<BTreeMap<String, String>, BookingError> {
    let mut uploaded = BTreeMap::new();

    for kind in DocumentKind::ALL {
        let Some(attachment) = draft.document(kind) else {
            tracing::debug!(key = kind.key(), "no file selected, skipping");
            continue;
        };

        tracing::info!(
            key = kind.key(),
            name = %attachment.file_name,
            size = attachment.len(),
            "uploading document"
        );
        match files.upload(kind, attachment, folder).await {
            Ok(url) => {
                tracing::debug!(key = kind.key(), %url, "upload complete");
                uploaded.insert(kind.key().to_string(), url);
            }
            Err(source) => {
                tracing::error!(key = kind.key(), error = %source, "upload failed");
                discard_all(files, uploaded.values()).await;
                return Err(BookingError::Upload { kind, source });
            }
        }
    }

    Ok(uploaded)
}

async fn discard_all<'a>(files: &dyn FileStore, urls: impl Iterator<Item = &'a String>) {
    for url in urls {
        if let Err(e) = files.discard(url).await {
            tracing::warn!(%url, error = %e, "could not discard partial upload");
        }
    }
}

pub fn compose_record(draft: &BookingDraft, documents: BTreeMap<String, String>) -> AppointmentRecord {
    AppointmentRecord {
        submission_id: draft.submission_id().unwrap_or_else(Uuid::new_v4),
        tracking_number: draft.tracking_number().unwrap_or_default().to_string(),
        service: draft.service.clone(),
        center: draft.center.clone(),
        visa_type: draft.visa_type.clone(),
        appointment_date: draft
            .date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|midnight| Utc.from_utc_datetime(&midnight)),
        appointment_time: draft.time.clone(),
        applicant: draft.applicant.clone(),
        addresses: draft.addresses.clone(),
        documents,
        status: BookingStatus::Processing.label().to_string(),
        raw_payload: draft.raw_payload(),
    }
}

/// Validates, uploads, and writes one booking. On success the draft is marked submitted
/// and its tracking number returned. On failure only the tracking number and record key
/// may have been assigned; both are reused by the next attempt.
pub async fn submit_booking(
    draft: &mut BookingDraft,
    files: &dyn FileStore,
    bookings: &dyn BookingStore,
) -> Result<String, BookingError> {
    let tracking_number = draft.ensure_tracking_number().to_string();
    draft.ensure_submission_id();

    validate_documents(draft)?;

    let documents = upload_documents(draft, &upload_folder(&tracking_number), files).await?;
    let record = compose_record(draft, documents);

    if let Err(e) = bookings.insert_booking(&record).await {
        tracing::error!(tracking_number = %tracking_number, error = %e, "booking insert failed");
        discard_all(files, record.documents.values()).await;
        return Err(BookingError::Store(e));
    }

    tracing::info!(tracking_number = %tracking_number, documents = record.documents.len(), "appointment saved");
    draft.mark_submitted();
    Ok(tracking_number)
}
