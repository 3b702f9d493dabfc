use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use shared_types::{AppointmentRecord, DateWindow, DocumentUpload, SlipFields};

use super::documents::{Attachment, DocumentKind};
use super::error::{BookingError, StoreError};
use super::export::DocumentExport;
use super::submission::{BookingStore, FileStore};
use crate::server::{
    discard_document, get_reserved_dates, render_appointment_slip, save_appointment,
    upload_document,
};

/// Both stores, reached through the site's server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerStores;

#[async_trait(?Send)]
impl FileStore for ServerStores {
    async fn upload(
        &self,
        kind: DocumentKind,
        attachment: &Attachment,
        folder: &str,
    ) -> Result<String, StoreError> {
        let upload = DocumentUpload {
            key: kind.key().to_string(),
            file_name: attachment.file_name.clone(),
            content_type: attachment.content_type.clone(),
            folder: folder.to_string(),
            data: STANDARD.encode(&attachment.bytes),
        };
        Ok(upload_document(upload).await?)
    }

    async fn discard(&self, url: &str) -> Result<(), StoreError> {
        Ok(discard_document(url.to_string()).await?)
    }
}

#[async_trait(?Send)]
impl BookingStore for ServerStores {
    async fn reserved_dates(&self, window: DateWindow) -> Result<Vec<NaiveDate>, StoreError> {
        Ok(get_reserved_dates(window).await?)
    }

    async fn insert_booking(&self, record: &AppointmentRecord) -> Result<(), StoreError> {
        Ok(save_appointment(record.clone()).await?)
    }
}

/// Renders the slip on the server and saves it through the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSlipExport;

#[async_trait(?Send)]
impl DocumentExport for BrowserSlipExport {
    async fn render_and_download(&self, fields: &SlipFields) -> Result<(), BookingError> {
        let encoded = render_appointment_slip(fields.clone())
            .await
            .map_err(|e| BookingError::Export(StoreError::from(e).to_string()))?;
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| BookingError::Export(e.to_string()))?;
        crate::utils::download::save_bytes(&fields.file_name(), "application/pdf", &bytes)
            .map_err(BookingError::Export)
    }
}
