use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use leptos::server_fn::codec::Json;
use shared_types::{AppointmentRecord, DateWindow, DocumentUpload, SlipFields};

/// Base64 of a maximum-size document plus JSON framing.
pub const MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;

#[server]
pub async fn get_reserved_dates(window: DateWindow) -> Result<Vec<NaiveDate>, ServerFnError> {
    use crate::db::appointments_repository::reserved_dates_between;

    match reserved_dates_between(window.from, window.to).await {
        Ok(dates) => Ok(dates),
        Err(e) => {
            tracing::warn!(error = %e, "reserved dates query failed");
            Err(ServerFnError::new(format!("Database error: {}", e)))
        }
    }
}

#[server(input = Json)]
pub async fn upload_document(upload: DocumentUpload) -> Result<String, ServerFnError> {
    use crate::booking::documents::validate_size;
    use crate::booking::DocumentKind;
    use crate::config::config;
    use crate::storage::cloudinary::CloudinaryClient;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let kind = DocumentKind::ALL
        .into_iter()
        .find(|k| k.key() == upload.key)
        .ok_or_else(|| ServerFnError::new(format!("Unknown document: {}", upload.key)))?;

    let bytes = STANDARD
        .decode(upload.data.as_bytes())
        .map_err(|e| ServerFnError::new(format!("Invalid file encoding: {}", e)))?;
    validate_size(kind, bytes.len()).map_err(|e| ServerFnError::new(e.to_string()))?;

    let cloudinary = config()
        .cloudinary()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = CloudinaryClient::new(cloudinary.clone());

    tracing::info!(key = %upload.key, name = %upload.file_name, size = bytes.len(), folder = %upload.folder, "uploading to cloudinary");
    client
        .upload(&upload.file_name, &upload.content_type, bytes, &upload.folder)
        .await
        .map_err(|e| {
            tracing::error!(key = %upload.key, error = %e, "cloudinary upload failed");
            ServerFnError::new(e.to_string())
        })
}

#[server]
pub async fn discard_document(url: String) -> Result<(), ServerFnError> {
    use crate::config::config;
    use crate::storage::cloudinary::CloudinaryClient;

    let cloudinary = config()
        .cloudinary()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    CloudinaryClient::new(cloudinary.clone())
        .destroy(&url)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = Json)]
pub async fn save_appointment(record: AppointmentRecord) -> Result<(), ServerFnError> {
    use crate::db::appointments_repository::insert_appointment;

    match insert_appointment(&record).await {
        Ok(id) => {
            tracing::info!(id, tracking_number = %record.tracking_number, "appointment inserted");
            Ok(())
        }
        Err(e) => {
            tracing::error!(tracking_number = %record.tracking_number, error = %e, "appointment insert failed");
            Err(ServerFnError::new(format!("Database error: {}", e)))
        }
    }
}

/// Returns the PDF slip as base64.
#[server]
pub async fn render_appointment_slip(fields: SlipFields) -> Result<String, ServerFnError> {
    use crate::booking::export::render_slip_pdf;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let bytes = render_slip_pdf(&fields).map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(STANDARD.encode(bytes))
}

#[server]
pub async fn subscribe_newsletter(email: String) -> Result<(), ServerFnError> {
    use crate::components::newsletter_form::validate_subscriber_email;
    use crate::db::newsletter_repository::add_subscriber;

    let email = validate_subscriber_email(&email).map_err(ServerFnError::new)?;
    match add_subscriber(&email).await {
        Ok(created) => {
            tracing::info!(created, "newsletter subscription");
            Ok(())
        }
        Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
    }
}
