//! Cloudinary upload API client used as the document file store.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::config::{CloudinaryConfig, ConfigError};

#[derive(Debug, Error)]
pub enum CloudinaryError {
    #[error(transparent)]
    NotConfigured(#[from] ConfigError),
    #[error("Cloudinary request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Cloudinary upload failed: {status} {body}")]
    Rejected { status: u16, body: String },
    #[error("Cloudinary returned no secure_url")]
    MissingUrl,
    #[error("Not a Cloudinary delivery URL: {0}")]
    UnrecognisedUrl(String),
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Unsigned upload with the configured preset. Returns the `secure_url`.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        folder: &str,
    ) -> Result<String, CloudinaryError> {
        let url = format!("{}/{}/upload", self.config.api_base, self.config.cloud_name);

        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if !content_type.is_empty() {
            part = part.mime_str(content_type)?;
        }
        let mut form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone());
        if !folder.is_empty() {
            form = form.text("folder", folder.to_string());
        }

        let response = self.http.post(&url).multipart(form).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CloudinaryError::Rejected { status, body });
        }

        response
            .json::<UploadResponse>()
            .await?
            .secure_url
            .ok_or(CloudinaryError::MissingUrl)
    }

    /// Deletes a previously uploaded asset. Needs the signed API credentials.
    pub async fn destroy(&self, secure_url: &str) -> Result<(), CloudinaryError> {
        let (Some(api_key), Some(api_secret)) = (&self.config.api_key, &self.config.api_secret)
        else {
            return Err(ConfigError::Missing("Cloudinary API credentials").into());
        };
        let (resource_type, public_id) = parse_delivery_url(secure_url)
            .ok_or_else(|| CloudinaryError::UnrecognisedUrl(secure_url.to_string()))?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", public_id.as_str()), ("timestamp", timestamp.as_str())],
            api_secret,
        );
        let url = format!(
            "{}/{}/{}/destroy",
            self.config.api_base, self.config.cloud_name, resource_type
        );

        let response = self
            .http
            .post(&url)
            .form(&[
                ("public_id", public_id.as_str()),
                ("timestamp", timestamp.as_str()),
                ("api_key", api_key.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CloudinaryError::Rejected { status, body });
        }

        let outcome = response.json::<DestroyResponse>().await?;
        tracing::debug!(%public_id, result = %outcome.result, "cloudinary destroy");
        Ok(())
    }
}

/// Request signature: parameters sorted by name, joined as `k=v&k=v`, secret appended, SHA-1 hex.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Splits `https://res.cloudinary.com/<cloud>/<type>/upload/v123/<folder>/<id>.<ext>`
/// into the resource type and public id (`<folder>/<id>`). Raw assets keep the
/// extension as part of their public id.
pub fn parse_delivery_url(url: &str) -> Option<(String, String)> {
    let (before, after) = url.split_once("/upload/")?;
    let resource_type = before.rsplit('/').next()?.to_string();

    let path = match after.split_once('/') {
        Some((version, rest))
            if version.starts_with('v') && version[1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            rest
        }
        _ => after,
    };
    let public_id = match path.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() && resource_type != "raw" => stem,
        _ => path,
    };

    if resource_type.is_empty() || public_id.is_empty() {
        return None;
    }
    Some((resource_type, public_id.to_string()))
}
