// src/services/cloudinary_client.rs
// DOCUMENTATION: Cloudinary API client
// PURPOSE: Handle communication with Cloudinary for image upload and deletion

use crate::config::Config;
use crate::errors::AppError;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Cloudinary API client
/// DOCUMENTATION: Handles authentication and API calls to Cloudinary
/// Uploads use an unsigned upload preset; deletions use the Admin API
pub struct CloudinaryClient {
    /// HTTP client for making requests
    client: Client,
    /// Cloudinary cloud name (account identifier)
    cloud_name: String,
    /// API key for Admin API basic auth
    api_key: String,
    /// API secret for Admin API basic auth
    api_secret: String,
    /// Unsigned upload preset name
    upload_preset: String,
    /// Base URL for the Cloudinary API
    base_url: String,
}

/// Response from a Cloudinary image upload
/// DOCUMENTATION: Parsed subset of the upload API response - only the fields
/// the place service stores
#[derive(Debug, Clone, Deserialize)]
pub struct CloudinaryUploadResponse {
    /// Public identifier of the uploaded asset
    pub public_id: String,
    /// HTTPS delivery URL
    pub secure_url: String,
}

/// Response from a Cloudinary Admin API deletion
#[derive(Debug, Deserialize)]
pub struct CloudinaryDeleteResponse {
    /// Map of public_id -> deletion outcome ("deleted" or "not_found")
    pub deleted: Option<HashMap<String, String>>,
}

impl CloudinaryClient {
    /// Create new Cloudinary client from application config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cloudinary_cloud_name.clone(),
            config.cloudinary_api_key.clone(),
            config.cloudinary_api_secret.clone(),
            config.cloudinary_upload_preset.clone(),
        )
    }

    /// Create new Cloudinary client
    /// DOCUMENTATION: Initializes client with account credentials
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
        upload_preset: String,
    ) -> Self {
        Self {
            client: Client::new(),
            cloud_name,
            api_key,
            api_secret,
            upload_preset,
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
        }
    }

    /// Whether credentials required for uploads are present
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.upload_preset.is_empty()
    }

    /// URL of the unsigned image upload endpoint
    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.cloud_name)
    }

    /// URL of the Admin API resource deletion endpoint
    fn delete_url(&self) -> String {
        format!("{}/{}/resources/image/upload", self.base_url, self.cloud_name)
    }

    /// Upload an image given as a base64 data URI
    /// DOCUMENTATION: Uses the unsigned upload flow with a preset
    /// Returns the public_id and secure delivery URL of the new asset
    pub async fn upload_image(
        &self,
        data_uri: &str,
    ) -> Result<CloudinaryUploadResponse, AppError> {
        if !self.is_configured() {
            return Err(AppError::ExternalApiError(
                "Cloudinary is not configured".to_string(),
            ));
        }

        let mut params = HashMap::new();
        params.insert("file", data_uri.to_string());
        params.insert("upload_preset", self.upload_preset.clone());

        log::debug!("Uploading image to Cloudinary cloud '{}'", self.cloud_name);

        let response = self
            .client
            .post(self.upload_url())
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Cloudinary upload request failed: {}", e);
                AppError::ExternalApiError(format!("Upload request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Cloudinary upload error {}: {}", status, body);
            return Err(AppError::ExternalApiError(format!(
                "Upload error {}: {}",
                status, body
            )));
        }

        let upload: CloudinaryUploadResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Cloudinary upload response: {}", e);
            AppError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        log::info!("Uploaded image to Cloudinary: {}", upload.public_id);
        Ok(upload)
    }

    /// Delete an uploaded image by its public id
    /// DOCUMENTATION: Admin API call authenticated with api_key/api_secret
    pub async fn delete_image(&self, public_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.delete_url())
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .query(&[("public_ids[]", public_id)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Cloudinary delete request failed: {}", e);
                AppError::ExternalApiError(format!("Delete request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Cloudinary delete error {}: {}", status, body);
            return Err(AppError::ExternalApiError(format!(
                "Delete error {}: {}",
                status, body
            )));
        }

        let outcome: CloudinaryDeleteResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Cloudinary delete response: {}", e);
            AppError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        if let Some(deleted) = &outcome.deleted {
            if deleted.get(public_id).map(String::as_str) == Some("not_found") {
                log::warn!("Cloudinary asset already gone: {}", public_id);
            }
        }

        log::info!("Deleted Cloudinary image: {}", public_id);
        Ok(())
    }

    /// Derive the public id from a Cloudinary secure delivery URL
    /// DOCUMENTATION: Strips everything up to "/upload/", the version segment,
    /// and the file extension. Returns None for URLs that do not look like
    /// Cloudinary delivery URLs.
    pub fn public_id_from_url(url: &str) -> Option<String> {
        let rest = url.split("/upload/").nth(1)?;

        // Drop the version segment ("v" followed by digits) if present
        let mut segments: Vec<&str> = rest.split('/').collect();
        if let Some(first) = segments.first() {
            let is_version = first.len() > 1
                && first.starts_with('v')
                && first[1..].chars().all(|c| c.is_ascii_digit());
            if is_version {
                segments.remove(0);
            }
        }

        if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        let joined = segments.join("/");

        // Strip the file extension from the last segment
        match joined.rfind('.') {
            Some(dot) if dot > joined.rfind('/').map(|s| s + 1).unwrap_or(0) => {
                Some(joined[..dot].to_string())
            }
            _ => Some(joined),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_and_delete_urls() {
        let client = CloudinaryClient::new(
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
            "places_preset".to_string(),
        );

        assert_eq!(
            client.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(
            client.delete_url(),
            "https://api.cloudinary.com/v1_1/demo/resources/image/upload"
        );
        assert!(client.is_configured());
    }

    #[test]
    fn test_unconfigured_client() {
        let client = CloudinaryClient::new(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(!client.is_configured());
    }

    #[test]
    fn test_public_id_from_url() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1712345678/places/abc123.jpg";
        assert_eq!(
            CloudinaryClient::public_id_from_url(url),
            Some("places/abc123".to_string())
        );
    }

    #[test]
    fn test_public_id_without_version_segment() {
        let url = "https://res.cloudinary.com/demo/image/upload/places/abc123.png";
        assert_eq!(
            CloudinaryClient::public_id_from_url(url),
            Some("places/abc123".to_string())
        );
    }

    #[test]
    fn test_public_id_without_extension() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1/abc123";
        assert_eq!(
            CloudinaryClient::public_id_from_url(url),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_public_id_rejects_non_cloudinary_urls() {
        assert_eq!(
            CloudinaryClient::public_id_from_url("https://example.com/image.jpg"),
            None
        );
    }

    #[test]
    fn test_upload_response_parsing() {
        // Extra fields from the real API response are ignored
        let json = r#"{
            "public_id": "places/abc123",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/places/abc123.jpg",
            "width": 800,
            "height": 600,
            "format": "jpg"
        }"#;

        let parsed: CloudinaryUploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.public_id, "places/abc123");
        assert_eq!(
            parsed.secure_url,
            "https://res.cloudinary.com/demo/image/upload/v1/places/abc123.jpg"
        );
    }
}
