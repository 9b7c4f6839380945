//! Google Docs REST client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tokio::runtime::Runtime;

use docsmd::ops::BatchRequest;
use docsmd::{BatchReply, Document, DocumentService, EditOperation, Error, Result};

pub const DEFAULT_API_BASE: &str = "https://docs.googleapis.com/v1";

/// Drive API base, used for copying and filing documents.
pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Drive file metadata returned by copy and update calls.
#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: String,
}

/// Blocking [`DocumentService`] over the Docs REST API, with the Drive API
/// for copies and folders.
///
/// Owns a Tokio runtime and blocks on each request, so commands stay
/// synchronous.
pub struct GoogleDocsClient {
    http: reqwest::Client,
    runtime: Runtime,
    api_base: String,
    drive_base: String,
}

impl GoogleDocsClient {
    pub fn new(token: &str, api_base: &str, drive_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Service(format!("Invalid access token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(service_error)?;
        let runtime = Runtime::new().map_err(service_error)?;

        Ok(Self {
            http,
            runtime,
            api_base: api_base.trim_end_matches('/').to_string(),
            drive_base: drive_base.trim_end_matches('/').to_string(),
        })
    }

    fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}", self.api_base, document_id)
    }

    fn file_url(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.drive_base, file_id)
    }

    fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        self.runtime.block_on(async {
            let response = request.send().await.map_err(service_error)?;

            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(Error::Service(format!("HTTP {}: {}", status, text.trim())));
            }

            response.json::<T>().await.map_err(service_error)
        })
    }
}

impl DocumentService for GoogleDocsClient {
    fn fetch_document(&self, document_id: &str) -> Result<Document> {
        log::debug!("GET {}", self.document_url(document_id));
        self.send(self.http.get(self.document_url(document_id)))
    }

    fn apply_operations(
        &self,
        document_id: &str,
        operations: &[EditOperation],
    ) -> Result<BatchReply> {
        let url = format!("{}:batchUpdate", self.document_url(document_id));
        log::debug!("POST {} ({} requests)", url, operations.len());
        let body = BatchRequest {
            requests: operations,
        };
        self.send(self.http.post(url).json(&body))
    }

    fn create_document(&self, title: &str) -> Result<Document> {
        let url = format!("{}/documents", self.api_base);
        log::debug!("POST {}", url);
        self.send(self.http.post(url).json(&json!({ "title": title })))
    }

    fn copy_document(
        &self,
        document_id: &str,
        title: &str,
        folder_id: Option<&str>,
    ) -> Result<Document> {
        let url = format!("{}/copy", self.file_url(document_id));
        log::debug!("POST {}", url);
        let body = match folder_id {
            Some(folder) => json!({ "name": title, "parents": [folder] }),
            None => json!({ "name": title }),
        };
        let file: DriveFile = self.send(self.http.post(url).json(&body))?;

        let mut doc = Document::new(file.name);
        doc.document_id = file.id;
        Ok(doc)
    }

    fn add_to_folder(&self, document_id: &str, folder_id: &str) -> Result<()> {
        let url = self.file_url(document_id);
        log::debug!("PATCH {} (addParents={})", url, folder_id);
        let request = self
            .http
            .patch(url)
            .query(&[("addParents", folder_id)])
            .json(&json!({}));
        let _: DriveFile = self.send(request)?;
        Ok(())
    }
}

fn service_error(error: impl std::fmt::Display) -> Error {
    Error::Service(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_base() {
        let client =
            GoogleDocsClient::new("token", "http://localhost:9/v1/", "http://localhost:9/drive/v3/")
                .unwrap();
        assert_eq!(
            client.document_url("abc"),
            "http://localhost:9/v1/documents/abc"
        );
        assert_eq!(client.file_url("abc"), "http://localhost:9/drive/v3/files/abc");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        assert!(
            GoogleDocsClient::new("bad\ntoken", DEFAULT_API_BASE, DEFAULT_DRIVE_API_BASE).is_err()
        );
    }

    #[test]
    fn test_drive_file_parses_copy_response() {
        let file: DriveFile = serde_json::from_str(
            r#"{"kind": "drive#file", "id": "1AbC", "name": "Copy", "mimeType": "application/vnd.google-apps.document"}"#,
        )
        .unwrap();
        assert_eq!(file.id, "1AbC");
        assert_eq!(file.name, "Copy");
    }
}
