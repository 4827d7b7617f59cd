//! HTTP client for the storage server.
//!
//! Requests are described as plain [`ApiRequest`] values and handed to a
//! [`Transport`]; the browser build plugs in `gloo-net`, tests plug in a
//! recorder. Every request carries `Authorization: Bearer <credential>`,
//! read from the credential store at the moment the request is built.

use std::fmt;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Operation};
use crate::storage::CredentialStore;
use crate::{DiskUsage, FileEntry};

/// Multipart field the server reads the upload from.
pub const UPLOAD_FIELD: &str = "file";

/// Everything but RFC 3986 unreserved characters gets escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value
    pub authorization: String,
    /// Multipart body, sent under [`UPLOAD_FIELD`]
    pub upload: Option<Upload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations only fail for transport problems; HTTP error statuses
/// come back as a [`RawResponse`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Check that `name` can travel as a single URL path segment and escape it.
pub fn encode_filename(operation: Operation, name: &str) -> Result<String, ApiError> {
    validate_filename(operation, name)?;
    Ok(utf8_percent_encode(name, PATH_SEGMENT).to_string())
}

pub fn validate_filename(operation: Operation, name: &str) -> Result<(), ApiError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a relative path")
    } else if name.contains('/') || name.contains('\\') {
        Some("name contains a path separator")
    } else if name.chars().any(char::is_control) {
        Some("name contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ApiError::InvalidFilename {
            operation,
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    credentials: S,
}

impl<T: Transport, S: CredentialStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, credentials: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /files`
    pub async fn list_files(&self) -> Result<Vec<FileEntry>, ApiError> {
        let request = self.request(Operation::ListFiles, Method::Get, "/files");
        let response = self.execute(request).await?;
        let files: Option<Vec<FileEntry>> = decode_json(Operation::ListFiles, &response)?;
        Ok(files.unwrap_or_default())
    }

    /// `POST /upload`, returns the server's confirmation text.
    pub async fn upload_file(&self, upload: Upload) -> Result<String, ApiError> {
        validate_filename(Operation::UploadFile, &upload.filename)?;
        let mut request = self.request(Operation::UploadFile, Method::Post, "/upload");
        request.upload = Some(upload);
        let response = self.execute(request).await?;
        Ok(response.text())
    }

    /// `DELETE /files/{filename}`, returns the server's confirmation text.
    pub async fn delete_file(&self, filename: &str) -> Result<String, ApiError> {
        let segment = encode_filename(Operation::DeleteFile, filename)?;
        let request = self.request(
            Operation::DeleteFile,
            Method::Delete,
            &format!("/files/{}", segment),
        );
        let response = self.execute(request).await?;
        Ok(response.text())
    }

    /// `GET /download/{filename}`, returns the raw file contents.
    pub async fn download_file(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let segment = encode_filename(Operation::DownloadFile, filename)?;
        let request = self.request(
            Operation::DownloadFile,
            Method::Get,
            &format!("/download/{}", segment),
        );
        let response = self.execute(request).await?;
        Ok(response.body)
    }

    /// `GET /disk-usage`
    pub async fn disk_usage(&self) -> Result<DiskUsage, ApiError> {
        let request = self.request(Operation::DiskUsage, Method::Get, "/disk-usage");
        let response = self.execute(request).await?;
        decode_json(Operation::DiskUsage, &response)
    }

    fn request(&self, operation: Operation, method: Method, path: &str) -> ApiRequest {
        let credential = self.credentials.load().unwrap_or_default();
        ApiRequest {
            operation,
            method,
            url: format!("{}{}", self.base_url, path),
            authorization: format!("Bearer {}", credential),
            upload: None,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let operation = request.operation;
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{}", e);
            e
        })?;

        if !response.is_success() {
            let err = ApiError::Http {
                operation,
                status: response.status,
            };
            log::warn!("{}", err);
            return Err(err);
        }

        Ok(response)
    }
}

fn decode_json<D: DeserializeOwned>(
    operation: Operation,
    response: &RawResponse,
) -> Result<D, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode {
        operation,
        message: e.to_string(),
    })
}

#[cfg(feature = "frontend")]
pub use fetch::FetchTransport;

#[cfg(feature = "frontend")]
mod fetch {
    use async_trait::async_trait;
    use gloo_file::Blob;
    use gloo_net::http::{Request, RequestBuilder};
    use web_sys::FormData;

    use super::{ApiRequest, Method, RawResponse, Transport, UPLOAD_FIELD};
    use crate::error::ApiError;

    /// `fetch` through gloo-net.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FetchTransport;

    #[async_trait(?Send)]
    impl Transport for FetchTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let operation = request.operation;
            let network = |message: String| ApiError::Network { operation, message };

            let builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .header("Authorization", &request.authorization);

            let response = match request.upload {
                Some(upload) => {
                    let form_data = FormData::new().map_err(|e| ApiError::Request {
                        operation,
                        message: format!("{:?}", e),
                    })?;
                    let blob = web_sys::Blob::from(Blob::new(upload.bytes.as_slice()));
                    form_data
                        .append_with_blob_and_filename(UPLOAD_FIELD, &blob, &upload.filename)
                        .map_err(|e| ApiError::Request {
                            operation,
                            message: format!("{:?}", e),
                        })?;
                    builder
                        .body(form_data)
                        .map_err(|e| ApiError::Request {
                            operation,
                            message: e.to_string(),
                        })?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| network(e.to_string()))?;

            let status = response.status();
            let body = response
                .binary()
                .await
                .map_err(|e| network(e.to_string()))?;

            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<ApiRequest>>,
        replies: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    }

    impl Recorder {
        fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
            self
        }

        fn fail(self, operation: Operation, message: &str) -> Self {
            self.replies.borrow_mut().push_back(Err(ApiError::Network {
                operation,
                message: message.to_string(),
            }));
            self
        }
    }

    #[async_trait(?Send)]
    impl<'a> Transport for &'a Recorder {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    fn client(recorder: &Recorder, store: MemoryStore) -> ApiClient<&Recorder, MemoryStore> {
        ApiClient::new("http://localhost:8080/", recorder, store)
    }

    #[test]
    fn list_files_returns_names_in_server_order() {
        let recorder = Recorder::default().reply(200, r#"["b.txt","a.txt"]"#);
        let api = client(&recorder, MemoryStore::with_value("abc123"));

        let files = block_on(api.list_files()).unwrap();
        assert_eq!(files, vec![FileEntry::new("b.txt"), FileEntry::new("a.txt")]);

        let sent = recorder.sent.borrow();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://localhost:8080/files");
        assert_eq!(sent[0].authorization, "Bearer abc123");
    }

    #[test]
    fn null_file_list_is_empty() {
        let recorder = Recorder::default().reply(200, "null");
        let api = client(&recorder, MemoryStore::new());
        assert!(block_on(api.list_files()).unwrap().is_empty());
    }

    #[test]
    fn non_success_status_is_an_http_error() {
        let recorder = Recorder::default().reply(403, "Forbidden");
        let api = client(&recorder, MemoryStore::new());

        let err = block_on(api.list_files()).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                operation: Operation::ListFiles,
                status: 403
            }
        );
        assert_eq!(recorder.sent.borrow()[0].authorization, "Bearer ");
    }

    #[test]
    fn transport_failure_passes_through() {
        let recorder = Recorder::default().fail(Operation::DiskUsage, "connection refused");
        let api = client(&recorder, MemoryStore::new());
        let err = block_on(api.disk_usage()).unwrap_err();
        assert!(matches!(err, ApiError::Network { .. }));
        assert_eq!(err.to_string(), "Failed to fetch disk usage: connection refused");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let recorder = Recorder::default().reply(200, "{\"totalBytes\":");
        let api = client(&recorder, MemoryStore::new());
        let err = block_on(api.disk_usage()).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode {
                operation: Operation::DiskUsage,
                ..
            }
        ));
    }

    #[test]
    fn upload_posts_multipart_and_returns_confirmation() {
        let recorder = Recorder::default().reply(200, "Uploaded report.pdf\n");
        let api = client(&recorder, MemoryStore::with_value("abc123"));

        let upload = Upload {
            filename: "report.pdf".to_string(),
            bytes: b"%PDF-1.7".to_vec(),
        };
        let message = block_on(api.upload_file(upload.clone())).unwrap();
        assert_eq!(message, "Uploaded report.pdf\n");

        let sent = recorder.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://localhost:8080/upload");
        assert_eq!(sent[0].upload.as_ref(), Some(&upload));
    }

    #[test]
    fn delete_and_download_escape_the_filename() {
        let recorder = Recorder::default()
            .reply(200, "Deleted my report.pdf\n")
            .reply(200, "contents");
        let api = client(&recorder, MemoryStore::new());

        block_on(api.delete_file("my report.pdf")).unwrap();
        let bytes = block_on(api.download_file("50%?#.txt")).unwrap();
        assert_eq!(bytes, b"contents");

        let sent = recorder.sent.borrow();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "http://localhost:8080/files/my%20report.pdf");
        assert_eq!(sent[1].url, "http://localhost:8080/download/50%25%3F%23.txt");
    }

    #[test]
    fn unsafe_filenames_are_rejected_before_sending() {
        let recorder = Recorder::default();
        let api = client(&recorder, MemoryStore::new());

        for name in ["", ".", "..", "../etc/passwd", "a\\b", "tab\there"] {
            let err = block_on(api.delete_file(name)).unwrap_err();
            assert!(matches!(err, ApiError::InvalidFilename { .. }), "{name:?}");
        }
        let err = block_on(api.upload_file(Upload {
            filename: "dir/file".to_string(),
            bytes: Vec::new(),
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidFilename { .. }));
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn credential_is_read_at_call_time() {
        let recorder = Recorder::default()
            .reply(200, "[]")
            .reply(200, "[]")
            .reply(200, "[]");
        let store = MemoryStore::with_value("abc123");
        let api = client(&recorder, store.clone());

        block_on(api.list_files()).unwrap();
        store.clear().unwrap();
        block_on(api.list_files()).unwrap();
        store.save("fresh").unwrap();
        block_on(api.list_files()).unwrap();

        let headers: Vec<String> = recorder
            .sent
            .borrow()
            .iter()
            .map(|r| r.authorization.clone())
            .collect();
        assert_eq!(headers, ["Bearer abc123", "Bearer ", "Bearer fresh"]);
    }
}
