use serde::{Deserialize, Serialize};

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod query;
pub mod storage;
pub mod view;

pub use api::{ApiClient, ApiRequest, Method, RawResponse, Transport, Upload};
pub use auth::{is_authenticated, AuthStore};
pub use config::ClientConfig;
pub use error::{ApiError, AuthError, Operation, StorageError};
pub use query::{Mutation, QueryClient, QueryKey, QueryState, QueryStatus};
pub use storage::{CredentialStore, MemoryStore};

/// A stored file. The server only reports names, so the name is the identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Server disk statistics, as returned by `GET /disk-usage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiskUsage {
    #[serde(rename = "totalBytes")]
    pub total_bytes: u64,
    #[serde(rename = "freeBytes")]
    pub free_bytes: u64,
    #[serde(rename = "usedBytes")]
    pub used_bytes: u64,
    #[serde(rename = "totalGB")]
    pub total_gb: f64,
    #[serde(rename = "freeGB")]
    pub free_gb: f64,
    #[serde(rename = "usedGB")]
    pub used_gb: f64,
    #[serde(rename = "usedPercentage")]
    pub used_percentage: f64,
}

#[cfg(feature = "frontend")]
pub mod frontend;

#[cfg(feature = "frontend")]
pub mod logging;

#[cfg(feature = "frontend")]
pub use frontend::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_list_decodes_from_plain_names() {
        let files: Vec<FileEntry> = serde_json::from_str(r#"["a.txt","b.txt"]"#).unwrap();
        assert_eq!(files, vec![FileEntry::new("a.txt"), FileEntry::new("b.txt")]);
    }

    #[test]
    fn disk_usage_uses_server_field_names() {
        let body = r#"{
            "totalBytes": 1000,
            "freeBytes": 250,
            "usedBytes": 750,
            "totalGB": 1.5,
            "freeGB": 0.25,
            "usedGB": 1.25,
            "usedPercentage": 75.0
        }"#;
        let usage: DiskUsage = serde_json::from_str(body).unwrap();
        assert_eq!(usage.used_bytes, 750);
        assert_eq!(usage.total_gb, 1.5);
        assert_eq!(usage.used_percentage, 75.0);
    }
}
