use std::fmt;

use thiserror::Error;

/// The five calls the client makes against the storage server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListFiles,
    UploadFile,
    DeleteFile,
    DownloadFile,
    DiskUsage,
}

impl Operation {
    /// Message shown to the user when the call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListFiles => "Failed to fetch files",
            Operation::UploadFile => "Failed to upload file",
            Operation::DeleteFile => "Failed to delete file",
            Operation::DownloadFile => "Failed to download file",
            Operation::DiskUsage => "Failed to fetch disk usage",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to read stored credential: {0}")]
    Read(String),

    #[error("failed to write stored credential: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid secret key")]
    InvalidSecret,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{operation}: {message}")]
    Network { operation: Operation, message: String },

    #[error("{operation} (HTTP {status})")]
    Http { operation: Operation, status: u16 },

    #[error("{operation}: invalid response: {message}")]
    Decode { operation: Operation, message: String },

    #[error("{operation}: invalid filename {name:?}: {reason}")]
    InvalidFilename {
        operation: Operation,
        name: String,
        reason: &'static str,
    },

    #[error("{operation}: could not build request: {message}")]
    Request { operation: Operation, message: String },
}

impl ApiError {
    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Network { operation, .. }
            | ApiError::Http { operation, .. }
            | ApiError::Decode { operation, .. }
            | ApiError::InvalidFilename { operation, .. }
            | ApiError::Request { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
