//! Request and response bodies exchanged with callers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub dna_sequence: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Outcome class of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    InternalError,
}

impl Status {
    /// Equivalent HTTP status code
    pub fn http_code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::InternalError => 500,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::BadRequest => 2,
            Status::InternalError => 1,
        }
    }
}

/// A serialized response body and its status
#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub body: String,
}
