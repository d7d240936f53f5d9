use std::any::Any;
use std::panic;

use log::{error, info, warn};
use seqlens_core::{AnalysisError, AnalysisResult};
use thiserror::Error;

use crate::dto::{AnalyzeRequest, ErrorResponse, Response, Status};

/// A request refused before or during analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Rejection {
    pub status: Status,
    pub message: String,
}

impl Rejection {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: Status::BadRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: Status::InternalError,
            message: message.into(),
        }
    }
}

impl From<AnalysisError> for Rejection {
    fn from(e: AnalysisError) -> Self {
        if e.is_input_error() {
            Rejection::bad_request(e.to_string())
        } else {
            Rejection::internal(e.to_string())
        }
    }
}

/// Parse a JSON request body
pub fn parse_request(body: &str) -> Result<AnalyzeRequest, Rejection> {
    let request: Option<AnalyzeRequest> = serde_json::from_str(body)
        .map_err(|e| Rejection::bad_request(format!("Invalid JSON: {}", e)))?;
    Ok(request.unwrap_or_default())
}

/// Analyze the sequence carried by a request
pub fn analyze_request(request: &AnalyzeRequest) -> Result<AnalysisResult, Rejection> {
    let raw = request
        .dna_sequence
        .as_deref()
        .ok_or_else(|| Rejection::bad_request("No DNA sequence provided"))?;
    analyze_text(raw)
}

/// Analyze raw sequence text.
///
/// A panic inside the analysis is reported as an internal error.
pub fn analyze_text(raw: &str) -> Result<AnalysisResult, Rejection> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AnalysisError::EmptyInput.into());
    }

    let outcome = panic::catch_unwind(|| seqlens_core::analyze(raw))
        .map_err(|payload| AnalysisError::Internal(panic_message(payload.as_ref())))?;
    Ok(outcome?)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Turn an analysis outcome into a response body
pub fn respond(outcome: Result<AnalysisResult, Rejection>, pretty: bool) -> Response {
    let outcome = outcome.and_then(|result| {
        info!(
            "analyzed {} bp: {} ORFs, {} enzymes with sites",
            result.dna_sequence.len(),
            result.orfs.len(),
            result.restriction_sites.len()
        );
        result
            .to_json(pretty)
            .map_err(|e| Rejection::from(AnalysisError::Internal(e.to_string())))
    });

    match outcome {
        Ok(body) => Response {
            status: Status::Ok,
            body,
        },
        Err(rejection) => {
            let code = rejection.status.http_code();
            match rejection.status {
                Status::InternalError => error!("request failed ({}): {}", code, rejection.message),
                _ => warn!("rejected request ({}): {}", code, rejection.message),
            }
            Response {
                status: rejection.status,
                body: error_body(&rejection.message, pretty),
            }
        }
    }
}

fn error_body(message: &str, pretty: bool) -> String {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    };
    // a struct of one string always serializes
    json.unwrap_or_else(|_| serde_json::json!({ "error": message }).to_string())
}
