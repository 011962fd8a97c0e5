//! CGI front end: JSON request on stdin, JSON response with CGI headers on stdout.

use std::io::Write;

use calculatepi_shared::{niter_from_f64, EstimateError, Estimator};
use serde::{Deserialize, Serialize};
use serde_json::{json, Number};

pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum CgiError {
    #[error("Malformed request body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("niter {0} is not representable as a 64-bit float")]
    Unrepresentable(Number),
    #[error("{0}")]
    Invalid(#[from] EstimateError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculateRequest {
    /// Kept as the raw JSON number so it can be echoed back unchanged.
    pub niter: Number,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub niter: Number,
    pub pi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    InternalServerError,
}

impl Status {
    pub fn header(self) -> Option<&'static str> {
        match self {
            Status::Ok => None,
            Status::BadRequest => Some("400 Bad Request"),
            Status::InternalServerError => Some("500 Internal Server Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: Status,
    pub body: String,
}

impl Response {
    pub fn error(status: Status, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let body = json!({ "error": message });
        Self {
            status,
            body: format!("{:#}", body),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        if let Some(status) = self.status.header() {
            writeln!(out, "Status: {}", status)?;
        }
        write!(out, "Content-type: {}\n\n", CONTENT_TYPE)?;
        writeln!(out, "{}", self.body)?;
        out.flush()
    }
}

pub fn parse_request(body: &str) -> Result<(CalculateRequest, u64), CgiError> {
    let request: CalculateRequest = serde_json::from_str(body)?;
    let value = request
        .niter
        .as_f64()
        .ok_or_else(|| CgiError::Unrepresentable(request.niter.clone()))?;
    let niter = niter_from_f64(value)?;
    Ok((request, niter))
}

pub fn calculate(body: &str) -> Result<CalculateResponse, CgiError> {
    let (request, niter) = parse_request(body)?;
    let pi = Estimator::new(niter).calculate();
    Ok(CalculateResponse {
        niter: request.niter,
        pi,
    })
}

pub fn handle_request(body: &str) -> Response {
    match calculate(body).and_then(|r| serde_json::to_string_pretty(&r).map_err(CgiError::from)) {
        Ok(body) => Response {
            status: Status::Ok,
            body,
        },
        Err(e) => {
            log::warn!("Rejected request: {}", e);
            Response::error(Status::BadRequest, e.to_string())
        }
    }
}
