//! API client for the PDF analysis service.
//!
//! The client owns the request/response logging hooks and the normalization
//! of every failure into [`ApiError`]. Exactly three failure kinds exist,
//! distinguished by which layer detected the problem: the server rejected the
//! request (non-2xx), no response was received (network or timeout), or the
//! request could not be constructed. A request is attempted exactly once; the
//! client never retries.

use tracing::debug;

use super::model::{ApiError, CheckReport, DocumentHandle, ErrorBody};

/// Path of the check submission endpoint, relative to the base endpoint.
pub const CHECK_PATH: &str = "/v1/pdf/check";
/// Path of the health endpoint, relative to the base endpoint.
pub const HEALTH_PATH: &str = "/v1/pdf/health";

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";

/// A raw HTTP response: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure below the HTTP layer, before any response was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request went out but no response came back (network error, timeout).
    NoResponse(String),
    /// The request could not be constructed at all.
    RequestSetup(String),
}

/// Blocking HTTP transport abstraction for dependency injection.
pub trait HttpTransport {
    /// POST a multipart body with one `file` part and one repeated `rules`
    /// text part per rule, preserving rule order.
    ///
    /// # Errors
    /// Returns a [`TransportFailure`] if no response was received or the
    /// request could not be built.
    fn post_check(
        &self,
        url: &str,
        document: &DocumentHandle,
        rules: &[String],
    ) -> Result<HttpResponse, TransportFailure>;

    /// Perform a GET request.
    ///
    /// # Errors
    /// Returns a [`TransportFailure`] if no response was received or the
    /// request could not be built.
    fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure>;
}

/// Client for the two service operations, generic over the transport.
pub struct ApiClient<T: HttpTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<super::transport::ReqwestTransport> {
    /// Create a client backed by the production reqwest transport.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, super::transport::ReqwestTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport, exposed for call inspection in tests.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit a document and its rules for checking.
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] for any of the three failure kinds.
    pub fn submit_check(
        &self,
        document: &DocumentHandle,
        rules: &[String],
    ) -> Result<CheckReport, ApiError> {
        let url = format!("{}{CHECK_PATH}", self.base_url);
        debug!("request: POST {url}");

        let response = self
            .transport
            .post_check(&url, document, rules)
            .map_err(normalize_failure)?;
        debug!("response: {} {url}", response.status);

        if !is_success(response.status) {
            return Err(error_from_response(&response));
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError {
            status: response.status,
            message: "Malformed response from server".to_string(),
            details: e.to_string(),
            errors: Vec::new(),
        })
    }

    /// Probe the service health endpoint.
    ///
    /// The body is implementation-defined and returned verbatim.
    ///
    /// # Errors
    /// Returns the normalized [`ApiError`] for any of the three failure kinds.
    pub fn health_check(&self) -> Result<String, ApiError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        debug!("request: GET {url}");

        let response = self.transport.get(&url).map_err(normalize_failure)?;
        debug!("response: {} {url}", response.status);

        if !is_success(response.status) {
            return Err(error_from_response(&response));
        }

        Ok(response.body)
    }
}

const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

fn normalize_failure(failure: TransportFailure) -> ApiError {
    match failure {
        TransportFailure::NoResponse(cause) => {
            debug!("transport failure: {cause}");
            ApiError {
                status: 0,
                message: NO_RESPONSE_MESSAGE.to_string(),
                details: "Network error".to_string(),
                errors: Vec::new(),
            }
        }
        TransportFailure::RequestSetup(message) => ApiError {
            status: 0,
            message,
            details: "Request configuration error".to_string(),
            errors: Vec::new(),
        },
    }
}

/// Build the error envelope for a non-2xx response, drawing fields from the
/// body where present and falling back to generic text.
fn error_from_response(response: &HttpResponse) -> ApiError {
    let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
    ApiError {
        status: response.status,
        message: body
            .message
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        details: body.details.unwrap_or_default(),
        errors: body.errors.unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
