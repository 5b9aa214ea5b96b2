mod client;
mod model;
mod transport;

pub use client::{ApiClient, CHECK_PATH, HEALTH_PATH, HttpResponse, HttpTransport, TransportFailure};
pub use model::{
    ApiError, CheckReport, DocumentHandle, ErrorBody, OverallStatus, RuleOutcome, RuleStatus,
};
pub use transport::{REQUEST_TIMEOUT_SECS, ReqwestTransport};
