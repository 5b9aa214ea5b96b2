use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};

use super::client::{HttpResponse, HttpTransport, TransportFailure};
use super::model::DocumentHandle;

/// Fixed request timeout. Not user-configurable.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Production HTTP transport using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestTransport;

#[cfg(not(tarpaulin_include))]
impl HttpTransport for ReqwestTransport {
    fn post_check(
        &self,
        url: &str,
        document: &DocumentHandle,
        rules: &[String],
    ) -> Result<HttpResponse, TransportFailure> {
        let client = build_client()?;

        let file_part = Part::bytes(document.content.clone())
            .file_name(document.name.clone())
            .mime_str("application/pdf")
            .map_err(|e| TransportFailure::RequestSetup(e.to_string()))?;

        let mut form = Form::new().part("file", file_part);
        for rule in rules {
            form = form.text("rules", rule.clone());
        }

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .map_err(classify_send_error)?;
        read_response(response)
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportFailure> {
        let client = build_client()?;
        let response = client.get(url).send().map_err(classify_send_error)?;
        read_response(response)
    }
}

#[cfg(not(tarpaulin_include))]
fn build_client() -> Result<reqwest::blocking::Client, TransportFailure> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| TransportFailure::RequestSetup(format!("Failed to create HTTP client: {e}")))
}

#[cfg(not(tarpaulin_include))]
fn classify_send_error(e: reqwest::Error) -> TransportFailure {
    // Timeouts and connection errors mean the request went out but nothing
    // came back; builder errors mean it was never sent.
    if e.is_builder() {
        TransportFailure::RequestSetup(e.to_string())
    } else {
        TransportFailure::NoResponse(e.to_string())
    }
}

#[cfg(not(tarpaulin_include))]
fn read_response(response: reqwest::blocking::Response) -> Result<HttpResponse, TransportFailure> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| TransportFailure::NoResponse(e.to_string()))?;
    Ok(HttpResponse { status, body })
}
