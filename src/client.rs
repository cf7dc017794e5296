//! Typograf client: the request/response exchange and the fallback boundary.

use crate::config::TypografConfig;
use crate::envelope::build_process_text_request;
use crate::error::{CorrectionFailure, FailureReason, TypografError};
use crate::parser::extract_process_text_result;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Typograf ProcessText operation.
///
/// One blocking HTTP call per correction, no retries, no shared state beyond
/// the connection pool inside reqwest. Callers that must not block an
/// interactive thread are expected to invoke this from a background context.
pub struct TypografClient {
    config: TypografConfig,
    http: reqwest::blocking::Client,
}

impl TypografClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TypografConfig) -> Result<Self, TypografError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.service.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &TypografConfig {
        &self.config
    }

    /// Correct `text`, returning the input unchanged on any failure.
    ///
    /// Total function: never panics, never propagates an error. The failure
    /// reason is logged and otherwise indistinguishable from "not modified".
    pub fn correct(&self, text: &str) -> String {
        match self.try_correct(text) {
            Ok(corrected) => corrected,
            Err(failure) => {
                warn!(
                    reason = failure.reason.as_str(),
                    "Correction failed, keeping original text: {}", failure.message
                );
                text.to_string()
            }
        }
    }

    /// Run the full request/response sequence, reporting where it failed.
    ///
    /// A non-2xx status is not treated as a failure by itself; extraction is
    /// attempted on whatever body came back.
    pub fn try_correct(&self, text: &str) -> Result<String, CorrectionFailure> {
        let envelope = build_process_text_request(
            text,
            &self.config.request,
            self.config.service.escape_text,
        );

        debug!(
            endpoint = %self.config.service.endpoint,
            request_bytes = envelope.len(),
            "Sending ProcessText request"
        );

        let response = self
            .http
            .post(&self.config.service.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", self.config.service.soap_action.as_str())
            .body(envelope)
            .send()
            .map_err(|e| CorrectionFailure::new(classify_send_error(&e), e.to_string()))?;

        let status = response.status();

        let body = response
            .text()
            .map_err(|e| CorrectionFailure::new(FailureReason::Read, e.to_string()))?;

        debug!(
            status = %status,
            response_bytes = body.len(),
            "Received ProcessText response"
        );

        extract_process_text_result(&body)
    }
}

/// Classify a send-phase reqwest error into the failure taxonomy.
fn classify_send_error(e: &reqwest::Error) -> FailureReason {
    if e.is_connect() {
        FailureReason::Connect
    } else {
        FailureReason::Request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction_with_defaults() {
        let client = TypografClient::new(TypografConfig::default()).unwrap();
        assert_eq!(client.config().request.entity_type, 3);
    }

    #[test]
    fn test_correct_falls_back_on_unreachable_endpoint() {
        let mut config = TypografConfig::default();
        // reserved TEST-NET-1 address, nothing listens there
        config.service.endpoint = "http://192.0.2.1:9/typograf.asmx".to_string();
        config.service.timeout_secs = 1;

        let client = TypografClient::new(config).unwrap();
        let input = "He said \"hello\" - twice...";
        assert_eq!(client.correct(input), input);
    }
}
