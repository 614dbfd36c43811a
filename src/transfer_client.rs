use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};

use crate::configure::AppConfig;
use crate::models::{ClientError, TransferRequest, TransferResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8123";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const LOG_TARGET: &str = "transfer";

/// HTTP client for the funds transfer service.
///
/// Holds one `reqwest::Client`, reused for every call. Only connection
/// establishment is bounded by a timeout. Redirects are not followed and
/// system proxies are not consulted.
#[derive(Debug, Clone)]
pub struct TransferClient {
    client: Client,
    base_url: String,
}

impl TransferClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::build(base_url.into(), DEFAULT_CONNECT_TIMEOUT)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::build(config.base_url.clone(), config.connect_timeout())
    }

    fn build(base_url: String, connect_timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .no_proxy()
            .redirect(Policy::none())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a transfer and return the service's outcome.
    ///
    /// Non-2xx answers become `ClientError::Status` with the raw body. No retry.
    pub async fn transfer_funds(
        &self,
        from_account: &str,
        to_account: &str,
        amount: f64,
    ) -> Result<TransferResponse, ClientError> {
        log::info!(
            target: LOG_TARGET,
            "Starting transfer from {} to {} for amount {:.2}",
            from_account,
            to_account,
            amount
        );

        let payload = TransferRequest::new(from_account, to_account, amount);
        if log::log_enabled!(target: LOG_TARGET, log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&payload) {
                log::debug!(target: LOG_TARGET, "Request JSON: {}", json);
            }
        }

        let response = self
            .client
            .post(transfer_url(&self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        log::info!(target: LOG_TARGET, "Received HTTP status: {}", status.as_u16());

        let body = response.text().await?;
        log::debug!(target: LOG_TARGET, "Response body: {}", body);

        let transfer = classify_response(status, &body)?;
        log::info!(target: LOG_TARGET, "Transfer successful: {}", transfer.transaction_id);
        Ok(transfer)
    }
}

pub fn transfer_url(base_url: &str) -> String {
    format!("{}/transfer", base_url.trim_end_matches('/'))
}

/// Map a completed exchange to its outcome: 2xx bodies are decoded, anything
/// else is an application failure carrying the body verbatim.
pub fn classify_response(
    status: StatusCode,
    body: &str,
) -> Result<TransferResponse, ClientError> {
    if !status.is_success() {
        log::error!(target: LOG_TARGET, "Transfer failed with body: {}", body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|source| ClientError::Decode {
        source,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{"transactionId":"12345","status":"SUCCESS","message":"Transfer completed","fromAccount":"ACC1000","toAccount":"ACC1001","amount":100.0,"bonusPoints":50}"#;

    #[test]
    fn test_transfer_url() {
        assert_eq!(transfer_url("http://localhost:8123"), "http://localhost:8123/transfer");
        assert_eq!(transfer_url("http://localhost:8123/"), "http://localhost:8123/transfer");
    }

    #[test]
    fn test_success_status_decodes_body() {
        let response = classify_response(StatusCode::OK, SUCCESS_BODY).unwrap();
        assert_eq!(response.transaction_id, "12345");
        assert_eq!(response.amount, 100.0);

        let created = classify_response(StatusCode::CREATED, SUCCESS_BODY).unwrap();
        assert_eq!(created, response);
    }

    #[test]
    fn test_server_error_carries_literal_body() {
        let body = r#"{"error":"insufficient funds"}"#;
        let err = classify_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();

        assert!(err.is_application());
        assert_eq!(err.body(), Some(body));
        assert!(err.to_string().contains(body));
    }

    #[test]
    fn test_non_2xx_never_decodes() {
        // Redirects and client errors fail even with a valid success body.
        let statuses = [
            StatusCode::MULTIPLE_CHOICES,
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
        ];
        for status in statuses {
            let err = classify_response(status, SUCCESS_BODY).unwrap_err();
            let expected = status.as_u16();
            assert!(matches!(err, ClientError::Status { status: code, .. } if code == expected));
        }
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = classify_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
        assert_eq!(err.body(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_client_defaults() {
        let client = TransferClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        let config = AppConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..AppConfig::default()
        };
        let client = TransferClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
    }
}
