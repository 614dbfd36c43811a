// Wire types for the /transfer endpoint
use serde::{Deserialize, Serialize};

/// Outbound payload: `{"fromAccount":..,"toAccount":..,"amount":..}`
///
/// A NaN or infinite `amount` is written as `null`; nothing is rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
}

impl TransferRequest {
    pub fn new(
        from_account: impl Into<String>,
        to_account: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            amount,
        }
    }
}

/// Outcome reported by the transfer service.
///
/// Fields the service adds beyond these six are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub transaction_id: String,
    pub status: String,
    pub message: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
}
