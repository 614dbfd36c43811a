pub mod transfer_errors;
pub mod transfer_types;

pub use transfer_errors::ClientError;
pub use transfer_types::{TransferRequest, TransferResponse};
