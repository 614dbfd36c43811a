pub mod configure;
pub mod logger;
pub mod models;
pub mod transfer_client;
