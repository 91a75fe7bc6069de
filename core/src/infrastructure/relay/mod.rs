pub mod http_relay_client;

pub use http_relay_client::{DEFAULT_RELAY_TIMEOUT, DEFAULT_RELAY_URL, HttpRelayClient};
