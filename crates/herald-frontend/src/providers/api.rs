use async_trait::async_trait;
use web_sys::AbortSignal;

use herald::api::{ApiClient, ApiResult, HttpApiClient};
use herald::config::{ClientConfig, MESSAGE_ENDPOINT};
use herald::data::MessagePayload;
use herald::view::MessageSource;

/// The API client for the Herald frontend, providing methods to interact with the backend API.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(config: &ClientConfig) -> Self {
        Api {
            client: HttpApiClient::new(config.api_base_url()),
        }
    }

    /// Requests made after this call are cancelled when `signal` aborts.
    pub fn with_abort_signal(mut self, signal: AbortSignal) -> Self {
        self.client.set_abort_signal(signal);
        self
    }
}

#[async_trait(?Send)]
impl MessageSource for Api {
    async fn fetch_message(&self) -> ApiResult<MessagePayload> {
        self.client.get(MESSAGE_ENDPOINT).await
    }
}
