use gloo_net::http::Response;
use web_sys::AbortSignal;

use crate::config::join_url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Server error: {0}")]
    ServerError(u16),
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Maps an HTTP status onto the error taxonomy; any 2xx passes.
pub fn check_status(status: u16, endpoint: &str) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        400 => Err(ApiError::BadRequest(format!("Bad request to {}", endpoint))),
        401 => Err(ApiError::UnauthorizedAccess),
        403 => Err(ApiError::ForbiddenAccess),
        404 => Err(ApiError::NotFound(format!("{} not found", endpoint))),
        500..=599 => Err(ApiError::ServerError(status)),
        status => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    check_status(response.status(), endpoint)?;
    parse_json_response(response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(&self, endpoint: &str) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

/// `fetch`-backed client rooted at a base URL.
pub struct HttpApiClient {
    root_url: String,
    abort_signal: Option<AbortSignal>,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            abort_signal: None,
        }
    }

    /// Ties every request made by this client to `signal`; aborting it fails
    /// in-flight requests with a [`ApiError::NetworkError`].
    pub fn set_abort_signal(&mut self, signal: AbortSignal) {
        self.abort_signal = Some(signal);
    }

    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, endpoint: &str) -> ApiResult<Response> {
        let url = self.url(endpoint);

        gloo_net::http::Request::get(&url)
            .abort_signal(self.abort_signal.as_ref())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(endpoint).await?;
        handle_json_response(response, endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        assert!(check_status(200, "/message").is_ok());
        assert!(check_status(204, "/message").is_ok());
    }

    #[test]
    fn client_errors_are_classified() {
        assert!(matches!(
            check_status(400, "/message"),
            Err(ApiError::BadRequest(msg)) if msg == "Bad request to /message"
        ));
        assert!(matches!(
            check_status(401, "/message"),
            Err(ApiError::UnauthorizedAccess)
        ));
        assert!(matches!(
            check_status(403, "/message"),
            Err(ApiError::ForbiddenAccess)
        ));
        assert!(matches!(
            check_status(404, "/message"),
            Err(ApiError::NotFound(msg)) if msg == "/message not found"
        ));
    }

    #[test]
    fn other_statuses_are_failures() {
        assert!(matches!(
            check_status(500, "/message"),
            Err(ApiError::ServerError(500))
        ));
        assert!(matches!(
            check_status(503, "/message"),
            Err(ApiError::ServerError(503))
        ));
        assert!(matches!(
            check_status(302, "/message"),
            Err(ApiError::UnexpectedStatusCode(302))
        ));
        assert!(matches!(
            check_status(418, "/message"),
            Err(ApiError::UnexpectedStatusCode(418))
        ));
    }

    #[test]
    fn server_errors_keep_their_status() {
        let err = check_status(503, "/message").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn url_joins_root_and_endpoint() {
        let client = HttpApiClient::new("https://api.example.com/");
        assert_eq!(client.url("/message"), "https://api.example.com/message");
    }
}
