use super::http_request::request_common::HTTPRequestMethod;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and the current bearer token.
///
/// This client is used for making REST API calls to the Ordens de Serviço
/// backend. No explicit timeout is configured; the transport's defaults
/// apply and cancellation is the caller's concern.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Bearer token of the current login session, if any.
    bearer: Option<String>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and no session.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests, prefix included
    ///   (e.g. `"http://localhost:8000/api/v1"`).
    pub(crate) fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().build().unwrap(),
            base_url: String::from(base_url),
            bearer: None,
        }
    }

    /// Returns the bearer token currently attached to requests.
    pub(crate) fn bearer(&self) -> Option<&str> { self.bearer.as_deref() }
    /// Replaces (or clears) the bearer token used for subsequent requests.
    pub(crate) fn set_bearer(&mut self, token: Option<String>) { self.bearer = token; }

    /// Builds a request for `endpoint`. The Authorization header is attached
    /// iff the request wants auth and a token is held; without a token the
    /// header is simply omitted and the server rejects the call.
    pub(super) fn request(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
        with_auth: bool,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let builder = match method {
            HTTPRequestMethod::Get => self.client.get(url),
            HTTPRequestMethod::Post => self.client.post(url),
            HTTPRequestMethod::Patch => self.client.patch(url),
            HTTPRequestMethod::Delete => self.client.delete(url),
        };
        match self.bearer {
            Some(ref token) if with_auth => builder.bearer_auth(token),
            _ => builder,
        }
    }
}
