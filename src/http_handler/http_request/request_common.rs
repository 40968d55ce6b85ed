use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::HTTPResponseType;
use reqwest::multipart;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// One implementor per backend endpoint.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Endpoint path (plus query string where applicable), starting with `/`.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP request method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Whether the Authorization header should be attached. Login is the
    /// only request sent before a token exists.
    fn requires_auth(&self) -> bool { true }
    /// Extra per-request headers.
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

/// Failure to assemble a request before anything reaches the wire.
#[derive(Debug)]
pub enum RequestError {
    /// The multipart payload references a file that could not be read.
    FileAccess(std::io::Error),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::FileAccess(err) => write!(f, "could not read upload file: {err}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<std::io::Error> for RequestError {
    fn from(value: std::io::Error) -> Self { RequestError::FileAccess(value) }
}

/// Requests without a body (GET/DELETE style endpoints).
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let request = client
            .request(self.request_method(), self.endpoint(), self.requires_auth())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .headers(self.header_params());
        let response =
            request.send().await.map_err(|err| HTTPError::HTTPResponseError(err.into()))?;
        <Self::Response as HTTPResponseType>::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

/// Requests carrying a JSON body. `Content-Type: application/json` is set by
/// the transport when the body is attached.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the JSON body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let request = client
            .request(self.request_method(), self.endpoint(), self.requires_auth())
            .headers(self.header_params())
            .json(self.body());
        let response =
            request.send().await.map_err(|err| HTTPError::HTTPResponseError(err.into()))?;
        <Self::Response as HTTPResponseType>::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

/// Requests carrying a multipart form. The Content-Type header is left to
/// the transport so the multipart boundary is computed correctly; the
/// Authorization header is still attached like everywhere else.
pub(crate) trait MultipartBodyHTTPRequestType: HTTPRequestType {
    async fn body(&self) -> Result<multipart::Form, RequestError>;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let form = self.body().await.map_err(HTTPError::HTTPRequestError)?;
        let request = client
            .request(self.request_method(), self.endpoint(), self.requires_auth())
            .headers(self.header_params())
            .multipart(form);
        let response =
            request.send().await.map_err(|err| HTTPError::HTTPResponseError(err.into()))?;
        <Self::Response as HTTPResponseType>::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}
