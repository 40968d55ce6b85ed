/// Error body shape produced by the backend: an optional human-readable
/// `detail` string. Anything else in the body is ignored.
#[derive(serde::Deserialize)]
struct ErrorDetail {
    detail: Option<String>,
}

/// Everything that can go wrong between sending a request and handing a
/// parsed value back. Callers branch on the variant, not on message text.
#[derive(Debug)]
pub enum ResponseError {
    /// Non-success status with a server-supplied `detail` message.
    Api { status: u16, detail: String },
    /// Non-success status whose body carried no usable `detail`.
    Status(u16),
    /// A success response whose body could not be decoded.
    Decode(String),
    /// The backend could not be reached at all.
    NoConnection,
    Unknown,
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseError::Api { detail, .. } => write!(f, "{detail}"),
            ResponseError::Status(status) => write!(f, "request failed with status {status}"),
            ResponseError::Decode(msg) => write!(f, "malformed response body: {msg}"),
            ResponseError::NoConnection => write!(f, "no connection to the API"),
            ResponseError::Unknown => write!(f, "unknown request failure"),
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Decode(value.to_string())
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Maps non-success statuses onto `ResponseError`, extracting the
    /// backend's `detail` message when the error body parses as JSON.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match response.json::<ErrorDetail>().await {
            Ok(ErrorDetail { detail: Some(detail) }) => {
                Err(ResponseError::Api { status: status.as_u16(), detail })
            }
            _ => Err(ResponseError::Status(status.as_u16())),
        }
    }
}

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        response
            .json::<Self::ParsedResponseType>()
            .await
            .map_err(|err| ResponseError::Decode(err.to_string()))
    }
}

/// Marker for response types that are plain serde decodes of the body.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

/// Responses whose success status is `204 No Content`; the body is never
/// touched.
#[derive(Debug)]
pub struct NoContentResponse;

impl HTTPResponseType for NoContentResponse {
    type ParsedResponseType = ();

    async fn read_response(response: reqwest::Response) -> Result<(), ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
