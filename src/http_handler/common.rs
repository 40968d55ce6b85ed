use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Work-order category. `Rompimento` is an unplanned incident (fiber
/// rupture), `Manutencao` scheduled maintenance, everything else `Normal`.
#[derive(serde::Serialize, serde::Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TipoOs {
    Normal,
    Rompimento,
    Manutencao,
}

/// Work-order lifecycle state. The transitions live server-side; the client
/// only ever reads these back and filters on them.
#[derive(serde::Serialize, serde::Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrdemStatus {
    Aguardando,
    EmAndamento,
    Concluido,
}

/// Access roles known to the backend. Enforcement is server-side; the client
/// uses these only for page gating via `has_role`.
#[derive(serde::Serialize, serde::Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    Admin,
    Monitoramento,
    Execucao,
    Campo,
}

/// Top-level error for every facade call: either the request could not be
/// built (multipart file access) or the exchange itself failed.
#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::fmt::Display for HTTPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HTTPError::HTTPRequestError(err) => write!(f, "{err}"),
            HTTPError::HTTPResponseError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}
