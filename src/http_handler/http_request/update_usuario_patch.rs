use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::UserRole;
use crate::http_handler::http_response::usuario::UsuarioResponse;

/// Partial account update. Absent fields never reach the wire.
#[derive(serde::Serialize, Debug, Default, Clone)]
pub struct UsuarioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request type for the account PATCH endpoint.
#[derive(Debug)]
pub(crate) struct UpdateUsuarioRequest {
    path: String,
    body: UsuarioUpdate,
}

impl UpdateUsuarioRequest {
    pub(crate) fn new(id: u32, updates: UsuarioUpdate) -> UpdateUsuarioRequest {
        UpdateUsuarioRequest { path: format!("/usuarios/{id}"), body: updates }
    }
}

impl JSONBodyHTTPRequestType for UpdateUsuarioRequest {
    /// The type of the json body.
    type Body = UsuarioUpdate;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for UpdateUsuarioRequest {
    /// Type of the expected response.
    type Response = UsuarioResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}
