use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::UserRole;
use crate::http_handler::http_response::usuario::UsuarioResponse;

/// Account creation payload. Admin-scoped server-side.
#[derive(serde::Serialize, Debug, Clone)]
pub struct NovoUsuario {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
}

/// Request type for creating an account.
#[derive(Debug)]
pub(crate) struct CreateUsuarioRequest {
    body: NovoUsuario,
}

impl CreateUsuarioRequest {
    pub(crate) fn new(usuario: NovoUsuario) -> CreateUsuarioRequest {
        CreateUsuarioRequest { body: usuario }
    }
}

impl JSONBodyHTTPRequestType for CreateUsuarioRequest {
    /// The type of the json body.
    type Body = NovoUsuario;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for CreateUsuarioRequest {
    /// Type of the expected response.
    type Response = UsuarioResponse;
    fn endpoint(&self) -> &'static str { "/usuarios" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
