use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::usuario::UsuarioResponse;

/// Request type for listing accounts. Admin-scoped server-side.
#[derive(Debug)]
pub(crate) struct UsuariosRequest {}

impl NoBodyHTTPRequestType for UsuariosRequest {}

impl HTTPRequestType for UsuariosRequest {
    /// Type of the expected response.
    type Response = Vec<UsuarioResponse>;
    fn endpoint(&self) -> &'static str { "/usuarios" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
