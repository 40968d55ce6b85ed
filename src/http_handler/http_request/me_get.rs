use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::usuario::UsuarioResponse;

/// Request type for the /auth/me endpoint.
#[derive(Debug)]
pub(crate) struct MeRequest {}

impl NoBodyHTTPRequestType for MeRequest {}

impl HTTPRequestType for MeRequest {
    /// Type of the expected response.
    type Response = UsuarioResponse;
    fn endpoint(&self) -> &'static str { "/auth/me" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
