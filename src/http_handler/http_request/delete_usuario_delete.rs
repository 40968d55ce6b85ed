use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::response_common::NoContentResponse;

/// Request type for removing an account. Success is a bodyless 204.
#[derive(Debug)]
pub(crate) struct DeleteUsuarioRequest {
    path: String,
}

impl DeleteUsuarioRequest {
    pub(crate) fn new(id: u32) -> DeleteUsuarioRequest {
        DeleteUsuarioRequest { path: format!("/usuarios/{id}") }
    }
}

impl NoBodyHTTPRequestType for DeleteUsuarioRequest {}

impl HTTPRequestType for DeleteUsuarioRequest {
    /// Type of the expected response.
    type Response = NoContentResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
