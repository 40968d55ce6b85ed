use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::response_common::NoContentResponse;

/// Request type for removing a work order. Success is a bodyless 204.
#[derive(Debug)]
pub(crate) struct DeleteOrdemRequest {
    path: String,
}

impl DeleteOrdemRequest {
    pub(crate) fn new(id: u32) -> DeleteOrdemRequest {
        DeleteOrdemRequest { path: format!("/os/{id}") }
    }
}

impl NoBodyHTTPRequestType for DeleteOrdemRequest {}

impl HTTPRequestType for DeleteOrdemRequest {
    /// Type of the expected response.
    type Response = NoContentResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
