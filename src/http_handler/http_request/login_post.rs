use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::login::LoginResponse;

/// Request type for the /auth/login endpoint. The only request sent without
/// an Authorization header, since no token exists yet.
#[derive(serde::Serialize, Debug)]
pub(crate) struct LoginRequest {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    /// The type of the json body.
    type Body = LoginRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    /// Type of the expected response.
    type Response = LoginResponse;
    fn endpoint(&self) -> &'static str { "/auth/login" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn requires_auth(&self) -> bool { false }
}
