use super::response_common::SerdeJSONBodyHTTPResponseType;
use super::usuario::UsuarioResponse;

/// Response type for the /auth/login endpoint: the freshly minted bearer
/// token plus the authenticated user's profile.
#[derive(serde::Deserialize, Debug)]
pub struct LoginResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    user: UsuarioResponse,
}

fn default_token_type() -> String { String::from("bearer") }

impl SerdeJSONBodyHTTPResponseType for LoginResponse {}

impl LoginResponse {
    pub fn access_token(&self) -> &str { self.access_token.as_str() }
    pub fn token_type(&self) -> &str { self.token_type.as_str() }
    pub fn user(&self) -> &UsuarioResponse { &self.user }
}
