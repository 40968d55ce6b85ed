use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::UserRole;
use chrono::NaiveDateTime;

/// A backend user account. This is also the profile shape persisted under
/// the `user` session key, so it serializes back out unchanged.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct UsuarioResponse {
    id: u32,
    username: String,
    role: UserRole,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    telegram_id: Option<i64>,
    created_at: NaiveDateTime,
}

impl SerdeJSONBodyHTTPResponseType for UsuarioResponse {}
impl SerdeJSONBodyHTTPResponseType for Vec<UsuarioResponse> {}

impl UsuarioResponse {
    pub fn id(&self) -> u32 { self.id }
    pub fn username(&self) -> &str { self.username.as_str() }
    pub fn role(&self) -> UserRole { self.role }
    pub fn nome(&self) -> Option<&str> { self.nome.as_deref() }
    pub fn telegram_id(&self) -> Option<i64> { self.telegram_id }
    pub fn created_at(&self) -> NaiveDateTime { self.created_at }
    /// Display name: `nome` when the account has one, otherwise the username.
    pub fn display_name(&self) -> &str { self.nome.as_deref().unwrap_or(&self.username) }
}
