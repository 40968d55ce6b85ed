#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod client;
pub mod config;
pub mod http_handler;
mod logger;
pub mod session;

pub use client::{OrdensClient, has_role, require_auth};
pub use config::Config;
pub use http_handler::common::{HTTPError, OrdemStatus, TipoOs, UserRole};
pub use http_handler::http_request::create_ordem_post::NovaOrdem;
pub use http_handler::http_request::create_usuario_post::NovoUsuario;
pub use http_handler::http_request::ordens_list_get::OrdensFilter;
pub use http_handler::http_request::update_ordem_patch::OrdemUpdate;
pub use http_handler::http_request::update_usuario_patch::UsuarioUpdate;
pub use http_handler::http_response::dashboard::DashboardResponse;
pub use http_handler::http_response::login::LoginResponse;
pub use http_handler::http_response::ordem::{OrdemServicoListItem, OrdemServicoResponse};
pub use http_handler::http_response::usuario::UsuarioResponse;
