//! Client facade for the Ordens de Serviço API.
//!
//! One method per backend endpoint, a persisted login session, and the two
//! page-gating helpers the views use (`require_auth`, `has_role`). All
//! methods propagate failures unchanged; there are no retries and no
//! partial results.

use std::io;
use std::path::Path;

use crate::config::Config;
use crate::http_handler::common::{HTTPError, TipoOs, UserRole};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::assumir_ordem_patch::AssumirOrdemRequest;
use crate::http_handler::http_request::create_ordem_post::{CreateOrdemRequest, NovaOrdem};
use crate::http_handler::http_request::create_usuario_post::{CreateUsuarioRequest, NovoUsuario};
use crate::http_handler::http_request::dashboard_get::DashboardRequest;
use crate::http_handler::http_request::delete_ordem_delete::DeleteOrdemRequest;
use crate::http_handler::http_request::delete_usuario_delete::DeleteUsuarioRequest;
use crate::http_handler::http_request::finalizar_ordem_foto_patch::FinalizarOrdemComFotoRequest;
use crate::http_handler::http_request::finalizar_ordem_patch::FinalizarOrdemRequest;
use crate::http_handler::http_request::login_post::LoginRequest;
use crate::http_handler::http_request::me_get::MeRequest;
use crate::http_handler::http_request::ordem_get::OrdemRequest;
use crate::http_handler::http_request::ordens_list_get::{OrdensFilter, OrdensListRequest};
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, MultipartBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_handler::http_request::update_ordem_patch::{OrdemUpdate, UpdateOrdemRequest};
use crate::http_handler::http_request::update_usuario_patch::{UsuarioUpdate, UpdateUsuarioRequest};
use crate::http_handler::http_request::usuarios_get::UsuariosRequest;
use crate::http_handler::http_response::dashboard::DashboardResponse;
use crate::http_handler::http_response::login::LoginResponse;
use crate::http_handler::http_response::ordem::{OrdemServicoListItem, OrdemServicoResponse};
use crate::http_handler::http_response::usuario::UsuarioResponse;
use crate::session::{ACCESS_TOKEN_KEY, SessionStore, USER_KEY};
use crate::{event, info, warn};

/// How many rows each half of the combined rompimento/manutenção fetch asks
/// for.
const COMBINED_FETCH_LIMIT: u32 = 100;

/// Holds the login session (bearer token + cached profile) and dispatches
/// every API call. Construct one per logical user context and pass it by
/// reference into the views; `login`/`logout` are the only mutations.
pub struct OrdensClient {
    /// The HTTP client carrying the base URL and the current bearer token.
    http: HTTPClient,
    /// Profile cached at login time, mirrored in durable storage.
    user: Option<UsuarioResponse>,
    /// Durable storage behind the `access_token`/`user` keys.
    store: SessionStore,
}

impl OrdensClient {
    /// Opens the session store and restores any previously persisted
    /// session. A missing `user` key is absence, not an error.
    pub fn new(config: &Config) -> io::Result<OrdensClient> {
        let store = SessionStore::open(config.session_dir())?;
        let mut http = HTTPClient::new(config.api_base_url());
        http.set_bearer(store.get(ACCESS_TOKEN_KEY));
        let user = store.get_json(USER_KEY);
        Ok(OrdensClient { http, user, store })
    }

    /// True iff a bearer token is currently held in memory.
    pub fn is_authenticated(&self) -> bool { self.http.bearer().is_some() }

    /// The profile cached at login time, if any.
    pub fn user(&self) -> Option<&UsuarioResponse> { self.user.as_ref() }

    /// POST /auth/login. On success the token and profile are kept in memory
    /// and persisted together, then the full response is handed back.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, HTTPError> {
        let request = LoginRequest {
            username: String::from(username),
            password: String::from(password),
        };
        let response = request.send_request(&self.http).await?;
        self.http.set_bearer(Some(String::from(response.access_token())));
        self.user = Some(response.user().clone());
        if let Err(err) = self.persist_session(&response) {
            warn!("Could not persist session: {err}");
        }
        info!("Logged in as {}", response.user().username());
        Ok(response)
    }

    fn persist_session(&self, response: &LoginResponse) -> io::Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, response.access_token())?;
        self.store.set_json(USER_KEY, response.user())
    }

    /// Drops the session from memory and durable storage. No server call is
    /// made; navigating back to the landing page is the embedding UI's job.
    pub fn logout(&mut self) {
        self.http.set_bearer(None);
        self.user = None;
        let cleared =
            self.store.remove(ACCESS_TOKEN_KEY).and_then(|()| self.store.remove(USER_KEY));
        if let Err(err) = cleared {
            warn!("Could not clear persisted session: {err}");
        }
        info!("Logged out");
    }

    /// GET /auth/me — the profile as the server currently sees it.
    pub async fn me(&self) -> Result<UsuarioResponse, HTTPError> {
        MeRequest {}.send_request(&self.http).await
    }

    /// GET /os with the given filters.
    pub async fn ordens_list(
        &self,
        filter: &OrdensFilter,
    ) -> Result<Vec<OrdemServicoListItem>, HTTPError> {
        OrdensListRequest::new(filter).send_request(&self.http).await
    }

    /// Fetches rompimento and manutenção orders with both list requests in
    /// flight at the same time. Rompimento rows come first in the combined
    /// result; either failure fails the whole call with no partial list.
    pub async fn ordens_rompimento_manutencao(
        &self,
    ) -> Result<Vec<OrdemServicoListItem>, HTTPError> {
        let rompimento =
            OrdensListRequest::new(&OrdensFilter::for_tipo(TipoOs::Rompimento, COMBINED_FETCH_LIMIT));
        let manutencao =
            OrdensListRequest::new(&OrdensFilter::for_tipo(TipoOs::Manutencao, COMBINED_FETCH_LIMIT));
        let (rompimento_res, manutencao_res) = tokio::join!(
            rompimento.send_request(&self.http),
            manutencao.send_request(&self.http)
        );
        let mut ordens = rompimento_res?;
        ordens.extend(manutencao_res?);
        Ok(ordens)
    }

    /// GET /os/{id}.
    pub async fn ordem(&self, id: u32) -> Result<OrdemServicoResponse, HTTPError> {
        OrdemRequest::new(id).send_request(&self.http).await
    }

    /// POST /os — open a new work order with the field-collected data.
    pub async fn create_ordem(&self, ordem: NovaOrdem) -> Result<OrdemServicoResponse, HTTPError> {
        CreateOrdemRequest::new(ordem).send_request(&self.http).await
    }

    /// PATCH /os/{id}/assumir — claim an order for the given executor. The
    /// state transition happens server-side.
    pub async fn assumir_ordem(
        &self,
        id: u32,
        tecnico_executor_id: u32,
    ) -> Result<OrdemServicoResponse, HTTPError> {
        AssumirOrdemRequest::new(id, tecnico_executor_id).send_request(&self.http).await
    }

    /// PATCH /os/{id}/finalizar — close an order with an already-uploaded
    /// proof photo URL and optional notes.
    pub async fn finalizar_ordem(
        &self,
        id: u32,
        foto_comprovacao: &str,
        observacoes: Option<String>,
    ) -> Result<OrdemServicoResponse, HTTPError> {
        FinalizarOrdemRequest::new(id, foto_comprovacao, observacoes)
            .send_request(&self.http)
            .await
    }

    /// PATCH /os/{id}/finalizar-com-foto — close an order uploading the proof
    /// photo file directly as multipart form data.
    pub async fn finalizar_ordem_com_foto<P: AsRef<Path>>(
        &self,
        id: u32,
        foto: P,
        observacoes: Option<String>,
    ) -> Result<OrdemServicoResponse, HTTPError> {
        let request = FinalizarOrdemComFotoRequest::new(id, foto, observacoes)
            .map_err(|err| HTTPError::HTTPRequestError(err.into()))?;
        request.send_request(&self.http).await
    }

    /// PATCH /os/{id} — partial update.
    pub async fn update_ordem(
        &self,
        id: u32,
        updates: OrdemUpdate,
    ) -> Result<OrdemServicoResponse, HTTPError> {
        UpdateOrdemRequest::new(id, updates).send_request(&self.http).await
    }

    /// DELETE /os/{id}.
    pub async fn delete_ordem(&self, id: u32) -> Result<(), HTTPError> {
        DeleteOrdemRequest::new(id).send_request(&self.http).await
    }

    /// GET /relatorios/dashboard — aggregate metrics.
    pub async fn dashboard(&self) -> Result<DashboardResponse, HTTPError> {
        DashboardRequest {}.send_request(&self.http).await
    }

    /// GET /usuarios.
    pub async fn usuarios(&self) -> Result<Vec<UsuarioResponse>, HTTPError> {
        UsuariosRequest {}.send_request(&self.http).await
    }

    /// POST /usuarios.
    pub async fn create_usuario(
        &self,
        usuario: NovoUsuario,
    ) -> Result<UsuarioResponse, HTTPError> {
        CreateUsuarioRequest::new(usuario).send_request(&self.http).await
    }

    /// PATCH /usuarios/{id}.
    pub async fn update_usuario(
        &self,
        id: u32,
        updates: UsuarioUpdate,
    ) -> Result<UsuarioResponse, HTTPError> {
        UpdateUsuarioRequest::new(id, updates).send_request(&self.http).await
    }

    /// DELETE /usuarios/{id}.
    pub async fn delete_usuario(&self, id: u32) -> Result<(), HTTPError> {
        DeleteUsuarioRequest::new(id).send_request(&self.http).await
    }
}

/// Page-level auth gate. The caller is expected to route back to the
/// landing page when this returns false; individual API calls are not
/// gated here.
pub fn require_auth(client: &OrdensClient) -> bool {
    if client.is_authenticated() {
        true
    } else {
        event!("Blocked unauthenticated page access");
        false
    }
}

/// True iff a profile is held and its role is one of `roles`. With no user
/// held this is always false.
pub fn has_role(client: &OrdensClient, roles: &[UserRole]) -> bool {
    client.user().is_some_and(|user| roles.contains(&user.role()))
}

#[cfg(test)]
mod tests;
