use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::common::OrdemStatus;
use crate::http_handler::http_response::ordem::OrdemServicoResponse;

/// Admin-side partial update. Absent fields never reach the wire.
#[derive(serde::Serialize, Debug, Default, Clone)]
pub struct OrdemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrdemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tecnico_executor_id: Option<u32>,
}

/// Request type for the generic work-order PATCH endpoint.
#[derive(Debug)]
pub(crate) struct UpdateOrdemRequest {
    path: String,
    body: OrdemUpdate,
}

impl UpdateOrdemRequest {
    pub(crate) fn new(id: u32, updates: OrdemUpdate) -> UpdateOrdemRequest {
        UpdateOrdemRequest { path: format!("/os/{id}"), body: updates }
    }
}

impl JSONBodyHTTPRequestType for UpdateOrdemRequest {
    /// The type of the json body.
    type Body = OrdemUpdate;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for UpdateOrdemRequest {
    /// Type of the expected response.
    type Response = OrdemServicoResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}
