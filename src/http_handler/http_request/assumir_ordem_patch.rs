use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::ordem::OrdemServicoResponse;

#[derive(serde::Serialize, Debug)]
pub(crate) struct AssumirOrdemBody {
    tecnico_executor_id: u32,
}

/// Request type for the assume/claim sub-endpoint. The aguardando →
/// em_andamento transition itself happens server-side.
#[derive(Debug)]
pub(crate) struct AssumirOrdemRequest {
    path: String,
    body: AssumirOrdemBody,
}

impl AssumirOrdemRequest {
    pub(crate) fn new(id: u32, tecnico_executor_id: u32) -> AssumirOrdemRequest {
        AssumirOrdemRequest {
            path: format!("/os/{id}/assumir"),
            body: AssumirOrdemBody { tecnico_executor_id },
        }
    }
}

impl JSONBodyHTTPRequestType for AssumirOrdemRequest {
    /// The type of the json body.
    type Body = AssumirOrdemBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for AssumirOrdemRequest {
    /// Type of the expected response.
    type Response = OrdemServicoResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}
