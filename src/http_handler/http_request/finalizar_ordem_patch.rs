use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::ordem::OrdemServicoResponse;

/// Completion proof: a previously uploaded photo URL plus optional notes.
/// `observacoes` is sent as an explicit null when absent, matching what the
/// backend expects from the web client.
#[derive(serde::Serialize, Debug)]
pub(crate) struct FinalizarOrdemBody {
    foto_comprovacao: String,
    observacoes: Option<String>,
}

/// Request type for the finalize sub-endpoint.
#[derive(Debug)]
pub(crate) struct FinalizarOrdemRequest {
    path: String,
    body: FinalizarOrdemBody,
}

impl FinalizarOrdemRequest {
    pub(crate) fn new(
        id: u32,
        foto_comprovacao: &str,
        observacoes: Option<String>,
    ) -> FinalizarOrdemRequest {
        FinalizarOrdemRequest {
            path: format!("/os/{id}/finalizar"),
            body: FinalizarOrdemBody {
                foto_comprovacao: String::from(foto_comprovacao),
                observacoes,
            },
        }
    }
}

impl JSONBodyHTTPRequestType for FinalizarOrdemRequest {
    /// The type of the json body.
    type Body = FinalizarOrdemBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for FinalizarOrdemRequest {
    /// Type of the expected response.
    type Response = OrdemServicoResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}
