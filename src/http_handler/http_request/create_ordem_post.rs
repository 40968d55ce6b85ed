use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::ordem::OrdemServicoResponse;

/// Everything a field technician collects when opening a new work order.
/// Photo fields carry already-uploaded CDN URLs, not raw bytes.
#[derive(serde::Serialize, Debug, Clone)]
pub struct NovaOrdem {
    pub tecnico_campo_id: u32,
    pub foto_power_meter: String,
    pub foto_caixa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao_precisao: Option<f64>,
    pub print_os_cliente: String,
    pub pppoe_cliente: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo_abertura: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_nick: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
}

/// Request type for creating a work order.
#[derive(Debug)]
pub(crate) struct CreateOrdemRequest {
    body: NovaOrdem,
}

impl CreateOrdemRequest {
    pub(crate) fn new(ordem: NovaOrdem) -> CreateOrdemRequest {
        CreateOrdemRequest { body: ordem }
    }
}

impl JSONBodyHTTPRequestType for CreateOrdemRequest {
    /// The type of the json body.
    type Body = NovaOrdem;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for CreateOrdemRequest {
    /// Type of the expected response.
    type Response = OrdemServicoResponse;
    fn endpoint(&self) -> &'static str { "/os" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
