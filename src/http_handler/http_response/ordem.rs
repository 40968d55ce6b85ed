use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::common::{OrdemStatus, TipoOs};
use chrono::NaiveDateTime;

/// Technician identity nested inside a full work-order record.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct TecnicoInfo {
    id: u32,
    #[serde(default)]
    nome: Option<String>,
    username: String,
}

impl TecnicoInfo {
    pub fn id(&self) -> u32 { self.id }
    pub fn nome(&self) -> Option<&str> { self.nome.as_deref() }
    pub fn username(&self) -> &str { self.username.as_str() }
}

/// Full work-order record as returned by the single-item endpoints.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct OrdemServicoResponse {
    id: u32,
    numero_os: String,
    status: OrdemStatus,
    #[serde(default)]
    tipo_os: Option<TipoOs>,
    tecnico_campo_id: u32,
    #[serde(default)]
    tecnico_executor_id: Option<u32>,

    // Field-collected evidence (CDN URLs) and location.
    foto_power_meter: String,
    foto_caixa: String,
    #[serde(default)]
    localizacao_lat: Option<f64>,
    #[serde(default)]
    localizacao_lng: Option<f64>,
    #[serde(default)]
    localizacao_precisao: Option<f64>,
    print_os_cliente: String,
    pppoe_cliente: String,
    #[serde(default)]
    motivo_abertura: Option<String>,
    #[serde(default)]
    telegram_nick: Option<String>,
    #[serde(default)]
    telegram_phone: Option<String>,
    #[serde(default)]
    cidade: Option<String>,
    #[serde(default)]
    porta_placa_olt: Option<String>,

    // Lifecycle timestamps (naive, as the backend emits them).
    criado_em: NaiveDateTime,
    #[serde(default)]
    iniciado_em: Option<NaiveDateTime>,
    #[serde(default)]
    concluido_em: Option<NaiveDateTime>,
    #[serde(default)]
    prazo_horas: Option<i64>,
    #[serde(default)]
    prazo_fim: Option<NaiveDateTime>,

    #[serde(default)]
    foto_comprovacao: Option<String>,
    #[serde(default)]
    observacoes: Option<String>,

    #[serde(default)]
    tecnico_campo: Option<TecnicoInfo>,
    #[serde(default)]
    tecnico_executor: Option<TecnicoInfo>,
}

impl SerdeJSONBodyHTTPResponseType for OrdemServicoResponse {}

impl OrdemServicoResponse {
    pub fn id(&self) -> u32 { self.id }
    pub fn numero_os(&self) -> &str { self.numero_os.as_str() }
    pub fn status(&self) -> OrdemStatus { self.status }
    pub fn tipo_os(&self) -> Option<TipoOs> { self.tipo_os }
    pub fn tecnico_campo_id(&self) -> u32 { self.tecnico_campo_id }
    pub fn tecnico_executor_id(&self) -> Option<u32> { self.tecnico_executor_id }
    pub fn foto_power_meter(&self) -> &str { self.foto_power_meter.as_str() }
    pub fn foto_caixa(&self) -> &str { self.foto_caixa.as_str() }
    pub fn localizacao_lat(&self) -> Option<f64> { self.localizacao_lat }
    pub fn localizacao_lng(&self) -> Option<f64> { self.localizacao_lng }
    pub fn localizacao_precisao(&self) -> Option<f64> { self.localizacao_precisao }
    pub fn print_os_cliente(&self) -> &str { self.print_os_cliente.as_str() }
    pub fn pppoe_cliente(&self) -> &str { self.pppoe_cliente.as_str() }
    pub fn motivo_abertura(&self) -> Option<&str> { self.motivo_abertura.as_deref() }
    pub fn telegram_nick(&self) -> Option<&str> { self.telegram_nick.as_deref() }
    pub fn telegram_phone(&self) -> Option<&str> { self.telegram_phone.as_deref() }
    pub fn cidade(&self) -> Option<&str> { self.cidade.as_deref() }
    pub fn porta_placa_olt(&self) -> Option<&str> { self.porta_placa_olt.as_deref() }
    pub fn criado_em(&self) -> NaiveDateTime { self.criado_em }
    pub fn iniciado_em(&self) -> Option<NaiveDateTime> { self.iniciado_em }
    pub fn concluido_em(&self) -> Option<NaiveDateTime> { self.concluido_em }
    pub fn prazo_horas(&self) -> Option<i64> { self.prazo_horas }
    pub fn prazo_fim(&self) -> Option<NaiveDateTime> { self.prazo_fim }
    pub fn foto_comprovacao(&self) -> Option<&str> { self.foto_comprovacao.as_deref() }
    pub fn observacoes(&self) -> Option<&str> { self.observacoes.as_deref() }
    pub fn tecnico_campo(&self) -> Option<&TecnicoInfo> { self.tecnico_campo.as_ref() }
    pub fn tecnico_executor(&self) -> Option<&TecnicoInfo> { self.tecnico_executor.as_ref() }

    /// Minutes between creation and the executor assuming the order.
    pub fn tempo_espera_minutos(&self) -> Option<i64> {
        self.iniciado_em.map(|iniciado| (iniciado - self.criado_em).num_minutes())
    }

    /// Minutes between assuming and finalizing the order.
    pub fn tempo_execucao_minutos(&self) -> Option<i64> {
        match (self.iniciado_em, self.concluido_em) {
            (Some(iniciado), Some(concluido)) => Some((concluido - iniciado).num_minutes()),
            _ => None,
        }
    }
}

/// Compact row shape returned by the list endpoint.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct OrdemServicoListItem {
    id: u32,
    numero_os: String,
    status: OrdemStatus,
    #[serde(default)]
    tipo_os: Option<TipoOs>,
    #[serde(default)]
    tecnico_campo_nome: Option<String>,
    #[serde(default)]
    tecnico_executor_nome: Option<String>,
    pppoe_cliente: String,
    #[serde(default)]
    motivo_abertura: Option<String>,
    #[serde(default)]
    cidade: Option<String>,
    criado_em: NaiveDateTime,
}

impl SerdeJSONBodyHTTPResponseType for Vec<OrdemServicoListItem> {}

impl OrdemServicoListItem {
    pub fn id(&self) -> u32 { self.id }
    pub fn numero_os(&self) -> &str { self.numero_os.as_str() }
    pub fn status(&self) -> OrdemStatus { self.status }
    pub fn tipo_os(&self) -> Option<TipoOs> { self.tipo_os }
    pub fn tecnico_campo_nome(&self) -> Option<&str> { self.tecnico_campo_nome.as_deref() }
    pub fn tecnico_executor_nome(&self) -> Option<&str> { self.tecnico_executor_nome.as_deref() }
    pub fn pppoe_cliente(&self) -> &str { self.pppoe_cliente.as_str() }
    pub fn motivo_abertura(&self) -> Option<&str> { self.motivo_abertura.as_deref() }
    pub fn cidade(&self) -> Option<&str> { self.cidade.as_deref() }
    pub fn criado_em(&self) -> NaiveDateTime { self.criado_em }
}
