use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Work-order counts by status plus opening-reason counters.
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct DashboardTotais {
    #[serde(default)]
    aguardando: u32,
    #[serde(default)]
    em_andamento: u32,
    #[serde(default)]
    concluido: u32,
    #[serde(default)]
    total: u32,
    #[serde(default)]
    motivo_sem_sinal: u32,
    #[serde(default)]
    motivo_ampliacao: u32,
    #[serde(default)]
    motivo_sinal_alto: u32,
}

impl DashboardTotais {
    pub fn aguardando(&self) -> u32 { self.aguardando }
    pub fn em_andamento(&self) -> u32 { self.em_andamento }
    pub fn concluido(&self) -> u32 { self.concluido }
    pub fn total(&self) -> u32 { self.total }
    pub fn motivo_sem_sinal(&self) -> u32 { self.motivo_sem_sinal }
    pub fn motivo_ampliacao(&self) -> u32 { self.motivo_ampliacao }
    pub fn motivo_sinal_alto(&self) -> u32 { self.motivo_sinal_alto }
}

/// Average durations in minutes, only measurable on completed orders.
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct DashboardMetricas {
    #[serde(default)]
    tempo_medio_espera_min: Option<f64>,
    #[serde(default)]
    tempo_medio_execucao_min: Option<f64>,
    #[serde(default)]
    tempo_medio_total_min: Option<f64>,
}

impl DashboardMetricas {
    pub fn tempo_medio_espera_min(&self) -> Option<f64> { self.tempo_medio_espera_min }
    pub fn tempo_medio_execucao_min(&self) -> Option<f64> { self.tempo_medio_execucao_min }
    pub fn tempo_medio_total_min(&self) -> Option<f64> { self.tempo_medio_total_min }
}

/// Per-technician completion stats.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct TecnicoStats {
    tecnico_nome: String,
    total_concluidas: u32,
    #[serde(default)]
    tempo_medio_execucao_min: Option<f64>,
}

impl TecnicoStats {
    pub fn tecnico_nome(&self) -> &str { self.tecnico_nome.as_str() }
    pub fn total_concluidas(&self) -> u32 { self.total_concluidas }
    pub fn tempo_medio_execucao_min(&self) -> Option<f64> { self.tempo_medio_execucao_min }
}

/// Per-city volume.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct CidadeStats {
    cidade: String,
    total: u32,
}

impl CidadeStats {
    pub fn cidade(&self) -> &str { self.cidade.as_str() }
    pub fn total(&self) -> u32 { self.total }
}

/// Response type for the /relatorios/dashboard endpoint.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct DashboardResponse {
    totais: DashboardTotais,
    metricas: DashboardMetricas,
    #[serde(default)]
    por_tecnico: Vec<TecnicoStats>,
    #[serde(default)]
    por_cidade: Vec<CidadeStats>,
}

impl SerdeJSONBodyHTTPResponseType for DashboardResponse {}

impl DashboardResponse {
    pub fn totais(&self) -> &DashboardTotais { &self.totais }
    pub fn metricas(&self) -> &DashboardMetricas { &self.metricas }
    pub fn por_tecnico(&self) -> &[TecnicoStats] { &self.por_tecnico }
    pub fn por_cidade(&self) -> &[CidadeStats] { &self.por_cidade }
}
