use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::{OrdemStatus, TipoOs};
use crate::http_handler::http_response::ordem::OrdemServicoListItem;

/// Optional work-order list filters. Absent (or zero-valued) fields stay out
/// of the query string entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrdensFilter {
    pub status: Option<OrdemStatus>,
    pub tipo_os: Option<TipoOs>,
    pub tecnico_executor_id: Option<u32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl OrdensFilter {
    /// Filter to one work-order category, capped at `limit` results.
    pub fn for_tipo(tipo_os: TipoOs, limit: u32) -> OrdensFilter {
        OrdensFilter { tipo_os: Some(tipo_os), limit: Some(limit), ..OrdensFilter::default() }
    }

    /// Query-string fields in the fixed order the API documents:
    /// status_filter, tipo_os, tecnico_executor_id, limit, offset.
    fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(format!("status_filter={status}"));
        }
        if let Some(tipo_os) = self.tipo_os {
            params.push(format!("tipo_os={tipo_os}"));
        }
        if let Some(id) = self.tecnico_executor_id.filter(|id| *id > 0) {
            params.push(format!("tecnico_executor_id={id}"));
        }
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            params.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset.filter(|offset| *offset > 0) {
            params.push(format!("offset={offset}"));
        }
        params.join("&")
    }
}

/// Request type for the /os list endpoint.
#[derive(Debug)]
pub(crate) struct OrdensListRequest {
    path: String,
}

impl OrdensListRequest {
    pub(crate) fn new(filter: &OrdensFilter) -> OrdensListRequest {
        let query = filter.query_string();
        let path = if query.is_empty() { String::from("/os") } else { format!("/os?{query}") };
        OrdensListRequest { path }
    }
}

impl NoBodyHTTPRequestType for OrdensListRequest {}

impl HTTPRequestType for OrdensListRequest {
    /// Type of the expected response.
    type Response = Vec<OrdemServicoListItem>;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

#[cfg(test)]
mod tests {
    use super::{OrdensFilter, OrdensListRequest};
    use crate::http_handler::common::{OrdemStatus, TipoOs};
    use crate::http_handler::http_request::request_common::HTTPRequestType;

    #[test]
    fn empty_filter_hits_bare_collection() {
        let request = OrdensListRequest::new(&OrdensFilter::default());
        assert_eq!(request.endpoint(), "/os");
    }

    #[test]
    fn present_fields_keep_the_documented_order() {
        let filter = OrdensFilter {
            status: Some(OrdemStatus::Aguardando),
            tipo_os: Some(TipoOs::Rompimento),
            tecnico_executor_id: Some(7),
            limit: Some(50),
            offset: Some(10),
        };
        let request = OrdensListRequest::new(&filter);
        assert_eq!(
            request.endpoint(),
            "/os?status_filter=aguardando&tipo_os=rompimento&tecnico_executor_id=7&limit=50&offset=10"
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let filter = OrdensFilter { tipo_os: Some(TipoOs::Manutencao), limit: Some(100), ..OrdensFilter::default() };
        let request = OrdensListRequest::new(&filter);
        assert_eq!(request.endpoint(), "/os?tipo_os=manutencao&limit=100");
    }

    #[test]
    fn zero_valued_numerics_count_as_absent() {
        let filter = OrdensFilter {
            tecnico_executor_id: Some(0),
            limit: Some(0),
            offset: Some(0),
            ..OrdensFilter::default()
        };
        let request = OrdensListRequest::new(&filter);
        assert_eq!(request.endpoint(), "/os");
    }

    #[test]
    fn for_tipo_caps_results() {
        let request = OrdensListRequest::new(&OrdensFilter::for_tipo(TipoOs::Rompimento, 100));
        assert_eq!(request.endpoint(), "/os?tipo_os=rompimento&limit=100");
    }
}
