use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::dashboard::DashboardResponse;

/// Request type for the /relatorios/dashboard endpoint.
#[derive(Debug)]
pub(crate) struct DashboardRequest {}

impl NoBodyHTTPRequestType for DashboardRequest {}

impl HTTPRequestType for DashboardRequest {
    /// Type of the expected response.
    type Response = DashboardResponse;
    fn endpoint(&self) -> &'static str { "/relatorios/dashboard" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
