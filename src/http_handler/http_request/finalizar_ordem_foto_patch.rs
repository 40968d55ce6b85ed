use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_response::ordem::OrdemServicoResponse;
use std::io;
use std::path::Path;

/// Request type for the finalize-with-photo sub-endpoint: the proof photo is
/// uploaded directly as a multipart file instead of a pre-uploaded URL.
#[derive(Debug)]
pub(crate) struct FinalizarOrdemComFotoRequest {
    path: String,
    foto_path: String,
    observacoes: Option<String>,
}

impl FinalizarOrdemComFotoRequest {
    pub(crate) fn new<P: AsRef<Path>>(
        id: u32,
        foto_path: P,
        observacoes: Option<String>,
    ) -> Result<FinalizarOrdemComFotoRequest, io::Error> {
        let foto = foto_path.as_ref();
        if !foto.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File path does not exist"));
        }
        if !foto.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Path is not a valid file"));
        }
        Ok(FinalizarOrdemComFotoRequest {
            path: format!("/os/{id}/finalizar-com-foto"),
            foto_path: foto.to_string_lossy().to_string(),
            observacoes,
        })
    }
}

impl MultipartBodyHTTPRequestType for FinalizarOrdemComFotoRequest {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError> {
        let foto = reqwest::multipart::Part::file(&self.foto_path).await?;
        let form = reqwest::multipart::Form::new().part("foto_comprovacao", foto);
        Ok(match &self.observacoes {
            Some(observacoes) => form.text("observacoes", observacoes.clone()),
            None => form,
        })
    }
}

impl HTTPRequestType for FinalizarOrdemComFotoRequest {
    /// Type of the expected response.
    type Response = OrdemServicoResponse;
    fn endpoint(&self) -> &str { self.path.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}
