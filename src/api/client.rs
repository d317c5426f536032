use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::api::models::{
    GuidanceRequest, GuidanceResponse, HealthResponse, Lead, PalmReadingResponse, PalmStyle,
    SaveLeadResponse,
};
use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("could not build upload: {0}")]
    Form(String),
}

fn endpoint(path: &str) -> String {
    format!("{}{}", config::get_backend_url(), path)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

/// POST /save-lead
pub async fn save_lead(lead: &Lead) -> Result<SaveLeadResponse, ApiError> {
    let response = Request::post(&endpoint("/save-lead"))
        .header("Content-Type", "application/json")
        .json(lead)?
        .send()
        .await?;
    read_json(response).await
}

/// POST /ask
pub async fn ask_guidance(question: &str) -> Result<GuidanceResponse, ApiError> {
    let body = GuidanceRequest {
        question: question.to_string(),
    };
    let response = Request::post(&endpoint("/ask"))
        .header("Content-Type", "application/json")
        .json(&body)?
        .send()
        .await?;
    read_json(response).await
}

/// POST /palm-reading as multipart with `image` and `style` fields.
///
/// The browser sets the multipart boundary itself, so no Content-Type here.
pub async fn palm_reading(image: &File, style: PalmStyle) -> Result<PalmReadingResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Form(format!("{:?}", e)))?;
    form.append_with_blob("image", image)
        .map_err(|e| ApiError::Form(format!("{:?}", e)))?;
    form.append_with_str("style", style.as_str())
        .map_err(|e| ApiError::Form(format!("{:?}", e)))?;

    let response = Request::post(&endpoint("/palm-reading"))
        .body(form)
        .send()
        .await?;
    read_json(response).await
}

/// GET /health
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&endpoint("/health")).send().await?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_the_configured_base() {
        let url = endpoint("/palm-reading");
        assert!(url.starts_with(config::get_backend_url()));
        assert!(url.ends_with("/palm-reading"));
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(ApiError::Status(502).to_string(), "server answered with status 502");
    }
}
