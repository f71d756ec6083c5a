use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use serde_json::Value;
use web_sys::FormData;

use super::error::SubmitError;
use super::fields::FormFields;
use super::response::RawResponse;
use crate::config::Encoding;

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Multipart(FormFields),
    Json(Value),
}

impl Payload {
    pub fn encode(encoding: Encoding, fields: &FormFields) -> Self {
        match encoding {
            Encoding::Multipart => Payload::Multipart(fields.clone()),
            Encoding::Json => Payload::Json(fields.to_json()),
        }
    }
}

#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, endpoint: &str, payload: &Payload) -> Result<RawResponse, SubmitError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

fn multipart_body(fields: &FormFields) -> Result<FormData, SubmitError> {
    let form_data = FormData::new()
        .map_err(|e| SubmitError::Transport(format!("could not create FormData: {:?}", e)))?;
    for (name, value) in fields.iter() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| SubmitError::Transport(format!("could not append {}: {:?}", name, e)))?;
    }
    Ok(form_data)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post(&self, endpoint: &str, payload: &Payload) -> Result<RawResponse, SubmitError> {
        let request = Request::post(endpoint).header("Accept", "application/json");
        let request = match payload {
            Payload::Multipart(fields) => request.body(multipart_body(fields)?),
            Payload::Json(value) => request
                .json(value)
                .map_err(|e| SubmitError::Transport(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = response.status();
        debug!("Contact endpoint answered with status {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::MalformedResponse {
                status,
                detail: e.to_string(),
            })?;

        Ok(RawResponse::new(status, body))
    }
}
