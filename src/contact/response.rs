use serde::Deserialize;

use super::error::SubmitError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct FieldError {
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ServerReply {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
}

impl ServerReply {
    fn error_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .filter_map(|e| e.message.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect()
    }

    pub fn best_message(&self) -> Option<String> {
        let joined = self.error_messages().join(", ");
        if !joined.is_empty() {
            return Some(joined);
        }
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

/// A 2xx answer is success unless a JSON body says otherwise; a 2xx body that
/// is not JSON carries no verdict.
pub fn interpret(response: &RawResponse) -> Result<(), SubmitError> {
    let status = response.status;
    let body = response.body.trim();

    if response.ok() {
        return match serde_json::from_str::<ServerReply>(body) {
            Ok(reply) if reply.success == Some(false) || !reply.error_messages().is_empty() => {
                Err(SubmitError::ServerRejected {
                    status,
                    message: reply.best_message(),
                })
            }
            _ => Ok(()),
        };
    }

    if body.is_empty() {
        return Err(SubmitError::ServerRejected { status, message: None });
    }

    match serde_json::from_str::<ServerReply>(body) {
        Ok(reply) => Err(SubmitError::ServerRejected {
            status,
            message: reply.best_message(),
        }),
        Err(e) => Err(SubmitError::MalformedResponse {
            status,
            detail: e.to_string(),
        }),
    }
}
