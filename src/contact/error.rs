use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor completá todos los campos obligatorios.")]
    MissingField(&'static str),
    #[error("Por favor ingresá un correo electrónico válido.")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request could not be completed: {0}")]
    Transport(String),
    #[error("server rejected submission with status {status}")]
    ServerRejected { status: u16, message: Option<String> },
    #[error("unexpected response body (status {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },
    #[error("form failed validation: {0}")]
    Invalid(#[from] ValidationError),
}

impl SubmitError {
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SubmitError::ServerRejected {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Invalid(reason) => reason.to_string(),
            _ => fallback.to_string(),
        }
    }
}
