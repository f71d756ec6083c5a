use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Flask mailer running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "https://mailer-app-5ebl.onrender.com"
}

pub const CONTACT_PATH: &str = "/send-email";

pub const SENDING_MESSAGE: &str = "Enviando...";
pub const SUCCESS_MESSAGE: &str = "¡Gracias por tu mensaje! Te contactaremos pronto.";
pub const GENERIC_ERROR_MESSAGE: &str = "Oops! Hubo un problema al enviar tu formulario.";
pub const FADE_DELAY_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Multipart,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactConfig {
    pub endpoint: String,
    pub encoding: Encoding,
    pub validate_client_side: bool,
    pub sending_message: String,
    pub success_message: String,
    pub generic_error_message: String,
    pub fade_delay_ms: u32,
    pub scroll_on_success: bool,
}

impl ContactConfig {
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.fade_delay_ms))
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("{}{}", get_backend_url(), CONTACT_PATH),
            encoding: Encoding::Json,
            validate_client_side: false,
            sending_message: SENDING_MESSAGE.to_string(),
            success_message: SUCCESS_MESSAGE.to_string(),
            generic_error_message: GENERIC_ERROR_MESSAGE.to_string(),
            fade_delay_ms: FADE_DELAY_MS,
            scroll_on_success: true,
        }
    }
}
