use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}

/// Why a contact form submission didn't go through. Both variants are terminal,
/// the visitor is told and can submit again by hand.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("server rejected submission with status {0}")]
    Rejected(u16),
    #[error("could not reach form endpoint: {0}")]
    Connection(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        SubmitError::Connection(err.to_string())
    }
}

impl SubmitError {
    pub fn alert_text(&self) -> &'static str {
        match self {
            SubmitError::Rejected(_) => "Ошибка отправки. Попробуйте позже.",
            SubmitError::Connection(_) => "Ошибка соединения. Проверьте интернет.",
        }
    }
}
