use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the thin layer that talks to the browser directly.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("could not attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("could not load script {src}: {reason}")]
    Script { src: String, reason: String },
}

impl DomError {
    pub fn listener(event: &'static str, value: JsValue) -> Self {
        Self::Listener {
            event,
            reason: describe(&value),
        }
    }

    pub fn script(src: &str, value: JsValue) -> Self {
        Self::Script {
            src: src.to_string(),
            reason: describe(&value),
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
