use thiserror::Error;

/// Reasons the page could not be wired up. Nothing after setup can fail.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    CanvasMissing(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("2d context unavailable")]
    ContextUnavailable,

    #[error("js error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(SetupError::CanvasMissing("starCanvas".into()).to_string(), "no element with id `starCanvas`");
        assert_eq!(SetupError::NotACanvas("x".into()).to_string(), "element `x` is not a canvas");
        assert_eq!(SetupError::Js("boom".into()).to_string(), "js error: boom");
    }
}
