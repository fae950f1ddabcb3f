// error.rs - Error types
//
// Config and simulation errors are plain data. WebError is only produced by
// the browser shell but lives here so the JsValue conversion has one home.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("noise density must lie in [0, 1], got {0}")]
    NoiseDensity(f64),

    #[error("pressure ceiling must be at least 1.0, got {0}")]
    PressureCeiling(f64),

    #[error("energy floor must be finite and positive, got {0}")]
    EnergyFloor(f64),

    #[error("initial energy {energy} is below the energy floor {floor}")]
    EnergyBelowFloor { energy: f64, floor: f64 },

    #[error("fixed step mode needs at least one step per frame")]
    ZeroMaxSteps,
}

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("energy amount must be finite and positive, got {0}")]
    InvalidEnergy(f64),

    #[error("pressure factor must be finite and positive, got {0}")]
    InvalidPressureFactor(f64),

    #[error("kinetic energy {0:e} would overflow the sphere's temperature, radius or loss")]
    EnergyOutOfRange(f64),

    #[error("pressure {0:e} would collapse the sphere's radius or loss")]
    PressureOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("element #{0} has the wrong type")]
    WrongElement(String),

    #[error("canvas #{0} has no 2d context")]
    NoContext(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WebError {
    pub fn js(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
