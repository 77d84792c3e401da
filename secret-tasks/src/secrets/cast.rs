use std::error::Error;

use serde::Deserialize;
use serde_json::Value;

pub type CastError = Box<dyn Error + Send + Sync>;

/// Transformation applied to a retrieved value before it is returned.
/// Any callable with this shape is accepted; no validation is performed and
/// whatever error it produces is propagated as-is.
pub type CastFn = Box<dyn Fn(String) -> Result<Value, CastError> + Send + Sync>;

/// Built-in casts a configuration file can name.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CastKind {
    Integer,
    Float,
    Boolean,
    Json,
}

impl CastKind {
    pub fn into_cast(self) -> CastFn {
        match self {
            CastKind::Integer => Box::new(integer),
            CastKind::Float => Box::new(float),
            CastKind::Boolean => Box::new(boolean),
            CastKind::Json => Box::new(json),
        }
    }
}

pub fn integer(raw: String) -> Result<Value, CastError> {
    let parsed: i64 = raw.parse()?;
    Ok(Value::from(parsed))
}

pub fn float(raw: String) -> Result<Value, CastError> {
    let parsed: f64 = raw.parse()?;
    // Value has no representation for NaN or infinities.
    serde_json::Number::from_f64(parsed)
        .map(Value::Number)
        .ok_or_else(|| format!("not a finite number: {raw}").into())
}

pub fn boolean(raw: String) -> Result<Value, CastError> {
    let parsed: bool = raw.parse()?;
    Ok(Value::Bool(parsed))
}

pub fn json(raw: String) -> Result<Value, CastError> {
    Ok(serde_json::from_str(&raw)?)
}
