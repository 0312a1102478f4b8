//! Method calls arriving over the viewer channel and their typed form.

use crate::error::{Result, ViewerError};
use crate::scene::fit::{Axis, ZoomDirection};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A raw call as the embedding side sends it: a method name and optional
/// JSON arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Rotate(Axis),
    Zoom(ZoomDirection),
    /// Absolute orientation in degrees.
    SetRotation { x: f32, y: f32, z: f32 },
    /// Absolute uniform scale. Zero and negative values are applied as given.
    SetScale(f32),
}

impl Command {
    pub fn parse(call: &MethodCall) -> Result<Self> {
        let method = call.method.as_str();
        match method {
            "rotateX" => Ok(Command::Rotate(Axis::X)),
            "rotateY" => Ok(Command::Rotate(Axis::Y)),
            "rotateZ" => Ok(Command::Rotate(Axis::Z)),
            "zoomIn" => Ok(Command::Zoom(ZoomDirection::In)),
            "zoomOut" => Ok(Command::Zoom(ZoomDirection::Out)),
            "setRotation" => {
                let args = arguments_object(method, call.arguments.as_ref(), "Expected {x,y,z}")?;
                Ok(Command::SetRotation {
                    x: number_field(method, args, "x")?,
                    y: number_field(method, args, "y")?,
                    z: number_field(method, args, "z")?,
                })
            }
            "setScale" => {
                let args = arguments_object(method, call.arguments.as_ref(), "Expected {scale}")?;
                Ok(Command::SetScale(number_field(method, args, "scale")?))
            }
            other => Err(ViewerError::UnsupportedCommand(other.to_string())),
        }
    }

    pub fn method_name(&self) -> &'static str {
        match self {
            Command::Rotate(Axis::X) => "rotateX",
            Command::Rotate(Axis::Y) => "rotateY",
            Command::Rotate(Axis::Z) => "rotateZ",
            Command::Zoom(ZoomDirection::In) => "zoomIn",
            Command::Zoom(ZoomDirection::Out) => "zoomOut",
            Command::SetRotation { .. } => "setRotation",
            Command::SetScale(_) => "setScale",
        }
    }
}

fn arguments_object<'a>(
    method: &str,
    arguments: Option<&'a Value>,
    expected: &str,
) -> Result<&'a Map<String, Value>> {
    arguments
        .and_then(Value::as_object)
        .ok_or_else(|| ViewerError::invalid_argument(method, expected))
}

fn number_field(method: &str, args: &Map<String, Value>, field: &str) -> Result<f32> {
    let value = args
        .get(field)
        .ok_or_else(|| ViewerError::invalid_argument(method, format!("missing '{}'", field)))?;
    let number = value.as_f64().ok_or_else(|| {
        ViewerError::invalid_argument(method, format!("'{}' must be a number, got {}", field, value))
    })? as f32;
    if !number.is_finite() {
        return Err(ViewerError::invalid_argument(
            method,
            format!("'{}' is out of range", field),
        ));
    }
    Ok(number)
}
