//! Reading shape collections from JSON or TOML files.
//!
//! ```toml
//! [[shapes]]
//! kind = "square"
//! side = 10.0
//!
//! [[shapes]]
//! kind = "triangle"
//! base = 10.0
//! height = 5.0
//! ```

use crate::calculator::AreaCalculator;
use crate::error::{Result, ShapeError};
use crate::shape::{Circle, Shape, Square, Triangle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Square { side: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl ShapeSpec {
    pub fn build(&self) -> Result<Box<dyn Shape>> {
        Ok(match *self {
            ShapeSpec::Square { side } => Box::new(Square::new(side)?),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)?),
            ShapeSpec::Triangle { base, height } => Box::new(Triangle::new(base, height)?),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeFile {
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

impl ShapeFile {
    /// Builds every shape in file order, stopping at the first invalid one.
    pub fn into_calculator(self) -> Result<AreaCalculator> {
        self.shapes.iter().map(ShapeSpec::build).collect()
    }
}

pub fn parse_json(content: &str) -> Result<ShapeFile> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_toml(content: &str) -> Result<ShapeFile> {
    toml::from_str(content).map_err(|err| ShapeError::from_toml(err, content))
}

pub fn load_shapes(path: &Path) -> Result<AreaCalculator> {
    let content = fs::read_to_string(path).map_err(|err| ShapeError::io(path, err))?;

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let file = match format.as_deref() {
        Some("json") => parse_json(&content)?,
        Some("toml") => parse_toml(&content)?,
        _ if content.trim_start().starts_with('{') => parse_json(&content)?,
        _ => parse_toml(&content)?,
    };

    file.into_calculator()
}
