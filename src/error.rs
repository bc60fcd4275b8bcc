use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Invalid {dimension} for {shape}: {value} (size and area must be finite, >= 0)")]
    InvalidDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    },

    #[error("Failed to read shape file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse shapes at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Failed to render area report: {0}")]
    Render(String),
}

impl ShapeError {
    pub fn invalid_dimension(shape: &'static str, dimension: &'static str, value: f64) -> Self {
        Self::InvalidDimension {
            shape,
            dimension,
            value,
        }
    }

    pub fn render(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ShapeError {
    fn from(err: serde_json::Error) -> Self {
        ShapeError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl ShapeError {
    /// TOML errors carry a byte span; resolve it against the source text.
    pub fn from_toml(err: toml::de::Error, source: &str) -> Self {
        let (line, column) = match err.span() {
            Some(span) => line_and_column(source, span.start),
            None => (0, 0),
        };
        ShapeError::Parse {
            line,
            column,
            message: err.message().to_string(),
        }
    }
}

fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let prefix = source.get(..offset).unwrap_or(source);
    let line = prefix.matches('\n').count() + 1;
    let column = prefix.rsplit('\n').next().map_or(0, |tail| tail.chars().count()) + 1;
    (line, column)
}

pub type Result<T> = std::result::Result<T, ShapeError>;
