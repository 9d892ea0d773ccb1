//! Layout error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid width for {field}: {value}")]
    InvalidWidth { field: &'static str, value: f64 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
