//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Layout error: {0}")]
    Layout(#[from] tabsplit_layout::LayoutError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required component: {0}")]
    MissingComponent(&'static str),

    #[error("Event channel closed")]
    ChannelClosed,
}
