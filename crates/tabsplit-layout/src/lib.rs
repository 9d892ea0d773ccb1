//! Tabsplit Layout
//!
//! Decides which panes stay inline for a given window size and trait
//! context. Everything here is a plain value or a pure function; the
//! orchestrator in `tabsplit-core` applies the decisions.

mod config;
mod error;
mod geometry;
mod policy;
mod rules;
mod state;

pub use config::{Color, ConfigChanges, Configuration};
pub use error::LayoutError;
pub use geometry::{Idiom, Size, SizeClass, Traits};
pub use policy::{LayoutDecision, LayoutPolicy};
pub use rules::{CollapsePredicate, CollapseRules};
pub use state::{PaneChange, VisibilityDiff, VisibilityState};

pub type Result<T> = std::result::Result<T, LayoutError>;
