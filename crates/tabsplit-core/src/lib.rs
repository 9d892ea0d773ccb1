//! Tabsplit Core
//!
//! Adaptive three-pane shell: a fixed tab bar, a master pane and a detail
//! pane that collapse into side bars or a modal as the window changes.
//! The controller owns all state; the render shell only draws what it is told.

mod controller;
mod detail;
mod error;
mod event;
pub mod runtime;
mod transition;

pub use controller::{AdaptiveController, Completion, ControllerBuilder, Environment};
pub use error::CoreError;
pub use event::ShellEvent;

// Re-export the component crates
pub use tabsplit_layout::{
    Color, CollapsePredicate, CollapseRules, ConfigChanges, Configuration, Idiom, LayoutDecision,
    LayoutError, LayoutPolicy, Size, SizeClass, Traits, VisibilityState,
};
pub use tabsplit_panes::{
    AnimationId, ContentHandle, LayoutStep, ListKind, Pane, RecordingShell, RenderShell,
    ShellCommand, SideBarGesture, SideBarKind,
};
pub use tabsplit_tabs::{Icon, Selection, TabAction, TabItem, TabList};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
