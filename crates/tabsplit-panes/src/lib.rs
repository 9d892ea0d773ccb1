//! Tabsplit Panes
//!
//! The three fixed panes (tab bar, master, detail) share one container type
//! holding a single content slot. Collapsed panes are re-hosted in slide-over
//! side bars. Nothing here draws: every visible effect is a [`ShellCommand`]
//! handed to the host's [`RenderShell`].

mod command;
mod container;
mod content;
mod shell;
mod sidebar;

pub use command::{
    Animation, AnimationCurve, AnimationId, AnimationIds, AnimationKind, LayoutStep, ListKind,
    Pane, ShellCommand, SideBarKind, SWAP_DURATION,
};
pub use container::{PaneContainer, SwapStatus};
pub use content::ContentHandle;
pub use shell::{RecordingShell, RenderShell};
pub use sidebar::{SideBar, SideBarGesture, BACKDROP_ALPHA};
