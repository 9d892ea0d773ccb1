//! Render shell command vocabulary
//!
//! The core never renders. It describes every change to the host as a
//! serializable command; animated changes carry an [`AnimationId`] that the
//! host reports back once the animation has finished.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use tabsplit_layout::Color;

use crate::content::ContentHandle;

/// Canonical duration of content swaps and layout reflows
pub const SWAP_DURATION: Duration = Duration::from_millis(330);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    TabBar,
    Master,
    Detail,
}

impl Pane {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pane::TabBar => "tab_bar",
            Pane::Master => "master",
            Pane::Detail => "detail",
        }
    }
}

impl std::fmt::Display for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slide-over panel hosting a collapsed pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideBarKind {
    /// Tab list plus action items, replacing the tab bar
    Navigation,
    /// Master pane content
    Master,
}

impl SideBarKind {
    /// Pane whose content the side bar hosts
    pub fn pane(&self) -> Pane {
        match self {
            SideBarKind::Navigation => Pane::TabBar,
            SideBarKind::Master => Pane::Master,
        }
    }
}

impl std::fmt::Display for SideBarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SideBarKind::Navigation => write!(f, "navigation"),
            SideBarKind::Master => write!(f, "master"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Tabs,
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationId(u64);

impl AnimationId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of animation identifiers
#[derive(Debug, Default)]
pub struct AnimationIds {
    next: u64,
}

impl AnimationIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AnimationId {
        self.next += 1;
        AnimationId(self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCurve {
    EaseInOut,
    Linear,
}

/// One structural change to the fixed layout or its overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum LayoutStep {
    /// Pane joins the fixed layout
    Dock { pane: Pane },
    /// Pane leaves the fixed layout
    Undock { pane: Pane },
    /// Pane content moves into its slide-over panel (initially closed)
    HostSideBar { side_bar: SideBarKind },
    /// Slide-over panel is torn down, its content returns to the pane
    ReleaseSideBar { side_bar: SideBarKind },
    /// Detail becomes the only visible pane; covered panes stay in the hierarchy
    BeginSolo { cover_tab_bar: bool, cover_master: bool },
    /// Covered panes become visible again; `keep_shown` leaves the detail docked
    EndSolo {
        keep_shown: bool,
        restore_tab_bar: bool,
        restore_master: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationKind {
    /// New content slides in from the left while old content slides out to the right
    Slide {
        pane: Pane,
        from: ContentHandle,
        to: ContentHandle,
    },
    /// Single content fades in or out
    CrossFade {
        pane: Pane,
        content: ContentHandle,
        appearing: bool,
    },
    /// Layout steps animated together as one reflow
    Reflow { steps: Vec<LayoutStep> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub id: AnimationId,
    pub kind: AnimationKind,
    pub duration: Duration,
    pub curve: AnimationCurve,
}

impl Animation {
    pub fn new(id: AnimationId, kind: AnimationKind) -> Self {
        Self {
            id,
            kind,
            duration: SWAP_DURATION,
            curve: AnimationCurve::EaseInOut,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ShellCommand {
    WillDetach { pane: Pane, content: ContentHandle },
    Attach { pane: Pane, content: ContentHandle },
    Detach { pane: Pane, content: ContentHandle },
    DidAttach { pane: Pane, content: ContentHandle },
    Animate { animation: Animation },
    /// Unanimated layout change
    Layout { step: LayoutStep },
    /// Panel position and dimming backdrop move in lockstep
    SideBarVisibility {
        side_bar: SideBarKind,
        visible: bool,
        backdrop_alpha: f32,
        animated: bool,
    },
    PresentModal {
        content: ContentHandle,
        animation: Option<AnimationId>,
    },
    DismissModal {
        content: ContentHandle,
        animation: Option<AnimationId>,
    },
    /// Gate for side bar reveal gestures
    SetGesturesEnabled { enabled: bool },
    ReloadList {
        list: ListKind,
        selected: Option<usize>,
    },
    /// Arrow on the selected tab while the master pane is a side bar
    SetDisclosure { visible: bool, open: bool },
    SetPaneWidth { pane: Pane, width: f64 },
    SetBackground { pane: Pane, color: Color },
    SetSeparatorColor { color: Color },
}

impl ShellCommand {
    /// Animation the host must report back on, with its duration
    pub fn pending_animation(&self) -> Option<(AnimationId, std::time::Duration)> {
        match self {
            ShellCommand::Animate { animation } => Some((animation.id, animation.duration)),
            ShellCommand::PresentModal {
                animation: Some(id),
                ..
            }
            | ShellCommand::DismissModal {
                animation: Some(id),
                ..
            } => Some((*id, SWAP_DURATION)),
            _ => None,
        }
    }
}
