//! Slide-over side bar
//!
//! Hosts a collapsed pane. One visibility flag drives both the panel
//! position and the dimming backdrop.

use serde::{Deserialize, Serialize};

use crate::command::{LayoutStep, ShellCommand, SideBarKind};
use crate::shell::RenderShell;

/// Backdrop opacity while the panel is open
pub const BACKDROP_ALPHA: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideBarGesture {
    /// Swipe in from the leading edge
    EdgeSwipe,
    /// Tap on the dimmed area beside the panel
    TapOutside,
}

#[derive(Debug)]
pub struct SideBar {
    kind: SideBarKind,
    /// Pane content currently lives in the panel
    hosted: bool,
    visible: bool,
    gestures_enabled: bool,
}

impl SideBar {
    pub fn new(kind: SideBarKind) -> Self {
        Self {
            kind,
            hosted: false,
            visible: false,
            gestures_enabled: true,
        }
    }

    pub fn kind(&self) -> SideBarKind {
        self.kind
    }

    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// Move the pane into the panel, closed. `None` if already hosted.
    pub fn host(&mut self) -> Option<LayoutStep> {
        if self.hosted {
            return None;
        }
        self.hosted = true;
        self.visible = false;
        Some(LayoutStep::HostSideBar {
            side_bar: self.kind,
        })
    }

    /// Tear the panel down, closing it first. `None` if nothing is hosted.
    pub fn release(&mut self, shell: &mut dyn RenderShell) -> Option<LayoutStep> {
        if !self.hosted {
            return None;
        }
        self.hide(false, shell);
        self.hosted = false;
        Some(LayoutStep::ReleaseSideBar {
            side_bar: self.kind,
        })
    }

    pub fn show(&mut self, animated: bool, shell: &mut dyn RenderShell) -> bool {
        self.set_visible(true, animated, shell)
    }

    pub fn hide(&mut self, animated: bool, shell: &mut dyn RenderShell) -> bool {
        self.set_visible(false, animated, shell)
    }

    pub fn toggle(&mut self, animated: bool, shell: &mut dyn RenderShell) -> bool {
        let visible = !self.visible;
        self.set_visible(visible, animated, shell)
    }

    /// Apply a user gesture. Ignored while gestures are disabled.
    pub fn handle_gesture(&mut self, gesture: SideBarGesture, shell: &mut dyn RenderShell) -> bool {
        if !self.gestures_enabled {
            tracing::debug!(side_bar = %self.kind, ?gesture, "Gesture ignored while disabled");
            return false;
        }
        match gesture {
            SideBarGesture::EdgeSwipe => self.show(true, shell),
            SideBarGesture::TapOutside => self.hide(true, shell),
        }
    }

    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        self.gestures_enabled = enabled;
    }

    fn set_visible(&mut self, visible: bool, animated: bool, shell: &mut dyn RenderShell) -> bool {
        if !self.hosted || self.visible == visible {
            return false;
        }
        self.visible = visible;
        shell.execute(ShellCommand::SideBarVisibility {
            side_bar: self.kind,
            visible,
            backdrop_alpha: if visible { BACKDROP_ALPHA } else { 0.0 },
            animated,
        });
        tracing::debug!(side_bar = %self.kind, visible, "Side bar visibility changed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::RecordingShell;

    #[test]
    fn test_show_requires_hosted_content() {
        let mut shell = RecordingShell::new();
        let mut side_bar = SideBar::new(SideBarKind::Master);
        assert!(!side_bar.show(true, &mut shell));
        assert!(shell.is_empty());

        assert!(side_bar.host().is_some());
        assert!(side_bar.host().is_none());
        assert!(side_bar.show(true, &mut shell));
        assert!(side_bar.is_visible());
        assert_eq!(
            shell.take(),
            vec![ShellCommand::SideBarVisibility {
                side_bar: SideBarKind::Master,
                visible: true,
                backdrop_alpha: BACKDROP_ALPHA,
                animated: true,
            }]
        );
    }

    #[test]
    fn test_gestures() {
        let mut shell = RecordingShell::new();
        let mut side_bar = SideBar::new(SideBarKind::Navigation);
        side_bar.host();

        assert!(side_bar.handle_gesture(SideBarGesture::EdgeSwipe, &mut shell));
        assert!(side_bar.handle_gesture(SideBarGesture::TapOutside, &mut shell));
        assert!(!side_bar.is_visible());

        side_bar.set_gestures_enabled(false);
        assert!(!side_bar.handle_gesture(SideBarGesture::EdgeSwipe, &mut shell));
        assert!(!side_bar.is_visible());
    }

    #[test]
    fn test_release_closes_panel_and_backdrop() {
        let mut shell = RecordingShell::new();
        let mut side_bar = SideBar::new(SideBarKind::Navigation);
        side_bar.host();
        side_bar.toggle(false, &mut shell);
        assert!(side_bar.is_visible());
        shell.take();

        assert_eq!(
            side_bar.release(&mut shell),
            Some(LayoutStep::ReleaseSideBar {
                side_bar: SideBarKind::Navigation
            })
        );
        assert!(!side_bar.is_visible());
        assert_eq!(
            shell.take(),
            vec![ShellCommand::SideBarVisibility {
                side_bar: SideBarKind::Navigation,
                visible: false,
                backdrop_alpha: 0.0,
                animated: false,
            }]
        );
        assert!(side_bar.release(&mut shell).is_none());
        assert!(shell.is_empty());
    }

    #[test]
    fn test_release_of_closed_panel_emits_nothing() {
        let mut shell = RecordingShell::new();
        let mut side_bar = SideBar::new(SideBarKind::Master);
        side_bar.host();
        assert!(side_bar.release(&mut shell).is_some());
        assert!(shell.is_empty());
    }
}
