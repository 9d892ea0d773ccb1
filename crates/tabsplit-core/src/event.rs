//! Inbound events
//!
//! Everything the outside world tells the controller arrives as a
//! [`ShellEvent`] and is processed in FIFO order on one execution context.

use serde::{Deserialize, Serialize};

use tabsplit_layout::{Size, Traits};
use tabsplit_panes::{AnimationId, ContentHandle, SideBarGesture};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShellEvent {
    /// First layout pass, never animated
    Present { size: Size, traits: Traits },
    /// Announced before the matching size change
    TraitsWillChange { traits: Traits },
    SizeWillChange { size: Size },
    TabSelected { index: usize },
    ActionSelected { index: usize },
    Gesture { gesture: SideBarGesture },
    AnimationFinished { id: AnimationId },
    ShowDetail { content: ContentHandle },
    DismissDetail { animated: bool },
}

impl ShellEvent {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Internal queue entries
#[derive(Debug)]
pub(crate) enum Queued {
    Event(ShellEvent),
    /// Deferred re-index of the main tab list
    SettleTabs,
    /// Deferred re-index of the action bar
    SettleActions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event = ShellEvent::from_json(
            r#"{ "event": "size_will_change", "size": { "width": 320.0, "height": 568.0 } }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            ShellEvent::SizeWillChange {
                size: Size::new(320.0, 568.0)
            }
        );
    }

    #[test]
    fn test_malformed_event_is_an_error() {
        assert!(ShellEvent::from_json(r#"{ "event": "resize" }"#).is_err());
    }
}
