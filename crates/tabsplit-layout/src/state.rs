//! Pane visibility state
//!
//! ```text
//! (tab_bar_hidden, master_hidden, detail_hidden)
//!   tab bar hidden -> navigation side bar
//!   master hidden  -> master side bar
//!   detail hidden  -> modal (or solo in place)
//! ```
//! `master_hidden && detail_hidden` is never a valid state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VisibilityState {
    pub tab_bar_hidden: bool,
    pub master_hidden: bool,
    pub detail_hidden: bool,
}

/// How one pane moves between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneChange {
    Unchanged,
    /// Leaves the fixed layout
    Collapse,
    /// Returns to the fixed layout
    Expand,
}

impl PaneChange {
    fn between(from_hidden: bool, to_hidden: bool) -> Self {
        match (from_hidden, to_hidden) {
            (false, true) => PaneChange::Collapse,
            (true, false) => PaneChange::Expand,
            _ => PaneChange::Unchanged,
        }
    }

    pub fn is_changed(&self) -> bool {
        *self != PaneChange::Unchanged
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDiff {
    pub tab_bar: PaneChange,
    pub master: PaneChange,
    pub detail: PaneChange,
}

impl VisibilityDiff {
    pub fn is_empty(&self) -> bool {
        !self.tab_bar.is_changed() && !self.master.is_changed() && !self.detail.is_changed()
    }
}

impl VisibilityState {
    /// Every pane in the fixed layout
    pub fn inline() -> Self {
        Self::default()
    }

    pub fn new(tab_bar_hidden: bool, master_hidden: bool, detail_hidden: bool) -> Self {
        Self {
            tab_bar_hidden,
            master_hidden,
            detail_hidden,
        }
    }

    pub fn is_valid(&self) -> bool {
        !(self.master_hidden && self.detail_hidden)
    }

    pub fn diff(&self, target: &VisibilityState) -> VisibilityDiff {
        VisibilityDiff {
            tab_bar: PaneChange::between(self.tab_bar_hidden, target.tab_bar_hidden),
            master: PaneChange::between(self.master_hidden, target.master_hidden),
            detail: PaneChange::between(self.detail_hidden, target.detail_hidden),
        }
    }
}

impl std::fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flag = |hidden: bool| if hidden { "hidden" } else { "inline" };
        write!(
            f,
            "tab_bar={} master={} detail={}",
            flag(self.tab_bar_hidden),
            flag(self.master_hidden),
            flag(self.detail_hidden)
        )
    }
}
