//! Tab item data structure
//!
//! An item is displayed in two places:
//! - the vertical tab bar (icon above a short title)
//! - the navigation side bar, when the tab bar is collapsed (icon beside the title)

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Closure invoked when an action-bar item is selected
pub type TabAction = Arc<dyn Fn() + Send + Sync>;

/// Opaque reference to an image asset, resolved by the render shell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TabItem<T> {
    title: String,
    icon: Icon,
    /// Tab bar icon for the selected state
    selected_icon: Option<Icon>,
    /// Side bar icon
    nav_icon: Option<Icon>,
    /// Side bar icon for the selected state
    nav_selected_icon: Option<Icon>,
    /// Value handed back to the owner when the item is selected
    action: T,
}

impl<T> TabItem<T> {
    pub fn new(title: impl Into<String>, icon: impl Into<Icon>, action: T) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            selected_icon: None,
            nav_icon: None,
            nav_selected_icon: None,
            action,
        }
    }

    pub fn with_selected_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    pub fn with_nav_icons(mut self, icon: impl Into<Icon>, selected: Option<Icon>) -> Self {
        self.nav_icon = Some(icon.into());
        self.nav_selected_icon = selected;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn selected_icon(&self) -> Option<&Icon> {
        self.selected_icon.as_ref()
    }

    pub fn nav_icon(&self) -> Option<&Icon> {
        self.nav_icon.as_ref()
    }

    pub fn nav_selected_icon(&self) -> Option<&Icon> {
        self.nav_selected_icon.as_ref()
    }

    pub fn action(&self) -> &T {
        &self.action
    }

    pub fn set_selected_icon(&mut self, icon: Option<Icon>) {
        self.selected_icon = icon;
    }

    pub fn set_nav_icon(&mut self, icon: Option<Icon>) {
        self.nav_icon = icon;
    }

    pub fn set_nav_selected_icon(&mut self, icon: Option<Icon>) {
        self.nav_selected_icon = icon;
    }

    /// Icon shown in the vertical tab bar
    pub fn tab_bar_icon(&self, selected: bool) -> &Icon {
        match (selected, &self.selected_icon) {
            (true, Some(icon)) => icon,
            _ => &self.icon,
        }
    }

    /// Icon shown in the navigation side bar, falling back to the tab bar icon
    pub fn side_bar_icon(&self, selected: bool) -> &Icon {
        if selected {
            if let Some(icon) = &self.nav_selected_icon {
                return icon;
            }
        }
        self.nav_icon.as_ref().unwrap_or(&self.icon)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TabItem<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabItem")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("selected_icon", &self.selected_icon)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}
