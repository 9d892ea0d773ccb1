//! Collapse rules
//!
//! One optional predicate per pane. A missing predicate never collapses its pane.

use std::fmt;
use std::sync::Arc;

use crate::config::Configuration;
use crate::geometry::{Idiom, Size, Traits};

/// Decides from the environment whether a pane should leave the fixed layout
pub type CollapsePredicate = Arc<dyn Fn(Size, &Traits, &Configuration) -> bool + Send + Sync>;

/// Regular phone width; narrower compact windows move the tab bar into a side bar
const REGULAR_PHONE_WIDTH: f64 = 375.0;
/// Half-screen width of the largest pad
const PAD_HALF_SCREEN_WIDTH: f64 = 678.0;
/// Two-thirds-screen width of the largest pad
const PAD_TWO_THIRDS_WIDTH: f64 = 978.0;

#[derive(Clone, Default)]
pub struct CollapseRules {
    /// Show the tab bar as a slidable side bar
    pub tab_bar: Option<CollapsePredicate>,
    /// Show the master pane as a slidable side bar
    pub master: Option<CollapsePredicate>,
    /// Present the detail pane as a modal
    pub detail: Option<CollapsePredicate>,
}

impl CollapseRules {
    /// Rules that never collapse anything
    pub fn never() -> Self {
        Self::default()
    }

    /// The stock rules:
    /// - master slides over on a pad between half and two-thirds of the largest screen
    /// - detail becomes modal in compact width when the three panes do not fit
    /// - tab bar slides over in compact width up to a regular phone
    pub fn standard() -> Self {
        Self::never()
            .with_master(|size, traits, _| {
                traits.idiom == Idiom::Pad
                    && size.width >= PAD_HALF_SCREEN_WIDTH
                    && size.width <= PAD_TWO_THIRDS_WIDTH
            })
            .with_detail(|size, traits, config| {
                traits.is_compact()
                    && size.width
                        < config.tab_bar_width + config.master_width + config.detail_min_width
            })
            .with_tab_bar(|size, traits, _| {
                traits.is_compact() && size.width <= REGULAR_PHONE_WIDTH
            })
    }

    pub fn with_tab_bar<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Size, &Traits, &Configuration) -> bool + Send + Sync + 'static,
    {
        self.tab_bar = Some(Arc::new(predicate));
        self
    }

    pub fn with_master<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Size, &Traits, &Configuration) -> bool + Send + Sync + 'static,
    {
        self.master = Some(Arc::new(predicate));
        self
    }

    pub fn with_detail<F>(mut self, predicate: F) -> Self
    where
        F: Fn(Size, &Traits, &Configuration) -> bool + Send + Sync + 'static,
    {
        self.detail = Some(Arc::new(predicate));
        self
    }

    /// Same predicate instances for every pane
    pub fn same_as(&self, other: &CollapseRules) -> bool {
        fn same(a: &Option<CollapsePredicate>, b: &Option<CollapsePredicate>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(&self.tab_bar, &other.tab_bar)
            && same(&self.master, &other.master)
            && same(&self.detail, &other.detail)
    }
}

impl fmt::Debug for CollapseRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapseRules")
            .field("tab_bar", &self.tab_bar.is_some())
            .field("master", &self.master.is_some())
            .field("detail", &self.detail.is_some())
            .finish()
    }
}
