//! Tab List
//!
//! Ordered items with at most one selected. Mutations re-index the selection
//! so the same item stays selected, but the published index only moves on
//! the next [`TabList::settle`] tick, after the owner has reloaded the list.

use crate::item::TabItem;

/// Handler invoked with the newly selected item and its index
pub type SelectionHandler<T> = Box<dyn FnMut(&TabItem<T>, usize) + Send>;

/// Outcome of a selection change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected(usize),
    Cleared,
}

pub struct TabList<T> {
    items: Vec<TabItem<T>>,
    /// Index visible to consumers
    selected: Option<usize>,
    /// Index of the logically selected item, updated on every mutation
    projected: Option<usize>,
    /// The selected item was removed; the next settle announces the replacement
    reselect: bool,
    pending: bool,
    revision: u64,
    handler: Option<SelectionHandler<T>>,
}

impl<T> TabList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            projected: None,
            reselect: false,
            pending: false,
            revision: 0,
            handler: None,
        }
    }

    pub fn with_items(items: Vec<TabItem<T>>) -> Self {
        let mut list = Self::new();
        list.items = items;
        list
    }

    pub fn set_selection_handler(&mut self, handler: SelectionHandler<T>) {
        self.handler = Some(handler);
    }

    pub fn items(&self) -> &[TabItem<T>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TabItem<T>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected index; `None` when nothing is selected
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&TabItem<T>> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Bumped whenever the visual list needs a reload
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True while a re-index is waiting for the next tick
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn append(&mut self, item: TabItem<T>) {
        self.items.push(item);
        self.revision += 1;
    }

    /// Insert an item; `at` may equal the length. Returns false when out of range.
    pub fn insert(&mut self, item: TabItem<T>, at: usize) -> bool {
        if at > self.items.len() {
            tracing::debug!(index = at, len = self.items.len(), "Ignoring out-of-range insert");
            return false;
        }

        self.items.insert(at, item);
        if let Some(selected) = self.projected {
            if at <= selected {
                self.projected = Some(selected + 1);
                self.pending = true;
            }
        }
        self.revision += 1;
        true
    }

    /// Remove the item at `at`. Returns `None` when out of range.
    pub fn remove(&mut self, at: usize) -> Option<TabItem<T>> {
        if at >= self.items.len() {
            tracing::debug!(index = at, len = self.items.len(), "Ignoring out-of-range remove");
            return None;
        }

        let item = self.items.remove(at);
        match self.projected {
            Some(selected) if selected == at => {
                self.projected = if self.items.is_empty() { None } else { Some(0) };
                self.reselect = true;
                self.pending = true;
            }
            Some(selected) if at < selected => {
                self.projected = Some(selected - 1);
                self.pending = true;
            }
            _ => {}
        }
        self.revision += 1;
        Some(item)
    }

    /// Select an item. Out-of-range indices clear the selection instead.
    pub fn select(&mut self, index: usize) -> Selection {
        self.reselect = false;
        self.revision += 1;

        if index >= self.items.len() {
            self.selected = None;
            self.projected = None;
            return Selection::Cleared;
        }

        self.selected = Some(index);
        self.projected = Some(index);
        self.notify(index);
        Selection::Selected(index)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.projected = None;
        self.reselect = false;
        self.revision += 1;
    }

    /// Apply deferred re-indexing.
    ///
    /// Returns a selection change only when the selected item itself was
    /// removed; plain shifts keep the same item selected and report nothing.
    pub fn settle(&mut self) -> Option<Selection> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.selected = self.projected;
        self.revision += 1;

        if !std::mem::take(&mut self.reselect) {
            return None;
        }

        match self.selected {
            Some(index) => {
                self.notify(index);
                Some(Selection::Selected(index))
            }
            None => Some(Selection::Cleared),
        }
    }

    fn notify(&mut self, index: usize) {
        if let (Some(handler), Some(item)) = (self.handler.as_mut(), self.items.get(index)) {
            handler(item, index);
        }
    }
}

impl<T> Default for TabList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TabList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabList")
            .field("len", &self.items.len())
            .field("selected", &self.selected)
            .field("pending", &self.pending)
            .field("revision", &self.revision)
            .finish()
    }
}
