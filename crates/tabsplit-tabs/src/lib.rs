//! Tabsplit Tab Lists
//!
//! Tab bar items and the ordered, single-selection list that holds them.
//! Main tabs carry a navigable content reference, action-bar items carry a
//! zero-argument closure.

mod item;
mod list;

pub use item::{Icon, TabAction, TabItem};
pub use list::{Selection, SelectionHandler, TabList};
