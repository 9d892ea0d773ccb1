//! Window size and trait context

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Device family of the hosting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    #[default]
    Unspecified,
    Phone,
    Pad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[default]
    Unspecified,
    Compact,
    Regular,
}

/// Trait context announced by the environment alongside size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Traits {
    pub idiom: Idiom,
    pub horizontal_size_class: SizeClass,
}

impl Traits {
    pub fn new(idiom: Idiom, horizontal_size_class: SizeClass) -> Self {
        Self {
            idiom,
            horizontal_size_class,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.horizontal_size_class == SizeClass::Compact
    }
}
