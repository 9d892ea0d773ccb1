//! Opaque displayable content

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to host-owned content; equality is identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHandle {
    id: Uuid,
    name: String,
}

impl ContentHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for ContentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_compare_by_identity() {
        let a = ContentHandle::new("Inbox");
        let b = ContentHandle::new("Inbox");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
