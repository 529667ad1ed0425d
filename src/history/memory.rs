//! In-memory history stack.

use crate::history::{normalize_base, History};

/// History kept in process memory. Starts at `/`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            entries: vec!["/".to_string()],
            position: 0,
        }
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> &str {
        &self.entries[self.position]
    }

    fn push(&mut self, location: String) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position = self.entries.len() - 1;
    }

    fn replace(&mut self, location: String) {
        self.entries[self.position] = location;
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.position.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() => {
                self.position = target;
                true
            }
            _ => false,
        }
    }
}
