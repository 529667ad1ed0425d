//! Navigation history.
//!
//! # Data Flow
//! ```text
//! Navigator.push / replace
//!     → History (stack of base-relative full paths)
//! Navigator.back / forward
//!     → History.go(±1)
//!     → restored location re-resolved against the route table
//! ```
//!
//! # Design Decisions
//! - Entries are stored relative to the base; hrefs add it back
//! - The stack is in-process only; nothing is persisted
//! - Moving past either end is a no-op, not an error

pub mod memory;

pub use memory::MemoryHistory;

/// Location stack with a cursor, rooted at a base path.
pub trait History {
    /// Normalized base: empty for the root, otherwise `/prefix` without a trailing `/`.
    fn base(&self) -> &str;

    /// Current base-relative location (path, query and hash).
    fn location(&self) -> &str;

    /// Add a location after the current one, discarding forward entries.
    fn push(&mut self, location: String);

    /// Overwrite the current location.
    fn replace(&mut self, location: String);

    /// Move the cursor by `delta`. Returns false (and stays put) when out of range.
    fn go(&mut self, delta: isize) -> bool;

    fn back(&mut self) -> bool {
        self.go(-1)
    }

    fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Href for a base-relative location.
    fn create_href(&self, location: &str) -> String {
        format!("{}{}", self.base(), location)
    }

    /// Base-relative location for an href, or `None` when it lies outside the base.
    fn strip_base(&self, href: &str) -> Option<String> {
        let rest = href.strip_prefix(self.base())?;
        if rest.is_empty() {
            return Some("/".to_string());
        }
        if rest.starts_with('/') {
            Some(rest.to_string())
        } else if rest.starts_with('?') || rest.starts_with('#') {
            Some(format!("/{rest}"))
        } else {
            None
        }
    }
}

/// Normalize a configured base: `"/"` → `""`, `"/cookbook/"` → `"/cookbook"`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
