//! In-process location history
//!
//! Plays the role a browser's session history plays for a web client:
//! a list of visited locations with a cursor that back/forward move.

/// Visited locations with a cursor on the current one
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The current location
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Visit a new location, discarding anything ahead of the cursor.
    /// Returns false when the location is already current.
    pub fn push(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
        true
    }

    /// Swap the current location in place (used for redirects)
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of stored locations
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_forward() {
        let mut history = History::new("/dashboard");
        assert!(history.push("/tips"));
        assert!(history.push("/mana"));
        assert_eq!(history.current(), "/mana");

        assert_eq!(history.back(), Some("/tips"));
        assert_eq!(history.back(), Some("/dashboard"));
        assert_eq!(history.back(), None);

        assert_eq!(history.forward(), Some("/tips"));
        assert!(history.can_go_forward());
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = History::new("/dashboard");
        history.push("/tips");
        history.push("/mana");
        history.back();
        history.push("/chat");

        assert_eq!(history.len(), 3);
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("/tips"));
    }

    #[test]
    fn pushing_current_location_is_a_no_op() {
        let mut history = History::new("/dashboard");
        assert!(!history.push("/dashboard"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn replace_keeps_depth() {
        let mut history = History::new("/dashboard");
        history.push("/nowhere");
        history.replace("/dashboard");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), "/dashboard");
        assert!(history.can_go_back());
    }
}
