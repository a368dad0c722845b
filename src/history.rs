//! Bounded undo/redo stacks of serialized grid snapshots

use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::constants::history::{DEFAULT_LIMIT, MAX_LIMIT};

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<String>,
    redo: VecDeque<String>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl History {
    /// Create with a capacity, clamped to `1..=MAX_LIMIT`
    pub fn new(limit: usize) -> Self {
        let clamped = limit.clamp(1, MAX_LIMIT);
        if clamped != limit {
            warn!(requested = limit, using = clamped, "History limit out of range");
        }
        Self {
            undo: VecDeque::with_capacity(clamped),
            redo: VecDeque::new(),
            limit: clamped,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Record the state before a user action. A snapshot identical to the
    /// top of the stack is skipped; any push clears the redo stack.
    pub fn push(&mut self, snapshot: String) {
        if self.undo.back() == Some(&snapshot) {
            debug!("Skipped duplicate history snapshot");
            return;
        }
        push_bounded(&mut self.undo, snapshot, self.limit);
        self.redo.clear();
    }

    /// Swap `current` onto the redo stack and return the previous state
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo.pop_back()?;
        push_bounded(&mut self.redo, current, self.limit);
        Some(previous)
    }

    /// Swap `current` onto the undo stack and return the next state
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo.pop_back()?;
        push_bounded(&mut self.undo, current, self.limit);
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<String>, snapshot: String, limit: usize) {
    stack.push_back(snapshot);
    while stack.len() > limit {
        stack.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_push_is_elided() {
        let mut history = History::default();
        history.push("a".to_string());
        history.push("a".to_string());
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(3);
        for state in ["s1", "s2", "s3", "s4"] {
            history.push(state.to_string());
        }
        assert_eq!(history.undo_len(), 3);

        let mut current = "s5".to_string();
        let mut seen = Vec::new();
        while let Some(previous) = history.undo(current.clone()) {
            seen.push(previous.clone());
            current = previous;
        }
        assert_eq!(seen, vec!["s4", "s3", "s2"]);
    }

    #[test]
    fn test_undo_then_redo_restores() {
        let mut history = History::default();
        history.push("before".to_string());
        let restored = history.undo("after".to_string());
        assert_eq!(restored.as_deref(), Some("before"));
        assert!(history.can_redo());

        let again = history.redo("before".to_string());
        assert_eq!(again.as_deref(), Some("after"));
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_new_action_clears_redo() {
        let mut history = History::default();
        history.push("one".to_string());
        history.undo("two".to_string());
        assert!(history.can_redo());
        history.push("three".to_string());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_stacks_return_none() {
        let mut history = History::default();
        assert_eq!(history.undo("x".to_string()), None);
        assert_eq!(history.redo("x".to_string()), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(History::new(0).limit(), 1);
        assert_eq!(History::new(500).limit(), MAX_LIMIT);
    }
}
