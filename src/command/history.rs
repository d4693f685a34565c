use crate::document::Document;
use std::collections::VecDeque;

/// Linear undo/redo over full document snapshots.
///
/// `past` runs oldest to newest; `future` keeps the next redo at the front.
/// Any new snapshot invalidates `future`.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Document>,
    future: VecDeque<Document>,
    /// Oldest snapshots are dropped beyond this many. `None` keeps everything.
    limit: Option<usize>,
}

impl History {
    /// Creates a new empty, unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// A limit of zero means unbounded.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.filter(|&n| n > 0),
            ..Self::default()
        }
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.filter(|&n| n > 0);
        self.enforce_limit();
    }

    /// Records `current` as the state to return to on the next undo.
    pub fn push_snapshot(&mut self, current: &Document) {
        self.past.push(current.snapshot());
        self.future.clear();
        self.enforce_limit();
        log::debug!("history: pushed snapshot ({} undo steps)", self.past.len());
    }

    /// Steps back. Returns the document to make current, or `None` when there
    /// is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Option<Document> {
        let previous = self.past.pop()?;
        self.future.push_front(current.snapshot());
        log::debug!("history: undo ({} left, {} redoable)", self.past.len(), self.future.len());
        Some(previous)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: &Document) -> Option<Document> {
        let next = self.future.pop_front()?;
        self.past.push(current.snapshot());
        self.enforce_limit();
        log::debug!("history: redo ({} undoable, {} left)", self.past.len(), self.future.len());
        Some(next)
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn painted(x: i32) -> Document {
        let mut doc = Document::new(4, 1);
        doc.grid.set(x, 0, Some(Rgba::WHITE));
        doc
    }

    #[test]
    fn empty_history_is_noop() {
        let mut history = History::new();
        let doc = Document::new(2, 2);
        assert!(history.undo(&doc).is_none());
        assert!(history.redo(&doc).is_none());
    }

    #[test]
    fn undo_then_redo_restores() {
        let mut history = History::new();
        let before = Document::new(4, 1);
        history.push_snapshot(&before);
        let after = painted(0);

        let undone = history.undo(&after).unwrap();
        assert_eq!(undone, before);
        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone, after);
    }

    #[test]
    fn push_clears_future() {
        let mut history = History::new();
        history.push_snapshot(&Document::new(4, 1));
        let undone = history.undo(&painted(1)).unwrap();
        assert!(history.can_redo());
        history.push_snapshot(&undone);
        assert!(!history.can_redo());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = History::with_limit(Some(2));
        for x in 0..4 {
            history.push_snapshot(&painted(x));
        }
        assert_eq!(history.undo_depth(), 2);
        let current = painted(3);
        assert_eq!(history.undo(&current).unwrap(), painted(3));
        assert_eq!(history.undo(&painted(3)).unwrap(), painted(2));
        assert!(history.undo(&painted(2)).is_none());
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let mut history = History::with_limit(Some(0));
        history.push_snapshot(&painted(0));
        history.set_limit(Some(0));
        history.push_snapshot(&painted(1));
        assert_eq!(history.undo_depth(), 2);
        assert!(history.can_undo());
    }
}
