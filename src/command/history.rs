use serde::{Deserialize, Serialize};

use crate::template::Template;

/// Snapshot-based undo/redo over whole template values.
///
/// Stacks are unbounded; a snapshot is an owned immutable value and is never
/// touched again after being pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    past: Vec<Template>,
    future: Vec<Template>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation snapshot. New edits invalidate redo history.
    pub fn push(&mut self, snapshot: Template) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Swap the current template for the most recent past snapshot.
    /// Hands the current value back unchanged when there is nothing to undo.
    pub fn undo(&mut self, current: Template) -> Template {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(current);
                previous
            }
            None => current,
        }
    }

    pub fn redo(&mut self, current: Template) -> Template {
        match self.future.pop() {
            Some(next) => {
                self.past.push(current);
                next
            }
            None => current,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateKind;

    fn named(name: &str) -> Template {
        Template::new(name, TemplateKind::Invitation)
    }

    #[test]
    fn push_clears_redo() {
        let mut history = History::new();
        history.push(named("a"));
        let current = history.undo(named("b"));
        assert_eq!(current.name, "a");
        assert!(history.can_redo());

        history.push(current.clone());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_on_empty_returns_current() {
        let mut history = History::new();
        let current = history.undo(named("only"));
        assert_eq!(current.name, "only");
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut history = History::new();
        history.push(named("v1"));
        let v1 = history.undo(named("v2"));
        assert_eq!(v1.name, "v1");
        let v2 = history.redo(v1);
        assert_eq!(v2.name, "v2");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }
}
