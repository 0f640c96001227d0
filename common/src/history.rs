use crate::board::Board;

/// Undo and redo stacks of full board snapshots.
///
/// Boards hold at most a handful of disks, so storing whole snapshots is
/// cheaper to reason about than replaying moves backwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    past: Vec<Board>,
    future: Vec<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the board as it was before a fresh move. A new move makes
    /// everything that was undone unreachable, so the redo stack is dropped.
    pub fn record(&mut self, before: Board) {
        self.past.push(before);
        self.future.clear();
    }

    /// Step back, returning the board that should become current. `current`
    /// is kept for a later redo.
    pub fn undo(&mut self, current: &Board) -> Option<Board> {
        let previous = self.past.pop()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &Board) -> Option<Board> {
        let next = self.future.pop()?;
        self.past.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
