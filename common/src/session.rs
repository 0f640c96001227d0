use serde::Serialize;

use crate::{
    board::Board,
    clock::{SessionClock, TickOutcome},
    config::{GameConfig, GameMode},
    disk::{Disk, DiskId},
    error::{ConfigError, MoveRejection},
    history::History,
    peg::PegIndex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// All disks made it onto the goal peg.
    Solved,
    /// The countdown ran out first.
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    NotStarted,
    Active,
    Finished(Outcome),
}

impl Status {
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Finished(_))
    }
}

/// Identifies one run of a session. It changes whenever the session is
/// started or reset, which lets a tick scheduled for an earlier run be told
/// apart from a tick for the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Epoch(u32);

/// Everything the player can do to a session. See [GameSession::apply].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    SelectDisk { id: DiskId },
    Deselect,
    MoveSelectedTo { peg: PegIndex },
    Undo,
    Redo,
    Tick { epoch: Epoch },
    Reset,
}

/// Result of [GameSession::move_selected_to].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(DiskId),
    /// The selected disk was sent to the peg it is already on.
    Deselected,
    /// The move breaks the stacking rule. The selection is dropped.
    Denied(MoveRejection),
    /// Nothing selected or the game is not running.
    Ignored,
}

/// A single game of Towers of Hanoi.
///
/// All player input funnels through here. Inputs that make no sense in the
/// current state are ignored rather than reported, a click on a buried disk
/// is not an error from the player's perspective.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    history: History,
    selection: Option<DiskId>,
    move_count: u32,
    clock: SessionClock,
    status: Status,
    epoch: Epoch,
}

impl GameSession {
    /// Prepare a session for the given configuration. The game only starts
    /// running after [GameSession::start].
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.disk_count()),
            history: History::new(),
            selection: None,
            move_count: 0,
            clock: SessionClock::new(config.time_limit()),
            status: Status::NotStarted,
            epoch: Epoch::default(),
        }
    }

    pub fn new_game(disk_count: usize, time_limit: Option<u32>) -> Result<Self, ConfigError> {
        Ok(Self::new(GameConfig::new(disk_count, time_limit)?))
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }
    pub fn mode(&self) -> GameMode {
        self.config.mode()
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    pub fn elapsed(&self) -> u32 {
        self.clock.elapsed()
    }
    pub fn countdown(&self) -> Option<u32> {
        self.clock.remaining()
    }
    pub fn selected(&self) -> Option<DiskId> {
        self.selection
    }
    pub fn selected_disk(&self) -> Option<&Disk> {
        self.board.find(self.selection?)
    }
    pub fn can_undo(&self) -> bool {
        self.is_active() && self.history.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.is_active() && self.history.can_redo()
    }

    /// Reducer entry point, dispatching an [Action] to the matching method.
    pub fn apply(&mut self, action: Action) {
        log::debug!("Applying action {action:?}");

        match action {
            Action::Start => self.start(),
            Action::SelectDisk { id } => self.select_disk(id),
            Action::Deselect => self.deselect(),
            Action::MoveSelectedTo { peg } => {
                self.move_selected_to(peg);
            }
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Tick { epoch } => {
                self.tick(epoch);
            }
            Action::Reset => self.reset(),
        }
    }

    pub fn start(&mut self) {
        if self.status != Status::NotStarted {
            return;
        }
        log::info!(
            "Starting {:?} game with {} disks",
            self.mode(),
            self.config.disk_count()
        );
        *self = Self {
            status: Status::Active,
            epoch: Epoch(self.epoch.0.wrapping_add(1)),
            ..Self::new(self.config)
        };
    }

    /// Throw the current game away and go back to the not started state,
    /// keeping the configuration. Ticks issued for the old run become stale.
    pub fn reset(&mut self) {
        log::info!("Resetting game");
        *self = Self {
            epoch: Epoch(self.epoch.0.wrapping_add(1)),
            ..Self::new(self.config)
        };
    }

    pub fn select_disk(&mut self, id: DiskId) {
        if !self.is_active() {
            return;
        }
        if self.selection == Some(id) {
            // Same disk is clicked again, deselecting it.
            self.selection = None;
        } else if self.board.is_top(id) {
            self.selection = Some(id);
        }
    }

    pub fn deselect(&mut self) {
        if self.is_active() {
            self.selection = None;
        }
    }

    /// Move the selected disk onto `dst`. Whatever the outcome, the selection
    /// is gone afterwards.
    pub fn move_selected_to(&mut self, dst: PegIndex) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Ignored;
        }
        let Some(id) = self.selection.take() else {
            return MoveOutcome::Ignored;
        };
        let Some(src) = self.board.find(id).map(Disk::peg) else {
            log::warn!("Selected disk {id} is not on the board!");
            return MoveOutcome::Ignored;
        };
        if src == dst {
            return MoveOutcome::Deselected;
        }

        let before = self.board.clone();
        match self.board.perform_move(src, dst) {
            Ok(moved) => {
                if moved != id {
                    log::warn!("Moved disk {moved} although disk {id} was selected");
                }
                self.history.record(before);
                self.move_count += 1;
                self.check_victory();
                MoveOutcome::Moved(moved)
            }
            Err(rejection) => {
                log::debug!("Move denied: {rejection}");
                MoveOutcome::Denied(rejection)
            }
        }
    }

    pub fn undo(&mut self) {
        if !self.is_active() {
            return;
        }
        let Some(previous) = self.history.undo(&self.board) else {
            // nothing to undo
            return;
        };
        self.board = previous;
        self.move_count = self.move_count.saturating_sub(1);
        self.selection = None;
        self.check_victory();
    }

    pub fn redo(&mut self) {
        if !self.is_active() {
            return;
        }
        let Some(next) = self.history.redo(&self.board) else {
            // nothing to redo
            return;
        };
        self.board = next;
        self.move_count += 1;
        self.selection = None;
        self.check_victory();
    }

    /// Advance the clock of the current run by one second.
    pub fn on_tick(&mut self) {
        self.tick(self.epoch);
    }

    /// Advance the clock by one second, if the tick belongs to the current run
    /// and the game is still going. Returns whether the tick was applied.
    pub fn tick(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch || !self.is_active() {
            log::debug!("Ignoring stale tick for {epoch:?}");
            return false;
        }

        if self.clock.tick() == TickOutcome::Expired {
            log::info!("Time is up after {} moves", self.move_count);
            self.finish(Outcome::TimedOut);
        }
        true
    }

    fn check_victory(&mut self) {
        if !self.board.is_consistent(self.config.disk_count()) {
            log::warn!("Board invariants violated: {:?}", self.board);
        }
        if self.board.is_solved(self.config.disk_count()) {
            log::info!(
                "Solved in {} moves and {}s",
                self.move_count,
                self.clock.elapsed()
            );
            self.finish(Outcome::Solved);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = Status::Finished(outcome);
        self.selection = None;
    }

    /// Snapshot of everything a renderer needs to draw the current state.
    pub fn view(&self) -> SessionView {
        SessionView {
            pegs: self.board.pegs().clone(),
            selected: self.selection,
            move_count: self.move_count,
            elapsed_seconds: self.clock.elapsed(),
            countdown: self.clock.remaining(),
            status: self.status,
            mode: self.mode(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

/// Read model handed to the user interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub pegs: [Vec<Disk>; crate::NR_PEGS],
    pub selected: Option<DiskId>,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub countdown: Option<u32>,
    pub status: Status,
    pub mode: GameMode,
    pub can_undo: bool,
    pub can_redo: bool,
}
