use std::rc::Rc;

use common::{
    DEFAULT_TIME_LIMIT, DiskId, Epoch, GameConfig, GameMode, GameSession, MAX_DISKS, MAX_TIME_LIMIT,
    MIN_DISKS, MIN_TIME_LIMIT, MoveOutcome, PegIndex, TIME_LIMIT_STEP,
};
use yew::Reducible;

#[derive(Debug, Clone, Copy)]
pub enum GameAction {
    SetMode { mode: GameMode },
    SetDiskCount { count: usize },
    SetTimeLimit { seconds: u32 },
    Start,
    ClickDisk { id: DiskId },
    ClickPeg { peg: PegIndex },
    Undo,
    Redo,
    Tick { epoch: Epoch },
    /// Abandon the current game and go back to the setup panel.
    Retry,
}

/// Game State as seen from the user interface. The interaction with this state
/// happens through [GameAction]s that are sent to Yew's
/// [`use_reducer`](https://docs.rs/yew/0.21.0/yew/functional/fn.use_reducer.html)
#[derive(Debug, Clone)]
pub struct GameState {
    pub session: GameSession,
    /// Setup panel values. They only take effect when a game is started.
    pub mode: GameMode,
    pub disk_count: usize,
    pub time_limit: u32,
    /// Set when the last click tried to put a disk onto a smaller one.
    pub move_denied: bool,
}

impl GameState {
    pub fn new() -> GameState {
        Self {
            session: GameSession::new(GameConfig::default()),
            mode: GameMode::Story,
            disk_count: common::DEFAULT_DISKS,
            time_limit: DEFAULT_TIME_LIMIT,
            move_denied: false,
        }
    }

    fn config(&self) -> Result<GameConfig, common::ConfigError> {
        match self.mode {
            GameMode::Story => GameConfig::story(self.disk_count),
            GameMode::Timed => GameConfig::timed(self.disk_count, self.time_limit),
        }
    }

    pub fn is_setting_up(&self) -> bool {
        self.session.status() == common::Status::NotStarted
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Reducing with action {action:?}");

        match action {
            GameAction::SetMode { mode } => {
                if !self.is_setting_up() || mode == self.mode {
                    return self;
                }
                let mut state = (*self).clone();
                state.mode = mode;
                state.into()
            }
            GameAction::SetDiskCount { count } => {
                if !self.is_setting_up() {
                    return self;
                }
                let mut state = (*self).clone();
                state.disk_count = count.clamp(MIN_DISKS, MAX_DISKS);
                state.into()
            }
            GameAction::SetTimeLimit { seconds } => {
                if !self.is_setting_up() {
                    return self;
                }
                let mut state = (*self).clone();
                let seconds = seconds.clamp(MIN_TIME_LIMIT, MAX_TIME_LIMIT);
                state.time_limit = seconds - seconds % TIME_LIMIT_STEP;
                state.into()
            }
            GameAction::Start => {
                if !self.is_setting_up() {
                    return self;
                }
                let config = match self.config() {
                    Ok(config) => config,
                    Err(err) => {
                        log::error!("Cannot start game: {err}");
                        return self;
                    }
                };
                let mut state = (*self).clone();
                state.session = GameSession::new(config);
                state.session.start();
                state.move_denied = false;
                state.into()
            }
            GameAction::ClickDisk { id } => {
                if !self.session.is_active() {
                    return self;
                }
                let mut state = (*self).clone();
                state.session.select_disk(id);
                state.move_denied = false;
                state.into()
            }
            GameAction::ClickPeg { peg } => {
                if self.session.selected().is_none() {
                    return self;
                }
                let mut state = (*self).clone();
                let outcome = state.session.move_selected_to(peg);
                state.move_denied = matches!(outcome, MoveOutcome::Denied(_));
                state.into()
            }
            GameAction::Undo => {
                if !self.session.can_undo() {
                    // nothing to undo
                    return self;
                }
                let mut state = (*self).clone();
                state.session.undo();
                state.move_denied = false;
                state.into()
            }
            GameAction::Redo => {
                if !self.session.can_redo() {
                    // nothing to redo
                    return self;
                }
                let mut state = (*self).clone();
                state.session.redo();
                state.move_denied = false;
                state.into()
            }
            GameAction::Tick { epoch } => {
                // An interval from a previous game may still fire once before
                // it is dropped.
                if epoch != self.session.epoch() || !self.session.is_active() {
                    return self;
                }
                let mut state = (*self).clone();
                state.session.tick(epoch);
                state.into()
            }
            GameAction::Retry => {
                let mut state = (*self).clone();
                state.session.reset();
                state.move_denied = false;
                state.into()
            }
        }
    }
}
