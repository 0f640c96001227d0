use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, anyhow, bail};
use colored::Colorize;
use common::{
    DiskId, GameMode, GameSession, Leaderboard, MoveOutcome, MoveRejection, Outcome, PegIndex,
    ScoreRecord, ScoreStore, Status, solver,
};

use crate::render::{draw_board, draw_status};

const HELP: &str = "commands: select <disk>, move <peg>, <src> <dst>, undo, redo, hint, reset, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(DiskId),
    Move(PegIndex),
    /// Shorthand for selecting the top disk of the first peg and moving it to
    /// the second one.
    Transfer(PegIndex, PegIndex),
    Undo,
    Redo,
    Hint,
    Reset,
    Quit,
}

fn parse_peg(word: &str) -> anyhow::Result<PegIndex> {
    let idx: u8 = word.parse().with_context(|| format!("{word:?} is not a peg"))?;
    PegIndex::new(idx).ok_or_else(|| anyhow!("there is no peg {idx}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let words: Vec<_> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["select" | "s", id] => {
                let id = id.parse().with_context(|| format!("{id:?} is not a disk"))?;
                Command::Select(DiskId(id))
            }
            ["move" | "m", peg] => Command::Move(parse_peg(peg)?),
            ["undo" | "u"] => Command::Undo,
            ["redo" | "r"] => Command::Redo,
            ["hint" | "h"] => Command::Hint,
            ["reset"] => Command::Reset,
            ["quit" | "q" | "exit"] => Command::Quit,
            [src, dst] => Command::Transfer(parse_peg(src)?, parse_peg(dst)?),
            [] => bail!("empty command"),
            _ => bail!("unknown command {line:?}"),
        };
        Ok(command)
    }
}

/// Move the top disk of `src` onto `dst` the same way a player would, by
/// selecting it first.
pub fn transfer(session: &mut GameSession, src: PegIndex, dst: PegIndex) -> MoveOutcome {
    session.deselect();
    let Some(top) = session.board().top(src).map(|disk| disk.id()) else {
        return MoveOutcome::Denied(MoveRejection::EmptySource(src));
    };
    session.select_disk(top);
    session.move_selected_to(dst)
}

/// Interactive game on a line based terminal.
pub struct Play<R, W, C> {
    input: R,
    output: W,
    /// Whole seconds since the program started.
    clock: C,
    /// Clock value at the start of the current run.
    started_at: u64,
    ticks_delivered: u64,
}

impl<R, W, C> Play<R, W, C>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> u64,
{
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            input,
            output,
            clock,
            started_at: 0,
            ticks_delivered: 0,
        }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).context("cannot read input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn restart_clock(&mut self) {
        self.started_at = (self.clock)();
        self.ticks_delivered = 0;
    }

    /// Hand the seconds that passed since the last command to the session.
    fn catch_up(&mut self, session: &mut GameSession) {
        let seconds = (self.clock)().saturating_sub(self.started_at);
        while self.ticks_delivered < seconds && session.is_active() {
            session.on_tick();
            self.ticks_delivered += 1;
        }
    }

    fn show(&mut self, session: &GameSession) -> anyhow::Result<()> {
        let view = session.view();
        write!(self.output, "{}", draw_board(session.board(), view.selected))?;
        writeln!(self.output, "{}", draw_status(&view))?;
        Ok(())
    }

    /// Run one game to its end, or until the player quits or the input ends.
    pub fn run<S>(&mut self, session: &mut GameSession, store: &mut S) -> anyhow::Result<()>
    where
        S: ScoreStore<Error = anyhow::Error>,
    {
        session.start();
        self.restart_clock();
        writeln!(self.output, "{HELP}")?;
        self.show(session)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                log::info!("input closed, leaving game");
                return Ok(());
            };

            self.catch_up(session);
            if !session.is_active() {
                break;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{}", format!("{err:#}").red())?;
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
            };
            log::debug!("command {command:?}");
            if command == Command::Quit {
                return Ok(());
            }
            self.execute(session, command)?;
            self.show(session)?;

            if session.status().is_finished() {
                break;
            }
        }

        if session.status() == Status::Finished(Outcome::TimedOut) {
            self.show(session)?;
        }
        self.finish(session, store)
    }

    fn execute(&mut self, session: &mut GameSession, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Select(id) => {
                let previous = session.selected();
                session.select_disk(id);
                if session.selected() != Some(id) {
                    if previous == Some(id) {
                        writeln!(self.output, "disk {id} deselected")?;
                    } else if session.board().find(id).is_none() {
                        writeln!(self.output, "there is no disk {id}")?;
                    } else {
                        writeln!(self.output, "disk {id} is not on top of a peg")?;
                    }
                }
            }
            Command::Move(peg) => {
                if session.selected().is_none() {
                    writeln!(self.output, "select a disk first")?;
                    return Ok(());
                }
                self.report(session.move_selected_to(peg))?;
            }
            Command::Transfer(src, dst) => {
                let outcome = transfer(session, src, dst);
                self.report(outcome)?;
            }
            Command::Undo => {
                if !session.can_undo() {
                    writeln!(self.output, "nothing to undo")?;
                }
                session.undo();
            }
            Command::Redo => {
                if !session.can_redo() {
                    writeln!(self.output, "nothing to redo")?;
                }
                session.redo();
            }
            Command::Hint => match solver::next_move(session.board()) {
                Some(mv) => writeln!(
                    self.output,
                    "hint: {mv} ({} moves left)",
                    solver::moves_remaining(session.board())
                )?,
                None => writeln!(self.output, "nothing left to do")?,
            },
            Command::Reset => {
                session.reset();
                session.start();
                self.restart_clock();
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn report(&mut self, outcome: MoveOutcome) -> anyhow::Result<()> {
        match outcome {
            MoveOutcome::Moved(_) | MoveOutcome::Ignored => {}
            MoveOutcome::Deselected => writeln!(self.output, "disk put back")?,
            MoveOutcome::Denied(rejection) => {
                writeln!(self.output, "{}", rejection.to_string().red())?
            }
        }
        Ok(())
    }

    /// Offer to save the score of a solved story game.
    fn finish<S>(&mut self, session: &GameSession, store: &mut S) -> anyhow::Result<()>
    where
        S: ScoreStore<Error = anyhow::Error>,
    {
        let Status::Finished(outcome) = session.status() else {
            return Ok(());
        };
        match outcome {
            Outcome::Solved => writeln!(
                self.output,
                "{} The ritual has been completed in {} moves and {} seconds.",
                "Huzzah!!".green().bold(),
                session.move_count(),
                session.elapsed()
            )?,
            Outcome::TimedOut => writeln!(
                self.output,
                "{} The ritual was left incomplete.",
                "Time Expired!".red().bold()
            )?,
        }
        if outcome != Outcome::Solved || session.mode() != GameMode::Story {
            return Ok(());
        }

        write!(self.output, "enter your name to save the score (empty to skip): ")?;
        self.output.flush()?;
        let name = self.read_line()?.unwrap_or_default();
        if name.is_empty() {
            return Ok(());
        }
        let record = ScoreRecord::from_session(&name, session)?;
        let rank = Leaderboard::load(store)?.rank_of(&record);
        store.append(record.clone())?;
        writeln!(self.output, "saved, {} is ranked {rank}", record.name)?;
        Ok(())
    }
}

/// Print the optimal solution, replaying it on a session.
pub fn solve(disk_count: usize, mut output: impl Write) -> anyhow::Result<()> {
    let mut session = GameSession::new_game(disk_count, None)?;
    session.start();
    write!(output, "{}", draw_board(session.board(), None))?;

    for (nr, mv) in solver::optimal_moves(disk_count).into_iter().enumerate() {
        if let MoveOutcome::Denied(rejection) = transfer(&mut session, mv.src, mv.dst) {
            bail!("solver produced an illegal move {mv}: {rejection}");
        }
        writeln!(output, "\nmove {}: {mv}", nr + 1)?;
        write!(output, "{}", draw_board(session.board(), None))?;
    }
    writeln!(output, "{}", draw_status(&session.view()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io::Cursor, rc::Rc};

    use common::{GameConfig, leaderboard::MemoryStore};

    use super::*;

    /// The [MemoryStore] can't fail, this adapts it to the error type of the
    /// play loop.
    #[derive(Default)]
    struct Store(MemoryStore);

    impl ScoreStore for Store {
        type Error = anyhow::Error;

        fn load(&self) -> anyhow::Result<Vec<ScoreRecord>> {
            Ok(self.0.load()?)
        }
        fn append(&mut self, record: ScoreRecord) -> anyhow::Result<()> {
            Ok(self.0.append(record)?)
        }
    }

    fn peg(idx: u8) -> PegIndex {
        PegIndex::new(idx).unwrap()
    }

    fn run_script(
        session: &mut GameSession,
        script: &str,
        clock: impl FnMut() -> u64,
    ) -> (String, Store) {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let mut store = Store::default();
        Play::new(Cursor::new(script.to_owned()), &mut output, clock)
            .run(session, &mut store)
            .unwrap();
        (String::from_utf8(output).unwrap(), store)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("select 2".parse::<Command>().unwrap(), Command::Select(DiskId(2)));
        assert_eq!("move 1".parse::<Command>().unwrap(), Command::Move(peg(1)));
        assert_eq!(
            " 0   2 ".parse::<Command>().unwrap(),
            Command::Transfer(peg(0), peg(2))
        );
        assert_eq!("undo".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);

        assert!("move 3".parse::<Command>().is_err());
        assert!("select x".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    #[test]
    fn test_transfer_like_a_player() {
        let mut session = GameSession::new_game(3, None).unwrap();
        session.start();
        assert_eq!(
            transfer(&mut session, peg(1), peg(2)),
            MoveOutcome::Denied(MoveRejection::EmptySource(peg(1)))
        );
        assert_eq!(
            transfer(&mut session, peg(0), peg(2)),
            MoveOutcome::Moved(DiskId(2))
        );
        assert!(matches!(
            transfer(&mut session, peg(0), peg(2)),
            MoveOutcome::Denied(MoveRejection::Blocked { .. })
        ));
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_solve_and_save_score() {
        let mut session = GameSession::new(GameConfig::story(3).unwrap());
        let script = "0 2\n0 1\n2 1\n0 2\n1 0\n1 2\n0 2\nAda\n";
        let (output, store) = run_script(&mut session, script, || 0);

        assert_eq!(session.status(), Status::Finished(Outcome::Solved));
        assert_eq!(session.move_count(), 7);
        assert!(output.contains("Huzzah!!"));
        assert!(output.contains("saved, Ada is ranked 1"));
        assert_eq!(
            store.load().unwrap(),
            vec![ScoreRecord::new("Ada", 7, 0).unwrap()]
        );
    }

    struct ReadOnlyStore;

    impl ScoreStore for ReadOnlyStore {
        type Error = anyhow::Error;

        fn load(&self) -> anyhow::Result<Vec<ScoreRecord>> {
            Ok(vec![])
        }
        fn append(&mut self, _: ScoreRecord) -> anyhow::Result<()> {
            bail!("disk full")
        }
    }

    #[test]
    fn test_failed_save_is_not_reported_as_saved() {
        colored::control::set_override(false);
        let mut session = GameSession::new(GameConfig::story(3).unwrap());
        let script = "0 2\n0 1\n2 1\n0 2\n1 0\n1 2\n0 2\nAda\n";
        let mut output = Vec::new();
        let err = Play::new(Cursor::new(script.to_owned()), &mut output, || 0)
            .run(&mut session, &mut ReadOnlyStore)
            .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!String::from_utf8(output).unwrap().contains("saved,"));
    }

    #[test]
    fn test_selection_commands() {
        let mut session = GameSession::new(GameConfig::story(3).unwrap());
        let script = "select 0\nmove 1\nselect 2\nmove 0\nselect 2\nmove 1\nundo\nredo\nredo\nquit\n";
        let (output, _) = run_script(&mut session, script, || 0);

        assert!(output.contains("disk 0 is not on top of a peg"));
        assert!(output.contains("select a disk first"));
        assert!(output.contains("disk put back"));
        assert!(output.contains("nothing to redo"));
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.board().peg(peg(1)).len(), 1);
    }

    #[test]
    fn test_hint_and_reset() {
        let mut session = GameSession::new(GameConfig::story(3).unwrap());
        let (output, _) = run_script(&mut session, "0 1\nhint\nreset\nhint\nquit\n", || 0);

        assert!(output.contains("hint: 1 -> 2 (7 moves left)"));
        assert!(output.contains("hint: 0 -> 2 (7 moves left)"));
        assert_eq!(session.move_count(), 0);
        assert!(session.is_active());
    }

    #[test]
    fn test_time_runs_out_between_commands() {
        let now = Rc::new(Cell::new(0));
        let clock = {
            let now = now.clone();
            move || {
                // every command takes three seconds
                let t = now.get();
                now.set(t + 3);
                t
            }
        };
        let mut session = GameSession::new(GameConfig::timed(3, 5).unwrap());
        let (output, store) = run_script(&mut session, "0 2\n0 1\n2 1\n", clock);

        assert_eq!(session.status(), Status::Finished(Outcome::TimedOut));
        assert_eq!(session.elapsed(), 5);
        assert_eq!(session.countdown(), Some(0));
        assert!(output.contains("Time Expired!"));
        assert!(!output.contains("enter your name"));
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn test_input_closed_mid_game() {
        let mut session = GameSession::new(GameConfig::story(3).unwrap());
        let (_, store) = run_script(&mut session, "0 2\n", || 0);
        assert!(session.is_active());
        assert_eq!(session.move_count(), 1);
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn test_solve_prints_every_move() {
        colored::control::set_override(false);
        let mut output = Vec::new();
        solve(3, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("move 1: 0 -> 2"));
        assert!(output.contains("move 7: 0 -> 2"));
        assert!(!output.contains("move 8"));
        assert!(output.contains("solved!"));
    }
}
