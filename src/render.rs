use colored::{ColoredString, Colorize};
use common::{Board, Disk, DiskId, Outcome, PegIndex, SessionView, Status};

/// Countdown values below this are highlighted.
const LOW_TIME: u32 = 10;

fn paint(text: String, disk: &Disk, selected: Option<DiskId>) -> ColoredString {
    if selected == Some(disk.id()) {
        return text.black().on_yellow();
    }
    match disk.id().0 % 4 {
        0 => text.red(),
        1 => text.green(),
        2 => text.blue(),
        _ => text.magenta(),
    }
}

/// Draw the pegs side by side, top of the towers first. Every disk is drawn
/// with its id in the middle so it can be selected by that id.
pub fn draw_board(board: &Board, selected: Option<DiskId>) -> String {
    let disk_count = board.disk_count();
    // the largest disk spans 2 * disk_count + 1 columns
    let field = 2 * disk_count + 3;
    let mut out = String::new();

    for level in (0..disk_count.max(1)).rev() {
        for peg in PegIndex::all() {
            let cell = match board.peg(peg).get(level) {
                Some(disk) => {
                    let half = disk_count - disk.id().0 as usize;
                    let text = format!("{}{}{}", "=".repeat(half), disk.id(), "=".repeat(half));
                    // pad outside the colored text, escape codes have no width
                    let left = (field - text.len()) / 2;
                    let right = field - text.len() - left;
                    format!("{}{}{}", " ".repeat(left), paint(text, disk, selected), " ".repeat(right))
                }
                None => format!("{:^field$}", "|"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str(&"-".repeat(field * PegIndex::all().len()));
    out.push('\n');
    for peg in PegIndex::all() {
        out.push_str(&format!("{:^field$}", peg.to_string()));
    }
    out.push('\n');
    out
}

/// One line summary of the clocks and the move counter.
pub fn draw_status(view: &SessionView) -> String {
    let mut line = format!("moves: {}  time: {}s", view.move_count, view.elapsed_seconds);
    if let Some(left) = view.countdown {
        let text = format!("{left}s left");
        line.push_str("  ");
        if left < LOW_TIME {
            line.push_str(&text.red().to_string());
        } else {
            line.push_str(&text);
        }
    }
    match view.status {
        Status::Finished(Outcome::Solved) => line.push_str(&format!("  {}", "solved!".green().bold())),
        Status::Finished(Outcome::TimedOut) => line.push_str(&format!("  {}", "time expired".red().bold())),
        Status::NotStarted | Status::Active => {}
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_draw_start_position() {
        plain();
        let board = Board::new(3);
        let expected = concat!(
            "   =2=       |        |    \n",
            "  ==1==      |        |    \n",
            " ===0===     |        |    \n",
            "---------------------------\n",
            "    0        1        2    \n",
        );
        assert_eq!(draw_board(&board, None), expected);
    }

    #[test]
    fn test_draw_moved_disk() {
        plain();
        let mut board = Board::new(3);
        board.perform_move(PegIndex::START, PegIndex::GOAL).unwrap();
        let drawing = draw_board(&board, Some(DiskId(2)));
        let lines: Vec<_> = drawing.lines().collect();
        assert_eq!(lines[0], "    |        |        |    ");
        assert_eq!(lines[2], " ===0===     |       =2=   ");
    }

    #[test]
    fn test_status_line() {
        plain();
        let mut session = common::GameSession::new_game(3, Some(60)).unwrap();
        session.start();
        assert_eq!(draw_status(&session.view()), "moves: 0  time: 0s  60s left");
    }
}
