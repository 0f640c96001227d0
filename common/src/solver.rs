use std::fmt;

use crate::{board::Board, disk::DiskId, peg::PegIndex};

/// Move of the top disk from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub src: PegIndex,
    pub dst: PegIndex,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}

/// Walk the disks from the largest to the smallest, tracking which peg each
/// one has to end up on. A disk that is not on its target peg has to move
/// there eventually, which first requires all smaller disks to be parked on
/// the remaining peg, so that peg becomes the target for the smaller disks.
///
/// The callback receives every misplaced disk as `(current_peg, target_peg,
/// nr_smaller_disks)`.
fn walk_misplaced(board: &Board, mut f: impl FnMut(PegIndex, PegIndex, usize)) {
    let disk_count = board.disk_count();
    let mut target = PegIndex::GOAL;

    for id in 0..disk_count {
        let Some(disk) = board.find(DiskId(id as u8)) else {
            log::warn!("Disk {id} is missing from the board");
            return;
        };

        if disk.peg() != target {
            f(disk.peg(), target, disk_count - id - 1);
            target = disk.peg().third(target);
        }
    }
}

/// First move of the shortest path from `board` to the solved position with
/// every disk on the goal peg. `None` if the board is already solved.
///
/// Precondition: `board` is a legal position
pub fn next_move(board: &Board) -> Option<Move> {
    let mut next = None;
    walk_misplaced(board, |src, dst, _| next = Some(Move { src, dst }));
    next
}

/// Number of moves an optimal player still needs from `board`.
pub fn moves_remaining(board: &Board) -> u64 {
    let mut total = 0;
    walk_misplaced(board, |_, _, smaller| total += 1u64 << smaller);
    total
}

/// The classic `2^n - 1` move solution from the initial tower.
pub fn optimal_moves(disk_count: usize) -> Vec<Move> {
    let mut board = Board::new(disk_count);
    let mut moves = vec![];

    while let Some(mv) = next_move(&board) {
        if let Err(err) = board.perform_move(mv.src, mv.dst) {
            log::warn!("Solver produced an illegal move {mv}: {err}");
            break;
        }
        moves.push(mv);
    }

    moves
}

#[cfg(test)]
mod tests {
    use proptest::{collection::vec, prelude::*};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{MAX_DISKS, MIN_DISKS};

    fn mv(src: u8, dst: u8) -> Move {
        Move {
            src: PegIndex::new(src).unwrap(),
            dst: PegIndex::new(dst).unwrap(),
        }
    }

    #[test]
    fn test_three_disk_solution() {
        let expected = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)];
        let expected: Vec<_> = expected.into_iter().map(|(s, d)| mv(s, d)).collect();
        assert_eq!(optimal_moves(3), expected);
    }

    #[test]
    fn test_solution_lengths() {
        for n in MIN_DISKS..=MAX_DISKS {
            assert_eq!(optimal_moves(n).len(), (1 << n) - 1);
            assert_eq!(moves_remaining(&Board::new(n)), (1 << n) - 1);
        }
    }

    #[test]
    fn test_solved_board_has_no_next_move() {
        let board = Board::from_layout([&[], &[], &[0, 1, 2, 3]]).unwrap();
        assert_eq!(next_move(&board), None);
        assert_eq!(moves_remaining(&board), 0);
    }

    #[test]
    fn test_next_move_from_midgame() {
        // largest disk already home, the rest is stacked on the spare peg
        let board = Board::from_layout([&[], &[1, 2], &[0]]).unwrap();
        assert_eq!(next_move(&board), Some(mv(1, 0)));
        assert_eq!(moves_remaining(&board), 3);
    }

    #[test]
    fn test_random_positions_are_solved_optimally() {
        let mut rng = StdRng::from_seed([5; 32]);
        for _ in 0..200 {
            // scramble with random legal moves
            let n = rng.random_range(MIN_DISKS..=MAX_DISKS);
            let mut board = Board::new(n);
            for _ in 0..rng.random_range(0..100) {
                let src = PegIndex::new(rng.random_range(0..3)).unwrap();
                let dst = PegIndex::new(rng.random_range(0..3)).unwrap();
                let _ = board.perform_move(src, dst);
            }

            let mut remaining = moves_remaining(&board);
            while let Some(m) = next_move(&board) {
                board.perform_move(m.src, m.dst).unwrap();
                assert_eq!(moves_remaining(&board), remaining - 1);
                remaining -= 1;
            }
            assert_eq!(remaining, 0);
            assert!(board.is_solved(n));
        }
    }

    proptest! {
        #[test]
        fn test_hint_reduces_distance_by_one(moves in vec((0u8..3, 0u8..3), 0..60)) {
            let mut board = Board::new(5);
            for (s, d) in moves {
                let _ = board.perform_move(PegIndex::new(s).unwrap(), PegIndex::new(d).unwrap());
            }
            if let Some(m) = next_move(&board) {
                let before = moves_remaining(&board);
                prop_assert!(board.perform_move(m.src, m.dst).is_ok());
                prop_assert_eq!(moves_remaining(&board), before - 1);
            }
        }
    }
}
