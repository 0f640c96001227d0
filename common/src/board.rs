use serde::Serialize;

use crate::{
    NR_PEGS,
    disk::{Disk, DiskId, generate_disks},
    error::MoveRejection,
    peg::PegIndex,
};

/// The three pegs with their disks, each peg listed from bottom to top.
///
/// Invariant: disk sizes strictly decrease from bottom to top on every peg,
/// and every disk of the tower sits on exactly one peg. Disks only ever
/// leave a peg from the top and are pushed onto the top of another one, so
/// both properties hold by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    pegs: [Vec<Disk>; NR_PEGS],
}

impl Board {
    /// Full tower of `disk_count` disks on the start peg.
    pub fn new(disk_count: usize) -> Self {
        Self {
            pegs: [generate_disks(disk_count), vec![], vec![]],
        }
    }

    /// Build a board from disk ids per peg, bottom to top. The ids refer to
    /// the disks of a tower with `layout.iter().map(len).sum()` disks, so
    /// id 0 is the largest one.
    ///
    /// Returns `None` if the layout doesn't describe a legal board.
    pub fn from_layout(layout: [&[u8]; NR_PEGS]) -> Option<Self> {
        let disk_count = layout.iter().map(|p| p.len()).sum();
        let disks = generate_disks(disk_count);

        let mut pegs: [Vec<Disk>; NR_PEGS] = Default::default();
        for (peg, ids) in PegIndex::all().into_iter().zip(layout) {
            for &id in ids {
                let mut disk = *disks.get(id as usize)?;
                disk.peg = peg;
                pegs[peg.idx()].push(disk);
            }
        }

        let board = Self { pegs };
        board.is_consistent(disk_count).then_some(board)
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    pub fn pegs(&self) -> &[Vec<Disk>; NR_PEGS] {
        &self.pegs
    }

    /// Disks on the given peg, bottom to top.
    pub fn peg(&self, peg: PegIndex) -> &[Disk] {
        &self.pegs[peg.idx()]
    }

    pub fn top(&self, peg: PegIndex) -> Option<&Disk> {
        self.pegs[peg.idx()].last()
    }

    pub fn find(&self, id: DiskId) -> Option<&Disk> {
        self.pegs.iter().flatten().find(|d| d.id() == id)
    }

    /// Is the disk the topmost one of its peg, i.e. is it free to move?
    pub fn is_top(&self, id: DiskId) -> bool {
        self.find(id)
            .and_then(|disk| self.top(disk.peg()))
            .is_some_and(|top| top.id() == id)
    }

    /// Check if the top disk of `src` may be moved onto `dst`.
    pub fn check_move(&self, src: PegIndex, dst: PegIndex) -> Result<&Disk, MoveRejection> {
        if src == dst {
            return Err(MoveRejection::SamePeg(src));
        }
        let Some(disk) = self.top(src) else {
            return Err(MoveRejection::EmptySource(src));
        };
        match self.top(dst) {
            Some(top) if top.size() < disk.size() => Err(MoveRejection::Blocked {
                disk: disk.id(),
                top: top.size(),
                onto: dst,
            }),
            _ => Ok(disk),
        }
    }

    /// Move the top disk of `src` onto `dst`, returning the id of the moved disk.
    pub fn perform_move(&mut self, src: PegIndex, dst: PegIndex) -> Result<DiskId, MoveRejection> {
        self.check_move(src, dst)?;

        let mut disk = self.pegs[src.idx()]
            .pop()
            .ok_or(MoveRejection::EmptySource(src))?;
        disk.peg = dst;
        self.pegs[dst.idx()].push(disk);

        Ok(disk.id())
    }

    /// Are all `disk_count` disks stacked on the goal peg?
    pub fn is_solved(&self, disk_count: usize) -> bool {
        self.peg(PegIndex::GOAL).len() == disk_count
    }

    /// Verify the board invariants against a tower of `disk_count` disks:
    /// every id appears exactly once, the peg recorded in each disk matches
    /// the peg holding it, and sizes strictly decrease upwards.
    pub fn is_consistent(&self, disk_count: usize) -> bool {
        let mut seen = vec![false; disk_count];

        for (peg, disks) in PegIndex::all().into_iter().zip(&self.pegs) {
            if disks.windows(2).any(|w| w[0].size() <= w[1].size()) {
                return false;
            }
            for disk in disks {
                let Some(slot) = seen.get_mut(disk.id().0 as usize) else {
                    return false;
                };
                if *slot || disk.peg() != peg {
                    return false;
                }
                *slot = true;
            }
        }

        seen.into_iter().all(|b| b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::DiskSize;

    fn ids(board: &Board, peg: PegIndex) -> Vec<u8> {
        board.peg(peg).iter().map(|d| d.id().0).collect()
    }

    #[test]
    fn test_initial_tower() {
        let board = Board::new(4);
        assert_eq!(ids(&board, PegIndex::START), vec![0, 1, 2, 3]);
        assert!(board.peg(PegIndex::SPARE).is_empty());
        assert!(board.peg(PegIndex::GOAL).is_empty());
        assert!(board.is_consistent(4));
        assert!(!board.is_solved(4));
    }

    #[test]
    fn test_only_top_disk_is_free() {
        let board = Board::new(3);
        assert!(board.is_top(DiskId(2)));
        assert!(!board.is_top(DiskId(1)));
        assert!(!board.is_top(DiskId(0)));
        assert!(!board.is_top(DiskId(9)));
    }

    #[test]
    fn test_move_onto_empty_and_larger() {
        let mut board = Board::new(3);
        assert_eq!(board.perform_move(PegIndex::START, PegIndex::GOAL), Ok(DiskId(2)));
        assert_eq!(board.perform_move(PegIndex::START, PegIndex::SPARE), Ok(DiskId(1)));
        assert_eq!(board.perform_move(PegIndex::GOAL, PegIndex::SPARE), Ok(DiskId(2)));

        assert_eq!(ids(&board, PegIndex::SPARE), vec![1, 2]);
        assert_eq!(board.find(DiskId(2)).map(|d| d.peg()), Some(PegIndex::SPARE));
        assert!(board.is_consistent(3));
    }

    #[test]
    fn test_rejected_moves_leave_board_untouched() {
        let mut board = Board::new(3);
        board.perform_move(PegIndex::START, PegIndex::GOAL).unwrap();
        let before = board.clone();

        assert_eq!(
            board.perform_move(PegIndex::START, PegIndex::GOAL),
            Err(MoveRejection::Blocked {
                disk: DiskId(1),
                top: DiskSize(20),
                onto: PegIndex::GOAL,
            })
        );
        assert_eq!(
            board.perform_move(PegIndex::SPARE, PegIndex::GOAL),
            Err(MoveRejection::EmptySource(PegIndex::SPARE))
        );
        assert_eq!(
            board.perform_move(PegIndex::GOAL, PegIndex::GOAL),
            Err(MoveRejection::SamePeg(PegIndex::GOAL))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_layout() {
        let board = Board::from_layout([&[0], &[1, 2], &[]]).unwrap();
        assert_eq!(board.disk_count(), 3);
        assert_eq!(ids(&board, PegIndex::SPARE), vec![1, 2]);
        assert!(board.is_consistent(3));

        // larger disk on top of a smaller one
        assert!(Board::from_layout([&[2, 1], &[0], &[]]).is_none());
        // duplicate disk
        assert!(Board::from_layout([&[0], &[0], &[1]]).is_none());
        // unknown disk
        assert!(Board::from_layout([&[0, 5], &[], &[]]).is_none());
    }

    #[test]
    fn test_solved() {
        let board = Board::from_layout([&[], &[], &[0, 1, 2]]).unwrap();
        assert!(board.is_solved(3));
        assert!(!board.is_solved(4));
    }
}
