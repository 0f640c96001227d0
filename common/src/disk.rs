use std::fmt;

use serde::Serialize;

use crate::{MAX_DISKS, peg::PegIndex};

/// Disk radii in tenths of a world unit, largest first. Towers of up to four
/// disks use the slimmer table, taller towers get wider disks so the top ones
/// remain clickable.
const SLIM_SIZES: [u16; MAX_DISKS] = [30, 25, 20, 15, 10, 8, 6];
const WIDE_SIZES: [u16; MAX_DISKS] = [40, 35, 30, 25, 20, 15, 10];
const WIDE_FROM: usize = 5;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Serialize)]
pub struct DiskId(pub u8);

impl fmt::Display for DiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Radius of a disk, in tenths of a world unit.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Serialize)]
pub struct DiskSize(pub u16);

impl DiskSize {
    pub fn as_units(self) -> f32 {
        self.0 as f32 / 10.0
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub struct Disk {
    id: DiskId,
    size: DiskSize,
    /// Peg currently holding the disk. Kept in sync by [crate::board::Board].
    pub(crate) peg: PegIndex,
}

impl Disk {
    pub fn id(&self) -> DiskId {
        self.id
    }
    pub fn size(&self) -> DiskSize {
        self.size
    }
    pub fn peg(&self) -> PegIndex {
        self.peg
    }
}

/// Create the disks for a new tower, ordered from the largest to the smallest.
/// Disk ids count up from 0 along the same order.
///
/// Precondition: `count <= MAX_DISKS`
pub fn generate_disks(count: usize) -> Vec<Disk> {
    let table = if count >= WIDE_FROM {
        &WIDE_SIZES
    } else {
        &SLIM_SIZES
    };

    table[..count]
        .iter()
        .enumerate()
        .map(|(i, &size)| Disk {
            id: DiskId(i as u8),
            size: DiskSize(size),
            peg: PegIndex::START,
        })
        .collect()
}
