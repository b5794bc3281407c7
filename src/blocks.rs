//! Block kinds and the placeable-block inventory.
//!
//! Level files name the kinds by letter: `A` reflects, `B` absorbs and
//! `C` splits the beam.

use crate::error::{Error, Result};

/// Behavioural category of an optical block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Mirrors the beam off the face it strikes.
    Reflect,
    /// Absorbs the beam.
    Opaque,
    /// Lets the beam through and also reflects a copy of it.
    Refract,
}

impl BlockKind {
    /// Every kind, in the order the search tries them.
    pub const ALL: [BlockKind; 3] = [BlockKind::Reflect, BlockKind::Opaque, BlockKind::Refract];

    /// Level-file letter for this kind.
    pub const fn symbol(self) -> char {
        match self {
            BlockKind::Reflect => 'A',
            BlockKind::Opaque => 'B',
            BlockKind::Refract => 'C',
        }
    }

    /// Parses a level-file letter.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'A' => Ok(BlockKind::Reflect),
            'B' => Ok(BlockKind::Opaque),
            'C' => Ok(BlockKind::Refract),
            other => Err(Error::InvalidBlockKind(other)),
        }
    }

    #[inline(always)]
    const fn slot(self) -> usize {
        match self {
            BlockKind::Reflect => 0,
            BlockKind::Opaque => 1,
            BlockKind::Refract => 2,
        }
    }
}

/// Remaining count of each block kind still to be placed.
///
/// Counts never go negative: `take` refuses when a kind is used up, and the
/// search pairs every successful `take` with exactly one `put_back`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: [usize; 3],
}

impl Inventory {
    pub const fn new(reflect: usize, opaque: usize, refract: usize) -> Self {
        Self {
            counts: [reflect, opaque, refract],
        }
    }

    #[inline]
    pub fn count(&self, kind: BlockKind) -> usize {
        self.counts[kind.slot()]
    }

    pub fn set_count(&mut self, kind: BlockKind, count: usize) {
        self.counts[kind.slot()] = count;
    }

    /// Total number of blocks left to place, saturating at `usize::MAX`.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts
            .iter()
            .fold(0usize, |total, &count| total.saturating_add(count))
    }

    /// True once every block has been placed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Removes one block of `kind`, returning false if none are left.
    #[inline]
    pub fn take(&mut self, kind: BlockKind) -> bool {
        let count = &mut self.counts[kind.slot()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Returns one block of `kind` taken earlier.
    #[inline]
    pub fn put_back(&mut self, kind: BlockKind) {
        self.counts[kind.slot()] += 1;
    }
}
