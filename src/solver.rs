//! Backtracking placement search.
//!
//! Cells are visited in x-major order. At each open cell the search first
//! leaves the cell empty, then tries every block kind still in the
//! inventory in `BlockKind::ALL` order. Once every cell has been visited,
//! a configuration is accepted when the inventory is used up and the beams
//! cover every target.
//!
//! The first accepted configuration is copied into the answer slot and
//! the `terminated` flag is raised; every pending call returns as soon as
//! it sees the flag. Board and inventory are restored on the way out, so
//! a finished solver holds exactly the state it started with.

use crate::blocks::{BlockKind, Inventory};
use crate::grid::{Board, Cell};
use crate::lattice::{Beam, Point};
use crate::simulator::{covers, simulate};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls that were not cut short by the terminate flag.
    pub nodes: u64,
    /// Complete configurations handed to the simulator.
    pub configurations: u64,
}

/// Search state for one level.
pub struct Solver<'a> {
    board: Board,
    inventory: Inventory,
    lasers: &'a [Beam],
    targets: &'a [Point],
    /// `open_from[i]` is the number of open cells at index `i` or later.
    open_from: Vec<usize>,
    answer: Option<Board>,
    terminated: bool,
    stats: SearchStats,
}

impl<'a> Solver<'a> {
    pub fn new(
        board: Board,
        inventory: Inventory,
        lasers: &'a [Beam],
        targets: &'a [Point],
    ) -> Self {
        let mut open_from = vec![0; board.len() + 1];
        for cell_index in (0..board.len()).rev() {
            let open = usize::from(board.cell_at(cell_index) == Cell::Open);
            open_from[cell_index] = open_from[cell_index + 1] + open;
        }

        Self {
            board,
            inventory,
            lasers,
            targets,
            open_from,
            answer: None,
            terminated: false,
            stats: SearchStats::default(),
        }
    }

    /// Runs the search and returns the first solving configuration.
    ///
    /// `None` means the search space was exhausted. Repeated calls give the
    /// same result.
    pub fn solve(&mut self) -> Option<Board> {
        self.answer = None;
        self.terminated = false;
        self.stats = SearchStats::default();

        self.search(0);

        log::debug!(
            "search finished: {} nodes, {} configurations checked",
            self.stats.nodes,
            self.stats.configurations
        );
        self.answer.clone()
    }

    /// The live board; identical to the input once `solve` returns.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live inventory; identical to the input once `solve` returns.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, cell_index: usize) {
        if self.terminated {
            return;
        }
        self.stats.nodes += 1;

        // not enough open cells left to place the remaining blocks
        if self.inventory.total() > self.open_from[cell_index] {
            return;
        }

        if cell_index == self.board.len() {
            self.check();
            return;
        }

        let next = cell_index + 1;
        self.search(next);

        if self.board.cell_at(cell_index) != Cell::Open {
            return;
        }

        for kind in BlockKind::ALL {
            if !self.place(cell_index, kind) {
                continue;
            }
            self.search(next);
            self.unplace(cell_index, kind);
        }
    }

    /// Puts a block of `kind` on an open cell, if one is left.
    #[inline]
    fn place(&mut self, cell_index: usize, kind: BlockKind) -> bool {
        if !self.inventory.take(kind) {
            return false;
        }
        self.board.set_at(cell_index, Cell::Placed(kind));
        true
    }

    /// Reverts a successful `place`.
    #[inline]
    fn unplace(&mut self, cell_index: usize, kind: BlockKind) {
        self.board.set_at(cell_index, Cell::Open);
        self.inventory.put_back(kind);
    }

    fn check(&mut self) {
        if !self.inventory.is_exhausted() {
            return;
        }
        self.stats.configurations += 1;

        let visited = simulate(self.lasers, &self.board);
        if covers(&visited, self.targets) {
            self.answer = Some(self.board.clone());
            self.terminated = true;
        }
    }
}

/// Finds the first configuration that places every block and lights every
/// target, or `None` if there is none.
pub fn solve(
    board: &Board,
    inventory: &Inventory,
    lasers: &[Beam],
    targets: &[Point],
) -> Option<Board> {
    Solver::new(board.clone(), *inventory, lasers, targets).solve()
}
