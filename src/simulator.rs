//! Beam propagation across a board.
//!
//! Every call owns its own work stack and visited sets, so the search can
//! run it once per candidate configuration without any shared state.

use rustc_hash::FxHashSet;

use crate::grid::Board;
use crate::lattice::{crossed_cell, interact, Beam, Point};

/// Traces `beams` and every beam split off from them, returning the set of
/// lattice points visited.
///
/// A beam stops when its next point leaves the lattice or a block absorbs
/// it. Beam states `(x, y, dx, dy)` already traced are skipped, which keeps
/// closed mirror loops finite without changing the visited set.
pub fn simulate(beams: &[Beam], board: &Board) -> FxHashSet<Point> {
    let mut visited = FxHashSet::default();
    let mut traced: FxHashSet<Beam> = FxHashSet::default();
    let mut pending: Vec<Beam> = beams.to_vec();

    while let Some(start) = pending.pop() {
        let mut beam = start;
        loop {
            if !traced.insert(beam) {
                break;
            }
            visited.insert(beam.position());

            let next = beam.next_point();
            if !board.lattice_contains(next) {
                break;
            }

            let block = board.block_at(crossed_cell(beam.position(), next));
            let interaction = interact(block, &beam);
            if let Some(reflected) = interaction.reflected {
                pending.push(reflected);
            }
            match interaction.through {
                Some(advanced) => beam = advanced,
                None => break,
            }
        }
    }

    visited
}

/// Whether every target lies on some beam path.
pub fn covers(visited: &FxHashSet<Point>, targets: &[Point]) -> bool {
    targets.iter().all(|target| visited.contains(target))
}
