//! Text rendering of a board and its beam paths.
//!
//! Every lattice point becomes one character, so a `w x h` board draws as
//! `2h + 1` lines of `2w + 1` characters:
//!
//! - `@` target on a beam path, `P` target missed
//! - `L` laser origin that is not a target
//! - cell centres show the cell symbol (`o`, `x`, `A`, `B`, `C`)
//! - `+` point visited by a beam
//! - `.` anything else

use rustc_hash::FxHashSet;

use crate::grid::Board;
use crate::lattice::{Beam, Point};

/// Draws the lattice with beam paths and targets.
pub fn render(
    board: &Board,
    lasers: &[Beam],
    targets: &[Point],
    visited: &FxHashSet<Point>,
) -> String {
    let (max_x, max_y) = board.lattice_max();
    let origins: FxHashSet<Point> = lasers.iter().map(Beam::position).collect();
    let targets: FxHashSet<Point> = targets.iter().copied().collect();

    let mut lines = Vec::with_capacity(max_y as usize + 1);
    for y in 0..=max_y {
        let line: String = (0..=max_x)
            .map(|x| {
                let point = (x, y);
                if targets.contains(&point) {
                    if visited.contains(&point) {
                        '@'
                    } else {
                        'P'
                    }
                } else if origins.contains(&point) {
                    'L'
                } else if x % 2 == 1 && y % 2 == 1 {
                    board.get(((x / 2) as usize, (y / 2) as usize)).symbol()
                } else if visited.contains(&point) {
                    '+'
                } else {
                    '.'
                }
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}
