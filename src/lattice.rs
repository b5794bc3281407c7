//! Doubled-resolution lattice geometry.
//!
//! Beams and blocks share one integer address space. Cell `(x, y)` is
//! centred on lattice point `(2x + 1, 2y + 1)`; points with both
//! coordinates even are grid-line intersections and points of mixed
//! parity are midpoints of cell edges. Level files start beams on edge
//! midpoints, and a diagonal step keeps a beam on them.
//!
//! Reflection needs no geometry beyond parity: a step that lands on an
//! odd coordinate has crossed into a cell through the face normal to
//! that axis, so that is the direction component to negate.

use crate::blocks::BlockKind;
use crate::grid::CellPos;

/// A lattice point `(x, y)`.
pub type Point = (i32, i32);

/// A beam of light: a lattice position plus a unit diagonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Beam {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Beam {
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    #[inline(always)]
    pub const fn position(&self) -> Point {
        (self.x, self.y)
    }

    /// The lattice point one step ahead.
    #[inline(always)]
    pub const fn next_point(&self) -> Point {
        (self.x + self.dx, self.y + self.dy)
    }

    /// This beam moved one step ahead, direction unchanged.
    #[inline(always)]
    pub const fn advanced(&self) -> Beam {
        Beam::new(self.x + self.dx, self.y + self.dy, self.dx, self.dy)
    }

    /// The beam bounced off the block it is about to enter.
    ///
    /// Each post-step coordinate that is odd is mirrored around the current
    /// coordinate (`2 * pre - post`); even coordinates are kept. The new
    /// direction is the offset from the current point to that mirrored
    /// point, and the reflected beam starts from the current point.
    #[inline]
    pub fn reflected(&self) -> Beam {
        let (next_x, next_y) = self.next_point();
        let mirrored_x = if is_odd(next_x) { 2 * self.x - next_x } else { next_x };
        let mirrored_y = if is_odd(next_y) { 2 * self.y - next_y } else { next_y };
        Beam::new(self.x, self.y, mirrored_x - self.x, mirrored_y - self.y)
    }
}

#[inline(always)]
fn is_odd(coordinate: i32) -> bool {
    coordinate.rem_euclid(2) == 1
}

/// The cell whose interior a step from `from` to `to` passes through.
///
/// Both points must lie inside the lattice, which keeps the coordinate
/// sums non-negative.
#[inline(always)]
pub fn crossed_cell(from: Point, to: Point) -> CellPos {
    (
        ((from.0 + to.0) / 4) as usize,
        ((from.1 + to.1) / 4) as usize,
    )
}

/// Outcome of a beam crossing into a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    /// The beam carrying on straight, already advanced to the next point.
    pub through: Option<Beam>,
    /// A new beam reflected off the block, starting at the current point.
    pub reflected: Option<Beam>,
}

impl Interaction {
    /// Every beam that leaves the interaction.
    pub fn beams(&self) -> impl Iterator<Item = Beam> {
        self.through.into_iter().chain(self.reflected)
    }
}

/// Applies the block in the crossed cell to a beam.
///
/// | block   | through | reflected |
/// |---------|---------|-----------|
/// | none    | yes     | no        |
/// | Opaque  | no      | no        |
/// | Reflect | no      | yes       |
/// | Refract | yes     | yes       |
#[inline]
pub fn interact(block: Option<BlockKind>, beam: &Beam) -> Interaction {
    match block {
        None => Interaction {
            through: Some(beam.advanced()),
            reflected: None,
        },
        Some(BlockKind::Opaque) => Interaction {
            through: None,
            reflected: None,
        },
        Some(BlockKind::Reflect) => Interaction {
            through: None,
            reflected: Some(beam.reflected()),
        },
        Some(BlockKind::Refract) => Interaction {
            through: Some(beam.advanced()),
            reflected: Some(beam.reflected()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

    /// Edge midpoints: one on a vertical grid line, one on a horizontal one.
    const EDGE_POINTS: [Point; 2] = [(2, 3), (3, 2)];

    #[test]
    fn test_opaque_absorbs_every_direction() {
        for &(x, y) in &EDGE_POINTS {
            for (dx, dy) in DIRECTIONS {
                let interaction = interact(Some(BlockKind::Opaque), &Beam::new(x, y, dx, dy));
                assert_eq!(
                    interaction.beams().count(),
                    0,
                    "Opaque should absorb beam at ({x},{y}) heading ({dx},{dy})"
                );
            }
        }
    }

    #[test]
    fn test_reflect_flips_exactly_the_crossing_axis() {
        for &(x, y) in &EDGE_POINTS {
            for (dx, dy) in DIRECTIONS {
                let beam = Beam::new(x, y, dx, dy);
                let interaction = interact(Some(BlockKind::Reflect), &beam);
                assert_eq!(interaction.through, None);
                let reflected = interaction.reflected.unwrap();
                assert_eq!(reflected.position(), beam.position());

                // x even means the beam sits on a vertical grid line and enters
                // the cell through a vertical face
                if x % 2 == 0 {
                    assert_eq!((reflected.dx, reflected.dy), (-dx, dy));
                } else {
                    assert_eq!((reflected.dx, reflected.dy), (dx, -dy));
                }
            }
        }
    }

    #[test]
    fn test_refract_splits_into_straight_and_reflected() {
        for &(x, y) in &EDGE_POINTS {
            for (dx, dy) in DIRECTIONS {
                let beam = Beam::new(x, y, dx, dy);
                let interaction = interact(Some(BlockKind::Refract), &beam);
                assert_eq!(interaction.through, Some(beam.advanced()));
                assert_eq!(interaction.reflected, Some(beam.reflected()));
                assert_eq!(interaction.beams().count(), 2);
            }
        }
    }

    #[test]
    fn test_empty_cell_passes_beam() {
        let beam = Beam::new(1, 0, 1, 1);
        let interaction = interact(None, &beam);
        assert_eq!(interaction.through, Some(Beam::new(2, 1, 1, 1)));
        assert_eq!(interaction.reflected, None);
    }

    #[test]
    fn test_reflection_off_grid_intersection_flips_both_axes() {
        let reflected = Beam::new(2, 2, 1, -1).reflected();
        assert_eq!(reflected, Beam::new(2, 2, -1, 1));
    }

    #[test]
    fn test_crossed_cell() {
        assert_eq!(crossed_cell((1, 0), (2, 1)), (0, 0));
        assert_eq!(crossed_cell((2, 1), (3, 2)), (1, 0));
        assert_eq!(crossed_cell((3, 2), (4, 3)), (1, 1));
        assert_eq!(crossed_cell((2, 1), (1, 2)), (0, 0));
        assert_eq!(crossed_cell((0, 0), (1, 1)), (0, 0));
    }
}
