//! Level descriptions in the `.bff` text format.
//!
//! ```text
//! # comment
//! GRID START
//! o o x
//! o B o
//! GRID STOP
//! A 2
//! L 0 1 1 1
//! P 3 4
//! ```
//!
//! Grid rows list cells left to right; `o` is open, `x` is blocked and a
//! letter is a fixed block. `A`, `B` and `C` lines give the placeable
//! counts of reflect, opaque and refract blocks. `L x y dx dy` declares a
//! laser and `P x y` a target, both in lattice coordinates.

use std::fs;
use std::path::Path;

use crate::blocks::{BlockKind, Inventory};
use crate::error::{Error, Result};
use crate::grid::{Board, Cell};
use crate::lattice::{Beam, Point};
use crate::solver::Solver;

const GRID_START: &str = "GRID START";
const GRID_STOP: &str = "GRID STOP";

/// A parsed and validated level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub board: Board,
    pub inventory: Inventory,
    pub lasers: Vec<Beam>,
    pub targets: Vec<Point>,
}

impl Level {
    /// Builds a level, checking that every laser and target is on the lattice
    /// and that laser directions are unit diagonals.
    pub fn new(
        board: Board,
        inventory: Inventory,
        lasers: Vec<Beam>,
        targets: Vec<Point>,
    ) -> Result<Self> {
        let (max_x, max_y) = board.lattice_max();
        let out_of_lattice = |what: &'static str, (x, y): Point| Error::OutOfLattice {
            what,
            x,
            y,
            max_x,
            max_y,
        };

        for laser in &lasers {
            if laser.dx.abs() != 1 || laser.dy.abs() != 1 {
                return Err(Error::InvalidDirection {
                    dx: laser.dx,
                    dy: laser.dy,
                });
            }
            if !board.lattice_contains(laser.position()) {
                return Err(out_of_lattice("laser", laser.position()));
            }
        }
        for &target in &targets {
            if !board.lattice_contains(target) {
                return Err(out_of_lattice("target", target));
            }
        }

        if lasers.is_empty() && !targets.is_empty() {
            log::warn!("level has {} targets but no lasers", targets.len());
        }

        Ok(Self {
            board,
            inventory,
            lasers,
            targets,
        })
    }

    /// Parses a level from `.bff` text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut inventory = Inventory::default();
        let mut lasers = Vec::new();
        let mut targets = Vec::new();
        let mut in_grid = false;
        let mut saw_grid = false;

        for (line_index, raw_line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if in_grid {
                if line == GRID_STOP {
                    in_grid = false;
                } else {
                    rows.push(parse_grid_row(line)?);
                }
                continue;
            }
            if line == GRID_START {
                in_grid = true;
                saw_grid = true;
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields[0] {
                symbol @ ("A" | "B" | "C") => {
                    let kind = match symbol {
                        "A" => BlockKind::Reflect,
                        "B" => BlockKind::Opaque,
                        _ => BlockKind::Refract,
                    };
                    let [count] = parse_numbers::<usize, 1>(&fields, line_number)?;
                    inventory.set_count(kind, count);
                }
                "L" => {
                    let [x, y, dx, dy] = parse_numbers::<i32, 4>(&fields, line_number)?;
                    lasers.push(Beam::new(x, y, dx, dy));
                }
                "P" => {
                    let [x, y] = parse_numbers::<i32, 2>(&fields, line_number)?;
                    targets.push((x, y));
                }
                other => {
                    return Err(Error::Parse {
                        line: line_number,
                        message: format!("unknown directive `{other}`"),
                    });
                }
            }
        }

        if in_grid {
            return Err(Error::Parse {
                line: text.lines().count(),
                message: format!("missing `{GRID_STOP}`"),
            });
        }
        if !saw_grid {
            return Err(Error::Parse {
                line: 0,
                message: format!("missing `{GRID_START}` section"),
            });
        }

        let board = Board::from_rows(&rows)?;
        Self::new(board, inventory, lasers, targets)
    }

    /// Reads and parses a `.bff` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Solves this level; `None` if no configuration works.
    pub fn solve(&self) -> Option<Board> {
        Solver::new(self.board.clone(), self.inventory, &self.lasers, &self.targets).solve()
    }
}

/// Parses one grid row; every whitespace-separated token is one cell.
fn parse_grid_row(line: &str) -> Result<Vec<Cell>> {
    line.split_whitespace()
        .map(|token| {
            let mut symbols = token.chars();
            match (symbols.next(), symbols.next()) {
                (Some(symbol), None) => Cell::from_symbol(symbol),
                _ => Err(Error::Grid(format!("cell `{token}` is not a single symbol"))),
            }
        })
        .collect()
}

/// Parses the `N` numeric fields following a directive letter.
fn parse_numbers<T: std::str::FromStr, const N: usize>(
    fields: &[&str],
    line: usize,
) -> Result<[T; N]> {
    if fields.len() != N + 1 {
        return Err(Error::Parse {
            line,
            message: format!(
                "`{}` takes {N} values, found {}",
                fields[0],
                fields.len() - 1
            ),
        });
    }

    let mut values = Vec::with_capacity(N);
    for field in &fields[1..] {
        let value = field.parse::<T>().map_err(|_| Error::Parse {
            line,
            message: format!("`{field}` is not a valid number"),
        })?;
        values.push(value);
    }

    values.try_into().map_err(|_| Error::Parse {
        line,
        message: format!("expected {N} values"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# a small level
GRID START
o o x
o B o
GRID STOP

A 2
C 1
L 0 1 1 1
P 3 4
P 5 2
";

    #[test]
    fn test_parse_sample_level() {
        let level = Level::parse(SAMPLE).unwrap();
        assert_eq!(level.board.width(), 3);
        assert_eq!(level.board.height(), 2);
        assert_eq!(level.board.get((2, 0)), Cell::Blocked);
        assert_eq!(level.board.get((1, 1)), Cell::Fixed(BlockKind::Opaque));
        assert_eq!(level.inventory, Inventory::new(2, 0, 1));
        assert_eq!(level.lasers, vec![Beam::new(0, 1, 1, 1)]);
        assert_eq!(level.targets, vec![(3, 4), (5, 2)]);
    }

    #[test]
    fn test_unknown_cell_symbol_is_invalid_block_kind() {
        let err = Level::parse("GRID START\no D\nGRID STOP\n").unwrap_err();
        assert!(
            matches!(err, Error::InvalidBlockKind('D')),
            "Expected InvalidBlockKind, got {err:?}"
        );
    }

    #[test]
    fn test_multi_symbol_cell_is_rejected() {
        let err = Level::parse("GRID START\noo o\nGRID STOP\n").unwrap_err();
        assert!(matches!(err, Error::Grid(_)), "Expected grid error, got {err:?}");
    }

    #[test]
    fn test_huge_inventory_reports_no_solution() {
        let level =
            Level::parse("GRID START\no\nGRID STOP\nA 18446744073709551615\nB 1\nL 1 0 1 1\n")
                .unwrap();
        assert_eq!(level.inventory.total(), usize::MAX);
        assert_eq!(level.solve(), None);
    }

    #[test]
    fn test_unknown_directive_reports_line() {
        let err = Level::parse("GRID START\no\nGRID STOP\nQ 1\n").unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count_is_rejected() {
        let err = Level::parse("GRID START\no\nGRID STOP\nL 1 0 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }), "got {err:?}");
    }

    #[test]
    fn test_bad_number_is_rejected() {
        let err = Level::parse("GRID START\no\nGRID STOP\nA two\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }), "got {err:?}");
    }

    #[test]
    fn test_unterminated_grid_is_rejected() {
        assert!(Level::parse("GRID START\no o\n").is_err());
    }

    #[test]
    fn test_missing_grid_is_rejected() {
        assert!(Level::parse("A 1\n").is_err());
    }

    #[test]
    fn test_laser_outside_lattice_is_rejected() {
        let err = Level::parse("GRID START\no\nGRID STOP\nL 3 0 1 1\n").unwrap_err();
        assert!(
            matches!(err, Error::OutOfLattice { what: "laser", x: 3, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_target_outside_lattice_is_rejected() {
        let err = Level::parse("GRID START\no\nGRID STOP\nP 1 -1\n").unwrap_err();
        assert!(
            matches!(err, Error::OutOfLattice { what: "target", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_non_diagonal_direction_is_rejected() {
        let err = Level::parse("GRID START\no\nGRID STOP\nL 1 0 0 1\n").unwrap_err();
        assert!(
            matches!(err, Error::InvalidDirection { dx: 0, dy: 1 }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_parsed_level_solves() {
        let level = Level::parse(
            "GRID START\no o\no o\nGRID STOP\nA 1\nL 1 0 1 1\nP 0 3\n",
        )
        .unwrap();
        let answer = level.solve().unwrap();
        assert_eq!(answer.to_string(), "o A\no o\n");
    }
}
