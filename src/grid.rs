//! Board representation.
//!
//! The board is a flat vector of cells in x-major order: the cell at
//! `(x, y)` lives at index `x * height + y`. Cell `(x, y)` is centred on
//! lattice point `(2x + 1, 2y + 1)`, so the beam lattice spans
//! `[0, 2 * width] x [0, 2 * height]`.

use std::fmt;

use crate::blocks::BlockKind;
use crate::error::{Error, Result};
use crate::lattice::Point;

/// A cell position `(x, y)` on the board.
pub type CellPos = (usize, usize);

/// State of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Terrain that never holds a block.
    Blocked,
    /// Empty cell a block may be placed in.
    Open,
    /// Block preset by the level.
    Fixed(BlockKind),
    /// Block assigned by the search; reverts to `Open` on backtrack.
    Placed(BlockKind),
}

impl Cell {
    /// The block occupying this cell, if any.
    #[inline(always)]
    pub fn block(self) -> Option<BlockKind> {
        match self {
            Cell::Fixed(kind) | Cell::Placed(kind) => Some(kind),
            Cell::Blocked | Cell::Open => None,
        }
    }

    /// Level-file symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Blocked => 'x',
            Cell::Open => 'o',
            Cell::Fixed(kind) | Cell::Placed(kind) => kind.symbol(),
        }
    }

    /// Parses a level-file cell symbol. Letters become fixed blocks.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'x' => Ok(Cell::Blocked),
            'o' => Ok(Cell::Open),
            other => BlockKind::from_symbol(other).map(Cell::Fixed),
        }
    }
}

/// Converts a cell position to its flat index.
#[inline(always)]
pub const fn cell_to_idx(height: usize, (x, y): CellPos) -> usize {
    x * height + y
}

/// Converts a flat index back to a cell position.
#[inline(always)]
pub const fn idx_to_cell(height: usize, cell_index: usize) -> CellPos {
    (cell_index / height, cell_index % height)
}

/// A rectangular board of fixed dimensions with mutable cell states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell `Open`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Open; width * height],
        }
    }

    /// Builds a board from rows as they appear in a level file.
    ///
    /// `rows[y][x]` is the cell at `(x, y)`. Rows must be non-empty and of
    /// equal length.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::Grid("grid is empty".to_string()));
        }

        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Grid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &cell) in row.iter().enumerate() {
                board.set((x, y), cell);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: CellPos) -> Cell {
        self.cells[cell_to_idx(self.height, pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: CellPos, cell: Cell) {
        let idx = cell_to_idx(self.height, pos);
        self.cells[idx] = cell;
    }

    #[inline(always)]
    pub(crate) fn cell_at(&self, cell_index: usize) -> Cell {
        self.cells[cell_index]
    }

    #[inline(always)]
    pub(crate) fn set_at(&mut self, cell_index: usize, cell: Cell) {
        self.cells[cell_index] = cell;
    }

    /// All cells with their positions, in search order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx_to_cell(self.height, idx), cell))
    }

    /// Count of placed blocks of `kind`.
    pub fn placed_count(&self, kind: BlockKind) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Placed(kind))
            .count()
    }

    /// Largest lattice coordinates, `(2 * width, 2 * height)`.
    #[inline]
    pub fn lattice_max(&self) -> Point {
        (2 * self.width as i32, 2 * self.height as i32)
    }

    /// Whether a lattice point lies on the board, boundary included.
    #[inline(always)]
    pub fn lattice_contains(&self, (x, y): Point) -> bool {
        let (max_x, max_y) = self.lattice_max();
        (0..=max_x).contains(&x) && (0..=max_y).contains(&y)
    }

    /// The block occupying a cell, if any.
    #[inline(always)]
    pub fn block_at(&self, pos: CellPos) -> Option<BlockKind> {
        self.get(pos).block()
    }
}

/// Formats the board as level-file grid rows: one line per `y`,
/// symbols separated by single spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get((x, y)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
