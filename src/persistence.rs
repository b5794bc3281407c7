//! Writing solutions next to their level files.
//!
//! `levels/mad_1.bff` is answered in `levels/mad_1_solution.txt`, holding
//! the solved grid in level-file row format, or a single
//! `No solution found.` line.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::grid::Board;

const NO_SOLUTION: &str = "No solution found.";

/// Path of the solution file for a level file.
pub fn solution_path(level_path: &Path) -> PathBuf {
    let stem = level_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    level_path.with_file_name(format!("{stem}_solution.txt"))
}

/// Formats a search outcome for the solution file.
pub fn format_answer(answer: Option<&Board>) -> String {
    match answer {
        Some(board) => board.to_string(),
        None => format!("{NO_SOLUTION}\n"),
    }
}

/// Saves a search outcome beside its level file, returning the path written.
pub fn save(level_path: &Path, answer: Option<&Board>) -> std::io::Result<PathBuf> {
    let path = solution_path(level_path);
    let mut file = File::create(&path)?;
    file.write_all(format_answer(answer).as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use crate::grid::Cell;

    #[test]
    fn test_solution_path_replaces_extension() {
        assert_eq!(
            solution_path(Path::new("levels/mad_1.bff")),
            PathBuf::from("levels/mad_1_solution.txt")
        );
        assert_eq!(
            solution_path(Path::new("tiny")),
            PathBuf::from("tiny_solution.txt")
        );
    }

    #[test]
    fn test_format_answer() {
        let mut board = Board::new(2, 1);
        board.set((0, 0), Cell::Placed(BlockKind::Opaque));
        assert_eq!(format_answer(Some(&board)), "B o\n");
        assert_eq!(format_answer(None), "No solution found.\n");
    }

    #[test]
    fn test_save_writes_beside_level() {
        let dir = std::env::temp_dir().join(format!("lazor-persistence-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let level_path = dir.join("sample.bff");

        let written = save(&level_path, None).unwrap();
        assert_eq!(written, dir.join("sample_solution.txt"));
        assert_eq!(
            std::fs::read_to_string(&written).unwrap(),
            "No solution found.\n"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
