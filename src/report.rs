//! Console summary of a maze solved with both algorithms.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::{labyrinth::MazeGrid, pathfinding::Solver, types::Algorithm};

/// Solves the maze with BFS and DFS and writes a plain-text report.
///
/// The report shows the initial grid, the grid with each path marked with `+`, then the time,
/// path length, step count and explored-cell count of each algorithm, or a "no path found" line,
/// and finally which algorithm was faster. Annotations are cleared again before returning.
///
/// # Errors
///
/// Returns any error raised while writing to `out`.
pub fn write_summary<Out>(out: &mut Out, maze: &mut MazeGrid, solver: &mut Solver) -> Result<()>
where
    Out: Write + ?Sized,
{
    writeln!(out, "=== {}x{} maze ===", maze.width(), maze.height())?;
    writeln!(out, "Initial maze:")?;
    write!(out, "{maze}")?;

    let mut paths = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let path = solver.solve(maze, algorithm);
        if !path.is_empty() {
            maze.annotate(&path);
            writeln!(out)?;
            writeln!(out, "Maze with {algorithm} path (+ marks the path):")?;
            write!(out, "{maze}")?;
            maze.clear_annotations();
        }
        paths.push((algorithm, path));
    }

    writeln!(out)?;
    for (algorithm, path) in &paths {
        match solver.stats(*algorithm) {
            Some(stats) if !path.is_empty() => {
                writeln!(out, "{algorithm} took {:.3?}", stats.elapsed)?;
                writeln!(out, "{algorithm} path: {} cells", path.len())?;
                writeln!(out, "{algorithm} steps: {}", stats.steps)?;
                writeln!(out, "Cells explored by {algorithm}: {}", stats.explored)?;
            }
            _ => writeln!(out, "No path found with {algorithm}!")?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Comparison: {}", solver.comparison())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Valid maze with a single corridor from `(1, 1)` to `(8, 17)`.
    const CORRIDOR_MAZE: &str = "\
###################
#S                #
################# #
################# #
################# #
################# #
################# #
################# #
#################E#
###################";

    /// Runs the summary into a string.
    fn summary_of(maze: &mut MazeGrid) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, maze, &mut Solver::new()).expect("writing to memory succeeds");
        String::from_utf8(out).expect("the report is valid UTF-8")
    }

    #[test]
    fn test_summary_of_solvable_maze() {
        let mut maze: MazeGrid = CORRIDOR_MAZE.parse().expect("fixture is valid");
        let original = maze.clone();
        let report = summary_of(&mut maze);

        assert!(report.starts_with("=== 19x10 maze ===\nInitial maze:\n# # #"));
        assert!(report.contains("Maze with BFS path"), "BFS grid is printed");
        assert!(report.contains("Maze with DFS path"), "DFS grid is printed");
        assert!(report.contains("# S + + "), "path cells are marked");
        assert!(report.contains("BFS path: 24 cells"), "BFS path length is reported");
        assert!(report.contains("Cells explored by DFS: 24"), "DFS counter is reported");
        assert!(report.contains("Comparison: "), "comparison line is printed");
        assert_eq!(maze, original, "annotations are cleared afterwards");
    }

    #[test]
    fn test_summary_of_unsolvable_maze() {
        let mut maze: MazeGrid = CORRIDOR_MAZE
            .replacen("#S ", "#S#", 1)
            .parse()
            .expect("fixture is valid");
        let report = summary_of(&mut maze);

        assert!(report.contains("No path found with BFS!"));
        assert!(report.contains("No path found with DFS!"));
        assert!(!report.contains("Maze with"), "no annotated grid is printed");
    }
}
