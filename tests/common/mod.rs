use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use kenken_csp::puzzle::Puzzle;

pub struct PuzzleFile {
    pub name: String,
    pub puzzle: Puzzle,
    /// the unique solution, formatted as a grid
    pub solution: String,
}

/// Reads every puzzle under `res/test/puzzles` with its solution from
/// `res/test/solutions`, sorted by file name
pub fn puzzle_files() -> Result<Vec<PuzzleFile>> {
    let mut paths: Vec<_> = fs::read_dir(project_path("res/test/puzzles"))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.sort_unstable();
    paths
        .into_iter()
        .map(|path| {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            println!("Reading {}", path.display());
            let puzzle = Puzzle::from_file(&path)?;
            let solution = fs::read_to_string(project_path("res/test/solutions").join(&name))?;
            Ok(PuzzleFile {
                name,
                puzzle,
                solution,
            })
        })
        .collect()
}

pub fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
