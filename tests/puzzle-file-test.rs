use std::convert::TryFrom;
use std::fs;
use std::io::Write;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use kenken_csp::csp::search::{Backtracking, Propagator, ValueOrdering, VariableOrdering};
use kenken_csp::error::PuzzleFromFileError;
use kenken_csp::model::kenken_csp_model;
use kenken_csp::puzzle::{Puzzle, Solution};

mod common;

#[test]
fn written_puzzle_reads_back() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let puzzle = Puzzle::generate(5, &mut rng);
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", puzzle)?;
    assert_eq!(puzzle, Puzzle::from_file(file.path())?);
    Ok(())
}

#[test]
fn generated_puzzles_are_solvable() {
    let mut rng = StdRng::seed_from_u64(42);
    for width in 2..=6 {
        let puzzle = Puzzle::generate(width, &mut rng);
        let (mut csp, grid) = kenken_csp_model(&puzzle);
        let result = Backtracking::new(&mut csp).search(
            Propagator::ForwardChecking,
            VariableOrdering::MinimumRemainingValues,
            ValueOrdering::DomainOrder,
        );
        assert!(result.is_solved(), "{}", puzzle);
        assert!(puzzle.verify_solution(&csp.values(&grid).unwrap()));
    }
}

#[test]
fn puzzle_file_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        Puzzle::from_file(&missing),
        Err(PuzzleFromFileError::Io(_))
    ));

    let malformed = dir.path().join("malformed.txt");
    fs::write(&malformed, "[[3], [11, 21, 3 0]]")?;
    assert!(matches!(
        Puzzle::from_file(&malformed),
        Err(PuzzleFromFileError::Parse(_))
    ));

    let invalid = dir.path().join("invalid.txt");
    fs::write(&invalid, "[[3], [11, 21, 3, 7]]")?;
    assert!(matches!(
        Puzzle::from_file(&invalid),
        Err(PuzzleFromFileError::InvalidPuzzle(_))
    ));
    Ok(())
}

#[test]
fn fixture_solutions_are_valid() -> Result<()> {
    for file in common::puzzle_files()? {
        let rows: Vec<Vec<i32>> = file
            .solution
            .lines()
            .map(|line| line.split(' ').map(|s| s.parse().unwrap()).collect())
            .collect();
        assert_eq!(file.puzzle.width(), rows.len(), "{}", file.name);
        let cells: Vec<i32> = rows.into_iter().flatten().collect();
        let solution = Solution::try_from(cells)
            .map_err(|_| anyhow!("{} is not square", file.name))?;
        assert!(file.puzzle.verify_solution(&solution), "{}", file.name);
    }
    Ok(())
}
