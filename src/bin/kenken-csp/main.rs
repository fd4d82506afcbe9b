#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use itertools::Itertools;
use kenken_csp::csp::search::Backtracking;
use kenken_csp::puzzle::{cell_id, Puzzle};

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let puzzle = match options.source() {
        Source::File(path) => {
            println!("Reading puzzle from \"{}\"", path.display());
            Puzzle::from_file(path)?
        }
        &Source::Generate { width } => {
            println!("Generating a {0}x{0} puzzle", width);
            Puzzle::generate(width, &mut rand::thread_rng())
        }
    };
    print_puzzle(&puzzle);
    solve(&puzzle, &options);
    Ok(())
}

fn solve(puzzle: &Puzzle, options: &Options) {
    let (mut csp, grid) = options.model().build(puzzle);
    println!("{}", csp);
    let mut search = Backtracking::new(&mut csp);
    let result = search.search(
        options.propagator(),
        options.var_order(),
        options.val_order(),
    );
    let stats = search.stats();
    match csp.values(&grid) {
        Some(solution) if result.is_solved() => {
            println!("Puzzle solved");
            print!("{}", solution);
            if !options.model().uses_cages() {
                println!("The {} model ignores cages", options.model());
            }
        }
        _ => println!("Puzzle is not solvable"),
    }
    println!("{}", stats);
}

fn print_puzzle(puzzle: &Puzzle) {
    let cages = puzzle
        .cages()
        .iter()
        .enumerate()
        .map(|(i, cage)| {
            format!(
                " {:>2}: {}{} {}",
                i,
                cage.operator().map_or(' ', |operator| operator.symbol()),
                cage.target(),
                cage.cells().iter().map(|&cell| cell_id(cell)).join(" ")
            )
        })
        .join("\n");
    println!("{}x{} puzzle\n{}", puzzle.width(), puzzle.width(), cages);
}
