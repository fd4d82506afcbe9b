use std::collections::VecDeque;
use std::mem;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::collections::square::{Coord, Square};
use crate::puzzle::{Cage, Operator, Puzzle, Solution, Value};

const MAX_CAGE_SIZE: usize = 4;
const MAX_AVG_CAGE_SIZE: f32 = 2.2;
const CAGE_SIZE_DISTRIBUTION: f32 = 0.5;

/// A wall between two orthogonally adjacent cells
type Border = (Coord, Coord);

pub(crate) fn generate_puzzle(width: usize, rng: &mut impl Rng) -> Puzzle {
    let (puzzle, _solution) = generate_puzzle_with_solution(width, rng);
    puzzle
}

// The solution is one of possibly many solutions of the puzzle
pub(crate) fn generate_puzzle_with_solution(width: usize, rng: &mut impl Rng) -> (Puzzle, Solution) {
    let solution = random_latin_square(width, rng);
    debug!("Solution:\n{}", &solution);
    let cages = generate_cage_cells(width, rng)
        .into_iter()
        .map(|cells| {
            let values: Vec<Value> = cells.iter().map(|&c| solution[c]).collect();
            match random_operator(&values, rng) {
                None => Cage::fixed(cells[0], values[0]),
                Some(operator) => {
                    let target = find_cage_target(operator, &values);
                    Cage::arithmetic(cells, operator, target)
                        .expect("generated cage cells are distinct")
                }
            }
        })
        .collect();
    let puzzle = Puzzle::new(width, cages).expect("generated puzzle width is valid");
    (puzzle, solution)
}

fn random_latin_square(width: usize, rng: &mut impl Rng) -> Solution {
    let mut generate_seed = || {
        let mut seed: Vec<Value> = (0..width as Value).collect();
        seed.shuffle(rng);
        seed
    };
    let seeds = [generate_seed(), generate_seed()];
    Square::from_fn(width, |coord| {
        (seeds[0][coord.row()] + seeds[1][coord.col()]) % width as Value + 1
    })
}

fn shuffled_inner_borders(width: usize, rng: &mut impl Rng) -> Vec<Border> {
    let mut borders = Vec::with_capacity(width * width.saturating_sub(1) * 2);
    for a in 0..width {
        for b in 1..width {
            borders.push((Coord::new(a, b - 1), Coord::new(a, b)));
            borders.push((Coord::new(b - 1, a), Coord::new(b, a)));
        }
    }
    borders.shuffle(rng);
    borders
}

/// Partitions the grid into connected cages by removing random borders
fn generate_cage_cells(width: usize, rng: &mut impl Rng) -> Vec<Vec<Coord>> {
    let num_cells = width.pow(2);
    let mut cage_map = Square::from_fn(width, |coord| coord.row() * width + coord.col());
    let mut cages: Vec<Vec<Coord>> = (0..num_cells)
        .map(|i| vec![Coord::new(i / width, i % width)])
        .collect();
    let min_cage_count = (num_cells as f32 / MAX_AVG_CAGE_SIZE) as usize;
    let mut borders = VecDeque::from(shuffled_inner_borders(width, rng));
    'target_cage_sizes: for target_cage_size in 2..=MAX_CAGE_SIZE {
        let border_count = (borders.len() as f32 * CAGE_SIZE_DISTRIBUTION) as usize;
        for _ in 0..border_count {
            let (cell1, cell2) = match borders.pop_front() {
                Some(border) => border,
                None => break 'target_cage_sizes,
            };
            let (mut cage_a, mut cage_b) = (cage_map[cell1], cage_map[cell2]);
            if cage_a == cage_b {
                continue;
            }
            if cage_a > cage_b {
                mem::swap(&mut cage_a, &mut cage_b)
            }
            let cage_size = cages[cage_a].len() + cages[cage_b].len();
            if cage_size != target_cage_size {
                if cage_size > target_cage_size {
                    borders.push_back((cell1, cell2));
                }
                continue;
            }
            // merge cage_b into cage_a, then move the last cage into the vacated slot
            let b = cages.swap_remove(cage_b);
            for &c in &b {
                cage_map[c] = cage_a;
            }
            cages[cage_a].extend(b);
            if let Some(moved) = cages.get(cage_b) {
                for &c in moved {
                    cage_map[c] = cage_b;
                }
            }
            if cages.len() <= min_cage_count {
                break 'target_cage_sizes;
            }
        }
    }
    cages
}

fn random_operator(values: &[Value], rng: &mut impl Rng) -> Option<Operator> {
    if values.len() == 1 {
        return None;
    }
    possible_operators(values).choose(rng).copied()
}

fn possible_operators(values: &[Value]) -> Vec<Operator> {
    let mut operators = vec![Operator::Add, Operator::Multiply];
    if values.len() == 2 {
        operators.push(Operator::Subtract);
        let (min, max) = min_max(values);
        if max % min == 0 {
            operators.push(Operator::Divide);
        }
    }
    operators
}

fn find_cage_target(operator: Operator, values: &[Value]) -> Value {
    match operator {
        Operator::Add => values.iter().sum(),
        Operator::Subtract => {
            let (min, max) = min_max(values);
            max - min
        }
        Operator::Multiply => values.iter().product(),
        Operator::Divide => {
            let (min, max) = min_max(values);
            max / min
        }
    }
}

fn min_max(values: &[Value]) -> (Value, Value) {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    (min, max)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::puzzle::generate::generate_puzzle_with_solution;
    use crate::puzzle::MAX_WIDTH;

    #[test]
    fn generated_solution_satisfies_puzzle() {
        let mut rng = StdRng::seed_from_u64(7);
        for width in 1..=MAX_WIDTH {
            for _ in 0..5 {
                let (puzzle, solution) = generate_puzzle_with_solution(width, &mut rng);
                assert!(puzzle.verify_solution(&solution), "{}", puzzle);
            }
        }
    }

    #[test]
    fn cages_cover_grid_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let (puzzle, _) = generate_puzzle_with_solution(6, &mut rng);
        let mut cells: Vec<_> = puzzle
            .cages()
            .iter()
            .flat_map(|cage| cage.cells().iter().map(|c| (c.row(), c.col())))
            .collect();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(36, cells.len());
        assert!(puzzle.cages().iter().all(|cage| cage.cells().len() <= 4));
    }
}
