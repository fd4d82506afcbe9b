//! Compile KenKen puzzles into constraint satisfaction problems and solve them
//! with backtracking search guided by ordering heuristics

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod csp;
pub mod error;
pub mod heuristics;
pub mod model;
pub mod puzzle;
