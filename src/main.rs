#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

use docopt::Docopt;
use serde_derive::Deserialize;
use mazebuilder::{
    generators,
    grid::RectGrid,
    renderers,
    units::{ColumnLength, RowLength},
};
use rand::{SeedableRng, XorShiftRng};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Maze Builder

Generates a random perfect maze - every cell reachable from every other by
exactly one path - and renders it as ASCII text.

Usage:
    mazebuilder_driver -h | --help
    mazebuilder_driver <height> <width> [--text-out=<path>] [--seed=<n>]

Options:
    -h --help           Show this screen.
    --text-out=<path>   Output file path for the textual rendering of the maze, defaults to stdout.
    --seed=<n>          Seed the random generator to reproduce a maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_height: usize,
    arg_width: usize,
    flag_text_out: String,
    flag_seed: Option<u32>,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // Result is a typedef of std `Result` with the error type our own `Error`
    // Defines the From conversions that let try! and ? work for our `Error`.
    // ResultExt adds the `chain_err` trait method.
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    if args.arg_height == 0 || args.arg_width == 0 {
        return Err("maze height and width must be positive integers (0 not allowed)".into());
    }

    let grid = RectGrid::new(RowLength(args.arg_width), ColumnLength(args.arg_height));

    let mut rng = match args.flag_seed {
        Some(seed) => XorShiftRng::from_seed([0x193a6754, 0xa8a7d469, 0x97830e05, seed]),
        None => rand::weak_rng(),
    };

    let knockdowns = generators::kruskal(&grid, &mut rng);
    let rendering = renderers::render_ascii(&grid, &knockdowns);

    if args.flag_text_out.is_empty() {
        print!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
