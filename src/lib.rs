use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub mod int_code;
pub mod search;

pub use int_code::com::{run, run_with_inputs, ExecutionResult, IntCodeComputer};
pub use search::{find_inputs, NounVerb};

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Get empty code in file")]
    EmptyError,
    #[error("Failed to parse integer from string({0})")]
    ParseIntError(String),
    #[error("Invalid operation code({value}) found at position({pos})")]
    InvalidOpcode { value: i64, pos: usize },
    #[error("Invalid index({addr}) accessed by instruction at position({pos}), memory length is {len}")]
    ImageIndexError { addr: i64, pos: usize, len: usize },
    #[error("Missing more code for instruction whose operation code is {0}, at position({1})")]
    MissingCodeForInstruction(i64, usize),
    #[error("Current instruction pointer({0}) exceeds total code length({1})")]
    ExecutionExceedIntCode(usize, usize),
    #[error("Arithmetic overflow in instruction at position({0})")]
    ArithmeticOverflow(usize),
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Path to the file holding the comma separated int code.
    pub input_path: PathBuf,
}
