//! Brute force search over the noun and verb written to a program before it runs.

use std::{fmt::Display, ops::Range};

use log::{debug, info};

use crate::{int_code::com::run_with_inputs, Error};

pub const PART1_NOUN: i64 = 12;
pub const PART1_VERB: i64 = 2;
pub const PART2_TARGET: i64 = 19690720;

/// Both the noun and the verb are taken from this range.
pub const INPUT_RANGE: Range<i64> = 0..100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounVerb {
    pub noun: i64,
    pub verb: i64,
}

impl NounVerb {
    pub fn new(noun: i64, verb: i64) -> Self {
        Self { noun, verb }
    }

    pub fn encode(&self) -> i64 {
        100 * self.noun + self.verb
    }
}

impl Display for NounVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Find the first pair, noun major, whose run leaves `target` at address 0.
///
/// Returns `Ok(None)` once every pair in [INPUT_RANGE] was tried without a
/// match. Any failed run aborts the search with its error.
pub fn find_inputs(target: i64, base_image: &[i64]) -> Result<Option<NounVerb>, Error> {
    let mut tried = 0usize;
    for noun in INPUT_RANGE {
        for verb in INPUT_RANGE {
            tried += 1;
            if run_with_inputs(noun, verb, base_image)? == target {
                debug!("Hit {} after {} runs", target, tried);
                return Ok(Some(NounVerb::new(noun, verb)));
            }
        }
    }

    info!("No noun and verb produce {} after {} runs", target, tried);
    Ok(None)
}
