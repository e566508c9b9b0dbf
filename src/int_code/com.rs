use log::{debug, trace};

use crate::Error;

use super::inst::{parse_cur_inst, Flow};

/// Memory address written with the noun before a run.
pub const NOUN_ADDR: usize = 1;
/// Memory address written with the verb before a run.
pub const VERB_ADDR: usize = 2;

#[derive(Debug, Default)]
pub struct IntCodeComputer {}

#[derive(Debug)]
pub struct ExecutionResult {
    step_count: usize,
    image: Vec<i64>,
}

impl ExecutionResult {
    fn new(step_count: usize, image: Vec<i64>) -> ExecutionResult {
        ExecutionResult { step_count, image }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn image(&self) -> &[i64] {
        &self.image
    }

    /// Value left at address 0 once the program halted.
    pub fn output(&self) -> i64 {
        self.image[0]
    }
}

impl IntCodeComputer {
    pub fn new() -> Self {
        IntCodeComputer {}
    }

    /// Run `image` until it halts, taking ownership of the memory.
    pub fn execute(&mut self, mut image: Vec<i64>) -> Result<ExecutionResult, Error> {
        let mut inst_p = 0;
        let mut step_count = 0;
        loop {
            let inst = parse_cur_inst(&image, inst_p)?;
            trace!("{:>4}: {:?}", inst_p, inst);
            let flow = inst.execute(&mut image, inst_p)?;
            step_count += 1;
            match flow {
                Flow::Advance(n) => inst_p += n,
                Flow::Halt => break,
            }
        }

        debug!("After {} steps, program halts at {}", step_count, inst_p);
        Ok(ExecutionResult::new(step_count, image))
    }
}

/// Run a copy of `image` and return the value at address 0.
pub fn run(image: &[i64]) -> Result<i64, Error> {
    IntCodeComputer::new()
        .execute(image.to_vec())
        .map(|res| res.output())
}

/// Run a copy of `image` with address 1 and 2 set to `noun` and `verb`.
pub fn run_with_inputs(noun: i64, verb: i64, image: &[i64]) -> Result<i64, Error> {
    execute_with_inputs(noun, verb, image).map(|res| res.output())
}

pub fn execute_with_inputs(noun: i64, verb: i64, image: &[i64]) -> Result<ExecutionResult, Error> {
    let mut int_code_image = image.to_vec();
    for (addr, value) in [(NOUN_ADDR, noun), (VERB_ADDR, verb)] {
        *int_code_image
            .get_mut(addr)
            .ok_or(Error::ImageIndexError {
                addr: addr as i64,
                pos: 0,
                len: image.len(),
            })? = value;
    }

    IntCodeComputer::new().execute(int_code_image)
}
