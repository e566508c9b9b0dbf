use anyhow::{Context, Result};
use clap::Parser;
use intcode::{
    int_code::{com::execute_with_inputs, read_int_code},
    search::{PART1_NOUN, PART1_VERB},
    CliArgs,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given file({}).",
            args.input_path.display()
        )
    })?;

    let res = execute_with_inputs(PART1_NOUN, PART1_VERB, &int_code)
        .context("Failed to run int code")?;
    println!(
        "After {} steps, program halts, code[0] = {}",
        res.step_count(),
        res.output()
    );

    Ok(())
}
