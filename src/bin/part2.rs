use anyhow::{bail, Context, Result};
use clap::Parser;
use intcode::{int_code::read_int_code, search::PART2_TARGET, CliArgs};

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given file({}).",
            args.input_path.display()
        )
    })?;

    let Some(found) = intcode::find_inputs(PART2_TARGET, &int_code)
        .context("Failed to search noun and verb")?
    else {
        bail!(
            "No noun and verb pair in [0, 99] produces {}",
            PART2_TARGET
        );
    };

    println!(
        "Found noun({}) and verb({}), 100 * noun + verb = {}",
        found.noun, found.verb, found
    );

    Ok(())
}
