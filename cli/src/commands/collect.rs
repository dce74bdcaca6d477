//! The `collect` command - count the water for one height list.

use std::process::ExitCode;

use cistern::Catchment;

use crate::cli::CollectArgs;
use crate::common::engine::measure;
use crate::common::error::render;

/// Run the collect command.
pub fn run(args: CollectArgs, no_color: bool) -> ExitCode {
    let options = args.engine.options();
    let catchment = match Catchment::parse(&options, &args.heights) {
        Ok(catchment) => catchment,
        Err(e) => {
            render(&e, no_color);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        columns = catchment.grid().columns(),
        rows = catchment.grid().rows(),
        "Parsed heights"
    );

    print!("{}", args.draw.render(&catchment));

    match measure(&catchment, args.engine.strategy) {
        Ok(total) => {
            println!("{}", total);
            ExitCode::SUCCESS
        }
        Err(mismatch) => {
            eprintln!("{}", mismatch);
            ExitCode::FAILURE
        }
    }
}
