//! The `run` command - count the water for every height list in a file.

use std::process::ExitCode;

use cistern::Catchment;

use crate::cli::RunArgs;
use crate::common::engine::measure;
use crate::common::error::render;
use crate::common::input::read_input;

/// Run the run command.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let batch = match read_input(&args.file) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = args.engine.options();
    let catchments = match Catchment::parse_batch(&options, &batch.content) {
        Ok(all) => all,
        Err(e) => {
            render(&e.with_filename(batch.name), no_color);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(file = %batch.name, sequences = catchments.len(), "Parsed batch");

    for catchment in &catchments {
        print!("{}", args.draw.render(catchment));
        match measure(catchment, args.engine.strategy) {
            Ok(total) => println!("[{}]: {}", catchment.heights(), total),
            Err(mismatch) => {
                eprintln!("[{}]: {}", catchment.heights(), mismatch);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
