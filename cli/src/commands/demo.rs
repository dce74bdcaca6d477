//! The `demo` command - draw and measure the built-in samples.

use std::process::ExitCode;

use cistern::{Catchment, RenderStyle, SAMPLES};

use crate::cli::DemoArgs;
use crate::common::engine::measure;
use crate::common::error::render;

/// Run the demo command.
pub fn run(args: DemoArgs, no_color: bool) -> ExitCode {
    let options = args.engine.options();
    let style = if args.water {
        RenderStyle::with_water()
    } else {
        RenderStyle::default()
    };

    for sample in SAMPLES {
        let catchment = match Catchment::new(&options, sample.heights) {
            Ok(catchment) => catchment,
            Err(e) => {
                render(&e.into(), no_color);
                return ExitCode::FAILURE;
            }
        };

        println!("{}", catchment.heights());
        print!("{}", catchment.draw(&style));
        match measure(&catchment, args.engine.strategy) {
            Ok(total) => {
                if total != sample.water {
                    tracing::warn!(
                        heights = %catchment.heights(),
                        expected = sample.water,
                        total,
                        "Sample total differs from its known answer"
                    );
                }
                println!("Units of water: {}", total);
            }
            Err(mismatch) => {
                eprintln!("{}", mismatch);
                return ExitCode::FAILURE;
            }
        }
        println!("---");
    }

    ExitCode::SUCCESS
}
