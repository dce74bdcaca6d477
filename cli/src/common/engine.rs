//! Measuring a catchment with the strategy picked on the command line.

use cistern::{Catchment, Strategy};

use crate::cli::StrategyArg;

/// The two strategies returned different totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub scan: u64,
    pub running_max: u64,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mismatch between strategies! scan: {}, running-max: {}",
            self.scan, self.running_max
        )
    }
}

/// Measure the water, checking both strategies agree when asked to.
pub fn measure(catchment: &Catchment, strategy: StrategyArg) -> Result<u64, Mismatch> {
    match strategy {
        StrategyArg::Scan => Ok(catchment.water_with(Strategy::Scan)),
        StrategyArg::RunningMax => Ok(catchment.water_with(Strategy::RunningMax)),
        StrategyArg::Both => {
            let scan = catchment.water_with(Strategy::Scan);
            let running_max = catchment.water_with(Strategy::RunningMax);
            tracing::debug!(scan, running_max, "Measured with both strategies");
            if scan == running_max {
                Ok(scan)
            } else {
                Err(Mismatch { scan, running_max })
            }
        }
    }
}
