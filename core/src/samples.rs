//! Fixed sample skylines with their known answers.

/// A skyline and the water it traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub heights: &'static [i64],
    pub water: u64,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        heights: &[4, 0, 2],
        water: 2,
    },
    Sample {
        heights: &[3, 0, 4],
        water: 3,
    },
    Sample {
        heights: &[4, 0, 0, 4],
        water: 8,
    },
    Sample {
        heights: &[4, 2, 1, 4],
        water: 5,
    },
    Sample {
        heights: &[1, 2, 0, 0],
        water: 0,
    },
    Sample {
        heights: &[3, 0, 3, 4, 2, 5],
        water: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Catchment, Options};
    use crate::engine::Strategy;

    #[test]
    fn test_samples_match_both_strategies() {
        for sample in SAMPLES {
            let catchment = Catchment::new(&Options::default(), sample.heights).unwrap();
            assert_eq!(
                catchment.water_with(Strategy::Scan),
                sample.water,
                "{:?}",
                sample.heights
            );
            assert_eq!(
                catchment.water_with(Strategy::RunningMax),
                sample.water,
                "{:?}",
                sample.heights
            );
        }
    }
}
