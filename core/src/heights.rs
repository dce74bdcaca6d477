//! Validated column heights.

use thiserror::Error;

/// Errors raised while turning raw input into a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A column has a negative height.
    #[error("column {column} has negative height {height}")]
    NegativeHeight { column: usize, height: i64 },

    /// The occupancy grid would hold more cells than allowed.
    #[error("grid of {columns} columns by {rows} rows exceeds the limit of {limit} cells")]
    GridTooLarge {
        columns: usize,
        rows: u64,
        limit: usize,
    },
}

/// An ordered, immutable sequence of non-negative column heights.
///
/// Index is the column position, left to right. The only way to obtain one
/// from signed input is [`HeightSequence::new`], which rejects negatives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HeightSequence {
    heights: Vec<u64>,
}

impl HeightSequence {
    /// Validates raw heights, failing on the first negative value.
    pub fn new(raw: &[i64]) -> Result<Self, InputError> {
        let heights = raw
            .iter()
            .enumerate()
            .map(|(column, &height)| {
                u64::try_from(height).map_err(|_| InputError::NegativeHeight { column, height })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { heights })
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height of the tallest column, 0 when empty.
    pub fn max(&self) -> u64 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    pub fn get(&self, column: usize) -> Option<u64> {
        self.heights.get(column).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.heights
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + ExactSizeIterator + '_ {
        self.heights.iter().copied()
    }

    /// The same columns, right to left.
    pub fn reversed(&self) -> Self {
        Self {
            heights: self.heights.iter().rev().copied().collect(),
        }
    }
}

impl From<Vec<u64>> for HeightSequence {
    fn from(heights: Vec<u64>) -> Self {
        Self { heights }
    }
}

impl core::fmt::Display for HeightSequence {
    /// Heights joined by `", "`, e.g. `4, 0, 2`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, height) in self.heights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{height}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_non_negative() {
        let seq = HeightSequence::new(&[4, 0, 2]).unwrap();
        assert_eq!(seq.as_slice(), &[4, 0, 2]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.max(), 4);
    }

    #[test]
    fn test_empty_is_valid() {
        let seq = HeightSequence::new(&[]).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.max(), 0);
    }

    #[test]
    fn test_rejects_first_negative() {
        let err = HeightSequence::new(&[3, -1, 2, -7]).unwrap_err();
        assert_eq!(
            err,
            InputError::NegativeHeight {
                column: 1,
                height: -1
            }
        );
        assert_eq!(err.to_string(), "column 1 has negative height -1");
    }

    #[test]
    fn test_display_joins_with_commas() {
        let seq = HeightSequence::from(vec![3, 0, 3, 4, 2, 5]);
        assert_eq!(seq.to_string(), "3, 0, 3, 4, 2, 5");
        assert_eq!(HeightSequence::default().to_string(), "");
    }

    #[test]
    fn test_reversed() {
        let seq = HeightSequence::from(vec![1, 2, 0, 0]);
        assert_eq!(seq.reversed().as_slice(), &[0, 0, 2, 1]);
    }
}
