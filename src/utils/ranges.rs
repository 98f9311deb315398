//! Range Intersection
//!
//! Shared overlap logic for the temperature and pH checks: the common window of
//! a set of tolerance ranges is [max of minimums, min of maximums].

use crate::data::ToleranceRange;

/// Result of intersecting several tolerance ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeOverlap {
    /// Common window exists; `width` may be zero
    Common { low: f64, high: f64, width: f64 },
    /// `low` (max of minimums) exceeds `high` (min of maximums)
    Disjoint { low: f64, high: f64 },
}

impl RangeOverlap {
    pub fn is_disjoint(&self) -> bool {
        matches!(self, RangeOverlap::Disjoint { .. })
    }
}

/// Intersect all ranges; `None` for an empty input
///
/// Uses only max/min folds, so the result does not depend on input order.
pub fn intersect_ranges<I>(ranges: I) -> Option<RangeOverlap>
where
    I: IntoIterator<Item = ToleranceRange>,
{
    let mut iter = ranges.into_iter();
    let first = iter.next()?;

    let (low, high) = iter.fold((first.min, first.max), |(lo, hi), r| {
        (lo.max(r.min), hi.min(r.max))
    });

    if low > high {
        Some(RangeOverlap::Disjoint { low, high })
    } else {
        Some(RangeOverlap::Common {
            low,
            high,
            width: high - low,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_disjoint_ranges() {
        let overlap = intersect_ranges([
            ToleranceRange::new(22.0, 26.0),
            ToleranceRange::new(27.0, 30.0),
        ])
        .unwrap();

        assert_eq!(overlap, RangeOverlap::Disjoint { low: 27.0, high: 26.0 });
    }

    #[test]
    fn test_common_window() {
        let overlap = intersect_ranges([
            ToleranceRange::new(20.0, 28.0),
            ToleranceRange::new(24.0, 30.0),
            ToleranceRange::new(22.0, 27.0),
        ])
        .unwrap();

        match overlap {
            RangeOverlap::Common { low, high, width } => {
                assert_relative_eq!(low, 24.0);
                assert_relative_eq!(high, 27.0);
                assert_relative_eq!(width, 3.0);
            }
            other => panic!("expected common window, got {:?}", other),
        }
    }

    #[test]
    fn test_touching_ranges_have_zero_width() {
        let overlap = intersect_ranges([
            ToleranceRange::new(6.0, 7.0),
            ToleranceRange::new(7.0, 8.0),
        ])
        .unwrap();

        assert!(!overlap.is_disjoint());
    }

    #[test]
    fn test_empty_input() {
        assert!(intersect_ranges(std::iter::empty()).is_none());
    }
}
