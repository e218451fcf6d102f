//! Aggregate functions
//!
//! Implements: Sum, Avg, Min, Max over a flattened sequence. Every function
//! reduces an empty sequence to `0.0`. Sums are compensated (Kahan).

use statexpr_ast::AggregateFn;

pub fn aggregate(function: AggregateFn, values: impl Iterator<Item = f64>) -> f64 {
    match function {
        AggregateFn::Sum => sum(values),
        AggregateFn::Avg => average(values),
        AggregateFn::Min => minimum(values),
        AggregateFn::Max => maximum(values),
    }
}

pub fn sum(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(CompensatedSum::default(), CompensatedSum::add).total()
}

pub fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (acc, count) = values.fold((CompensatedSum::default(), 0usize), |(acc, count), v| {
        (acc.add(v), count + 1)
    });
    if count == 0 { 0.0 } else { acc.total() / count as f64 }
}

/// Kahan summation, carrying the low-order bits lost by each addition
#[derive(Debug, Default, Clone, Copy)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
    /// Uncompensated running sum; decides the result once infinities are involved
    simple: f64,
}

impl CompensatedSum {
    fn add(self, value: f64) -> Self {
        let corrected = value - self.compensation;
        let sum = self.sum + corrected;
        Self {
            sum,
            compensation: (sum - self.sum) - corrected,
            simple: self.simple + value,
        }
    }

    fn total(self) -> f64 {
        let total = self.sum - self.compensation;
        if total.is_nan() && self.simple.is_infinite() {
            self.simple
        } else {
            total
        }
    }
}

/// Smallest value; any NaN makes the result NaN
pub fn minimum(values: impl Iterator<Item = f64>) -> f64 {
    extreme(values, f64::min)
}

/// Largest value; any NaN makes the result NaN
pub fn maximum(values: impl Iterator<Item = f64>) -> f64 {
    extreme(values, f64::max)
}

fn extreme(values: impl Iterator<Item = f64>, pick: fn(f64, f64) -> f64) -> f64 {
    values
        .reduce(|acc, v| if acc.is_nan() || v.is_nan() { f64::NAN } else { pick(acc, v) })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AggregateFn::Sum)]
    #[case(AggregateFn::Avg)]
    #[case(AggregateFn::Min)]
    #[case(AggregateFn::Max)]
    fn test_empty_is_zero(#[case] function: AggregateFn) {
        assert_eq!(aggregate(function, std::iter::empty()), 0.0);
    }

    #[rstest]
    #[case(AggregateFn::Sum, 6.0)]
    #[case(AggregateFn::Avg, 2.0)]
    #[case(AggregateFn::Min, -1.0)]
    #[case(AggregateFn::Max, 4.0)]
    fn test_reduce(#[case] function: AggregateFn, #[case] expected: f64) {
        assert_eq!(aggregate(function, [3.0, -1.0, 4.0].into_iter()), expected);
    }

    #[test]
    fn test_nan_propagates() {
        let values = [1.0, f64::NAN, 3.0];
        assert!(sum(values.into_iter()).is_nan());
        assert!(average(values.into_iter()).is_nan());
        assert!(minimum(values.into_iter()).is_nan());
        assert!(maximum(values.into_iter()).is_nan());
    }

    #[test]
    fn test_sum_compensates_rounding() {
        let tenths = std::iter::repeat_n(0.1, 10);
        assert_eq!(sum(tenths.clone()), 1.0);
        assert_eq!(average(tenths), 0.1);
    }

    #[test]
    fn test_sum_of_infinities() {
        assert_eq!(sum([f64::INFINITY, 1.0, f64::INFINITY].into_iter()), f64::INFINITY);
        assert!(sum([f64::INFINITY, f64::NEG_INFINITY].into_iter()).is_nan());
    }

    #[test]
    fn test_min_max_with_infinity() {
        let values = [f64::NEG_INFINITY, 0.0, f64::INFINITY];
        assert_eq!(minimum(values.into_iter()), f64::NEG_INFINITY);
        assert_eq!(maximum(values.into_iter()), f64::INFINITY);
    }
}
