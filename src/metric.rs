//! Ready-made distance functions for [`Graph::find_node`](crate::Graph::find_node).
//!
//! Any `FnMut(&T, &T) -> f32` works as a distance; these cover the common
//! numeric cases. Inputs go through [`num_traits::ToPrimitive`], so integers,
//! floats and the `num` wrappers are all accepted. A value that cannot be
//! represented as `f32` turns the distance into NaN, which never matches.
//!
//! ```rust
//! use waygraph::{metric, Graph};
//!
//! let mut graph = Graph::new();
//! let dock = graph.add_node([0.0_f32, 0.0]);
//! graph.add_node([10.0, 10.0]);
//!
//! let hit = graph.find_node(&[0.3, 0.4], |a, b| metric::euclidean(a, b), 1.0);
//! assert_eq!(hit, Some(dock));
//! ```

use num_traits::ToPrimitive;

#[inline]
fn to_f32<N: ToPrimitive>(value: &N) -> f32 {
    value.to_f32().unwrap_or(f32::NAN)
}

/// `|a - b|` for scalar payloads.
pub fn absolute_difference<N: ToPrimitive>(a: &N, b: &N) -> f32 {
    (to_f32(a) - to_f32(b)).abs()
}

/// Straight-line distance between two coordinate slices.
///
/// Slices of different length are infinitely far apart.
pub fn euclidean<N: ToPrimitive>(a: &[N], b: &[N]) -> f32 {
    if a.len() != b.len() {
        return f32::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = to_f32(x) - to_f32(y);
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Sum of per-axis absolute differences between two coordinate slices.
///
/// Slices of different length are infinitely far apart.
pub fn manhattan<N: ToPrimitive>(a: &[N], b: &[N]) -> f32 {
    if a.len() != b.len() {
        return f32::INFINITY;
    }
    a.iter().zip(b).map(|(x, y)| absolute_difference(x, y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_difference_is_symmetric() {
        assert_eq!(absolute_difference(&3_i32, &7_i32), 4.0);
        assert_eq!(absolute_difference(&7_i32, &3_i32), 4.0);
        assert_eq!(absolute_difference(&1.5_f64, &1.5_f64), 0.0);
    }

    #[test]
    fn euclidean_three_four_five() {
        assert_eq!(euclidean(&[0.0_f64, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean::<u8>(&[], &[]), 0.0);
    }

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(&[1_i64, 1, 1], &[2, 3, -1]), 5.0);
    }

    #[test]
    fn mismatched_dimensions_never_match() {
        assert_eq!(euclidean(&[1.0_f32], &[1.0, 2.0]), f32::INFINITY);
        assert_eq!(manhattan(&[1_u32, 2], &[1]), f32::INFINITY);
    }
}
