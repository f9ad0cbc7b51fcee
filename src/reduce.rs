//! Partial reduction: the unit of work dispatched per worker.

use crate::plan::Chunk;

/// Compute the partial dot product over one chunk.
///
/// Accumulates `a[i] * b[i]` in ascending index order within the chunk,
/// in double precision. An empty chunk yields `0.0`. NaN and infinity
/// propagate per IEEE-754; there is no compensated summation.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use parallel_dot::plan::Chunk;
/// use parallel_dot::reduce::partial_dot;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = partial_dot(&a, &b, Chunk { start: 0, end: 3 });
/// assert!((result - 32.0).abs() < 1e-12);
/// ```
pub fn partial_dot(a: &[f64], b: &[f64], chunk: Chunk) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    a[chunk.start..chunk.end]
        .iter()
        .zip(&b[chunk.start..chunk.end])
        .map(|(x, y)| x * y)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        let result = partial_dot(&a, &b, Chunk { start: 0, end: 4 });
        assert!((result - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_sub_range() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 2*6 + 3*7 = 33
        let result = partial_dot(&a, &b, Chunk { start: 1, end: 3 });
        assert!((result - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_chunk() {
        let a = [1.0, 2.0];
        let b = [3.0, 4.0];
        let result = partial_dot(&a, &b, Chunk { start: 1, end: 1 });
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let a = [1.0, f64::NAN];
        let b = [2.0, 3.0];
        let result = partial_dot(&a, &b, Chunk { start: 0, end: 2 });
        assert!(result.is_nan());
    }
}
