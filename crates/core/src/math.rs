//! Vector math utilities shared by the similarity engines

/// Dot product of two equal-length vectors.
///
/// Mismatched lengths yield 0.0 rather than panicking; callers compare
/// vectors drawn from the same feature space.
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm of a vector.
pub fn l2_norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of two vectors.
///
/// Defined as 0.0 when either vector has zero norm, so callers never divide
/// by zero on degenerate feature rows.
///
/// # Examples
///
/// ```
/// use cinerec_core::math::cosine_similarity;
///
/// let a = [1.0, 0.0];
/// let b = [0.0, 1.0];
/// assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
/// assert!(cosine_similarity(&a, &b).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot_product(a, b) / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_product(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_l2_norm() {
        assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
        assert_eq!(l2_norm(&[]), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [1.0, 1.0, 0.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = [0.0, 1.0, 2010.0];
        let b = [1.0, 0.0, 2009.0];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
