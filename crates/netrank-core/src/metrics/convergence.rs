//! Vector helpers shared by the iterative solvers.
//!
//! All reductions add in slice order so results are reproducible.

/// L1 distance `Σ |a[i] - b[i]|`.
#[must_use]
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Divide every entry by the sum of all entries.
///
/// Left untouched when the sum is exactly zero.
pub fn normalize_sum(v: &mut [f64]) {
    let total: f64 = v.iter().sum();
    if total != 0.0 {
        for x in v.iter_mut() {
            *x /= total;
        }
    }
}

/// Normalize a vector to unit L2 norm. If the norm is zero, leave as-is.
pub fn normalize_l2(v: &mut [f64]) {
    let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1_distance_sums_absolute_differences() {
        assert!((l1_distance(&[1.0, 0.0, 2.0], &[0.5, 1.0, 2.0]) - 1.5).abs() < 1e-12);
        assert!(l1_distance(&[], &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_sum_divides_by_total() {
        let mut v = [1.0, 3.0];
        normalize_sum(&mut v);
        assert_eq!(v, [0.25, 0.75]);
    }

    #[test]
    fn normalize_sum_skips_zero_total() {
        let mut v = [0.0, 0.0, 0.0];
        normalize_sum(&mut v);
        assert_eq!(v, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn normalize_l2_gives_unit_norm() {
        let mut v = [3.0, 4.0];
        normalize_l2(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[1] - 0.8).abs() < 1e-12);

        let mut zero = [0.0, 0.0];
        normalize_l2(&mut zero);
        assert_eq!(zero, [0.0, 0.0]);
    }
}
