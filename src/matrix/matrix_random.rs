use rand::Rng;

use crate::matrix::matrix_dense::MatrixDense;

/// Matrix of random shape for demos and ad-hoc checks: 1 to 10 rows and
/// columns, entries drawn as whole numbers from 1 to 100.
pub fn random_matrix() -> MatrixDense<f64> {
    random_matrix_with(&mut rand::thread_rng())
}

/// Same distribution as [`random_matrix`], drawing from the given generator.
pub fn random_matrix_with(rng: &mut impl Rng) -> MatrixDense<f64> {
    let rows = rng.gen_range(1..=10);
    let cols = rng.gen_range(1..=10);
    let cells = (0..rows * cols)
        .map(|_| rng.gen_range(1..=100) as f64)
        .collect();

    MatrixDense { cols, rows, cells }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_matrix_bounds() {
        let mut rng = StdRng::seed_from_u64(1337);
        for _ in 0..50 {
            let m = random_matrix_with(&mut rng);
            assert!((1..=10).contains(&m.rows()));
            assert!((1..=10).contains(&m.cols()));
            for row in m.to_rows() {
                for x in row {
                    assert!((1.0..=100.0).contains(&x));
                    assert_eq!(x.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_random_matrix_reproducible() {
        let a = random_matrix_with(&mut StdRng::seed_from_u64(42));
        let b = random_matrix_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.to_rows(), b.to_rows());
    }
}
