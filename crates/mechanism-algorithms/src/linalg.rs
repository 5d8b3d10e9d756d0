//! Two small hand-rolled factorizations over [`Scalar`], used by
//! [`crate::forward_dynamics`] to solve `M v̇ = tau - c` without pulling in a dense linear
//! algebra crate just for one symmetric solve, and without losing genericity over
//! [`mechanism_spatial::scalar::Dual`]: [`Cholesky`] is tried first (cheaper, no explicit
//! `D` vector), falling back to [`Ldlt`] when a pivot is too close to zero to trust
//! `Cholesky`'s square root. [`MassMatrixSolve`] wires the two together the way
//! [`crate::forward_dynamics`] calls them.

use crate::errors::AlgorithmsError;
use mechanism_spatial::scalar::Scalar;

/// Below this pivot, [`Cholesky::factorize`] gives up rather than take a `sqrt` of a
/// near-zero (or, numerically, possibly slightly negative) value.
const NEAR_SINGULAR_PIVOT: f64 = 1e-9;

/// `M = L L^T` for a symmetric positive-definite `n x n` matrix stored row-major, `L`
/// lower triangular. Cheaper than [`Ldlt`] (no separate `D` vector, fewer multiplies),
/// but requires every pivot to stay comfortably positive since it takes their square
/// root directly; [`MassMatrixSolve::factorize`] is what falls back to [`Ldlt`] when
/// that is not the case.
pub struct Cholesky<T: Scalar> {
    n: usize,
    l: Vec<T>,
}

impl<T: Scalar> Cholesky<T> {
    /// # Errors
    /// Returns [`AlgorithmsError::SingularMassMatrix`] if a pivot is not comfortably
    /// positive (see [`NEAR_SINGULAR_PIVOT`]).
    pub fn factorize(m: &[T], n: usize) -> Result<Self, AlgorithmsError> {
        assert_eq!(m.len(), n * n, "matrix must be n x n");
        let threshold = T::from_f64(NEAR_SINGULAR_PIVOT);
        let mut l = vec![T::zero(); n * n];
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + l[j * n + k] * l[j * n + k];
            }
            let diag_sq = m[j * n + j] - sum;
            if diag_sq <= threshold {
                return Err(AlgorithmsError::SingularMassMatrix);
            }
            let diag = diag_sq.sqrt();
            l[j * n + j] = diag;
            for i in (j + 1)..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + l[i * n + k] * l[j * n + k];
                }
                l[i * n + j] = (m[i * n + j] - sum) / diag;
            }
        }
        Ok(Self { n, l })
    }

    /// Solves `M x = b` given the factorization, via forward substitution (`Ly = b`)
    /// and back substitution (`L^T x = y`).
    #[must_use]
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.n;
        let mut y = vec![T::zero(); n];
        for i in 0..n {
            let mut sum = b[i];
            for k in 0..i {
                sum = sum - self.l[i * n + k] * y[k];
            }
            y[i] = sum / self.l[i * n + i];
        }
        let mut x = vec![T::zero(); n];
        for i in (0..n).rev() {
            let mut sum = y[i];
            for k in (i + 1)..n {
                sum = sum - self.l[k * n + i] * x[k];
            }
            x[i] = sum / self.l[i * n + i];
        }
        x
    }
}

/// `M = L D L^T` for a symmetric `n x n` matrix stored row-major, `L` unit lower
/// triangular (diagonal implicit), `D` diagonal.
pub struct Ldlt<T: Scalar> {
    n: usize,
    l: Vec<T>,
    d: Vec<T>,
}

impl<T: Scalar> Ldlt<T> {
    /// # Errors
    /// Returns [`AlgorithmsError::SingularMassMatrix`] if a pivot is non-positive.
    pub fn factorize(m: &[T], n: usize) -> Result<Self, AlgorithmsError> {
        assert_eq!(m.len(), n * n, "matrix must be n x n");
        let mut l = vec![T::zero(); n * n];
        let mut d = vec![T::zero(); n];
        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + l[j * n + k] * l[j * n + k] * d[k];
            }
            let pivot = m[j * n + j] - sum;
            if pivot <= T::zero() {
                return Err(AlgorithmsError::SingularMassMatrix);
            }
            d[j] = pivot;
            l[j * n + j] = T::one();
            for i in (j + 1)..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + l[i * n + k] * l[j * n + k] * d[k];
                }
                l[i * n + j] = (m[i * n + j] - sum) / pivot;
            }
        }
        Ok(Self { n, l, d })
    }

    /// Solves `M x = b` given the factorization, via forward substitution (`Ly = b`),
    /// diagonal scaling (`z = D^-1 y`), and back substitution (`L^T x = z`).
    #[must_use]
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.n;
        let mut y = vec![T::zero(); n];
        for i in 0..n {
            let mut sum = b[i];
            for k in 0..i {
                sum = sum - self.l[i * n + k] * y[k];
            }
            y[i] = sum;
        }
        let mut z = vec![T::zero(); n];
        for i in 0..n {
            z[i] = y[i] / self.d[i];
        }
        let mut x = vec![T::zero(); n];
        for i in (0..n).rev() {
            let mut sum = z[i];
            for k in (i + 1)..n {
                sum = sum - self.l[k * n + i] * x[k];
            }
            x[i] = sum;
        }
        x
    }
}

/// The factorization [`crate::forward_dynamics`] actually solves the mass matrix with:
/// [`Cholesky`] first, falling back to [`Ldlt`] (and logging a `tracing::warn!`) when
/// Cholesky hits a pivot too close to zero to trust its square root.
pub enum MassMatrixSolve<T: Scalar> {
    Cholesky(Cholesky<T>),
    Ldlt(Ldlt<T>),
}

impl<T: Scalar> MassMatrixSolve<T> {
    /// # Errors
    /// Returns [`AlgorithmsError::SingularMassMatrix`] if both `Cholesky` and the `Ldlt`
    /// fallback fail to find a positive pivot.
    pub fn factorize(m: &[T], n: usize) -> Result<Self, AlgorithmsError> {
        match Cholesky::factorize(m, n) {
            Ok(cholesky) => Ok(Self::Cholesky(cholesky)),
            Err(_) => {
                tracing::warn!("mass matrix Cholesky factorization hit a near-singular pivot, falling back to LDLT");
                Ldlt::factorize(m, n).map(Self::Ldlt)
            }
        }
    }

    #[must_use]
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        match self {
            Self::Cholesky(cholesky) => cholesky.solve(b),
            Self::Ldlt(ldlt) => ldlt.solve(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_a_small_spd_system() {
        // M = [[4, 1], [1, 3]], x = [1, 2] => b = [6, 7]
        let m = [4.0, 1.0, 1.0, 3.0];
        let b = [6.0, 7.0];
        let ldlt = Ldlt::factorize(&m, 2).unwrap();
        let x = ldlt.solve(&b);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_a_non_positive_definite_matrix() {
        let m = [0.0, 0.0, 0.0, 1.0];
        assert!(Ldlt::<f64>::factorize(&m, 2).is_err());
    }

    #[test]
    fn cholesky_solves_the_same_spd_system_as_ldlt() {
        let m = [4.0, 1.0, 1.0, 3.0];
        let b = [6.0, 7.0];
        let cholesky = Cholesky::factorize(&m, 2).unwrap();
        let x = cholesky.solve(&b);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn mass_matrix_solve_falls_back_to_ldlt_on_a_near_singular_pivot() {
        // Pivot below `NEAR_SINGULAR_PIVOT` but still positive: Cholesky refuses it,
        // Ldlt accepts it.
        let m = [1e-12, 0.0, 0.0, 1.0];
        let solve = MassMatrixSolve::factorize(&m, 2).unwrap();
        assert!(matches!(solve, MassMatrixSolve::Ldlt(_)));
        let x = solve.solve(&[1e-12, 2.0]);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn mass_matrix_solve_uses_cholesky_when_well_conditioned() {
        let m = [4.0, 1.0, 1.0, 3.0];
        let solve = MassMatrixSolve::factorize(&m, 2).unwrap();
        assert!(matches!(solve, MassMatrixSolve::Cholesky(_)));
    }
}
