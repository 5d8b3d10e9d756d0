//! A 6×n geometric Jacobian stored as one [`SpatialVector`] per column, for the twist of
//! one arbitrary body relative to another along a tree path.

use crate::scalar::Scalar;
use crate::spatial::SpatialVector;

#[derive(Clone, Debug, PartialEq)]
pub struct GeometricJacobian<T: Scalar> {
    columns: Vec<SpatialVector<T>>,
}

impl<T: Scalar> GeometricJacobian<T> {
    #[must_use]
    pub fn zero(columns: usize) -> Self {
        Self {
            columns: vec![SpatialVector::zero(); columns],
        }
    }

    #[must_use]
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn update_column(&mut self, index: usize, column: SpatialVector<T>) {
        self.columns[index] = column;
    }

    #[must_use]
    pub fn column(&self, index: usize) -> SpatialVector<T> {
        self.columns[index]
    }

    #[must_use]
    pub fn columns(&self) -> &[SpatialVector<T>] {
        &self.columns
    }

    /// Multiplies by a velocity vector of matching width to produce a single spatial
    /// vector, `sum_i columns[i] * v[i]`.
    #[must_use]
    pub fn mul_vector(&self, v: &[T]) -> SpatialVector<T> {
        assert_eq!(v.len(), self.columns.len(), "velocity width must match jacobian width");
        let mut acc = SpatialVector::zero();
        for (column, &vi) in self.columns.iter().zip(v.iter()) {
            acc = acc + column.scale(vi);
        }
        acc
    }

    /// Appends another Jacobian's columns, used to concatenate motion subspaces along a
    /// tree path.
    pub fn extend(&mut self, other: &Self) {
        self.columns.extend_from_slice(&other.columns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector3::Vector3;

    #[test]
    fn mul_vector_sums_scaled_columns() {
        let mut jac = GeometricJacobian::zero(2);
        jac.update_column(0, SpatialVector::from_parts(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros()));
        jac.update_column(1, SpatialVector::from_parts(Vector3::new(0.0, 1.0, 0.0), Vector3::zeros()));
        let result = jac.mul_vector(&[2.0, 3.0]);
        assert_eq!(result.angular().x(), 2.0);
        assert_eq!(result.angular().y(), 3.0);
    }
}
