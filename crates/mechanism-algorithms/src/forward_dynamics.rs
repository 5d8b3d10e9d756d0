//! Forward dynamics: `v̇` (and, for mechanisms with loop closures, the constraint
//! multipliers `λ`) from the mass matrix, bias forces, and applied joint torques.
//!
//! The unconstrained solve `M v̇ = tau - c` goes through [`crate::linalg::Ldlt`] rather
//! than a dense-linear-algebra crate's Cholesky, since it has to stay generic over
//! [`mechanism_spatial::scalar::Dual`]. Loop-closure (non-tree) joints are enforced via a
//! Lagrange-multiplier/Schur-complement projection on top of that unconstrained solve:
//! multipliers give an exact constraint at the acceleration level with no stabilization
//! gain to tune, at the cost of one extra `(6 nc) x (6 nc)` solve.
//!
//! Non-tree joints with `nv > 0` (partially free loop closures) are not supported: only
//! the common case of a fully rigid loop-closure joint (`nv == 0`, e.g. `Fixed`) is
//! enforced. A non-tree joint with `nv > 0` is skipped with a `tracing::warn!`, a
//! documented limitation rather than a silent one.

use crate::bias::bias_forces_with_external;
use crate::errors::AlgorithmsError;
use crate::jacobian::relative_jacobian;
use crate::linalg::{Ldlt, MassMatrixSolve};
use crate::mass_matrix::mass_matrix;
use crate::result::DynamicsResult;
use mechanism_joint::JointModel;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::SpatialVector;
use mechanism_state::MechanismState;

/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale, [`AlgorithmsError::WrongSize`]
/// if `tau` does not match the velocity width, [`AlgorithmsError::SingularMassMatrix`] if
/// the mass matrix is not positive definite, or [`AlgorithmsError::RedundantConstraints`]
/// if the loop-closure constraints are rank-deficient.
pub fn forward_dynamics<T: Scalar>(
    state: &mut MechanismState<T>,
    tau: &[T],
) -> Result<DynamicsResult<T>, AlgorithmsError> {
    forward_dynamics_with_external(state, tau, None)
}

/// `forward_dynamics`, additionally accepting a per-body world-frame external wrench
/// (contact forces, e.g.) that contributes to the generalized right-hand side the same
/// way joint torques do.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale, [`AlgorithmsError::WrongSize`]
/// if `tau` does not match the velocity width, [`AlgorithmsError::SingularMassMatrix`] if
/// the mass matrix is not positive definite, or [`AlgorithmsError::RedundantConstraints`]
/// if the loop-closure constraints are rank-deficient.
pub fn forward_dynamics_with_external<T: Scalar>(
    state: &mut MechanismState<T>,
    tau: &[T],
    external_wrenches: Option<&[SpatialVector<T>]>,
) -> Result<DynamicsResult<T>, AlgorithmsError> {
    let nv = state.velocity().len();
    if tau.len() != nv {
        return Err(mechanism_model::DimensionMismatch {
            name: "tau",
            expected: nv,
            got: tau.len(),
        }
        .into());
    }
    let m = mass_matrix(state)?;
    let c = bias_forces_with_external(state, external_wrenches)?;
    let rhs: Vec<T> = (0..nv).map(|i| tau[i] - c[i]).collect();
    let mass_solve = MassMatrixSolve::factorize(&m, nv)?;

    let constrained_joints: Vec<_> = state
        .mechanism()
        .non_tree_joints()
        .iter()
        .filter(|j| j.variant.nv() == 0)
        .cloned()
        .collect();
    for joint in state.mechanism().non_tree_joints() {
        if joint.variant.nv() > 0 {
            tracing::warn!(
                joint = %joint.name,
                "loop-closure joint has non-zero freedom; its constraint is not enforced"
            );
        }
    }

    if constrained_joints.is_empty() {
        return Ok(DynamicsResult::unconstrained(mass_solve.solve(&rhs)));
    }

    let nc = constrained_joints.len() * 6;
    let mut jc = vec![T::zero(); nc * nv];
    let mut bias_rel = vec![T::zero(); nc];
    for (row_block, joint) in constrained_joints.iter().enumerate() {
        let jac = relative_jacobian(state, joint.predecessor, joint.successor)?;
        for col in 0..nv {
            let v = jac.column(col);
            let base = row_block * 6;
            jc[(base) * nv + col] = v.angular().x();
            jc[(base + 1) * nv + col] = v.angular().y();
            jc[(base + 2) * nv + col] = v.angular().z();
            jc[(base + 3) * nv + col] = v.linear().x();
            jc[(base + 4) * nv + col] = v.linear().y();
            jc[(base + 5) * nv + col] = v.linear().z();
        }
        let bias_successor = state.bias_acceleration_cached(joint.successor).vector();
        let bias_predecessor = state.bias_acceleration_cached(joint.predecessor).vector();
        let rel = bias_successor - bias_predecessor;
        let base = row_block * 6;
        bias_rel[base] = rel.angular().x();
        bias_rel[base + 1] = rel.angular().y();
        bias_rel[base + 2] = rel.angular().z();
        bias_rel[base + 3] = rel.linear().x();
        bias_rel[base + 4] = rel.linear().y();
        bias_rel[base + 5] = rel.linear().z();
    }

    // M^-1 applied to (tau - c) and to every column of Jc^T.
    let minv_rhs = mass_solve.solve(&rhs);
    let mut minv_jct = vec![T::zero(); nv * nc];
    for row in 0..nc {
        let jc_row: Vec<T> = (0..nv).map(|col| jc[row * nv + col]).collect();
        let solved = mass_solve.solve(&jc_row);
        for col in 0..nv {
            minv_jct[col * nc + row] = solved[col];
        }
    }

    // Schur complement `S = Jc M^-1 Jc^T` and its right-hand side `Jc M^-1 (tau - c) + bias_rel`.
    let mut schur = vec![T::zero(); nc * nc];
    for i in 0..nc {
        for j in 0..nc {
            let mut sum = T::zero();
            for k in 0..nv {
                sum = sum + jc[i * nv + k] * minv_jct[k * nc + j];
            }
            schur[i * nc + j] = sum;
        }
    }
    let mut schur_rhs = vec![T::zero(); nc];
    for i in 0..nc {
        let mut sum = T::zero();
        for k in 0..nv {
            sum = sum + jc[i * nv + k] * minv_rhs[k];
        }
        schur_rhs[i] = sum + bias_rel[i];
    }

    let schur_ldlt =
        Ldlt::factorize(&schur, nc).map_err(|_| AlgorithmsError::RedundantConstraints)?;
    let lambda = schur_ldlt.solve(&schur_rhs);

    let mut vdot = minv_rhs;
    for col in 0..nv {
        let mut correction = T::zero();
        for row in 0..nc {
            correction = correction + minv_jct[col * nc + row] * lambda[row];
        }
        vdot[col] = vdot[col] - correction;
    }

    Ok(DynamicsResult::new(vdot, lambda))
}
