//! The momentum matrix `A(q)`: `nv` world-frame wrench columns such that the whole
//! mechanism's momentum is `A(q) * v`. Column `k` (the joint owning velocity coordinate
//! `k`, with successor body `b_k`) equals `apply_inertia(crb_inertia[b_k],
//! subspace_world[k])`, since a unit rate on joint `k` propagates unchanged through every
//! body in `b_k`'s subtree and nowhere else, and `crb_inertia[b_k]` is exactly the
//! subtree's inertia, already accumulated by [`MechanismState`]'s lazy CRB pass.
//!
//! Grounded on the same accumulation [`crate::mass_matrix`] uses for `M = S^T A`; this
//! module exposes `A` itself rather than just its projection, for callers building a
//! centroidal momentum or momentum-rate term directly.

use crate::errors::AlgorithmsError;
use crate::spatial_ops::apply_inertia;
use mechanism_joint::JointModel;
use mechanism_model::BodyId;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{GeometricJacobian, SpatialVector};
use mechanism_state::MechanismState;

/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn momentum_matrix<T: Scalar>(
    state: &mut MechanismState<T>,
) -> Result<GeometricJacobian<T>, AlgorithmsError> {
    state.check_fresh()?;
    let nbodies = state.mechanism().nbodies();
    let nv = state.velocity().len();
    let q_layout = state.q_layout().clone();
    let v_layout = state.v_layout().clone();
    let q: Vec<T> = state.configuration().to_vec();

    let joints: Vec<Option<mechanism_model::Joint<T>>> = (0..nbodies)
        .map(|i| state.mechanism().parent_joint(BodyId::new(i as u32)).cloned())
        .collect();

    let mut a = GeometricJacobian::zero(nv);
    for body_index in 1..nbodies {
        let Some(joint) = &joints[body_index] else {
            continue;
        };
        let index = joint.id.index();
        let q_joint = &q[q_layout.range(index)];
        let subspace = joint.variant.motion_subspace(q_joint);
        let transform_to_root = state.transform_to_root_cached(BodyId::new(body_index as u32));
        let crb = state.crb_inertia_cached(BodyId::new(body_index as u32));
        let range = v_layout.range(index);
        for (col_index, col) in subspace.columns().iter().enumerate() {
            let world_col = transform_to_root.act_motion(col);
            a.update_column(range.start + col_index, apply_inertia(&crb, world_col));
        }
    }
    Ok(a)
}

/// The whole mechanism's momentum, `A(q) * v`, as a raw world-frame spatial vector.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn momentum<T: Scalar>(state: &mut MechanismState<T>) -> Result<SpatialVector<T>, AlgorithmsError> {
    let v: Vec<T> = state.velocity().to_vec();
    let a = momentum_matrix(state)?;
    Ok(a.mul_vector(&v))
}
