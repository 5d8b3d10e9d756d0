//! Composite rigid body mass matrix: `for i in 1..n { for j climbing i's ancestor chain
//! { M[i,j] = S_j^T * (Ic_i S_i) } }`. Every quantity here is already cached in the world
//! frame, so the climb is plain vector addition with no reprojection: `F = Ic_i * S_i`
//! stays expressed in the world frame for the whole climb, and `M[i,j] = S_j^T F` at each
//! ancestor `j` directly.

use crate::errors::AlgorithmsError;
use crate::spatial_ops::apply_inertia;
use mechanism_joint::JointModel;
use mechanism_model::BodyId;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::GeometricJacobian;
use mechanism_state::MechanismState;

/// The generalized mass matrix `M(q)`, flattened row-major, `nv x nv`.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn mass_matrix<T: Scalar>(state: &mut MechanismState<T>) -> Result<Vec<T>, AlgorithmsError> {
    state.check_fresh()?;
    let nbodies = state.mechanism().nbodies();
    let nv = state.velocity().len();
    let q_layout = state.q_layout().clone();
    let v_layout = state.v_layout().clone();
    let q: Vec<T> = state.configuration().to_vec();

    let joints: Vec<Option<mechanism_model::Joint<T>>> = (0..nbodies)
        .map(|i| state.mechanism().parent_joint(BodyId::new(i as u32)).cloned())
        .collect();

    let mut subspace_world: Vec<Option<GeometricJacobian<T>>> = vec![None; nbodies];
    for body_index in 1..nbodies {
        let Some(joint) = &joints[body_index] else {
            continue;
        };
        let index = joint.id.index();
        let q_joint = &q[q_layout.range(index)];
        let subspace = joint.variant.motion_subspace(q_joint);
        let transform_to_root = state.transform_to_root_cached(BodyId::new(body_index as u32));
        let mut world_columns = GeometricJacobian::zero(subspace.ncols());
        for col in 0..subspace.ncols() {
            world_columns.update_column(col, transform_to_root.act_motion(&subspace.column(col)));
        }
        subspace_world[body_index] = Some(world_columns);
    }

    let mut m = vec![T::zero(); nv * nv];
    for body_i in 1..nbodies {
        let Some(joint_i) = &joints[body_i] else {
            continue;
        };
        let Some(subspace_i) = &subspace_world[body_i] else {
            continue;
        };
        let range_i = v_layout.range(joint_i.id.index());
        let crb_i = state.crb_inertia_cached(BodyId::new(body_i as u32));
        let force_columns: Vec<_> = subspace_i
            .columns()
            .iter()
            .map(|col| apply_inertia(&crb_i, *col))
            .collect();

        let mut body_j = body_i;
        loop {
            let Some(subspace_j) = &subspace_world[body_j] else {
                break;
            };
            let joint_j = joints[body_j].as_ref().unwrap();
            let range_j = v_layout.range(joint_j.id.index());
            for (a, force) in force_columns.iter().enumerate() {
                for (b, col_j) in subspace_j.columns().iter().enumerate() {
                    let value = force.inner(col_j);
                    m[(range_i.start + a) * nv + (range_j.start + b)] = value;
                    m[(range_j.start + b) * nv + (range_i.start + a)] = value;
                }
            }
            let parent = joint_j.predecessor.index();
            if parent == mechanism_model::WORLD_ID {
                break;
            }
            body_j = parent;
        }
    }
    Ok(m)
}
