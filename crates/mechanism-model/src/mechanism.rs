//! The mechanism graph: bodies connected by tree joints (a spanning arborescence rooted
//! at the world) plus non-tree joints that introduce kinematic loops. A generation
//! counter bumps on every topology mutation, so a [`mechanism_state`] built against an
//! older generation can detect it went stale.

use crate::body::{BodyId, RigidBody};
use crate::errors::TopologyError;
use crate::frame::Frame;
use crate::segmented_vector::SegmentLayout;
use mechanism_joint::{JointModel, JointWrapper};
use mechanism_spatial::{frame::FrameId, scalar::Scalar, transform::Transform, vector3::Vector3};
use std::sync::LazyLock;

/// Dense identifier for a joint, assigned by the owning [`Mechanism`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JointId(u32);

impl JointId {
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "joint#{}", self.0)
    }
}

/// Index of the root (world) body.
pub const WORLD_ID: usize = 0;

/// Standard Earth surface gravity.
pub static STANDARD_GRAVITY: LazyLock<Vector3<f64>> =
    LazyLock::new(|| Vector3::new(0.0, 0.0, -9.80665));

#[derive(Clone, Debug)]
pub struct Joint<T: Scalar> {
    pub id: JointId,
    pub name: String,
    pub variant: JointWrapper<T>,
    pub predecessor: BodyId,
    pub successor: BodyId,
    /// The joint's fixed frame on the predecessor side.
    pub frame_before: FrameId,
    /// The joint's fixed frame on the successor side.
    pub frame_after: FrameId,
    /// Fixed transform carrying quantities expressed in `frame_after` (the successor's
    /// default frame) into `frame_before` (the predecessor's default frame), i.e. the
    /// joint's zero-configuration placement of the successor body relative to the
    /// predecessor.
    pub placement: Transform<T>,
}

impl<T: Scalar> Joint<T> {
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Joint<U> {
        Joint {
            id: self.id,
            name: self.name.clone(),
            variant: self.variant.cast(),
            predecessor: self.predecessor,
            successor: self.successor,
            frame_before: self.frame_before,
            frame_after: self.frame_after,
            placement: self.placement.cast(),
        }
    }
}

/// The mechanism graph.
#[derive(Clone, Debug)]
pub struct Mechanism<T: Scalar> {
    bodies: Vec<RigidBody<T>>,
    /// Tree joints, indexed by `JointId`; together they form a spanning arborescence
    /// rooted at `WORLD_ID`.
    tree_joints: Vec<Joint<T>>,
    /// Joints that close a kinematic loop; removing them leaves exactly the tree.
    non_tree_joints: Vec<Joint<T>>,
    frames: Vec<Frame<T>>,
    gravity: Vector3<T>,
    next_frame_id: u32,
    /// Bumped on every structural mutation; a `MechanismState` built for an older
    /// generation is stale and must be rejected with `StaleState`.
    generation: u64,
}

impl<T: Scalar> Mechanism<T> {
    #[must_use]
    pub fn new(gravity: Vector3<T>) -> Self {
        let root_frame = FrameId::new(0);
        let mut mechanism = Self {
            bodies: vec![RigidBody::root(root_frame)],
            tree_joints: Vec::new(),
            non_tree_joints: Vec::new(),
            frames: Vec::new(),
            gravity,
            next_frame_id: 1,
            generation: 0,
        };
        mechanism.bodies[WORLD_ID].default_frame = root_frame;
        mechanism
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn gravity(&self) -> Vector3<T> {
        self.gravity
    }

    #[must_use]
    pub fn root_body(&self) -> BodyId {
        BodyId::new(WORLD_ID as u32)
    }

    #[must_use]
    pub fn bodies(&self) -> &[RigidBody<T>] {
        &self.bodies
    }

    #[must_use]
    pub fn tree_joints(&self) -> &[Joint<T>] {
        &self.tree_joints
    }

    #[must_use]
    pub fn non_tree_joints(&self) -> &[Joint<T>] {
        &self.non_tree_joints
    }

    /// All joints, tree joints first, in id order.
    #[must_use]
    pub fn joints(&self) -> impl Iterator<Item = &Joint<T>> {
        self.tree_joints.iter().chain(self.non_tree_joints.iter())
    }

    #[must_use]
    pub fn njoints(&self) -> usize {
        self.tree_joints.len() + self.non_tree_joints.len()
    }

    #[must_use]
    pub fn nbodies(&self) -> usize {
        self.bodies.len()
    }

    /// The widths (`nq` or `nv`) of every tree joint, in id order, suitable for building
    /// a [`SegmentLayout`].
    #[must_use]
    pub fn configuration_layout(&self) -> SegmentLayout {
        SegmentLayout::from_widths(
            &self.tree_joints.iter().map(|j| j.variant.nq()).collect::<Vec<_>>(),
        )
    }

    #[must_use]
    pub fn velocity_layout(&self) -> SegmentLayout {
        SegmentLayout::from_widths(
            &self.tree_joints.iter().map(|j| j.variant.nv()).collect::<Vec<_>>(),
        )
    }

    fn allocate_frame(&mut self) -> FrameId {
        let id = FrameId::new(self.next_frame_id);
        self.next_frame_id += 1;
        id
    }

    /// Attaches a new body to `predecessor` through `joint`, returning the new body id
    /// and the id of the tree joint created.
    ///
    /// # Errors
    /// Returns [`TopologyError::UnknownBody`] if `predecessor` is not in the mechanism.
    pub fn attach(
        &mut self,
        predecessor: BodyId,
        name: impl Into<String>,
        joint: JointWrapper<T>,
        placement: Transform<T>,
        inertia: Option<mechanism_spatial::SpatialInertia<T>>,
    ) -> Result<(BodyId, JointId), TopologyError> {
        if predecessor.index() >= self.bodies.len() {
            return Err(TopologyError::UnknownBody(predecessor.index()));
        }
        let successor_frame = self.allocate_frame();
        let successor = BodyId::new(self.bodies.len() as u32);
        // Retag the caller-supplied inertia to the newly allocated frame: callers build
        // it standalone (e.g. via `from_com_inertia`) before the frame id exists.
        let inertia = inertia.map(|i| {
            mechanism_spatial::SpatialInertia::new(
                successor_frame,
                i.mass(),
                i.first_moment(),
                i.moment(),
            )
        });
        self.bodies.push(RigidBody::new(
            successor,
            name.into(),
            successor_frame,
            inertia,
        ));

        let joint_id = JointId::new(self.tree_joints.len() as u32);
        let predecessor_frame = self.bodies[predecessor.index()].default_frame;
        let placement = Transform::new(
            successor_frame,
            predecessor_frame,
            *placement.rotation(),
            placement.translation(),
        );
        self.tree_joints.push(Joint {
            id: joint_id,
            name: format!("joint_{}", joint_id.index()),
            variant: joint,
            predecessor,
            successor,
            frame_before: predecessor_frame,
            frame_after: successor_frame,
            placement,
        });
        self.generation += 1;
        Ok((successor, joint_id))
    }

    /// Adds a non-tree joint closing a kinematic loop between two already-attached bodies.
    ///
    /// # Errors
    /// Returns [`TopologyError::UnknownBody`] if either body is not in the mechanism.
    pub fn attach_loop_closure(
        &mut self,
        predecessor: BodyId,
        successor: BodyId,
        joint: JointWrapper<T>,
        placement: Transform<T>,
    ) -> Result<JointId, TopologyError> {
        if predecessor.index() >= self.bodies.len() {
            return Err(TopologyError::UnknownBody(predecessor.index()));
        }
        if successor.index() >= self.bodies.len() {
            return Err(TopologyError::UnknownBody(successor.index()));
        }
        let joint_id = JointId::new((self.tree_joints.len() + self.non_tree_joints.len()) as u32);
        let frame_before = self.bodies[predecessor.index()].default_frame;
        let frame_after = self.bodies[successor.index()].default_frame;
        let placement = Transform::new(
            frame_after,
            frame_before,
            *placement.rotation(),
            placement.translation(),
        );
        self.non_tree_joints.push(Joint {
            id: joint_id,
            name: format!("loop_{}", joint_id.index()),
            variant: joint,
            predecessor,
            successor,
            frame_before,
            frame_after,
            placement,
        });
        self.generation += 1;
        Ok(joint_id)
    }

    /// Removes every tree joint of type `Fixed`, welding its successor body's inertia
    /// into its predecessor and reindexing the remaining joints densely.
    ///
    /// A welded body keeps its `RigidBody` entry (so existing `BodyId`s stay valid) but
    /// loses its inbound tree joint; `parent_joint` returns `None` for it just as for the
    /// root, and tree traversal no longer reaches it. Callers that still need its pose
    /// should attach it as a frame on the predecessor body instead of querying it through
    /// `MechanismState`.
    pub fn remove_fixed_joints(&mut self) {
        let fixed: Vec<JointId> = self
            .tree_joints
            .iter()
            .filter(|j| j.variant.get_joint_type() == mechanism_joint::JointType::Fixed)
            .map(|j| j.id)
            .collect();
        if fixed.is_empty() {
            return;
        }
        // Weld each fixed joint's successor inertia (transformed into the predecessor's
        // frame) into the predecessor body, then drop the joint and keep the body as a
        // frame rather than a separate dynamic body.
        for joint_id in fixed {
            let Some(joint) = self.tree_joints.iter().find(|j| j.id == joint_id).cloned() else {
                continue;
            };
            let transform = joint.placement;
            if let Some(successor_inertia) =
                self.bodies[joint.successor.index()].inertia.take()
            {
                if let Ok(welded) = successor_inertia.transform_by(&transform) {
                    let predecessor_inertia = &mut self.bodies[joint.predecessor.index()].inertia;
                    *predecessor_inertia = Some(match predecessor_inertia.take() {
                        Some(existing) => existing.checked_add(&welded).unwrap_or(welded),
                        None => welded,
                    });
                }
            }
        }
        let retained: Vec<Joint<T>> = self
            .tree_joints
            .drain(..)
            .filter(|j| !fixed.contains(&j.id))
            .collect();
        self.tree_joints = retained
            .into_iter()
            .enumerate()
            .map(|(index, mut joint)| {
                joint.id = JointId::new(index as u32);
                joint
            })
            .collect();
        self.generation += 1;
    }

    #[must_use]
    pub fn successor(&self, joint: JointId) -> Option<BodyId> {
        self.joints().find(|j| j.id == joint).map(|j| j.successor)
    }

    #[must_use]
    pub fn predecessor(&self, joint: JointId) -> Option<BodyId> {
        self.joints().find(|j| j.id == joint).map(|j| j.predecessor)
    }

    /// Finds the tree joint whose successor is `body`, i.e. the joint connecting `body`
    /// to its parent. `None` for the root and for bodies welded away by
    /// `remove_fixed_joints` (which keeps the body entry but drops its inbound joint).
    #[must_use]
    pub fn parent_joint(&self, body: BodyId) -> Option<&Joint<T>> {
        self.tree_joints.iter().find(|j| j.successor == body)
    }

    /// The chain of tree joints from `body` up to the root, successor-to-predecessor order.
    fn ancestor_chain(&self, body: BodyId) -> Vec<JointId> {
        let mut chain = Vec::new();
        let mut current = body;
        while let Some(joint) = self.parent_joint(current) {
            chain.push(joint.id);
            current = joint.predecessor;
        }
        chain
    }

    /// The signed set of tree joints on the path from `body_a` to `body_b`: positive sign
    /// for joints traversed predecessor-to-successor, negative for the reverse.
    #[must_use]
    pub fn path(&self, body_a: BodyId, body_b: BodyId) -> Vec<(JointId, i8)> {
        let chain_a = self.ancestor_chain(body_a);
        let chain_b = self.ancestor_chain(body_b);
        let set_b: std::collections::HashSet<JointId> = chain_b.iter().copied().collect();
        let mut common_start = chain_a.len();
        for (i, joint) in chain_a.iter().enumerate() {
            if set_b.contains(joint) {
                common_start = i;
                break;
            }
        }
        let mut path: Vec<(JointId, i8)> = chain_a[..common_start].iter().map(|&j| (j, -1)).collect();
        let shared: Option<&JointId> = chain_a.get(common_start);
        let b_cut = shared.map_or(chain_b.len(), |j| {
            chain_b.iter().position(|x| x == j).unwrap_or(chain_b.len())
        });
        path.extend(chain_b[..b_cut].iter().rev().map(|&j| (j, 1)));
        path
    }

    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Mechanism<U> {
        Mechanism {
            bodies: self.bodies.iter().map(RigidBody::cast).collect(),
            tree_joints: self.tree_joints.iter().map(Joint::cast).collect(),
            non_tree_joints: self.non_tree_joints.iter().map(Joint::cast).collect(),
            frames: self.frames.iter().map(Frame::cast).collect(),
            gravity: self.gravity.cast(),
            next_frame_id: self.next_frame_id,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanism_joint::revolute::JointModelRevolute;

    fn double_pendulum() -> Mechanism<f64> {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let inertia = mechanism_spatial::SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::zeros(),
            mechanism_spatial::Symmetric3::identity(),
        );
        let (link1, _) = mechanism
            .attach(
                root,
                "link1",
                JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(mechanism.bodies()[WORLD_ID].default_frame),
                Some(inertia),
            )
            .unwrap();
        mechanism
            .attach(
                link1,
                "link2",
                JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(mechanism.bodies()[link1.index()].default_frame),
                Some(inertia),
            )
            .unwrap();
        mechanism
    }

    #[test]
    fn attaching_grows_bodies_and_joints() {
        let mechanism = double_pendulum();
        assert_eq!(mechanism.nbodies(), 3);
        assert_eq!(mechanism.njoints(), 2);
        assert_eq!(mechanism.generation(), 2);
    }

    #[test]
    fn path_from_root_to_leaf_is_forward_signed() {
        let mechanism = double_pendulum();
        let leaf = BodyId::new(2);
        let path = mechanism.path(mechanism.root_body(), leaf);
        assert_eq!(path.len(), 2);
        assert!(path.iter().all(|&(_, sign)| sign == 1));
    }

    #[test]
    fn path_between_siblings_round_trips_through_common_ancestor() {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let (child_a, _) = mechanism
            .attach(
                root,
                "a",
                JointWrapper::revolute(JointModelRevolute::new_rx()),
                Transform::identity(mechanism.bodies()[WORLD_ID].default_frame),
                None,
            )
            .unwrap();
        let (child_b, _) = mechanism
            .attach(
                root,
                "b",
                JointWrapper::revolute(JointModelRevolute::new_rx()),
                Transform::identity(mechanism.bodies()[WORLD_ID].default_frame),
                None,
            )
            .unwrap();
        let path = mechanism.path(child_a, child_b);
        assert_eq!(path.len(), 2);
    }
}
