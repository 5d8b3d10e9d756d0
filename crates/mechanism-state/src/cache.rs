//! Per-body scratch arrays and their validity bits, so a repeated query after no
//! intervening mutation can return the cached value instead of recomputing it.

use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{SpatialAcceleration, SpatialInertia, Transform, Twist};

/// Scratch arrays for one mechanism, sized to `nbodies`/`njoints` at construction and
/// never reallocated afterwards.
#[derive(Clone, Debug)]
pub struct StateCache<T: Scalar> {
    pub(crate) joint_transforms: Vec<Transform<T>>,
    pub(crate) transforms_to_root: Vec<Transform<T>>,
    pub(crate) twist_wrt_world: Vec<Twist<T>>,
    pub(crate) bias_acceleration: Vec<SpatialAcceleration<T>>,
    pub(crate) inertia_in_world: Vec<SpatialInertia<T>>,
    pub(crate) crb_inertia: Vec<SpatialInertia<T>>,

    joint_transforms_valid: bool,
    transforms_to_root_valid: bool,
    twists_valid: bool,
    biases_valid: bool,
    inertias_in_world_valid: bool,
    crb_valid: bool,
}

impl<T: Scalar> StateCache<T> {
    #[must_use]
    pub fn new(njoints: usize, nbodies: usize, world_frame: mechanism_spatial::FrameId) -> Self {
        Self {
            joint_transforms: vec![Transform::identity(world_frame); njoints],
            transforms_to_root: vec![Transform::identity(world_frame); nbodies],
            twist_wrt_world: vec![
                Twist::zero(world_frame, world_frame, world_frame);
                nbodies
            ],
            bias_acceleration: vec![
                SpatialAcceleration::zero(world_frame, world_frame, world_frame);
                nbodies
            ],
            inertia_in_world: vec![SpatialInertia::zero(world_frame); nbodies],
            crb_inertia: vec![SpatialInertia::zero(world_frame); nbodies],
            joint_transforms_valid: false,
            transforms_to_root_valid: false,
            twists_valid: false,
            biases_valid: false,
            inertias_in_world_valid: false,
            crb_valid: false,
        }
    }

    #[must_use]
    pub fn joint_transforms_valid(&self) -> bool {
        self.joint_transforms_valid
    }

    pub fn mark_joint_transforms_valid(&mut self) {
        self.joint_transforms_valid = true;
    }

    #[must_use]
    pub fn transforms_to_root_valid(&self) -> bool {
        self.transforms_to_root_valid
    }

    pub fn mark_transforms_to_root_valid(&mut self) {
        self.transforms_to_root_valid = true;
    }

    #[must_use]
    pub fn twists_valid(&self) -> bool {
        self.twists_valid
    }

    pub fn mark_twists_valid(&mut self) {
        self.twists_valid = true;
    }

    #[must_use]
    pub fn biases_valid(&self) -> bool {
        self.biases_valid
    }

    pub fn mark_biases_valid(&mut self) {
        self.biases_valid = true;
    }

    #[must_use]
    pub fn inertias_in_world_valid(&self) -> bool {
        self.inertias_in_world_valid
    }

    pub fn mark_inertias_in_world_valid(&mut self) {
        self.inertias_in_world_valid = true;
    }

    #[must_use]
    pub fn crb_valid(&self) -> bool {
        self.crb_valid
    }

    pub fn mark_crb_valid(&mut self) {
        self.crb_valid = true;
    }

    /// Invalidates everything that depends on configuration: joint transforms,
    /// transforms-to-root, twists, biases, inertias-in-world, crb-inertias.
    pub fn invalidate_configuration_dependent(&mut self) {
        self.joint_transforms_valid = false;
        self.transforms_to_root_valid = false;
        self.twists_valid = false;
        self.biases_valid = false;
        self.inertias_in_world_valid = false;
        self.crb_valid = false;
    }

    /// Invalidates everything that depends on velocity but not configuration: twists,
    /// bias accelerations.
    pub fn invalidate_velocity_dependent(&mut self) {
        self.twists_valid = false;
        self.biases_valid = false;
    }
}
