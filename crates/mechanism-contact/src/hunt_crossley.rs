//! Hunt-Crossley normal contact force: a nonlinear spring whose restitution is
//! modulated by the penetration depth itself, so that energy dissipates on approach
//! and the force vanishes continuously at separation (unlike a plain linear
//! spring-damper, which can pull the bodies back together once penetration reverses
//! sign before the damping term has decayed).

use mechanism_spatial::scalar::Scalar;

/// `stiffness * penetration * (1 + dissipation * penetration_rate)`, clamped at zero
/// both for `penetration <= 0` (no contact) and for a transient negative factor (rapid
/// separation outpacing the dissipation term), so the model never reports an adhesive
/// pull.
pub fn hunt_crossley_force<T: Scalar>(
    stiffness: T,
    dissipation: T,
    penetration: T,
    penetration_rate: T,
) -> T {
    if penetration <= T::zero() {
        return T::zero();
    }
    let damped = T::one() + dissipation * penetration_rate;
    let damped = if damped < T::zero() { T::zero() } else { damped };
    let force = stiffness * penetration * damped;
    if force < T::zero() { T::zero() } else { force }
}
