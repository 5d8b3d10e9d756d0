//! The **scalar contract** that every spatial, joint, and dynamics algorithm is generic over.
//!
//! Mechanisms are built once and then evaluated under several different numeric
//! representations of the same topology: plain `f64` for simulation, a forward-mode
//! dual number for automatic differentiation, or (in principle) a symbolic scalar.
//! [`Scalar`] fixes the minimal set of operations every one of those representations
//! must provide so that spatial algebra, joint kinematics, and the dynamics algorithms
//! never have to special-case a particular numeric type.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// The numeric contract required to evaluate mechanism kinematics and dynamics.
///
/// Implemented by [`f64`] and by [`Dual`], and satisfiable by any symbolic scalar
/// a caller wants to plug in through the cache registry (`mechanism-cache`).
pub trait Scalar:
    Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    /// The additive identity.
    fn zero() -> Self;
    /// The multiplicative identity.
    fn one() -> Self;
    /// Embeds a concrete `f64` literal into this scalar type.
    fn from_f64(value: f64) -> Self;
    /// Projects this scalar down to `f64`, discarding any derivative information.
    ///
    /// Used only for normalisation thresholds, comparisons, and display. Never used on
    /// a hot numeric path that should stay differentiable.
    fn to_f64(self) -> f64;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;

    /// `atan2(self, other)`, needed by configuration normalisation for a few joint variants.
    fn atan2(self, other: Self) -> Self;

    /// Converts this scalar value into another `Scalar` implementation by round-tripping
    /// through `f64`. Used by the cache registry to instantiate a mechanism's canonical
    /// `f64` parameters under a different scalar type (e.g. `Dual<f64>`) without carrying
    /// derivative information across the cast — the target's tangent, if any, starts at
    /// zero, exactly as a freshly-constructed constant would.
    fn cast<U: Scalar>(self) -> U {
        U::from_f64(self.to_f64())
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }
}

/// Forward-mode dual number with a single tangent lane: `value + tangent * epsilon`,
/// where `epsilon^2 = 0`.
///
/// Nesting `Dual<Dual<f64>>` gives second-order forward-mode derivatives; this is how
/// the scalar-generic cache registry (`mechanism-cache`) extracts Jacobians from
/// `momentum`/`dynamics!` without differentiating by hand.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dual<T: Scalar> {
    pub value: T,
    pub tangent: T,
}

impl<T: Scalar> Dual<T> {
    #[must_use]
    pub fn new(value: T, tangent: T) -> Self {
        Self { value, tangent }
    }

    /// A constant: zero tangent, for values that do not depend on the seeded variable.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// The seed variable itself: tangent one, used to mark "differentiate with respect to this".
    #[must_use]
    pub fn variable(value: T) -> Self {
        Self::new(value, T::one())
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Dual<T>;

    fn neg(self) -> Self::Output {
        Dual::new(-self.value, -self.tangent)
    }
}

impl<T: Scalar> Add for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual::new(self.value + rhs.value, self.tangent + rhs.tangent)
    }
}

impl<T: Scalar> Sub for Dual<T> {
    type Output = Dual<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dual::new(self.value - rhs.value, self.tangent - rhs.tangent)
    }
}

impl<T: Scalar> Mul for Dual<T> {
    type Output = Dual<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Dual::new(
            self.value * rhs.value,
            self.tangent * rhs.value + self.value * rhs.tangent,
        )
    }
}

impl<T: Scalar> Div for Dual<T> {
    type Output = Dual<T>;

    fn div(self, rhs: Self) -> Self::Output {
        Dual::new(
            self.value / rhs.value,
            (self.tangent * rhs.value - self.value * rhs.tangent) / (rhs.value * rhs.value),
        )
    }
}

impl<T: Scalar> AddAssign for Dual<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Dual<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Scalar> Scalar for Dual<T> {
    fn zero() -> Self {
        Dual::constant(T::zero())
    }

    fn one() -> Self {
        Dual::constant(T::one())
    }

    fn from_f64(value: f64) -> Self {
        Dual::constant(T::from_f64(value))
    }

    fn to_f64(self) -> f64 {
        self.value.to_f64()
    }

    fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        Dual::new(
            s,
            self.tangent / (T::from_f64(2.0) * s),
        )
    }

    fn sin(self) -> Self {
        Dual::new(self.value.sin(), self.tangent * self.value.cos())
    }

    fn cos(self) -> Self {
        Dual::new(self.value.cos(), -self.tangent * self.value.sin())
    }

    fn abs(self) -> Self {
        if self.value.to_f64() < 0.0 {
            -self
        } else {
            self
        }
    }

    fn is_finite(self) -> bool {
        self.value.is_finite() && self.tangent.is_finite()
    }

    fn atan2(self, other: Self) -> Self {
        // d/dt atan2(y, x) = (x*dy - y*dx) / (x^2 + y^2)
        let denom = other.value * other.value + self.value * self.value;
        Dual::new(
            self.value.atan2(other.value),
            (other.value * self.tangent - self.value * other.tangent) / denom,
        )
    }
}
