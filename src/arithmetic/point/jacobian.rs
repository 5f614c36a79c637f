use super::super::field::FieldElement;
use super::super::modular::Modular;
use super::super::scalar::Scalar;
use super::affine::AffinePoint;
use crate::curve::Curve;
use crate::U256;

use std::fmt;
use std::marker::PhantomData;

/// A curve point in Jacobian projective coordinates.
///
/// (X, Y, Z) stands for the affine point (X/Z², Y/Z³) when Z ≠ 0 and for
/// the identity when Z = 0. Many triples denote the same point; nothing
/// canonicalizes them except `into_affine`, which is also the only place
/// on this path that pays for a field inversion.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
    z: FieldElement<C>,
}

impl<C: Curve> fmt::Display for JacobianPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "x: {}", self.x.inner())?;
        writeln!(f, "y: {}", self.y.inner())?;
        writeln!(f, "z: {}", self.z.inner())
    }
}

impl<C: Curve> PartialEq for JacobianPoint<C> {
    /// Projective equality: representatives are compared after scaling
    /// both sides onto a common denominator, so (X, Y, Z) and
    /// (λ²X, λ³Y, λZ) come out equal.
    fn eq(&self, other: &Self) -> bool {
        if self.is_identity() || other.is_identity() {
            return self.is_identity() && other.is_identity();
        }
        let z1_sq = self.z * self.z;
        let z2_sq = other.z * other.z;
        let x_cross = self.x * z2_sq == other.x * z1_sq;
        let y_cross = self.y * z2_sq * other.z == other.y * z1_sq * self.z;
        x_cross && y_cross
    }
}

impl<C: Curve> From<AffinePoint<C>> for JacobianPoint<C> {
    fn from(point: AffinePoint<C>) -> Self {
        match point.coordinates() {
            None => Self::IDENTITY,
            Some((x, y)) => Self::new(*x, *y, FieldElement::ONE),
        }
    }
}

impl<C: Curve> From<&AffinePoint<C>> for JacobianPoint<C> {
    fn from(point: &AffinePoint<C>) -> Self {
        Self::from(*point)
    }
}

impl<C: Curve> From<JacobianPoint<C>> for AffinePoint<C> {
    fn from(point: JacobianPoint<C>) -> Self {
        point.into_affine()
    }
}

impl<C: Curve> std::ops::Neg for JacobianPoint<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: Curve> std::ops::Neg for &JacobianPoint<C> {
    type Output = JacobianPoint<C>;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<C: Curve> std::ops::Add for JacobianPoint<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b JacobianPoint<C>> for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;
    fn add(self, rhs: &'b JacobianPoint<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&JacobianPoint<C>> for JacobianPoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs
    }
}

impl<C: Curve> std::ops::Sub for JacobianPoint<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b JacobianPoint<C>> for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;
    fn sub(self, rhs: &'b JacobianPoint<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> JacobianPoint<C> {
    /// Canonical infinity representative.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub const GENERATOR: Self = Self {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
        z: FieldElement::ONE,
    };

    pub fn new(x: FieldElement<C>, y: FieldElement<C>, z: FieldElement<C>) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.z == FieldElement::ZERO
    }

    #[inline(always)]
    pub fn x(&self) -> &FieldElement<C> {
        &self.x
    }

    #[inline(always)]
    pub fn y(&self) -> &FieldElement<C> {
        &self.y
    }

    #[inline(always)]
    pub fn z(&self) -> &FieldElement<C> {
        &self.z
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        // Y² = X³ + b·Z⁶ is the a = 0 curve equation cleared of denominators
        let b = FieldElement::new(C::COEFF_B);
        let z_sq = self.z * self.z;
        let z_sixth = z_sq * z_sq * z_sq;
        self.y * self.y == self.x * self.x * self.x + b * z_sixth
    }

    /// Doubling without inversion. A vanishing Y means the tangent is
    /// vertical (2-torsion or infinity), which degenerates to infinity.
    pub fn double(&self) -> Self {
        if self.y == FieldElement::ZERO {
            return Self::IDENTITY;
        }

        let two = FieldElement::new(U256::from_u8(2));
        let three = FieldElement::new(U256::from_u8(3));
        let four = FieldElement::new(U256::from_u8(4));
        let eight = FieldElement::new(U256::from_u8(8));

        let y_sq = self.y * self.y;
        let y_fourth = y_sq * y_sq;
        let s = four * self.x * y_sq;
        let m = three * self.x * self.x;

        let x3 = m * m - (s + s);
        let y3 = m * (s - x3) - eight * y_fourth;
        let z3 = two * self.y * self.z;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Addition without inversion. The operands' coordinates are first
    /// scaled onto a common denominator (U and S terms); equal U with
    /// unequal S means mutual inverses, equal U and S means the operands
    /// are the same point and the tangent formulas take over.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }

        let z1_sq = self.z * self.z;
        let z2_sq = rhs.z * rhs.z;
        let z1_cb = z1_sq * self.z;
        let z2_cb = z2_sq * rhs.z;

        let u1 = self.x * z2_sq;
        let u2 = rhs.x * z1_sq;
        let s1 = self.y * z2_cb;
        let s2 = rhs.y * z1_cb;

        if u1 == u2 {
            if s1 != s2 {
                return Self::IDENTITY;
            }
            return self.double();
        }

        let h = u2 - u1;
        let r = s2 - s1;
        let h_sq = h * h;
        let h_cb = h_sq * h;
        let u1_h_sq = u1 * h_sq;

        let x3 = r * r - h_cb - (u1_h_sq + u1_h_sq);
        let y3 = r * (u1_h_sq - x3) - s1 * h_cb;
        let z3 = self.z * rhs.z * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Addition with the result normalized to affine, for callers that
    /// want a canonical answer out of a single operation.
    pub fn add_into_affine(&self, rhs: &Self) -> AffinePoint<C> {
        self.geometric_add(rhs).into_affine()
    }

    /// Normalize to affine coordinates. This is the one inversion on the
    /// Jacobian path, amortized over however many adds and doubles came
    /// before it.
    pub fn into_affine(self) -> AffinePoint<C> {
        if self.is_identity() {
            return AffinePoint::IDENTITY;
        }
        let z_inv = self.z.inverse();
        let z_inv_sq = z_inv * z_inv;
        let z_inv_cb = z_inv_sq * z_inv;
        AffinePoint::new(self.x * z_inv_sq, self.y * z_inv_cb)
    }

    pub fn to_affine(&self) -> AffinePoint<C> {
        (*self).into_affine()
    }
}

impl_scalar_mul!(JacobianPoint);
