use super::super::field::FieldElement;
use super::super::modular::Modular;
use super::super::scalar::Scalar;
use crate::curve::Curve;
use crate::U256;

use std::fmt;
use std::marker::PhantomData;

/// A curve point in affine coordinates.
///
/// The group identity is an explicit variant so every call site has to
/// spell out what it does with infinity. Coordinates of the `Point`
/// variant are trusted to satisfy y² = x³ + b; nothing validates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffinePoint<C: Curve> {
    Identity,
    Point {
        x: FieldElement<C>,
        y: FieldElement<C>,
    },
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => writeln!(f, "infinity"),
            Self::Point { x, y } => {
                writeln!(f, "x: {}", x.inner())?;
                writeln!(f, "y: {}", y.inner())
            }
        }
    }
}

impl<C: Curve> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Self::Identity => Self::Identity,
            Self::Point { x, y } => Self::Point { x, y: -y },
        }
    }
}

impl<C: Curve> std::ops::Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<C: Curve> std::ops::Add for AffinePoint<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b AffinePoint<C>> for &'a AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn add(self, rhs: &'b AffinePoint<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&AffinePoint<C>> for AffinePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs
    }
}

impl<C: Curve> std::ops::Sub for AffinePoint<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b AffinePoint<C>> for &'a AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn sub(self, rhs: &'b AffinePoint<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> AffinePoint<C> {
    pub const GENERATOR: Self = Self::Point {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
    };

    pub const IDENTITY: Self = Self::Identity;

    pub fn new(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self::Point { x, y }
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// The coordinate pair, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&FieldElement<C>, &FieldElement<C>)> {
        match self {
            Self::Identity => None,
            Self::Point { x, y } => Some((x, y)),
        }
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Point { x, y } => {
                let b = FieldElement::new(C::COEFF_B);
                *y * *y == *x * *x * *x + b
            }
        }
    }

    pub fn double(&self) -> Self {
        self.geometric_add(self)
    }

    /// Chord-and-tangent addition. One function covers both cases: equal
    /// x-coordinates fall through to the tangent (doubling) slope once
    /// the mutual-inverse check has ruled out a vertical chord. Each call
    /// pays one field inversion for the slope denominator.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        let (x1, y1) = match self {
            Self::Identity => return *rhs,
            Self::Point { x, y } => (*x, *y),
        };
        let (x2, y2) = match rhs {
            Self::Identity => return *self,
            Self::Point { x, y } => (*x, *y),
        };

        // same x, opposite y: vertical chord through infinity
        if x1 == x2 && y1 + y2 == FieldElement::ZERO {
            return Self::Identity;
        }

        let lambda = if x1 != x2 {
            (y2 - y1) * (x2 - x1).inverse()
        } else {
            let three = FieldElement::new(U256::from_u8(3));
            let two = FieldElement::new(U256::from_u8(2));
            three * x1 * x1 * (two * y1).inverse()
        };

        let x3 = lambda * lambda - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;

        Self::Point { x: x3, y: y3 }
    }
}

impl_scalar_mul!(AffinePoint);

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::Secp256k1;

    type SecPoint = AffinePoint<Secp256k1>;
    type Fe = FieldElement<Secp256k1>;

    fn point(x_hex: &str, y_hex: &str) -> SecPoint {
        SecPoint::new(
            Fe::new(U256::from_be_hex(x_hex)),
            Fe::new(U256::from_be_hex(y_hex)),
        )
    }

    fn g2() -> SecPoint {
        point(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        )
    }

    fn g3() -> SecPoint {
        point(
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        )
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(SecPoint::GENERATOR.is_on_curve());
        assert!(SecPoint::IDENTITY.is_on_curve());
        assert!(g2().is_on_curve());

        let off_curve = point(
            "0000000000000000000000000000000000000000000000000000000000000003",
            "0000000000000000000000000000000000000000000000000000000000000004",
        );
        assert!(!off_curve.is_on_curve());
    }

    #[test]
    fn identity_law() {
        let p = g3();
        assert_eq!(p.geometric_add(&SecPoint::IDENTITY), p);
        assert_eq!(SecPoint::IDENTITY.geometric_add(&p), p);
        assert_eq!(
            SecPoint::IDENTITY + SecPoint::IDENTITY,
            SecPoint::IDENTITY
        );
    }

    #[test]
    fn inverse_law() {
        let p = g3();
        assert!(p.geometric_add(&-p).is_identity());
        assert!((SecPoint::GENERATOR - SecPoint::GENERATOR).is_identity());
    }

    #[test]
    fn chord_addition() {
        // G + 2G = 3G, distinct x-coordinates
        assert_eq!(SecPoint::GENERATOR.geometric_add(&g2()), g3());
        assert_eq!(g2() + SecPoint::GENERATOR, g3());
    }

    #[test]
    fn tangent_doubling() {
        assert_eq!(SecPoint::GENERATOR.double(), g2());
        assert_eq!(
            SecPoint::GENERATOR.geometric_add(&SecPoint::GENERATOR),
            g2()
        );
        let g4 = point(
            "e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13",
            "51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922",
        );
        assert_eq!(g2().double(), g4);
        assert!(g4.is_on_curve());
    }

    #[test]
    fn commutativity() {
        let p = g2();
        let q = g3();
        assert_eq!(p + q, q + p);
    }

    #[test]
    fn doubling_a_two_torsion_point_gives_identity() {
        // No secp256k1 point has y = 0; a synthetic one must land on the
        // vertical-chord branch, not the tangent slope.
        let two_torsion = SecPoint::new(Fe::new(U256::from_u8(5)), Fe::ZERO);
        assert!(two_torsion.double().is_identity());
    }
}
