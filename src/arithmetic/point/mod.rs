// One double-and-add driver serves both coordinate representations: the
// macro instantiates it for every point type with IDENTITY, double and
// geometric_add. Leading zero bits are free because an identity
// accumulator neither doubles nor adds.
macro_rules! impl_scalar_mul {
    ($point:ident) => {
        impl<C: Curve> $point<C> {
            /// Binary double-and-add over the scalar's bits, most
            /// significant first. Scalar zero and an identity input point
            /// short-circuit to the identity.
            pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
                if scalar.is_zero() || self.is_identity() {
                    return Self::IDENTITY;
                }
                let mut result = Self::IDENTITY;
                let mut i = Scalar::BITS;
                while i > 0 {
                    i -= 1;
                    if !result.is_identity() {
                        result = result.double();
                    }
                    if scalar.bit(i) {
                        result = if result.is_identity() {
                            *self
                        } else {
                            result.geometric_add(self)
                        };
                    }
                }
                result
            }
        }

        impl<C: Curve> std::ops::Mul<Scalar> for &$point<C> {
            type Output = $point<C>;
            fn mul(self, rhs: Scalar) -> Self::Output {
                self.scalar_mul(&rhs)
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Mul<&'b Scalar> for &'a $point<C> {
            type Output = $point<C>;
            fn mul(self, rhs: &'b Scalar) -> Self::Output {
                self.scalar_mul(rhs)
            }
        }
    };
}

mod affine;
mod jacobian;

pub use affine::AffinePoint;
pub use jacobian::JacobianPoint;
