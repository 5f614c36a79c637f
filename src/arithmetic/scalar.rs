use crate::U256;
use bigint::Encoding;

/// A scalar multiplication exponent.
///
/// Unlike field elements, scalars are plain non-negative integers: no
/// reduction against the curve order ever happens, so k larger than the
/// order multiplies exactly as written (the group is cyclic, the result
/// simply wraps). The double-and-add loop reads the bits big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(U256);

impl Scalar {
    pub const BITS: usize = U256::BIT_SIZE;
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn new(number: U256) -> Self {
        Self(number)
    }

    pub fn from_u64(number: u64) -> Self {
        Self(U256::from_u64(number))
    }

    pub fn inner(&self) -> &U256 {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == U256::ZERO
    }

    pub fn bit(&self, index: usize) -> bool {
        ((self.0 >> index) & U256::ONE) == U256::ONE
    }
}
