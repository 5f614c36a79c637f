use bigint::{Encoding, NonZero, Split, U256, U512};

/// Residues modulo a fixed 256-bit constant.
///
/// `inverse` assumes `MODULUS` is prime (Fermat exponentiation); every
/// other operation only needs it to be nonzero.
pub trait Modular: Sized {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    fn pow(&self, exponent: &U256) -> Self {
        Self::new(pow_mod_u256(self.inner(), exponent, &Self::MODULUS))
    }

    /// Multiplicative inverse via Fermat's little theorem, a^(m - 2) mod m.
    ///
    /// Zero has no inverse; asking for one is a precondition violation and
    /// aborts immediately.
    fn inverse(&self) -> Self {
        assert!(
            self.inner() != &U256::ZERO,
            "modular inverse of zero is undefined"
        );
        self.pow(&Self::MODULUS.wrapping_sub(&U256::from_u8(2)))
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from((*modulus, U256::ZERO))).unwrap();
    // U512::from((lo, hi))
    let product = U512::from(lhs.mul_wide(rhs));
    // split the remainder result of a % b into a (lo, hi) U256 pair
    // 'hi' should always be zero because the modulus is an U256 number
    let (rem, _) = (product % mod512).split();
    rem
}

/// Square-and-multiply over the exponent's bits, most significant first.
pub fn pow_mod_u256(base: &U256, exponent: &U256, modulus: &U256) -> U256 {
    let mut result = U256::ONE;
    let mut i = U256::BIT_SIZE;
    while i > 0 {
        i -= 1;
        result = mul_mod_u256(&result, &result, modulus);
        if ((*exponent >> i) & U256::ONE) == U256::ONE {
            result = mul_mod_u256(&result, base, modulus);
        }
    }
    result
}
