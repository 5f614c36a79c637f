use crate::U256;

/// Parameters of a short Weierstrass curve y² = x³ + b over a prime field.
///
/// Every formula in this crate assumes the a-coefficient is zero, so only
/// curves of this shape can implement the trait. The modulus is a
/// compile-time constant; nothing in the crate mutates or rebinds it.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync {
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_B: U256;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const ORDER: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const GENERATOR_X: U256 =
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    const COEFF_B: U256 = U256::from_u8(7);
}
