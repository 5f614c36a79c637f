//! Conversion of fixture records into arithmetic values.
//!
//! The fixture tables are rows of decimal integers; an empty coordinate
//! pair stands for the point at infinity. Decimal literals are parsed
//! through `num_bigint` and must fit 256 bits, then get reduced into the
//! field by `FieldElement::new`.

use crate::arithmetic::{AffinePoint, FieldElement, JacobianPoint, Modular, Scalar};
use crate::curve::Curve;
use crate::U256;

use num_bigint::BigUint;
use serde::Deserialize;

/// One row of the affine addition table: P + Q = R.
#[derive(Clone, Debug, Deserialize)]
pub struct AffineRecord {
    pub px: Option<String>,
    pub py: Option<String>,
    pub qx: Option<String>,
    pub qy: Option<String>,
    pub rx: Option<String>,
    pub ry: Option<String>,
}

/// One row of the Jacobian addition table: P + Q = R, with the inputs as
/// projective triples and the expected sum in affine coordinates.
#[derive(Clone, Debug, Deserialize)]
pub struct JacobianRecord {
    pub px: String,
    pub py: String,
    pub pz: String,
    pub qx: String,
    pub qy: String,
    pub qz: String,
    pub rx: Option<String>,
    pub ry: Option<String>,
}

/// One row of the scalar multiplication table: k·P = R.
#[derive(Clone, Debug, Deserialize)]
pub struct ScalarRecord {
    pub k: String,
    pub px: String,
    pub py: String,
    pub rx: Option<String>,
    pub ry: Option<String>,
}

pub struct AffineCase<C: Curve> {
    pub p: AffinePoint<C>,
    pub q: AffinePoint<C>,
    pub expected: AffinePoint<C>,
}

pub struct JacobianCase<C: Curve> {
    pub p: JacobianPoint<C>,
    pub q: JacobianPoint<C>,
    pub expected: AffinePoint<C>,
}

pub struct ScalarCase<C: Curve> {
    pub k: Scalar,
    pub point: AffinePoint<C>,
    pub expected: AffinePoint<C>,
}

impl<C: Curve> TryFrom<AffineRecord> for AffineCase<C> {
    type Error = String;
    fn try_from(record: AffineRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            p: parse_affine_point(cell(&record.px), cell(&record.py))?,
            q: parse_affine_point(cell(&record.qx), cell(&record.qy))?,
            expected: parse_affine_point(cell(&record.rx), cell(&record.ry))?,
        })
    }
}

impl<C: Curve> TryFrom<JacobianRecord> for JacobianCase<C> {
    type Error = String;
    fn try_from(record: JacobianRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            p: parse_jacobian_point(&record.px, &record.py, &record.pz)?,
            q: parse_jacobian_point(&record.qx, &record.qy, &record.qz)?,
            expected: parse_affine_point(cell(&record.rx), cell(&record.ry))?,
        })
    }
}

impl<C: Curve> TryFrom<ScalarRecord> for ScalarCase<C> {
    type Error = String;
    fn try_from(record: ScalarRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            k: parse_scalar(&record.k)?,
            point: parse_affine_point(Some(&record.px), Some(&record.py))?,
            expected: parse_affine_point(cell(&record.rx), cell(&record.ry))?,
        })
    }
}

fn cell(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_field_element<C: Curve>(digits: &str) -> Result<FieldElement<C>, String> {
    Ok(FieldElement::new(parse_decimal(digits)?))
}

pub fn parse_scalar(digits: &str) -> Result<Scalar, String> {
    Ok(Scalar::new(parse_decimal(digits)?))
}

/// Both coordinates present makes a point, both absent the identity.
pub fn parse_affine_point<C: Curve>(
    x: Option<&str>,
    y: Option<&str>,
) -> Result<AffinePoint<C>, String> {
    match (x, y) {
        (None, None) => Ok(AffinePoint::IDENTITY),
        (Some(x), Some(y)) => Ok(AffinePoint::new(
            parse_field_element(x)?,
            parse_field_element(y)?,
        )),
        _ => Err("point needs both coordinates or neither".to_string()),
    }
}

pub fn parse_jacobian_point<C: Curve>(
    x: &str,
    y: &str,
    z: &str,
) -> Result<JacobianPoint<C>, String> {
    Ok(JacobianPoint::new(
        parse_field_element(x)?,
        parse_field_element(y)?,
        parse_field_element(z)?,
    ))
}

fn parse_decimal(digits: &str) -> Result<U256, String> {
    let number = BigUint::parse_bytes(digits.trim().as_bytes(), 10)
        .ok_or_else(|| format!("not a decimal literal: {digits}"))?;
    if number.bits() > 256 {
        return Err(format!("decimal literal exceeds 256 bits: {digits}"));
    }
    let bytes = number.to_bytes_be();
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(U256::from_be_slice(&padded))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::Secp256k1;

    #[test]
    fn decimal_literals() {
        assert_eq!(parse_decimal("0").unwrap(), U256::ZERO);
        assert_eq!(parse_decimal("255").unwrap(), U256::from_u8(255));
        assert_eq!(
            parse_decimal("18446744073709551616").unwrap(),
            U256::ONE << 64
        );
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("0x2a").is_err());
        assert!(parse_decimal("-3").is_err());
        // 2^256 does not fit
        let too_big = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(parse_decimal(too_big).is_err());
    }

    #[test]
    fn field_elements_reduce() {
        // the modulus itself reduces to zero
        let modulus =
            "115792089237316195423570985008687907853269984665640564039457584007908834671663";
        let fe = parse_field_element::<Secp256k1>(modulus).unwrap();
        assert_eq!(fe, FieldElement::ZERO);
    }

    #[test]
    fn affine_point_cells() {
        let identity = parse_affine_point::<Secp256k1>(None, None).unwrap();
        assert!(identity.is_identity());

        let point = parse_affine_point::<Secp256k1>(Some("1"), Some("2")).unwrap();
        let (x, y) = point.coordinates().unwrap();
        assert_eq!(x, &FieldElement::new(U256::ONE));
        assert_eq!(y, &FieldElement::new(U256::from_u8(2)));

        assert!(parse_affine_point::<Secp256k1>(Some("1"), None).is_err());
        assert!(parse_affine_point::<Secp256k1>(None, Some("2")).is_err());
    }

    #[test]
    fn scalar_record_conversion() {
        let record = ScalarRecord {
            k: "12".to_string(),
            px: "55066263022277343669578718895168534326250603453777594175500187360389116729240"
                .to_string(),
            py: "32670510020758816978083085130507043184471273380659243275938904335757337482424"
                .to_string(),
            rx: None,
            ry: None,
        };
        let case: ScalarCase<Secp256k1> = record.try_into().unwrap();
        assert_eq!(case.k, Scalar::from_u64(12));
        assert_eq!(case.point, AffinePoint::GENERATOR);
        assert!(case.expected.is_identity());
    }
}
