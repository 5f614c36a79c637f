use secp_arithmetic::curve::Secp256k1;
use secp_arithmetic::parse::{AffineCase, AffineRecord};

use csv::ReaderBuilder;

#[test]
fn affine_addition_vectors() {
    let path = format!(
        "{}/test_vectors/affine_addition.csv",
        env!("CARGO_MANIFEST_DIR")
    );

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .expect("failed to open affine_addition.csv");

    for (row, record) in reader.deserialize::<AffineRecord>().enumerate() {
        let record = record.expect("malformed fixture row");
        let case: AffineCase<Secp256k1> = record
            .try_into()
            .unwrap_or_else(|e| panic!("bad fixture in row {}: {}", row, e));

        let sum = case.p.geometric_add(&case.q);
        assert_eq!(
            sum, case.expected,
            "row {} failed:\nP = {}\nQ = {}",
            row, case.p, case.q
        );
    }
}
