mod field;
mod modular;
mod point;
mod scalar;

pub use field::FieldElement;
pub use modular::Modular;
pub use point::{AffinePoint, JacobianPoint};
pub use scalar::Scalar;
