//! # Scalar Value Model
//!
//! The types every other module operates on: the `TypeTag` discriminant,
//! the `Value` sum type and the owning `ValueVector`.
//!
//! Design rule: pure data. No I/O, no state, no locking.

pub mod type_tag;
pub mod value;
pub mod vector;

pub use type_tag::TypeTag;
pub use value::{Value, Handle};
pub use vector::ValueVector;
