//! # cypher-value — Scalar Values for a Graph Query Engine
//!
//! The dynamically-typed scalar layer underneath filters, expression
//! evaluation and result serialization.
//!
//! ## Design Principles
//!
//! 1. **Closed sum type**: `Value` has one variant per `TypeTag`; exactly one
//!    variant (`String`) owns heap memory, and it is move-only
//! 2. **One global order**: `compare` is total over every pair of values
//!    (NULL < number < string), so sort, equality and filters agree
//! 3. **Pure conversions**: casting and parsing return a new `Value` or an
//!    `Error`, never a half-mutated one
//! 4. **Bounded output at the edge**: rendering goes through `fmt::Write`;
//!    fixed-capacity buffers are an adapter, never overflowed
//!
//! ## Quick Start
//!
//! ```rust
//! use cypher_value::{Value, TypeTag, ValueVector, cast, format, parse};
//!
//! # fn example() -> cypher_value::Result<()> {
//! let mut row = ValueVector::with_capacity(2);
//! row.push(parse::infer("42"));
//! row.push(Value::from("Ada"));
//!
//! // NULL < number < string
//! assert!(Value::Null < row[0]);
//! assert!(row[0] < row[1]);
//!
//! let as_double = cast::to_double(&row[0])?;
//! assert_eq!(as_double.tag(), TypeTag::Double);
//!
//! let mut buf = [0u8; 16];
//! let written = format::concat_into(row.as_slice(), ',', &mut buf);
//! assert_eq!(&buf[..written.written], b"42,Ada");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod compare;
pub mod cast;
pub mod parse;
pub mod format;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Value, TypeTag, ValueVector, Handle};

// ============================================================================
// Re-exports: Operations
// ============================================================================

pub use compare::compare;
pub use cast::{cast, FromValue};
pub use format::Written;
pub use config::ValueConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Parse error: cannot read {text:?} as {target}")]
    Parse { target: TypeTag, text: String },

    #[error("Cast error: cannot convert {from} to {to}")]
    Cast { from: TypeTag, to: TypeTag },

    #[error("Type error: expected {expected}, got {got}")]
    Type { expected: String, got: String },
}

pub type Result<T> = std::result::Result<T, Error>;
