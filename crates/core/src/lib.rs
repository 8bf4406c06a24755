//! `depot-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the product code value object, its single-token and batch validation, and
//! the domain error model.

pub mod code;
pub mod error;
pub mod value_object;

pub use code::{ProductCode, parse_batch};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
