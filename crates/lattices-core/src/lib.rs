//! # lattices-core: Foundational Validators
//!
//! Building blocks for validating lattice diagram configurations before any
//! drawing code sees them. Every other crate in the workspace depends on
//! `lattices-core`; it depends on nothing internal.
//!
//! ## Layers
//!
//! 1. **Kinds** ([`kind`]): runtime kind of a `serde_json::Value` and sets
//!    of acceptable kinds.
//! 2. **Sign policy** ([`sign`]): the single definition of "positive /
//!    negative, zero allowed or not", shared by scalars and arrays.
//! 3. **Primitives** ([`primitive`]): kind + sign checks on one value.
//! 4. **Containers** ([`sequence`], [`array`]): typed lists of fixed or
//!    unbounded length; rectangular numeric arrays with shape, dtype, sign and
//!    uniqueness checks.
//!
//! ## Dual Mode
//!
//! Validators return [`Validation`]. Strict mode is `?`; query mode is
//! [`Query::holds`]. There is no flag-driven branching inside validators.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lattices-*` crates.
//! - Validators are pure: no I/O, no shared mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod array;
pub mod error;
pub mod kind;
pub mod primitive;
pub mod query;
pub mod sequence;
pub mod sign;

pub use array::{DType, Element, Ndim, NumericArray, Shape};
pub use error::{FailureKind, Validation, ValidationError};
pub use kind::{kind_of, KindSet, ValueKind};
pub use query::Query;
pub use sign::{Sign, SignPolicy};
