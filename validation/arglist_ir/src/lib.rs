//! Arglist IR - the data model for argument list validation.
//!
//! This crate contains the types exchanged between signature introspection
//! and the validator:
//! - `TypeTag` for declared parameter types
//! - `Value` for call-site argument values
//! - `ParameterSpec` for one formal parameter
//! - `Signature` for a validated, position-ordered parameter list
//!
//! # Design Philosophy
//!
//! Introspection and validation are decoupled. Whatever layer inspects a
//! callable builds `ParameterSpec` values ahead of time; `Signature::new`
//! checks the structural rules once, so validation itself never has to deal
//! with a malformed parameter list.

mod param;
mod signature;
mod type_tag;
mod value;

pub use param::ParameterSpec;
pub use signature::{Signature, SignatureError};
pub use type_tag::{ParseTypeTagError, TypeTag};
pub use value::{ObjectValue, Value};
