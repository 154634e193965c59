//! Arglist Check - validates call-site argument lists.
//!
//! Given a `Signature` and the values supplied at a call site, the validator
//! reports every argument-level problem it finds instead of stopping at the
//! first:
//! - required parameters with no argument (`MissingArgument`)
//! - arguments whose value does not satisfy the declared type (`TypeMismatch`)
//! - surplus arguments when the signature has no variadic (`ExtraArgument`)
//!
//! # Example
//!
//! ```
//! use arglist_check::{args_list_errors, ArgErrorKind};
//! use arglist_ir::{ParameterSpec, Signature, TypeTag, Value};
//!
//! let signature = Signature::new(vec![
//!     ParameterSpec::required("name", 0).with_type(TypeTag::Str),
//!     ParameterSpec::variadic("rest", 1),
//! ])?;
//!
//! let errors = args_list_errors(&[Value::Int(1)], &signature);
//! assert_eq!(errors.len(), 1);
//! assert!(matches!(errors[0].kind, ArgErrorKind::TypeMismatch { .. }));
//! # Ok::<(), arglist_ir::SignatureError>(())
//! ```

mod config;
mod errors;
mod type_check;
mod validate;

pub use config::{ArityPolicy, CheckConfig, ConfigError, ARITY_ENV, STRICT_TYPES_ENV};
pub use errors::{
    extra_argument, missing_argument, signature_diagnostic, type_mismatch, ArgError, ArgErrorKind,
    ArgsListErrors,
};
pub use type_check::{TypeChecker, ValueTypeCheck, TRAVERSABLE};
pub use validate::{args_list_errors, ArgsListCheck, ArgsListValidator};
