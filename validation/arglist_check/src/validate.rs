//! Argument list validation.
//!
//! Walks the parameters of a `Signature` in position order and compares
//! them against the supplied arguments:
//!
//! 1. Each non-variadic parameter consumes the argument at its position.
//!    A required parameter with no argument is `MissingArgument`; an optional
//!    one is skipped.
//! 2. A supplied argument is checked against the parameter's type.
//! 3. A trailing variadic parameter absorbs every remaining argument, zero or
//!    more, checking each against its element type.
//! 4. Without a variadic, surplus arguments are `ExtraArgument` under
//!    `ArityPolicy::Strict` and ignored under `ArityPolicy::Lenient`.
//!
//! Validation never fails: every mismatch is reported in the returned list,
//! in argument order.

use arglist_ir::{ParameterSpec, Signature, SignatureError, Value};

use crate::config::{ArityPolicy, CheckConfig};
use crate::errors::{extra_argument, missing_argument, ArgError, ArgsListErrors};
use crate::type_check::{TypeChecker, ValueTypeCheck};

/// The capability of validating an argument list against a signature.
pub trait ArgsListCheck {
    /// Every mismatch between `args` and `signature`; empty when the call is valid.
    fn args_list_errors(&self, args: &[Value], signature: &Signature) -> Vec<ArgError>;
}

/// Validates argument lists, delegating per-value type checks to `T`.
#[derive(Clone, Debug)]
pub struct ArgsListValidator<T = TypeChecker> {
    arity: ArityPolicy,
    types: T,
}

impl ArgsListValidator {
    /// Create a validator with the standard type rules.
    pub fn new(config: CheckConfig) -> Self {
        ArgsListValidator {
            arity: config.arity,
            types: TypeChecker::new(&config),
        }
    }
}

impl Default for ArgsListValidator {
    fn default() -> Self {
        ArgsListValidator::new(CheckConfig::default())
    }
}

impl<T: ValueTypeCheck> ArgsListValidator<T> {
    /// Create a validator with custom type rules.
    pub fn with_type_check(arity: ArityPolicy, types: T) -> Self {
        ArgsListValidator { arity, types }
    }

    pub fn arity(&self) -> ArityPolicy {
        self.arity
    }

    /// Every mismatch between `args` and `signature`, in argument order.
    #[tracing::instrument(level = "debug", skip_all, fields(
        args = args.len(),
        params = signature.len(),
        arity = %self.arity,
    ))]
    pub fn validate(&self, args: &[Value], signature: &Signature) -> Vec<ArgError> {
        let mut errors = Vec::new();

        for param in signature.params() {
            if param.is_variadic() {
                self.check_variadic(args, param, &mut errors);
                continue;
            }

            let position = param.position();
            match args.get(position) {
                Some(value) => {
                    if let Some(err) = self.types.value_type_error(value, param, position) {
                        errors.push(err);
                    }
                }
                None if !param.is_optional() => {
                    errors.push(missing_argument(param.name(), position));
                }
                None => {}
            }
        }

        if signature.variadic().is_none() && self.arity == ArityPolicy::Strict {
            let max = signature.len();
            for position in max..args.len() {
                errors.push(extra_argument(position, max));
            }
        }

        for err in &errors {
            tracing::trace!(code = %err.code(), position = err.position(), "{}", err.message);
        }
        tracing::debug!(errors = errors.len(), "argument list checked");
        errors
    }

    /// Build a signature from raw specs, then validate.
    ///
    /// Fails only when the specs themselves are malformed.
    pub fn validate_specs(
        &self,
        args: &[Value],
        specs: Vec<ParameterSpec>,
    ) -> Result<Vec<ArgError>, SignatureError> {
        let signature = Signature::new(specs)?;
        Ok(self.validate(args, &signature))
    }

    /// Like `validate`, as a `Result` for `?`-style callers.
    pub fn check(&self, args: &[Value], signature: &Signature) -> Result<(), ArgsListErrors> {
        let errors = self.validate(args, signature);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ArgsListErrors(errors))
        }
    }

    fn check_variadic(&self, args: &[Value], param: &ParameterSpec, errors: &mut Vec<ArgError>) {
        for (position, value) in args.iter().enumerate().skip(param.position()) {
            if let Some(err) = self.types.value_type_error(value, param, position) {
                errors.push(err);
            }
        }
    }
}

impl<T: ValueTypeCheck> ArgsListCheck for ArgsListValidator<T> {
    fn args_list_errors(&self, args: &[Value], signature: &Signature) -> Vec<ArgError> {
        self.validate(args, signature)
    }
}

/// Validate with the default configuration.
pub fn args_list_errors(args: &[Value], signature: &Signature) -> Vec<ArgError> {
    ArgsListValidator::new(CheckConfig::default()).validate(args, signature)
}
