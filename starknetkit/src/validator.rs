use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;
use starknetkit_common::types::object::from_object;
use starknetkit_common::{RpcCall, SchemaError};
use tracing::debug;

use crate::arguments::{EnableOptions, ExecuteArguments, ExecuteOptions, StarknetMethodArguments};
use crate::errors::ValidationError;
use crate::methods::StarknetMethod;

/// Positional view over the raw arguments of one method call.
///
/// A trailing optional argument may be omitted, but not passed as `null`.
struct Positional<'a> {
    method: StarknetMethod,
    args: &'a [Value],
}

impl<'a> Positional<'a> {
    const fn new(method: StarknetMethod, args: &'a [Value]) -> Self {
        Self { method, args }
    }

    fn arity(&self, min: usize, max: usize) -> Result<(), ValidationError> {
        if (min..=max).contains(&self.args.len()) {
            return Ok(());
        }
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        Err(ValidationError::ArgumentCount {
            method: self.method,
            expected,
            actual: self.args.len(),
        })
    }

    fn invalid(&self, position: usize, reason: impl ToString) -> ValidationError {
        ValidationError::InvalidArgument {
            method: self.method,
            position,
            reason: reason.to_string(),
        }
    }

    fn parse<T: DeserializeOwned>(&self, position: usize, value: &Value) -> Result<T, ValidationError> {
        serde_json::from_value(value.clone()).map_err(|e| self.invalid(position, e))
    }

    fn parse_object<T: DeserializeOwned>(
        &self,
        position: usize,
        value: &Value,
    ) -> Result<T, ValidationError> {
        from_object(value.clone()).map_err(|e| self.invalid(position, e))
    }

    fn required<T: DeserializeOwned>(&self, position: usize) -> Result<T, ValidationError> {
        self.parse(position, self.args.get(position).unwrap_or(&Value::Null))
    }

    fn required_object<T: DeserializeOwned>(&self, position: usize) -> Result<T, ValidationError> {
        self.parse_object(position, self.args.get(position).unwrap_or(&Value::Null))
    }

    fn optional<T: DeserializeOwned>(&self, position: usize) -> Result<Option<T>, ValidationError> {
        self.args
            .get(position)
            .map(|value| self.parse(position, value))
            .transpose()
    }

    fn optional_object<T: DeserializeOwned>(
        &self,
        position: usize,
    ) -> Result<Option<T>, ValidationError> {
        self.args
            .get(position)
            .map(|value| self.parse_object(position, value))
            .transpose()
    }
}

/// Accepted shapes of the `execute` arguments, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecuteShape {
    /// `(calls, options?)`
    Current,
    /// `(calls, abi?, options?)`, the abi array is discarded.
    Legacy,
}

impl ExecuteShape {
    fn parse(self, args: &[Value]) -> Result<ExecuteArguments, ValidationError> {
        let positional = Positional::new(StarknetMethod::Execute, args);
        let options_position = match self {
            Self::Current => {
                positional.arity(1, 2)?;
                1
            }
            Self::Legacy => {
                positional.arity(1, 3)?;
                positional.optional::<Vec<Value>>(1)?;
                2
            }
        };
        Ok(ExecuteArguments {
            calls: positional.required(0)?,
            options: positional.optional_object::<ExecuteOptions>(options_position)?,
        })
    }
}

/// Validates and normalizes wallet method arguments.
///
/// By default `execute` also accepts the legacy `(calls, abi, options)`
/// shape when the current one does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentValidator {
    backward_compatible_execute: bool,
}

impl Default for ArgumentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentValidator {
    pub const fn new() -> Self {
        Self {
            backward_compatible_execute: true,
        }
    }

    /// Only accepts the current `execute` shape.
    pub const fn strict() -> Self {
        Self {
            backward_compatible_execute: false,
        }
    }

    pub const fn backward_compatible_execute(&self) -> bool {
        self.backward_compatible_execute
    }

    /// Looks the method up by its wire name before validating.
    pub fn validate_named(
        &self,
        method: &str,
        args: &[Value],
    ) -> Result<StarknetMethodArguments, ValidationError> {
        let method = StarknetMethod::from_str(method)
            .map_err(|_| ValidationError::UnknownMethod(method.to_string()))?;
        self.validate(method, args)
    }

    pub fn validate(
        &self,
        method: StarknetMethod,
        args: &[Value],
    ) -> Result<StarknetMethodArguments, ValidationError> {
        let result = self.validate_inner(method, args);
        match &result {
            Ok(_) => debug!(%method, "wallet method arguments accepted"),
            Err(e) => debug!(%method, error = %e, "wallet method arguments rejected"),
        }
        result
    }

    fn validate_inner(
        &self,
        method: StarknetMethod,
        args: &[Value],
    ) -> Result<StarknetMethodArguments, ValidationError> {
        let positional = Positional::new(method, args);
        match method {
            StarknetMethod::Enable => {
                positional.arity(0, 1)?;
                positional
                    .optional_object::<EnableOptions>(0)
                    .map(StarknetMethodArguments::Enable)
            }
            StarknetMethod::AddStarknetChain => {
                positional.arity(1, 1)?;
                positional
                    .required_object(0)
                    .map(StarknetMethodArguments::AddStarknetChain)
            }
            StarknetMethod::SwitchStarknetChain => {
                positional.arity(1, 1)?;
                positional
                    .required_object(0)
                    .map(StarknetMethodArguments::SwitchStarknetChain)
            }
            StarknetMethod::WatchAsset => {
                positional.arity(1, 1)?;
                positional
                    .required_object(0)
                    .map(StarknetMethodArguments::WatchAsset)
            }
            StarknetMethod::RequestAccounts => {
                positional.arity(1, 1)?;
                positional
                    .required_object(0)
                    .map(StarknetMethodArguments::RequestAccounts)
            }
            StarknetMethod::Execute => self
                .validate_execute(args)
                .map(StarknetMethodArguments::Execute),
            StarknetMethod::SignMessage => {
                positional.arity(1, 1)?;
                positional
                    .required_object(0)
                    .map(StarknetMethodArguments::SignMessage)
            }
        }
    }

    fn validate_execute(&self, args: &[Value]) -> Result<ExecuteArguments, ValidationError> {
        let shapes: &[ExecuteShape] = if self.backward_compatible_execute {
            &[ExecuteShape::Current, ExecuteShape::Legacy]
        } else {
            &[ExecuteShape::Current]
        };

        let mut attempts = Vec::with_capacity(shapes.len());
        for shape in shapes {
            match shape.parse(args) {
                Ok(arguments) => {
                    if *shape == ExecuteShape::Legacy {
                        debug!("execute arguments matched the legacy (calls, abi, options) shape");
                    }
                    return Ok(arguments);
                }
                Err(e) => attempts.push(e),
            }
        }

        if attempts.len() == 1
            && let Some(e) = attempts.pop()
        {
            return Err(e);
        }
        Err(ValidationError::NoMatchingShape {
            method: StarknetMethod::Execute,
            attempts,
        })
    }
}

/// Validates with the default, backward compatible, validator.
pub fn validate(
    method: StarknetMethod,
    args: &[Value],
) -> Result<StarknetMethodArguments, ValidationError> {
    ArgumentValidator::default().validate(method, args)
}

/// Normalizes a non-empty array of wire RPC calls.
///
/// `offchainSessionDetails` only survives on `use_offchain_session` calls.
pub fn parse_rpc_calls(value: Value) -> Result<Vec<RpcCall>, SchemaError> {
    let calls = RpcCall::parse_many(value)?;
    debug!(count = calls.len(), "rpc calls normalized");
    Ok(calls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrorKind;
    use rstest::rstest;
    use serde_json::json;
    use tracing_test::traced_test;

    #[rstest]
    #[case(vec![], 0, 1, true)]
    #[case(vec![json!(1)], 1, 1, true)]
    #[case(vec![json!(1), json!(2)], 1, 1, false)]
    #[case(vec![json!(1), json!(2), json!(3)], 1, 2, false)]
    fn test_arity(
        #[case] args: Vec<Value>,
        #[case] min: usize,
        #[case] max: usize,
        #[case] ok: bool,
    ) {
        let positional = Positional::new(StarknetMethod::Enable, &args);
        assert_eq!(positional.arity(min, max).is_ok(), ok);
    }

    #[test]
    fn test_optional_may_be_omitted_but_not_null() {
        let args = vec![json!(null)];
        let positional = Positional::new(StarknetMethod::Enable, &args);
        assert_eq!(positional.optional_object::<EnableOptions>(3).unwrap(), None);

        let err = positional.optional_object::<EnableOptions>(0).unwrap_err();
        assert_eq!(err.position(), Some(0));
        assert!(positional.optional::<Vec<Value>>(0).is_err());
    }

    #[test]
    fn test_required_reports_position() {
        let args = vec![json!({ "chainId": 1 })];
        let err = ArgumentValidator::new()
            .validate(StarknetMethod::SwitchStarknetChain, &args)
            .unwrap_err();
        assert_eq!(err.position(), Some(0));
        assert_eq!(err.method(), Some(StarknetMethod::SwitchStarknetChain));
        assert_eq!(err.kind(), ValidationErrorKind::FieldConstraint);
    }

    #[test]
    fn test_strict_validator_returns_the_single_attempt() {
        let args = vec![json!([{ "contractAddress": "0x1", "entrypoint": "a" }]), json!([]), json!({})];
        let err = ArgumentValidator::strict()
            .validate(StarknetMethod::Execute, &args)
            .unwrap_err();
        assert!(matches!(err, ValidationError::ArgumentCount { actual: 3, .. }));
    }

    #[test]
    fn test_legacy_shape_requires_an_array_abi() {
        let args = vec![
            json!({ "contractAddress": "0x1", "entrypoint": "a" }),
            json!("abi"),
            json!({}),
        ];
        let err = validate(StarknetMethod::Execute, &args).unwrap_err();
        let ValidationError::NoMatchingShape { attempts, .. } = &err else {
            panic!("unexpected error {err:?}");
        };
        assert_eq!(attempts.len(), 2);
        assert_eq!(err.kind(), ValidationErrorKind::ShapeMismatch);
    }

    #[test]
    #[traced_test]
    fn test_legacy_shape_is_logged() {
        let args = vec![
            json!({ "contractAddress": "0x1", "entrypoint": "a" }),
            json!([]),
            json!({ "nonce": "5" }),
        ];
        assert!(validate(StarknetMethod::Execute, &args).is_ok());
        assert!(logs_contain("legacy (calls, abi, options) shape"));
    }

    #[test]
    fn test_unknown_method() {
        let err = ArgumentValidator::new()
            .validate_named("getLoginStatus", &[])
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownMethod("getLoginStatus".into()));
        assert_eq!(err.kind(), ValidationErrorKind::UnknownMethod);
        assert_eq!(err.method(), None);
    }
}
