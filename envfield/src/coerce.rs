//! Type coercion table: converts raw environment strings into typed values
//!
//! Every type usable as a field target implements [`Coerce`], which bundles
//! three things: whether the type is a sequence, a zero-value factory (used
//! when a field has neither a default nor a `required` flag), and the
//! string-to-value conversion itself. Scalars implement [`Scalar`] and get
//! their [`Coerce`] implementation from the same table; `Vec<T>` and
//! `VecDeque<T>` over any scalar are the supported sequence types.

use std::collections::VecDeque;
use std::fmt;

/// Failure produced by a converter, before it is tied to a field key.
///
/// The field resolver wraps this into [`EnvError::Parse`](crate::EnvError::Parse)
/// together with the variable name, raw value and target type name.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CoerceError {
    message: String,
}

impl CoerceError {
    /// Create a coercion failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A scalar type that can be parsed from one environment string.
///
/// Implemented for the integer primitives, `f32`/`f64`, `String` and `bool`.
/// Custom scalars can be added by implementing this trait; `Vec<T>` and
/// `VecDeque<T>` then work for them automatically.
pub trait Scalar: Sized + fmt::Debug {
    /// The value used when a field is absent with no default and not required.
    fn zero() -> Self;

    /// Convert one raw string into the scalar.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError>;
}

/// A type resolvable as a field target: scalar or sequence of scalars.
///
/// This is the coercion descriptor of the resolution pipeline. It is
/// consulted before any environment access, so an unsupported type never
/// depends on what happens to be set.
pub trait Coerce: Sized + fmt::Debug {
    /// Whether the raw value is split on a separator before conversion.
    const IS_SEQUENCE: bool;

    /// Zero-value factory.
    fn zero() -> Self;

    /// The string form of [`Coerce::zero`], fed through the same pipeline
    /// (expansion, emptiness check, file indirection, parsing) as any other
    /// raw value.
    fn zero_string() -> String;

    /// Convert a raw string, splitting on `separator` first for sequences.
    fn coerce(raw: &str, separator: &str) -> Result<Self, CoerceError>;
}

macro_rules! impl_scalar_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn zero() -> Self {
                    <$ty>::default()
                }

                fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
                    raw.parse::<$ty>().map_err(|e| CoerceError::new(e.to_string()))
                }
            }
        )*
    };
}

impl_scalar_from_str!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Scalar for String {
    fn zero() -> Self {
        String::new()
    }

    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_string())
    }
}

const TRUE_TOKENS: [&str; 6] = ["y", "yes", "t", "true", "on", "1"];
const FALSE_TOKENS: [&str; 6] = ["n", "no", "f", "false", "off", "0"];

impl Scalar for bool {
    fn zero() -> Self {
        false
    }

    /// Case-insensitive match against the usual truthy/falsy tokens.
    fn from_env_str(raw: &str) -> Result<Self, CoerceError> {
        let value = raw.to_ascii_lowercase();

        if TRUE_TOKENS.contains(&value.as_str()) {
            Ok(true)
        } else if FALSE_TOKENS.contains(&value.as_str()) {
            Ok(false)
        } else {
            Err(CoerceError::new(format!("invalid truth value '{}'", raw)))
        }
    }
}

macro_rules! impl_coerce_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                const IS_SEQUENCE: bool = false;

                fn zero() -> Self {
                    <$ty as Scalar>::zero()
                }

                fn zero_string() -> String {
                    <$ty as Scalar>::zero().to_string()
                }

                fn coerce(raw: &str, _separator: &str) -> Result<Self, CoerceError> {
                    <$ty as Scalar>::from_env_str(raw)
                }
            }
        )*
    };
}

impl_coerce_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String, bool,
);

impl<T: Scalar> Coerce for Vec<T> {
    const IS_SEQUENCE: bool = true;

    fn zero() -> Self {
        Vec::new()
    }

    fn zero_string() -> String {
        String::new()
    }

    fn coerce(raw: &str, separator: &str) -> Result<Self, CoerceError> {
        raw.split(separator).map(T::from_env_str).collect()
    }
}

impl<T: Scalar> Coerce for VecDeque<T> {
    const IS_SEQUENCE: bool = true;

    fn zero() -> Self {
        VecDeque::new()
    }

    fn zero_string() -> String {
        String::new()
    }

    fn coerce(raw: &str, separator: &str) -> Result<Self, CoerceError> {
        raw.split(separator).map(T::from_env_str).collect()
    }
}
