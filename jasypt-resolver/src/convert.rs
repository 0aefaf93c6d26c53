//! Conversion of resolved strings into the caller's requested type.

use crate::error::{ConversionError, ConversionResult};
use std::fmt::Display;
use std::str::FromStr;

/// Converts a resolved string into an arbitrary requested type.
pub trait ConversionService {
    /// Converts `value` to `T`, failing if it does not parse.
    fn convert<T>(&self, value: &str) -> ConversionResult<T>
    where
        T: FromStr,
        T::Err: Display;
}

/// Conversion through the target type's [`FromStr`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultConversionService;

impl ConversionService for DefaultConversionService {
    fn convert<T>(&self, value: &str) -> ConversionResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        value.parse::<T>().map_err(|e| ConversionError {
            value_len: value.len(),
            target: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
    }
}
