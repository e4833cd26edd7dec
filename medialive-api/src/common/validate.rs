use std::{fmt::Display, ops::RangeInclusive};

use crate::ModelError;

/// Client-side check of the documented numeric ranges and PID formats.
///
/// The service performs its own validation, so passing this check does not
/// guarantee a request is accepted. It only catches values that are certain
/// to be rejected.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ModelError> {
        self.iter().try_for_each(Validate::validate)
    }
}

pub(crate) fn check_range<T>(
    field: &'static str,
    value: Option<T>,
    range: RangeInclusive<T>,
) -> Result<(), ModelError>
where
    T: PartialOrd + Display + Copy,
{
    match value {
        Some(value) if !range.contains(&value) => Err(ModelError::OutOfRange {
            field,
            value: value.to_string(),
            expected: format!("a value in [{}, {}] range", range.start(), range.end()),
        }),
        _ => Ok(()),
    }
}

pub(crate) fn check_min<T>(field: &'static str, value: Option<T>, min: T) -> Result<(), ModelError>
where
    T: PartialOrd + Display + Copy,
{
    match value {
        Some(value) if value < min => Err(ModelError::OutOfRange {
            field,
            value: value.to_string(),
            expected: format!("a value not lower than {min}"),
        }),
        _ => Ok(()),
    }
}
