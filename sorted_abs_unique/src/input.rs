//! Validation of raw command-line tokens before they reach the counter.

use tracing::debug;
use util::{parse_nice, parse_number, ParseFailure};

use crate::{first_inversion, Integer};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("The elements are not integers! `{}` is not an integer", .0.input)]
    NotIntegers(ParseFailure),

    #[error("The elements are not ordered! {previous} at position {index} is followed by {next}")]
    NotOrdered {
        index: usize,
        previous: Integer,
        next: Integer,
    },
}

impl InputError {
    pub fn exit_code(&self) -> u8 {
        match self {
            InputError::NotIntegers(_) => 1,
            InputError::NotOrdered { .. } => 2,
        }
    }
}

pub fn parse_values<I>(args: I) -> Result<Vec<Integer>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    args.into_iter()
        .map(|arg| parse_nice(arg.as_ref(), parse_number).map_err(InputError::NotIntegers))
        .collect()
}

/// Passes `values` through when they are sorted in non-decreasing order.
pub fn ordered(values: Vec<Integer>) -> Result<Vec<Integer>, InputError> {
    match first_inversion(&values) {
        Some((index, previous, next)) => Err(InputError::NotOrdered {
            index,
            previous,
            next,
        }),
        None => Ok(values),
    }
}

pub fn prepare<I>(args: I) -> Result<Vec<Integer>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let values = ordered(parse_values(args)?)?;
    debug!(len = values.len(), "input accepted");
    Ok(values)
}
