use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error, raised when a catalog entry is missing.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// Caller input that was rejected.
///
/// An operation that fails with this error leaves all state untouched.
#[derive(Error, Debug)]
#[error("invalid input: {message}")]
pub struct InvalidInputError {
    message: String,
}

impl InvalidInputError {
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidInputError`].
#[track_caller]
pub fn invalid_input_error<M>(message: M) -> Error
where
    M: Display,
{
    InvalidInputError::new(message).wrap_error()
}

/// Checks if the error was caused by rejected caller input.
pub fn is_invalid_input(error: &Error) -> bool {
    error.chain().any(|cause| cause.is::<InvalidInputError>())
}
