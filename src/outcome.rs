//! Result container
//!
//! [`Outcome`] holds exactly one of a success value or an error value. The
//! two variants are the only ways to build one, so it can never be empty or
//! hold both. Every extracting operation takes `self` by value: once the
//! inner value has been moved out the container is gone, and the compiler
//! rejects any later read.
//!
//! ```compile_fail
//! use tagbox::Outcome;
//!
//! let ok: Outcome<String, i32> = Outcome::Ok("bar".to_string());
//! let first = ok.unwrap();
//! let second = ok.unwrap(); // use of moved value
//! ```

use std::fmt::Display;

use crate::error::AccessError;
use crate::optional::Optional;

/// Exactly one of a success value `T` or an error value `E`
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "this `Outcome` may hold an error, which should be handled"]
pub enum Outcome<T, E> {
    /// Contains the success value
    Ok(T),
    /// Contains the error value
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Take the success value
    ///
    /// Fails with [`AccessError::UnwrapOnError`] on an `Err`.
    pub fn unwrap(self) -> Result<T, AccessError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(AccessError::UnwrapOnError),
        }
    }

    /// Take the success value, or `default` if this holds an error
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Take the error value
    ///
    /// Fails with [`AccessError::ErrOnSuccess`] on an `Ok`.
    pub fn err(self) -> Result<E, AccessError> {
        match self {
            Self::Ok(_) => Err(AccessError::ErrOnSuccess),
            Self::Err(error) => Ok(error),
        }
    }

    /// `self` if it holds a success value, otherwise `alternative`
    pub fn otherwise(self, alternative: Self) -> Self {
        if self.is_ok() {
            self
        } else {
            alternative
        }
    }

    /// Success value as an [`Optional`], dropping any error
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::of(value),
            Self::Err(_) => Optional::empty(),
        }
    }

    /// Error value as an [`Optional`], dropping any success value
    pub fn error(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::empty(),
            Self::Err(error) => Optional::of(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Take the success value, or escalate the error
    ///
    /// The error's display form is kept in [`AccessError::PropagatedError`],
    /// so `outcome.escalate()?` forwards a readable message to the caller.
    pub fn escalate(self) -> Result<T, AccessError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(AccessError::PropagatedError {
                message: error.to_string(),
            }),
        }
    }
}

impl Outcome<i32, String> {
    /// Wrap a C-style status code
    ///
    /// A negative status becomes an `Err` describing the last OS error.
    pub fn from_status(status: i32) -> Self {
        if status < 0 {
            Self::Err(std::io::Error::last_os_error().to_string())
        } else {
            Self::Ok(status)
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
