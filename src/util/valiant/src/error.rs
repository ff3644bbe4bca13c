//! The narrowing error kind plus error reporting built off the Rust standard library [Error] trait.

use std::{error::Error, fmt, thread};

use derive_where::derive_where;

use crate::{std_traits::ResultLike, Maybe};

// === InvalidCast === //

/// Raised when a container is narrowed to a payload its discriminant does not hold.
///
/// This is always a caller error: the discriminant should have been checked first with
/// [`Maybe::has_value`], [`Outcome::is_success`](crate::Outcome::is_success), or one of the
/// borrowing accessors.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, thiserror::Error)]
pub enum InvalidCast {
	#[error("cannot cast an empty option to a value")]
	EmptyToValue,
	#[error("cannot cast a failed result to a value")]
	FailureToValue,
	#[error("cannot cast a successful result to an error")]
	SuccessToError,
}

// === Error formatting === //

pub trait ErrorFormatExt: Error {
	fn format_error(&self) -> FormattedError<'_, Self> {
		FormattedError(self)
	}

	#[track_caller]
	fn raise(&self) -> ! {
		panic!("{}", self.format_error());
	}

	fn log(&self) {
		log::error!("{}", self.format_error());
	}

	#[track_caller]
	fn raise_unless_panicking(&self) {
		if !thread::panicking() {
			self.raise();
		} else {
			self.log();
		}
	}
}

impl<T: ?Sized + Error> ErrorFormatExt for T {}

#[derive_where(Copy, Clone)]
pub struct FormattedError<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized + Error> fmt::Display for FormattedError<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let target = self.0;

		// Write context
		write!(f, "Error: {}", target)?;

		// Write cause chain
		let mut cause_iter = target.source();
		if cause_iter.is_some() {
			writeln!(f, "\n\nCaused by:")?;
		}

		while let Some(cause) = cause_iter {
			for line in cause.to_string().lines() {
				writeln!(f, "\t{}", line)?;
			}
			cause_iter = cause.source();
		}

		Ok(())
	}
}

// === Outcome extensions === //

/// Reporting helpers for anything [`ResultLike`] whose error side is a standard [Error].
pub trait OutcomeExt: ResultLike {
	fn unwrap_pretty(self) -> Self::Success;

	/// Logs the error, if any, and hands back the success value as a [`Maybe`].
	fn log(self) -> Maybe<Self::Success>;

	fn unwrap_unless_panicking(self) -> Maybe<Self::Success>;
}

impl<R> OutcomeExt for R
where
	R: ResultLike,
	R::Error: Error,
{
	#[track_caller]
	fn unwrap_pretty(self) -> R::Success {
		match self.raw_result() {
			Ok(val) => val,
			Err(err) => err.raise(),
		}
	}

	fn log(self) -> Maybe<R::Success> {
		match self.raw_result() {
			Ok(val) => Maybe::Value(val),
			Err(err) => {
				ErrorFormatExt::log(&err);
				Maybe::Empty
			}
		}
	}

	#[track_caller]
	fn unwrap_unless_panicking(self) -> Maybe<R::Success> {
		match self.raw_result() {
			Ok(val) => Maybe::Value(val),
			Err(err) => {
				err.raise_unless_panicking();
				Maybe::Empty
			}
		}
	}
}
