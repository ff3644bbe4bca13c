use std::ops::{BitAnd, BitOr};

use crate::{
	error::{ErrorFormatExt, InvalidCast},
	Maybe,
};

// === Outcome === //

/// A successful outcome carrying `T`, or a failed outcome carrying `E`.
///
/// Construction is always explicitly tagged (through [`Outcome::success`], [`Outcome::failure`],
/// the variants themselves, or a std [`Result`]) so an `Outcome<T, T>` is never ambiguous about
/// which side it holds.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[must_use]
pub enum Outcome<T, E> {
	Success(T),
	Failure(E),
}

impl<T, E> Outcome<T, E> {
	pub const fn success(value: T) -> Self {
		Self::Success(value)
	}

	pub const fn failure(error: E) -> Self {
		Self::Failure(error)
	}

	pub fn from_result(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(error) => Self::Failure(error),
		}
	}

	/// Widens both payload types, keeping the discriminant and converting whichever side is live.
	pub fn cast<FT, FE>(from: Outcome<FT, FE>) -> Self
	where
		FT: Into<T>,
		FE: Into<E>,
	{
		match from {
			Outcome::Success(value) => Self::Success(value.into()),
			Outcome::Failure(error) => Self::Failure(error.into()),
		}
	}

	// === Queries === //

	pub const fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub const fn is_failure(&self) -> bool {
		!self.is_success()
	}

	pub const fn success_value(&self) -> Option<&T> {
		match self {
			Self::Success(value) => Some(value),
			Self::Failure(_) => None,
		}
	}

	pub const fn failure_value(&self) -> Option<&E> {
		match self {
			Self::Success(_) => None,
			Self::Failure(error) => Some(error),
		}
	}

	pub const fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Self::Success(value) => Outcome::Success(value),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Splits the outcome into its success flag and both slots. Exactly the slot matching the flag
	/// is populated.
	pub fn deconstruct(self) -> (bool, Option<T>, Option<E>) {
		match self {
			Self::Success(value) => (true, Some(value), None),
			Self::Failure(error) => (false, None, Some(error)),
		}
	}

	// === Conversions === //

	pub fn into_result(self) -> Result<T, E> {
		match self {
			Self::Success(value) => Ok(value),
			Self::Failure(error) => Err(error),
		}
	}

	pub fn into_success(self) -> Maybe<T> {
		match self {
			Self::Success(value) => Maybe::Value(value),
			Self::Failure(_) => Maybe::Empty,
		}
	}

	pub fn into_failure(self) -> Maybe<E> {
		match self {
			Self::Success(_) => Maybe::Empty,
			Self::Failure(error) => Maybe::Value(error),
		}
	}

	pub fn try_unwrap(self) -> Result<T, InvalidCast> {
		match self {
			Self::Success(value) => Ok(value),
			Self::Failure(_) => {
				log::trace!("attempted to narrow a failed `Outcome` to its value");
				Err(InvalidCast::FailureToValue)
			}
		}
	}

	pub fn try_unwrap_err(self) -> Result<E, InvalidCast> {
		match self {
			Self::Success(_) => {
				log::trace!("attempted to narrow a successful `Outcome` to its error");
				Err(InvalidCast::SuccessToError)
			}
			Self::Failure(error) => Ok(error),
		}
	}

	/// ## Panics
	///
	/// Panics with [`InvalidCast::FailureToValue`] if the outcome failed.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self.try_unwrap() {
			Ok(value) => value,
			Err(err) => err.raise(),
		}
	}

	/// ## Panics
	///
	/// Panics with [`InvalidCast::SuccessToError`] if the outcome succeeded.
	#[track_caller]
	pub fn unwrap_err(self) -> E {
		match self.try_unwrap_err() {
			Ok(error) => error,
			Err(err) => err.raise(),
		}
	}

	// === Combinators === //

	/// First success wins: yields `self` if it succeeded, otherwise `other`.
	pub fn or(self, other: Self) -> Self {
		match self {
			Self::Success(_) => self,
			Self::Failure(_) => other,
		}
	}

	/// Adopts `other` only if `self` succeeded, otherwise keeps the failure in `self`.
	pub fn and(self, other: Self) -> Self {
		match self {
			Self::Success(_) => other,
			Self::Failure(_) => self,
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(result: Result<T, E>) -> Self {
		Self::from_result(result)
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(outcome: Outcome<T, E>) -> Self {
		outcome.into_result()
	}
}

impl<T, E> BitOr for Outcome<T, E> {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.or(rhs)
	}
}

impl<T, E> BitAnd for Outcome<T, E> {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		self.and(rhs)
	}
}

#[cfg(test)]
mod tests {
	use std::panic;

	use super::*;

	fn init_seed() {
		let seed = fastrand::u64(..);
		fastrand::seed(seed);
		println!("Set seed to {seed}.");
	}

	fn random_outcome() -> Outcome<u32, i64> {
		if fastrand::bool() {
			Outcome::success(fastrand::u32(..))
		} else {
			Outcome::failure(fastrand::i64(..))
		}
	}

	fn panic_message<R>(f: impl FnOnce() -> R + panic::UnwindSafe) -> String {
		let payload = panic::catch_unwind(f).err().unwrap();
		payload.downcast_ref::<String>().unwrap().clone()
	}

	#[test]
	fn constructed_state() {
		let ok = Outcome::<i32, String>::success(42);
		assert!(ok.is_success());
		assert!(!ok.is_failure());
		assert_eq!(ok.success_value(), Some(&42));
		assert_eq!(ok.failure_value(), None);

		let err = Outcome::<i32, String>::failure("boom".to_string());
		assert!(!err.is_success());
		assert!(err.is_failure());
		assert_eq!(err.success_value(), None);
		assert_eq!(err.failure_value().map(String::as_str), Some("boom"));
	}

	#[test]
	fn same_payload_types_stay_distinct() {
		let ok = Outcome::<String, String>::success("fine".into());
		let err = Outcome::<String, String>::failure("fine".into());

		assert!(ok.is_success());
		assert!(err.is_failure());
		assert_ne!(ok, err);
	}

	#[test]
	fn deconstruct_agrees_with_queries() {
		init_seed();

		for _ in 0..1000 {
			let outcome = random_outcome();
			let (success, value, error) = outcome.deconstruct();

			assert_eq!(success, outcome.is_success());
			if success {
				assert_eq!(value.as_ref(), outcome.success_value());
				assert_eq!(error, None);
			} else {
				assert_eq!(error.as_ref(), outcome.failure_value());
				assert_eq!(value, None);
			}
		}
	}

	#[test]
	fn narrowing() {
		let ok = Outcome::<i32, &str>::success(42);
		let err = Outcome::<i32, &str>::failure("boom");

		assert_eq!(ok.try_unwrap(), Ok(42));
		assert_eq!(ok.unwrap(), 42);
		assert_eq!(ok.try_unwrap_err(), Err(InvalidCast::SuccessToError));

		assert_eq!(err.try_unwrap_err(), Ok("boom"));
		assert_eq!(err.unwrap_err(), "boom");
		assert_eq!(err.try_unwrap(), Err(InvalidCast::FailureToValue));

		assert_eq!(
			panic_message(|| err.unwrap()),
			"Error: cannot cast a failed result to a value",
		);
		assert_eq!(
			panic_message(|| ok.unwrap_err()),
			"Error: cannot cast a successful result to an error",
		);
	}

	#[test]
	fn logical_operators() {
		let ok = Outcome::<i32, &str>::success(42);
		let err = Outcome::<i32, &str>::failure("boom");

		assert_eq!(ok | err, Outcome::success(42));
		assert_eq!(err | ok, Outcome::success(42));
		assert_eq!(ok & err, Outcome::failure("boom"));
		assert_eq!(err & ok, Outcome::failure("boom"));

		let other_err = Outcome::<i32, &str>::failure("bang");
		assert_eq!(err | other_err, other_err);
		assert_eq!(err & other_err, err);
	}

	#[test]
	fn logical_operators_random() {
		init_seed();

		for _ in 0..1000 {
			let a = random_outcome();
			let b = random_outcome();

			assert_eq!(a | b, a.or(b));
			assert_eq!(a & b, a.and(b));

			if a.is_success() {
				assert_eq!(a | b, a);
				assert_eq!(a & b, b);
			} else {
				assert_eq!(a | b, b);
				assert_eq!(a & b, a);
			}
		}
	}

	#[test]
	fn covariant_cast() {
		let narrow = Outcome::<u16, u8>::success(300);
		assert_eq!(Outcome::<u32, u64>::cast(narrow), Outcome::success(300));

		let failed = Outcome::<u16, &str>::failure("bad input");
		let wide = Outcome::<i64, String>::cast(failed);
		assert_eq!(wide, Outcome::failure(String::from("bad input")));
	}

	#[test]
	fn result_bridge() {
		let from_ok: Outcome<u8, char> = Ok(1).into();
		let from_err: Outcome<u8, char> = Err('e').into();

		assert_eq!(from_ok, Outcome::success(1));
		assert_eq!(from_err, Outcome::failure('e'));
		assert_eq!(Result::from(from_ok), Ok(1));
		assert_eq!(from_err.into_result(), Err('e'));
	}

	#[test]
	fn projections() {
		let ok = Outcome::<u8, char>::success(1);
		let err = Outcome::<u8, char>::failure('e');

		assert_eq!(ok.into_success(), Maybe::new(1));
		assert_eq!(ok.into_failure(), Maybe::NONE);
		assert_eq!(err.into_success(), Maybe::NONE);
		assert_eq!(err.into_failure(), Maybe::new('e'));

		let owned = Outcome::<String, ()>::success("s".into());
		assert_eq!(owned.as_ref().success_value().map(|s| s.as_str()), Some("s"));
	}
}
