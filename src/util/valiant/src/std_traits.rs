use crate::{Maybe, Outcome};

// === OptionLike === //

pub trait OptionLike: Sized {
	type Value;

	fn raw_option(self) -> Option<Self::Value>;
}

impl<T> OptionLike for Option<T> {
	type Value = T;

	fn raw_option(self) -> Option<Self::Value> {
		self
	}
}

impl<T, E> OptionLike for Result<T, E> {
	type Value = T;

	fn raw_option(self) -> Option<Self::Value> {
		self.ok()
	}
}

impl<T> OptionLike for Maybe<T> {
	type Value = T;

	fn raw_option(self) -> Option<T> {
		self.into_option()
	}
}

impl<T, E> OptionLike for Outcome<T, E> {
	type Value = T;

	fn raw_option(self) -> Option<Self::Value> {
		self.into_success().into_option()
	}
}

// === ResultLike === //

pub trait ResultLike: Sized {
	type Success;
	type Error;

	fn raw_result(self) -> Result<Self::Success, Self::Error>;
}

impl<T, E> ResultLike for Result<T, E> {
	type Success = T;
	type Error = E;

	fn raw_result(self) -> Result<Self::Success, Self::Error> {
		self
	}
}

impl<T, E> ResultLike for Outcome<T, E> {
	type Success = T;
	type Error = E;

	fn raw_result(self) -> Result<T, E> {
		self.into_result()
	}
}

// === Truthy === //

/// A two-state container that can stand in for a boolean condition.
///
/// A container is truthy iff it holds a value (for [`Maybe`] and [`Option`]) or represents a
/// success (for [`Outcome`] and [`Result`]).
pub trait Truthy {
	fn truthy(&self) -> bool;

	fn falsy(&self) -> bool {
		!self.truthy()
	}
}

impl<T> Truthy for Option<T> {
	fn truthy(&self) -> bool {
		self.is_some()
	}
}

impl<T, E> Truthy for Result<T, E> {
	fn truthy(&self) -> bool {
		self.is_ok()
	}
}

impl<T> Truthy for Maybe<T> {
	fn truthy(&self) -> bool {
		self.has_value()
	}
}

impl<T, E> Truthy for Outcome<T, E> {
	fn truthy(&self) -> bool {
		self.is_success()
	}
}
