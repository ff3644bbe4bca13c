use std::ops::{BitAnd, BitOr};

use crate::error::{ErrorFormatExt, InvalidCast};

// === Nothing === //

/// The untyped "no value" marker. A single `Nothing` converts into an empty [`Maybe`] of any
/// payload type, so call sites never have to spell out `T`.
///
/// Always convert through [`Nothing::into_maybe`]. The generic `From<T> for Maybe<T>` treats a
/// `Nothing` like any other payload, so `Maybe::<Nothing>::from(NOTHING)` is *populated*.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Nothing;

pub const NOTHING: Nothing = Nothing;

impl Nothing {
	/// Yields an empty `Maybe<T>` for any `T`, including `T = Nothing`.
	pub const fn into_maybe<T>(self) -> Maybe<T> {
		Maybe::Empty
	}
}

// === Maybe === //

/// A value of type `T`, or nothing.
///
/// The state is fixed at construction. Every combinator consumes its operands and produces a new
/// `Maybe` rather than mutating one in place.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[must_use]
pub enum Maybe<T> {
	Value(T),
	Empty,
}

impl<T> Maybe<T> {
	pub const NONE: Self = Self::Empty;

	pub const fn new(value: T) -> Self {
		Self::Value(value)
	}

	pub const fn empty() -> Self {
		Self::Empty
	}

	pub fn from_option(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::Value(value),
			None => Self::Empty,
		}
	}

	/// Widens a `Maybe` of a more specific payload into one of a more general payload, keeping
	/// the discriminant.
	pub fn cast<F: Into<T>>(from: Maybe<F>) -> Self {
		match from {
			Maybe::Value(value) => Self::Value(value.into()),
			Maybe::Empty => Self::Empty,
		}
	}

	pub const fn has_value(&self) -> bool {
		matches!(self, Self::Value(_))
	}

	pub const fn has_no_value(&self) -> bool {
		!self.has_value()
	}

	pub const fn try_get(&self) -> Option<&T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Empty => None,
		}
	}

	pub const fn as_ref(&self) -> Maybe<&T> {
		match self {
			Self::Value(value) => Maybe::Value(value),
			Self::Empty => Maybe::Empty,
		}
	}

	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Empty => None,
		}
	}

	/// Narrows to the payload, failing with [`InvalidCast::EmptyToValue`] if there is none.
	pub fn try_unwrap(self) -> Result<T, InvalidCast> {
		match self {
			Self::Value(value) => Ok(value),
			Self::Empty => {
				log::trace!("attempted to narrow an empty `Maybe` to its value");
				Err(InvalidCast::EmptyToValue)
			}
		}
	}

	/// Narrows to the payload.
	///
	/// ## Panics
	///
	/// Panics with [`InvalidCast::EmptyToValue`] if the `Maybe` is empty.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self.try_unwrap() {
			Ok(value) => value,
			Err(err) => err.raise(),
		}
	}

	/// First non-empty wins: yields `self` if it has a value, otherwise `other`.
	///
	/// Both operands are already evaluated; this is a value combinator, not a lazy one.
	pub fn or(self, other: Self) -> Self {
		match self {
			Self::Value(_) => self,
			Self::Empty => other,
		}
	}

	/// Yields `other` if `self` has a value, otherwise `self`.
	pub fn and(self, other: Self) -> Self {
		match self {
			Self::Value(_) => other,
			Self::Empty => self,
		}
	}
}

impl<T> Default for Maybe<T> {
	fn default() -> Self {
		Self::Empty
	}
}

impl<T> From<T> for Maybe<T> {
	fn from(value: T) -> Self {
		Self::Value(value)
	}
}

impl<T> BitOr for Maybe<T> {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.or(rhs)
	}
}

impl<T> BitAnd for Maybe<T> {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		self.and(rhs)
	}
}
