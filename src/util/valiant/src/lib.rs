//! Presence ([`Maybe`]) and success/failure ([`Outcome`]) containers whose state is fixed at
//! construction and can only be observed through the matching discriminant.

pub mod error;
pub mod std_traits;

mod maybe;
pub use maybe::*;

mod outcome;
pub use outcome::*;

pub mod prelude {
	pub use crate::{
		error::{ErrorFormatExt, InvalidCast, OutcomeExt},
		maybe::{Maybe, Nothing, NOTHING},
		outcome::Outcome,
		std_traits::{OptionLike, ResultLike, Truthy},
	};
}
