//! Algebraic type classes: [`Semigroup`] and [`Monoid`].
//!
//! - [`Semigroup`]: an associative binary operation (`combine`)
//! - [`Monoid`]: a semigroup with an identity element (`empty`)
//!
//! Standard containers and primitive-like types carry instances directly.
//! Where a type forms more than one lawful instance, a newtype wrapper
//! picks it: [`Sum`], [`Product`], [`Max`], [`Min`], [`First`], [`Last`],
//! [`All`], [`Any`] and [`Endo`].
//!
//! With the `derive` feature, `#[derive(Semigroup, Monoid)]` generates
//! field-wise instances for structs.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, Endo, First, Last, Max, Min, Product, Sum};

#[cfg(feature = "derive")]
pub use fnkit_derive::{Monoid, Semigroup};
