//! Control structures.
//!
//! - [`Reducer`]: composable fold steps that mutate an accumulator in place
//! - [`later`]: lazy, continuation-passing asynchronous values
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Reducer;
//! use fnkit::typeclass::Monoid;
//!
//! let count = Reducer::new(|count: &mut u32, _: &char| *count += 1);
//! let vowels = Reducer::new(|count: &mut u32, _: &char| *count += 10)
//!     .filter(|letter| "aeiou".contains(*letter));
//!
//! let both = Reducer::combine_all([count, vowels]);
//! assert_eq!(both.run(0, "rust".chars()), 14);
//! ```

pub mod later;
mod reducer;

pub use later::{BoxedLater, Continuation, Dispatcher, Later, TryLater};
pub use reducer::Reducer;
