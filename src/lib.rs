//! # fnkit
//!
//! Functional building blocks for application code.
//!
//! ## Overview
//!
//! - **Type classes**: [`Semigroup`](typeclass::Semigroup) and
//!   [`Monoid`](typeclass::Monoid) with instances for standard containers,
//!   plus newtype wrappers for numbers, ordering and booleans
//! - **Refinement types**: [`Refined`](refined::Refined) values validated
//!   against rules that compose with `Both`, `OneOf` and `Not`
//! - **Change tracking**: [`Changeable`](effect::Changeable), a writer over
//!   a monotonic "changed" flag
//! - **Reducers**: [`Reducer`](control::Reducer), composable fold steps
//! - **Lazy async values**: [`Later`](control::Later), a continuation-passing
//!   computation with map, flat map, fallible and dispatch combinators
//! - **Composition**: `compose!`, `pipe!`, `curry2!` to `curry6!` and the
//!   [`Pipe`](compose::Pipe) trait
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid` and wrappers
//! - `compose`: composition macros and helpers
//! - `refined`: refinement types
//! - `effect`: `Changeable`
//! - `control`: `Reducer` and `Later`
//! - `derive`: `#[derive(Semigroup, Monoid)]`
//! - `async`: tokio dispatchers, future bridging and `wait`
//! - `http`: `DataTask`, a `Later` over `reqwest`
//! - `serde`: `Serialize`/`Deserialize` for `Refined`
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! type Quantity = Refined<u32, Positive>;
//!
//! let quantities = [3, 0, 4].map(Quantity::new);
//! let valid: Vec<u32> = quantities.iter().flatten().map(|quantity| **quantity).collect();
//! assert_eq!(valid, vec![3, 4]);
//!
//! let total = Reducer::new(|total: &mut Sum<u32>, item: &u32| *total = total.combine(Sum(*item)))
//!     .run(Sum::empty(), &valid);
//! assert_eq!(total, Sum(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "refined")]
    pub use crate::refined::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "refined")]
pub mod refined;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "control")]
pub mod control;
