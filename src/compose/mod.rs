//! Function composition, currying and pipe-forward.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`Pipe`]: the method form of `pipe!`, `x.pipe(f).pipe(g)`
//! - [`curry2!`] to [`curry6!`]: `curry3!(f)(a)(b)(c) == f(a, b, c)`
//! - [`identity`], [`constant`], [`flip`], [`compose2`], [`uncurry2`]
//!
//! # Laws
//!
//! - `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - `compose!(identity, f) == f == compose!(f, identity)`
//! - `flip(flip(f)) == f`
//! - `uncurry2(curry2!(f)) == f`
//!
//! # Examples
//!
//! ```
//! use fnkit::compose::{Pipe, flip};
//! use fnkit::{compose, curry2, pipe};
//!
//! let subtract = |left: i32, right: i32| left - right;
//! let minus_two = curry2!(flip(subtract))(2);
//! let double = |value: i32| value * 2;
//!
//! assert_eq!(compose!(double, minus_two.clone())(10), 16);
//! assert_eq!(pipe!(10, double, minus_two.clone()), 18);
//! assert_eq!(10_i32.pipe(minus_two).pipe(double), 16);
//! ```

mod compose_macro;
mod curry_macro;
mod pipe;
mod pipe_macro;
mod utils;

pub use pipe::Pipe;
pub use utils::{compose2, constant, flip, identity, uncurry2};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::pipe;
