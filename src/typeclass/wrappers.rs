//! Newtype wrappers selecting a particular `Semigroup`/`Monoid` instance.
//!
//! The same underlying type often forms several lawful semigroups. Numbers
//! combine by addition ([`Sum`]) or multiplication ([`Product`]), booleans by
//! conjunction ([`All`]) or disjunction ([`Any`]), and so on. Wrapping a value
//! picks the instance.
//!
//! # Available Wrappers
//!
//! | Wrapper      | combine             | empty               |
//! |--------------|---------------------|---------------------|
//! | [`Sum`]      | `a + b`             | zero                |
//! | [`Product`]  | `a * b`             | one                 |
//! | [`Max`]      | larger value        | [`Bounded::MIN_VALUE`] |
//! | [`Min`]      | smaller value       | [`Bounded::MAX_VALUE`] |
//! | [`First`]    | first `Some`        | `None`              |
//! | [`Last`]     | last `Some`         | `None`              |
//! | [`All`]      | `a && b`            | `true`              |
//! | [`Any`]      | `a \|\| b`          | `false`             |
//! | [`Endo`]     | `g(f(x))`           | identity function   |
//!
//! [`Max`] and [`Min`] need only `PartialOrd`. When two values are
//! incomparable the left one is kept, so the float instances are lawful only
//! for values other than `NaN`.

use std::fmt;

/// Defines the constructor and accessors shared by every single-field wrapper.
macro_rules! wrapper_accessors {
    ($wrapper:ident, $inner:ty $(, $generic:ident)?) => {
        impl$(<$generic>)? $wrapper$(<$generic>)? {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $inner {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &$inner {
                &self.0
            }
        }

        impl$(<$generic>)? From<$inner> for $wrapper$(<$generic>)? {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }
    };
}

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

wrapper_accessors!(Sum, A, A);

/// The multiplicative semigroup/monoid.
///
/// No `Default`: the identity is one, not zero.
///
/// ```rust
/// use fnkit::typeclass::{Monoid, Product};
///
/// let product = Product::combine_all(vec![Product(2), Product(3), Product(4)]);
/// assert_eq!(product.into_inner(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

wrapper_accessors!(Product, A, A);

/// Keeps the larger value; on a tie or an incomparable pair, the left one.
///
/// For floats the identity law excludes `NaN`: `Max(NEG_INFINITY)` combined
/// with `Max(NaN)` stays `NEG_INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

wrapper_accessors!(Max, A, A);

/// Keeps the smaller value; on a tie or an incomparable pair, the left one.
///
/// As with [`Max`], the float instances exclude `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

wrapper_accessors!(Min, A, A);

/// Keeps the first present value.
///
/// ```rust
/// use fnkit::typeclass::{First, Monoid};
///
/// let first = First::combine_all(vec![First(None), First(Some(2)), First(Some(3))]);
/// assert_eq!(first, First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct First<A>(pub Option<A>);

wrapper_accessors!(First, Option<A>, A);

/// Keeps the last present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Last<A>(pub Option<A>);

wrapper_accessors!(Last, Option<A>, A);

/// Boolean conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

wrapper_accessors!(All, bool);

/// Boolean disjunction.
///
/// ```rust
/// use fnkit::typeclass::{Any, Monoid};
///
/// assert_eq!(Any::combine_all(vec![Any(false), Any(true)]), Any(true));
/// assert_eq!(Any::combine_all(Vec::new()), Any(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

wrapper_accessors!(Any, bool);

/// Functions from a type to itself, combined by composition.
///
/// `f.combine(g)` applies `f` and then `g`.
///
/// ```rust
/// use fnkit::typeclass::{Endo, Monoid, Semigroup};
///
/// let pipeline = Endo::combine_all(vec![
///     Endo::new(|value: i32| value + 1),
///     Endo::new(|value: i32| value * 10),
/// ]);
/// assert_eq!(pipeline.apply(2), 30);
/// assert_eq!(Endo::<i32>::empty().apply(7), 7);
/// ```
pub struct Endo<A>(Box<dyn Fn(A) -> A + Send + Sync>);

impl<A> Endo<A> {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Self(Box::new(function))
    }

    /// Applies the wrapped function.
    pub fn apply(&self, value: A) -> A {
        (self.0)(value)
    }
}

impl<A> fmt::Debug for Endo<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Endo").finish_non_exhaustive()
    }
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// Supplies the identity elements of [`Max`] and [`Min`].
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_from_consts {
    ($($number:ty),* $(,)?) => {
        $(
            impl Bounded for $number {
                const MIN_VALUE: Self = <$number>::MIN;
                const MAX_VALUE: Self = <$number>::MAX;
            }
        )*
    };
}

bounded_from_consts!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
