//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it is a [`Semigroup`] and has an element
//! `empty` such that for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a      (left identity)
//! a.combine(T::empty()) == a      (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Endo, First, Last, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

/// Implements `Monoid` by delegating `empty` to a constructor expression.
macro_rules! monoid_from {
    ($($target:ty => $empty:expr),* $(,)?) => {
        $(
            impl Monoid for $target {
                fn empty() -> Self {
                    $empty
                }
            }
        )*
    };
}

monoid_from! {
    String => Self::new(),
    Ordering => Self::Equal,
    All => Self(true),
    Any => Self(false),
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for VecDeque<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K, V, S> Monoid for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::default()
    }
}

impl<K: Ord, V> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T, S> Monoid for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::default()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:expr => $($number:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$number> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0 => f32, f64);

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: 'static> Monoid for Endo<A> {
    fn empty() -> Self {
        Self::new(|value| value)
    }
}

// =============================================================================
// Tuples
// =============================================================================

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid, D: Monoid> Monoid for (A, B, C, D) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty(), D::empty())
    }
}
