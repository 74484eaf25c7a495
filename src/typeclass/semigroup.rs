//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, Mul};

use super::wrappers::{All, Any, Endo, First, Last, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Semigroup;
    ///
    /// let a = vec![1];
    /// let b = vec![2];
    /// assert_eq!(a.combine_ref(&b), vec![1, 2]);
    /// assert_eq!(a, vec![1]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        (1..count).fold(self.clone(), |accumulator, _| {
            accumulator.combine(self.clone())
        })
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for the total version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Semigroup for VecDeque<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Maps and Sets
// =============================================================================

/// Key union; on a key collision the value from `other` wins.
impl<K, V, S> Semigroup for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Key union; on a key collision the value from `other` wins.
impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T, S> Semigroup for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Option and Result
// =============================================================================

/// `None` is absorbed: `Some(a) <> None == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// The first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Ordering and Unit
// =============================================================================

/// Lexicographic ordering: the first non-`Equal` result wins.
///
/// ```rust
/// use std::cmp::Ordering;
/// use fnkit::typeclass::Semigroup;
///
/// let by_length = 3.cmp(&3);
/// let by_name = "a".cmp("b");
/// assert_eq!(by_length.combine(by_name), Ordering::Less);
/// ```
impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Wrappers
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

/// `f.combine(g)` applies `f` first, then `g`.
impl<A: 'static> Semigroup for Endo<A> {
    fn combine(self, other: Self) -> Self {
        Self::new(move |value| other.apply(self.apply(value)))
    }
}

// =============================================================================
// Tuples
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup, D: Semigroup> Semigroup for (A, B, C, D) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
            self.3.combine(other.3),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("Hello, ").combine(String::from("World!")),
            "Hello, World!"
        );
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.combine_ref(&right), "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    #[case(1, "ab")]
    #[case(2, "abab")]
    #[case(3, "ababab")]
    fn string_combine_n(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(String::from("ab").combine_n(count), expected);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = String::from("ab").combine_n(0);
    }

    #[rstest]
    fn vec_deque_combine_appends() {
        let left: VecDeque<i32> = VecDeque::from(vec![1, 2]);
        let right: VecDeque<i32> = VecDeque::from(vec![3]);
        assert_eq!(left.combine(right), VecDeque::from(vec![1, 2, 3]));
    }

    #[rstest]
    fn hash_map_combine_is_right_biased() {
        let left = HashMap::from([("a", 1), ("b", 2)]);
        let right = HashMap::from([("b", 20), ("c", 30)]);
        let combined = left.combine(right);
        assert_eq!(combined, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));
    }

    #[rstest]
    fn btree_map_combine_is_right_biased() {
        let left = BTreeMap::from([(1, "one"), (2, "two")]);
        let right = BTreeMap::from([(2, "deux")]);
        assert_eq!(
            left.combine(right),
            BTreeMap::from([(1, "one"), (2, "deux")])
        );
    }

    #[rstest]
    fn sets_combine_by_union() {
        let left = BTreeSet::from([1, 2]);
        let right = BTreeSet::from([2, 3]);
        assert_eq!(left.combine(right), BTreeSet::from([1, 2, 3]));

        let left: HashSet<i32> = HashSet::from([1]);
        let right: HashSet<i32> = HashSet::from([1, 4]);
        assert_eq!(left.combine(right), HashSet::from([1, 4]));
    }

    #[rstest]
    #[case(Some("a"), Some("b"), Some("ab"))]
    #[case(Some("a"), None, Some("a"))]
    #[case(None, Some("b"), Some("b"))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<&str>,
        #[case] right: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let left = left.map(String::from);
        let right = right.map(String::from);
        assert_eq!(left.combine(right), expected.map(String::from));
    }

    #[rstest]
    fn result_combine_keeps_first_error() {
        let first: Result<String, &str> = Err("first");
        let second: Result<String, &str> = Err("second");
        assert_eq!(first.combine(second), Err("first"));

        let ok: Result<String, &str> = Ok(String::from("x"));
        assert_eq!(ok.combine(Err("late")), Err("late"));
    }

    #[rstest]
    #[case(Ordering::Equal, Ordering::Less, Ordering::Less)]
    #[case(Ordering::Greater, Ordering::Less, Ordering::Greater)]
    #[case(Ordering::Equal, Ordering::Equal, Ordering::Equal)]
    fn ordering_combine_is_lexicographic(
        #[case] left: Ordering,
        #[case] right: Ordering,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn max_and_min_pick_extremes() {
        assert_eq!(Max(3).combine(Max(7)), Max(7));
        assert_eq!(Min(3).combine(Min(7)), Min(3));
        assert_eq!(Max(2.5).combine(Max(1.0)), Max(2.5));
    }

    #[rstest]
    fn first_and_last_skip_missing_values() {
        assert_eq!(First(None).combine(First(Some(2))), First(Some(2)));
        assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
        assert_eq!(Last(Some(1)).combine(Last(None)), Last(Some(1)));
        assert_eq!(Last(Some(1)).combine(Last(Some(2))), Last(Some(2)));
    }

    #[rstest]
    fn all_and_any_follow_boolean_logic() {
        assert_eq!(All(true).combine(All(false)), All(false));
        assert_eq!(Any(false).combine(Any(true)), Any(true));
        assert_eq!(Any(false).combine(Any(false)), Any(false));
    }

    #[rstest]
    fn endo_combine_applies_left_first() {
        let add_one = Endo::new(|value: i32| value + 1);
        let double = Endo::new(|value: i32| value * 2);
        assert_eq!(add_one.combine(double).apply(5), 12);
    }

    #[rstest]
    fn tuple_combine_is_componentwise() {
        let left = (Sum(1), String::from("a"), vec![1], Any(false));
        let right = (Sum(2), String::from("b"), vec![2], Any(true));
        assert_eq!(
            left.combine(right),
            (Sum(3), String::from("ab"), vec![1, 2], Any(true))
        );
    }

    #[rstest]
    fn max_and_min_keep_the_left_operand_when_incomparable() {
        let kept = Max(f64::NEG_INFINITY).combine(Max(f64::NAN));
        assert_eq!(kept, Max(f64::NEG_INFINITY));
        assert!(Max(f64::NAN).combine(Max(1.0)).0.is_nan());
        assert!(Min(f64::NAN).combine(Min(1.0)).0.is_nan());
        assert_eq!(Min(2.0_f32).combine(Min(f32::NAN)), Min(2.0));
    }
}
