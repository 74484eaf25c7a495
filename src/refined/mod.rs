//! Refinement types: values paired with a proof that they satisfy a rule.
//!
//! A [`Refinement`] is a predicate over a type. `Refined<T, R>` wraps a `T`
//! that is known to satisfy `R`; the only way to obtain one is the fallible
//! [`Refined::new`], so the wrapped value is valid for the lifetime of the
//! wrapper.
//!
//! Rules compose at the type level:
//!
//! - [`Both<A, B>`]: `A` and `B` hold
//! - [`OneOf<A, B>`]: `A` or `B` holds
//! - [`Not<A>`]: `A` does not hold
//!
//! Ready-made rules live in [`numeric`], [`length`] and [`string`].
//!
//! # Examples
//!
//! ```rust
//! use fnkit::refined::{Both, MaxLength, NonEmpty, Positive, Refined};
//!
//! type Quantity = Refined<u32, Positive>;
//! type Username = Refined<String, Both<NonEmpty, MaxLength<16>>>;
//!
//! let quantity = Quantity::new(3).unwrap();
//! assert_eq!(*quantity + 1, 4);
//!
//! assert!(Username::new(String::from("ferris")).is_ok());
//! assert!(Username::new(String::new()).is_err());
//! ```
//!
//! The inner value cannot be built without validation:
//!
//! ```compile_fail
//! use fnkit::refined::{Positive, Refined};
//!
//! let quantity = Refined::<i32, Positive> { value: -1, rule: std::marker::PhantomData };
//! ```

mod combinators;
pub mod length;
pub mod numeric;
pub mod string;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

pub use combinators::{Both, Not, OneOf};
pub use length::{ExactLength, HasLength, MaxLength, MinLength, NonEmpty};
pub use numeric::{
    Even, GreaterOrEqual, GreaterThan, InRange, LessOrEqual, LessThan, Negative, NonNegative,
    NonPositive, NonZero, Odd, Positive,
};
pub use string::{Alphanumeric, Ascii, Lowercase, Trimmed, Uppercase};

/// A predicate deciding whether a value belongs to a narrowed subtype.
///
/// Implementors are marker types; they are never instantiated.
///
/// # Examples
///
/// ```rust
/// use fnkit::refined::{Refined, Refinement};
///
/// struct Port;
///
/// impl Refinement<u32> for Port {
///     fn is_valid(value: &u32) -> bool {
///         (1..=65_535).contains(value)
///     }
///
///     fn description() -> String {
///         String::from("a TCP port")
///     }
/// }
///
/// assert!(Refined::<u32, Port>::new(8080).is_ok());
/// let error = Refined::<u32, Port>::new(0).unwrap_err();
/// assert_eq!(error.to_string(), "value does not satisfy a TCP port");
/// ```
pub trait Refinement<T: ?Sized> {
    /// Returns `true` if `value` satisfies this rule.
    fn is_valid(value: &T) -> bool;

    /// A human readable name for the rule, used in error messages.
    fn description() -> String;
}

// =============================================================================
// RefinementError
// =============================================================================

/// The error returned when a value does not satisfy a refinement.
///
/// The rejected value is handed back so the caller keeps ownership of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementError<T> {
    value: T,
    rule: String,
}

impl<T> RefinementError<T> {
    /// Creates an error for `value` failing the rule described by `rule`.
    pub const fn new(value: T, rule: String) -> Self {
        Self { value, rule }
    }

    /// Returns the rejected value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the error, returning the rejected value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the description of the violated rule.
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

impl<T> fmt::Display for RefinementError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "value does not satisfy {}", self.rule)
    }
}

impl<T: fmt::Debug> Error for RefinementError<T> {}

// =============================================================================
// Refined
// =============================================================================

/// A value of type `T` that satisfies the refinement `R`.
///
/// Comparison, hashing and formatting delegate to the wrapped value.
pub struct Refined<T, R> {
    value: T,
    rule: PhantomData<fn() -> R>,
}

impl<T, R: Refinement<T>> Refined<T, R> {
    /// Validates `value` against `R`.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] holding the value if it does not satisfy `R`.
    pub fn new(value: T) -> Result<Self, RefinementError<T>> {
        if R::is_valid(&value) {
            Ok(Self::trusted(value))
        } else {
            let rule = R::description();
            tracing::debug!(rule = %rule, "refinement rejected value");
            Err(RefinementError::new(value, rule))
        }
    }

    /// Checks the value against a second rule, keeping both proofs.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] if the value does not satisfy `R2`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::refined::{Even, Positive, Refined};
    ///
    /// let positive = Refined::<i32, Positive>::new(4).unwrap();
    /// let even = positive.refine::<Even>().unwrap();
    /// assert_eq!(*even, 4);
    /// ```
    pub fn refine<R2: Refinement<T>>(self) -> Result<Refined<T, Both<R, R2>>, RefinementError<T>> {
        Refined::<T, R2>::new(self.value).map(|refined| Refined::trusted(refined.value))
    }

    /// Applies `function` to the value and validates the result against `R2`.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError`] if the mapped value does not satisfy `R2`.
    pub fn map_refined<U, R2, F>(self, function: F) -> Result<Refined<U, R2>, RefinementError<U>>
    where
        R2: Refinement<U>,
        F: FnOnce(T) -> U,
    {
        Refined::new(function(self.value))
    }
}

impl<T, R> Refined<T, R> {
    const fn trusted(value: T) -> Self {
        Self {
            value,
            rule: PhantomData,
        }
    }

    /// Returns a reference to the validated value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper, returning the validated value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Widens the proof to `OneOf<R, B>`.
    pub fn either_left<B>(self) -> Refined<T, OneOf<R, B>> {
        Refined::trusted(self.value)
    }

    /// Widens the proof to `OneOf<A, R>`.
    pub fn either_right<A>(self) -> Refined<T, OneOf<A, R>> {
        Refined::trusted(self.value)
    }
}

impl<T, A, B> Refined<T, Both<A, B>> {
    /// Forgets the second half of a conjunction.
    pub fn first(self) -> Refined<T, A> {
        Refined::trusted(self.value)
    }

    /// Forgets the first half of a conjunction.
    pub fn second(self) -> Refined<T, B> {
        Refined::trusted(self.value)
    }
}

impl<T, A> Refined<T, Not<Not<A>>> {
    /// Removes a double negation.
    pub fn simplify(self) -> Refined<T, A> {
        Refined::trusted(self.value)
    }
}

impl<T, R> Deref for Refined<T, R> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, R> AsRef<T> for Refined<T, R> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, R> Borrow<T> for Refined<T, R> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, R> Clone for Refined<T, R> {
    fn clone(&self) -> Self {
        Self::trusted(self.value.clone())
    }
}

impl<T: Copy, R> Copy for Refined<T, R> {}

impl<T: PartialEq, R> PartialEq for Refined<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, R> Eq for Refined<T, R> {}

impl<T: PartialOrd, R> PartialOrd for Refined<T, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, R> Ord for Refined<T, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, R> Hash for Refined<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Refined<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Refined").field(&self.value).finish()
    }
}

impl<T: fmt::Display, R> fmt::Display for Refined<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(formatter)
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, R> serde::Serialize for Refined<T, R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, R> serde::Deserialize<'de> for Refined<T, R>
where
    T: serde::Deserialize<'de>,
    R: Refinement<T>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn new_accepts_valid_value() {
        let refined = Refined::<i32, Positive>::new(5).unwrap();
        assert_eq!(*refined.get(), 5);
        assert_eq!(refined.into_inner(), 5);
    }

    #[rstest]
    fn new_returns_rejected_value() {
        let error = Refined::<String, NonEmpty>::new(String::new()).unwrap_err();
        assert_eq!(error.value(), "");
        assert_eq!(error.rule(), "non-empty");
        assert_eq!(error.into_value(), String::new());
    }

    #[rstest]
    fn error_display_names_rule() {
        let error = Refined::<i32, Both<Positive, Even>>::new(3).unwrap_err();
        assert_eq!(error.to_string(), "value does not satisfy (positive and even)");
    }

    #[rstest]
    fn refine_adds_second_rule() {
        let positive = Refined::<i32, Positive>::new(3).unwrap();
        let error = positive.refine::<Even>().unwrap_err();
        assert_eq!(error.into_value(), 3);
    }

    #[rstest]
    fn first_and_second_weaken_conjunction() {
        let both = Refined::<i32, Both<Positive, Even>>::new(8).unwrap();
        let positive: Refined<i32, Positive> = both.first();
        let even: Refined<i32, Even> = both.second();
        assert_eq!(positive.into_inner(), even.into_inner());
    }

    #[rstest]
    fn either_widens_into_disjunction() {
        let negative = Refined::<i32, Negative>::new(-1).unwrap();
        let widened: Refined<i32, OneOf<Positive, Negative>> = negative.either_right();
        assert_eq!(*widened, -1);
    }

    #[rstest]
    fn simplify_removes_double_negation() {
        let refined = Refined::<i32, Not<Not<Positive>>>::new(2).unwrap();
        let positive: Refined<i32, Positive> = refined.simplify();
        assert_eq!(*positive, 2);
    }

    #[rstest]
    fn map_refined_revalidates() {
        let refined = Refined::<i32, Positive>::new(2).unwrap();
        let negated = refined.map_refined::<i32, Positive, _>(|value| -value);
        assert!(negated.is_err());
    }

    #[rstest]
    fn equality_and_hash_delegate_to_value() {
        let first = Refined::<i32, Positive>::new(1).unwrap();
        let second = Refined::<i32, Positive>::new(1).unwrap();
        assert_eq!(first, second);

        let set: HashSet<Refined<i32, Positive>> = [first, second].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1_i32));
    }

    #[rstest]
    fn formatting_delegates_to_value() {
        let refined = Refined::<String, NonEmpty>::new(String::from("abc")).unwrap();
        assert_eq!(refined.to_string(), "abc");
        assert_eq!(format!("{refined:?}"), "Refined(\"abc\")");
    }

    #[rstest]
    fn ordering_delegates_to_value() {
        let small = Refined::<u8, Positive>::new(1).unwrap();
        let large = Refined::<u8, Positive>::new(9).unwrap();
        assert!(small < large);
        assert_eq!(small.max(large), large);
    }

    static_assertions::assert_impl_all!(Refined<i32, Positive>: Send, Sync, Copy);
}
