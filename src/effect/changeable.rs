//! Changeable - a value that remembers whether it was modified.
//!
//! `Changeable<A>` pairs a value with a "changed" flag. It is a writer whose
//! log is the [`Any`] monoid: sequencing two steps ORs their flags, so once a
//! step reports a change every later stage sees it.
//!
//! # Laws
//!
//! - Identity: `c.map(|x| x) == c`
//! - Left identity: `Changeable::unchanged(a).flat_map(f) == f(a)`
//! - Right identity: `c.flat_map(Changeable::unchanged) == c`
//! - Associativity: `c.flat_map(f).flat_map(g) == c.flat_map(|x| f(x).flat_map(g))`
//!
//! # Examples
//!
//! ```rust
//! use fnkit::effect::Changeable;
//!
//! fn clamp(value: i32) -> Changeable<i32> {
//!     Changeable::compare(value, value.clamp(0, 100))
//! }
//!
//! let result = clamp(140).flat_map(|value| Changeable::unchanged(value / 2));
//! assert!(result.is_changed());
//! assert_eq!(result.into_inner(), 50);
//!
//! let untouched = clamp(40);
//! assert!(!untouched.is_changed());
//! ```

use crate::typeclass::{Any, Monoid, Semigroup};

/// A value paired with a monotonic "changed" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Changeable<A> {
    value: A,
    changed: Any,
}

impl<A> Changeable<A> {
    /// Creates a `Changeable` with an explicit flag.
    pub const fn new(value: A, changed: bool) -> Self {
        Self {
            value,
            changed: Any(changed),
        }
    }

    /// Wraps a value that has not been modified.
    pub const fn unchanged(value: A) -> Self {
        Self::new(value, false)
    }

    /// Wraps a value that has been modified.
    pub const fn changed(value: A) -> Self {
        Self::new(value, true)
    }

    /// Wraps `new`, flagged as changed if it differs from `old`.
    ///
    /// ```rust
    /// use fnkit::effect::Changeable;
    ///
    /// assert!(Changeable::compare(1, 2).is_changed());
    /// assert!(!Changeable::compare("same", "same").is_changed());
    /// ```
    pub fn compare(old: A, new: A) -> Self
    where
        A: PartialEq,
    {
        let changed = old != new;
        Self::new(new, changed)
    }

    /// Returns whether any step so far reported a change.
    pub const fn is_changed(&self) -> bool {
        self.changed.0
    }

    /// Returns a reference to the value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Consumes the wrapper, returning the value.
    pub fn into_inner(self) -> A {
        self.value
    }

    /// Consumes the wrapper, returning the value and the flag.
    pub fn into_parts(self) -> (A, bool) {
        (self.value, self.changed.0)
    }

    /// Flags the value as changed.
    #[must_use]
    pub fn mark_changed(self) -> Self {
        Self {
            changed: Any(true),
            ..self
        }
    }

    /// Transforms the value, keeping the flag.
    pub fn map<B, F>(self, function: F) -> Changeable<B>
    where
        F: FnOnce(A) -> B,
    {
        Changeable {
            value: function(self.value),
            changed: self.changed,
        }
    }

    /// Chains a step that may itself change the value; flags are OR-combined.
    pub fn flat_map<B, F>(self, function: F) -> Changeable<B>
    where
        F: FnOnce(A) -> Changeable<B>,
    {
        let next = function(self.value);
        Changeable {
            value: next.value,
            changed: self.changed.combine(next.changed),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Changeable<B>
    where
        F: FnOnce(A) -> Changeable<B>,
    {
        self.flat_map(function)
    }

    /// Replaces the value with `next`'s, OR-combining the flags.
    pub fn then<B>(self, next: Changeable<B>) -> Changeable<B> {
        self.flat_map(|_| next)
    }

    /// Combines two values with `function`, OR-combining the flags.
    pub fn map2<B, C, F>(self, other: Changeable<B>, function: F) -> Changeable<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Changeable {
            value: function(self.value, other.value),
            changed: self.changed.combine(other.changed),
        }
    }

    /// Pairs two values, OR-combining the flags.
    pub fn zip<B>(self, other: Changeable<B>) -> Changeable<(A, B)> {
        self.map2(other, |left, right| (left, right))
    }

    /// Applies `function`; the result counts as changed if it differs from
    /// the current value.
    ///
    /// ```rust
    /// use fnkit::effect::Changeable;
    ///
    /// let name = Changeable::unchanged(String::from("ferris"));
    /// let same = name.clone().update(|name| name.to_lowercase());
    /// let upper = name.update(|name| name.to_uppercase());
    /// assert!(!same.is_changed());
    /// assert!(upper.is_changed());
    /// ```
    #[must_use]
    pub fn update<F>(self, function: F) -> Self
    where
        A: PartialEq,
        F: FnOnce(&A) -> A,
    {
        let updated = function(&self.value);
        let changed = updated != self.value;
        Self {
            value: updated,
            changed: self.changed.combine(Any(changed)),
        }
    }

    /// Like [`update`](Self::update), but only when `predicate` holds.
    #[must_use]
    pub fn update_if<P, F>(self, predicate: P, function: F) -> Self
    where
        A: PartialEq,
        P: FnOnce(&A) -> bool,
        F: FnOnce(&A) -> A,
    {
        if predicate(&self.value) {
            self.update(function)
        } else {
            self
        }
    }
}

impl<A> From<A> for Changeable<A> {
    fn from(value: A) -> Self {
        Self::unchanged(value)
    }
}

/// Collects values; the result is changed if any element was.
impl<A> FromIterator<Changeable<A>> for Changeable<Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Changeable<A>>>(iterator: I) -> Self {
        let mut changed = Any::empty();
        let values = iterator
            .into_iter()
            .map(|element| {
                changed = changed.combine(element.changed);
                element.value
            })
            .collect();
        Self { value: values, changed }
    }
}

impl<A: Semigroup> Semigroup for Changeable<A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, A::combine)
    }
}

impl<A: Monoid> Monoid for Changeable<A> {
    fn empty() -> Self {
        Self::unchanged(A::empty())
    }
}
