//! Length refinements for strings and collections.
//!
//! Strings are measured in `char`s, collections in elements.
//!
//! ```rust
//! use fnkit::refined::{MinLength, NonEmpty, Refined};
//!
//! let tags = Refined::<Vec<&str>, NonEmpty>::new(vec!["rust"]).unwrap();
//! assert_eq!(tags.len(), 1);
//!
//! // "héllo" is five characters even though it is six bytes.
//! assert!(Refined::<&str, MinLength<5>>::new("héllo").is_ok());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::Refinement;

/// Values with a measurable length.
pub trait HasLength {
    /// The number of characters or elements.
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: HasLength + ?Sized> HasLength for Box<T> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

macro_rules! element_count {
    ($($collection:ident<$($parameter:ident),+>),* $(,)?) => {
        $(
            impl<$($parameter),+> HasLength for $collection<$($parameter),+> {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

element_count!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>, HashSet<T, S>, HashMap<K, V, S>);

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

/// At least one character or element.
pub struct NonEmpty;

/// At least `N` characters or elements.
pub struct MinLength<const N: usize>;

/// At most `N` characters or elements.
pub struct MaxLength<const N: usize>;

/// Exactly `N` characters or elements.
pub struct ExactLength<const N: usize>;

impl<T: HasLength + ?Sized> Refinement<T> for NonEmpty {
    fn is_valid(value: &T) -> bool {
        value.length() > 0
    }

    fn description() -> String {
        String::from("non-empty")
    }
}

impl<T: HasLength + ?Sized, const N: usize> Refinement<T> for MinLength<N> {
    fn is_valid(value: &T) -> bool {
        value.length() >= N
    }

    fn description() -> String {
        format!("at least {N} long")
    }
}

impl<T: HasLength + ?Sized, const N: usize> Refinement<T> for MaxLength<N> {
    fn is_valid(value: &T) -> bool {
        value.length() <= N
    }

    fn description() -> String {
        format!("at most {N} long")
    }
}

impl<T: HasLength + ?Sized, const N: usize> Refinement<T> for ExactLength<N> {
    fn is_valid(value: &T) -> bool {
        value.length() == N
    }

    fn description() -> String {
        format!("exactly {N} long")
    }
}
