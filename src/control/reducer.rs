//! Reducer - composable, mutate-in-place fold steps.
//!
//! A `Reducer<Acc, Item>` holds a sequence of step functions
//! `(&mut Acc, &Item)`. Reducers compose sequentially: `first.then(second)`
//! runs `first` and then `second` on the same accumulator for every item.
//! Sequencing concatenates the step lists, so combining many reducers stays
//! flat. The empty sequence is the identity, so reducers form a [`Monoid`].
//!
//! Adapters move a reducer to a different input ([`contramap`],
//! [`filter_map`]) or a different accumulator ([`focus`], [`optional`]),
//! which is how small reducers are assembled into one for a larger state.
//!
//! [`contramap`]: Reducer::contramap
//! [`filter_map`]: Reducer::filter_map
//! [`focus`]: Reducer::focus
//! [`optional`]: Reducer::optional
//!
//! # Examples
//!
//! ```rust
//! use fnkit::control::Reducer;
//!
//! #[derive(Default)]
//! struct Stats {
//!     count: usize,
//!     total: i64,
//! }
//!
//! let count = Reducer::new(|count: &mut usize, _: &i64| *count += 1)
//!     .focus(|stats: &mut Stats| &mut stats.count);
//! let total = Reducer::new(|total: &mut i64, item: &i64| *total += item)
//!     .focus(|stats: &mut Stats| &mut stats.total);
//!
//! let stats = count.then(total).run(Stats::default(), [3, 4, 5]);
//! assert_eq!((stats.count, stats.total), (3, 12));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::typeclass::{Monoid, Semigroup};

type Step<Acc, Item> = Arc<dyn Fn(&mut Acc, &Item) + Send + Sync>;

/// A shareable sequence of fold steps over an accumulator `Acc` and inputs `Item`.
pub struct Reducer<Acc, Item> {
    steps: Vec<Step<Acc, Item>>,
}

impl<Acc: 'static, Item: 'static> Reducer<Acc, Item> {
    /// Wraps a step function.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(&mut Acc, &Item) + Send + Sync + 'static,
    {
        Self {
            steps: vec![Arc::new(step)],
        }
    }

    /// The reducer that leaves the accumulator untouched.
    pub const fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Applies every step, in order, to one item.
    pub fn reduce(&self, accumulator: &mut Acc, item: &Item) {
        for step in &self.steps {
            step(accumulator, item);
        }
    }

    /// Folds `items` into `initial`.
    ///
    /// ```rust
    /// use fnkit::control::Reducer;
    ///
    /// let sum = Reducer::new(|total: &mut i32, item: &i32| *total += item);
    /// assert_eq!(sum.run(0, vec![1, 2, 3]), 6);
    ///
    /// let items = vec![10, 20];
    /// assert_eq!(sum.run(0, &items), 30);
    /// ```
    pub fn run<I>(&self, initial: Acc, items: I) -> Acc
    where
        I: IntoIterator,
        I::Item: Borrow<Item>,
    {
        items.into_iter().fold(initial, |mut accumulator, item| {
            self.reduce(&mut accumulator, item.borrow());
            accumulator
        })
    }

    /// Runs `self`, then `next`, for every item.
    #[must_use]
    pub fn then(mut self, next: Self) -> Self {
        self.steps.extend(next.steps);
        self
    }

    /// Adapts the reducer to a new input type.
    pub fn contramap<B, F>(self, function: F) -> Reducer<Acc, B>
    where
        B: 'static,
        F: Fn(&B) -> Item + Send + Sync + 'static,
    {
        Reducer::new(move |accumulator, input| self.reduce(accumulator, &function(input)))
    }

    /// Ignores items for which `predicate` is `false`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&Item) -> bool + Send + Sync + 'static,
    {
        Self::new(move |accumulator, item| {
            if predicate(item) {
                self.reduce(accumulator, item);
            }
        })
    }

    /// Adapts the reducer to a new input type, skipping inputs mapped to `None`.
    ///
    /// ```rust
    /// use fnkit::control::Reducer;
    ///
    /// let sum = Reducer::new(|total: &mut u32, item: &u32| *total += item)
    ///     .filter_map(|text: &&str| text.parse().ok());
    /// assert_eq!(sum.run(0, ["1", "x", "2"]), 3);
    /// ```
    pub fn filter_map<B, F>(self, function: F) -> Reducer<Acc, B>
    where
        B: 'static,
        F: Fn(&B) -> Option<Item> + Send + Sync + 'static,
    {
        Reducer::new(move |accumulator, input| {
            if let Some(item) = function(input) {
                self.reduce(accumulator, &item);
            }
        })
    }

    /// Lifts the reducer onto a larger accumulator containing `Acc`.
    pub fn focus<Whole, F>(self, get_mut: F) -> Reducer<Whole, Item>
    where
        Whole: 'static,
        F: Fn(&mut Whole) -> &mut Acc + Send + Sync + 'static,
    {
        Reducer::new(move |whole, item| self.reduce(get_mut(whole), item))
    }

    /// Lifts the reducer onto an optional accumulator; `None` is left alone.
    pub fn optional(self) -> Reducer<Option<Acc>, Item> {
        Reducer::new(move |accumulator: &mut Option<Acc>, item| {
            if let Some(accumulator) = accumulator.as_mut() {
                self.reduce(accumulator, item);
            }
        })
    }
}

impl<Acc, Item> Clone for Reducer<Acc, Item> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<Acc, Item> fmt::Debug for Reducer<Acc, Item> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Reducer").finish_non_exhaustive()
    }
}

impl<Acc: 'static, Item: 'static> Semigroup for Reducer<Acc, Item> {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl<Acc: 'static, Item: 'static> Monoid for Reducer<Acc, Item> {
    fn empty() -> Self {
        Self::identity()
    }
}

static_assertions::assert_impl_all!(Reducer<Vec<String>, String>: Send, Sync, Clone);
