//! Small function combinators.

/// Returns its argument unchanged.
///
/// ```
/// use fnkit::compose::identity;
///
/// let values: Vec<i32> = vec![Some(1), None, Some(3)].into_iter().flatten().map(identity).collect();
/// assert_eq!(values, vec![1, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and yields a clone of `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Composes two functions: `compose2(f, g)(x) == f(g(x))`.
///
/// This is the building block of [`compose!`](crate::compose!).
#[inline]
pub fn compose2<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Turns a curried function back into a function of two arguments.
///
/// ```
/// use fnkit::compose::uncurry2;
/// use fnkit::curry2;
///
/// let add = curry2!(|left: i32, right: i32| left + right);
/// let add = uncurry2(add);
/// assert_eq!(add(2, 3), 5);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}
