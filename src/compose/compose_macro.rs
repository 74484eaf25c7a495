//! Right-to-left function composition.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// A single argument is returned unchanged. The result is a closure that
/// owns every composed function; it is `Fn`, `Send` and `Sync` whenever
/// they all are.
///
/// ```
/// use fnkit::compose;
///
/// let shout = compose!(|text: String| text + "!", str::to_uppercase, str::trim);
/// assert_eq!(shout("  hey "), "HEY!");
/// ```
///
/// Composition is associative:
///
/// ```
/// use fnkit::compose;
///
/// let increment = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
/// let negate = |value: i32| -value;
///
/// let left = compose!(increment, compose!(double, negate));
/// let right = compose!(compose!(increment, double), negate);
/// assert_eq!(left(4), right(4));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose::compose2($outer, $crate::compose!($($inner),+))
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn single_function_is_returned_as_is() {
        let negate = compose!(|value: i32| -value);
        assert_eq!(negate(3), -3);
    }

    #[rstest]
    fn rightmost_runs_first() {
        let trace = compose!(
            |log: Vec<u8>| [log, vec![3]].concat(),
            |log: Vec<u8>| [log, vec![2]].concat(),
            |log: Vec<u8>| [log, vec![1]].concat(),
        );
        assert_eq!(trace(Vec::new()), vec![1, 2, 3]);
    }

    #[rstest]
    fn types_change_along_the_chain() {
        let digits = compose!(|text: String| text.len(), |value: u64| value.to_string());
        assert_eq!(digits(1_000_000), 7);
    }
}
