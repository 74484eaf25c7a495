//! Numeric refinements.
//!
//! Sign rules compare against `T::default()`, which is zero for every
//! primitive number, so they apply to integers and floats alike. `NaN` fails
//! all of them.
//!
//! Bound rules take an `i128` const parameter. The bound is converted into
//! `T` before comparing; a bound that does not fit in `T` lies beyond every
//! value of `T`, and the rule is decided by the bound's sign.
//!
//! ```rust
//! use fnkit::refined::{InRange, Refined};
//!
//! type Percentage = Refined<u8, InRange<0, 100>>;
//!
//! assert!(Percentage::new(100).is_ok());
//! assert!(Percentage::new(101).is_err());
//! ```

use super::{Both, Not, Refinement};

/// Strictly greater than zero.
pub struct Positive;

/// Strictly less than zero.
pub struct Negative;

/// Different from zero.
pub struct NonZero;

/// Zero or greater.
pub struct NonNegative;

/// Zero or less.
pub struct NonPositive;

/// Divisible by two. Defined for the primitive integers only.
///
/// ```compile_fail
/// use fnkit::refined::{Odd, Refined};
///
/// let half = Refined::<f64, Odd>::new(2.5);
/// ```
pub struct Even;

/// Not divisible by two.
pub type Odd = Not<Even>;

/// Strictly greater than `N`.
pub struct GreaterThan<const N: i128>;

/// Greater than or equal to `N`.
pub struct GreaterOrEqual<const N: i128>;

/// Strictly less than `N`.
pub struct LessThan<const N: i128>;

/// Less than or equal to `N`.
pub struct LessOrEqual<const N: i128>;

/// Within `MIN..=MAX`.
pub type InRange<const MIN: i128, const MAX: i128> = Both<GreaterOrEqual<MIN>, LessOrEqual<MAX>>;

macro_rules! sign_refinement {
    ($rule:ident, $description:literal, |$value:ident, $zero:ident| $check:expr) => {
        impl<T: PartialOrd + Default> Refinement<T> for $rule {
            fn is_valid($value: &T) -> bool {
                let $zero = T::default();
                $check
            }

            fn description() -> String {
                String::from($description)
            }
        }
    };
}

sign_refinement!(Positive, "positive", |value, zero| *value > zero);
sign_refinement!(Negative, "negative", |value, zero| *value < zero);
sign_refinement!(NonNegative, "non-negative", |value, zero| *value >= zero);
sign_refinement!(NonPositive, "non-positive", |value, zero| *value <= zero);
sign_refinement!(NonZero, "non-zero", |value, zero| *value < zero || *value > zero);

macro_rules! parity_refinement {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Refinement<$integer> for Even {
                fn is_valid(value: &$integer) -> bool {
                    value % 2 == 0
                }

                fn description() -> String {
                    String::from("even")
                }
            }
        )*
    };
}

parity_refinement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Compares `value` with `bound`, answering `when_unrepresentable` if the
/// bound does not fit in `T`.
fn compare_with_bound<T, F>(value: &T, bound: i128, compare: F, when_unrepresentable: bool) -> bool
where
    T: PartialOrd + TryFrom<i128>,
    F: FnOnce(&T, &T) -> bool,
{
    T::try_from(bound).map_or(when_unrepresentable, |bound| compare(value, &bound))
}

impl<T: PartialOrd + TryFrom<i128>, const N: i128> Refinement<T> for GreaterThan<N> {
    fn is_valid(value: &T) -> bool {
        compare_with_bound(value, N, |value, bound| value > bound, N < 0)
    }

    fn description() -> String {
        format!("greater than {N}")
    }
}

impl<T: PartialOrd + TryFrom<i128>, const N: i128> Refinement<T> for GreaterOrEqual<N> {
    fn is_valid(value: &T) -> bool {
        compare_with_bound(value, N, |value, bound| value >= bound, N < 0)
    }

    fn description() -> String {
        format!("at least {N}")
    }
}

impl<T: PartialOrd + TryFrom<i128>, const N: i128> Refinement<T> for LessThan<N> {
    fn is_valid(value: &T) -> bool {
        compare_with_bound(value, N, |value, bound| value < bound, N > 0)
    }

    fn description() -> String {
        format!("less than {N}")
    }
}

impl<T: PartialOrd + TryFrom<i128>, const N: i128> Refinement<T> for LessOrEqual<N> {
    fn is_valid(value: &T) -> bool {
        compare_with_bound(value, N, |value, bound| value <= bound, N > 0)
    }

    fn description() -> String {
        format!("at most {N}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::Refined;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-1, false)]
    fn positive_integers(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(Positive::is_valid(&value), expected);
    }

    #[rstest]
    fn sign_rules_apply_to_floats() {
        assert!(Positive::is_valid(&0.5_f64));
        assert!(Negative::is_valid(&-0.5_f32));
        assert!(NonNegative::is_valid(&0.0_f64));
        assert!(NonPositive::is_valid(&-0.0_f64));
    }

    #[rstest]
    fn nan_fails_every_sign_rule() {
        let nan = f64::NAN;
        assert!(!Positive::is_valid(&nan));
        assert!(!Negative::is_valid(&nan));
        assert!(!NonNegative::is_valid(&nan));
        assert!(!NonPositive::is_valid(&nan));
        assert!(!NonZero::is_valid(&nan));
        assert!(!NonZero::is_valid(&f32::NAN));
    }

    #[rstest]
    fn non_zero_rejects_zero() {
        assert!(NonZero::is_valid(&-3_i8));
        assert!(!NonZero::is_valid(&0_u64));
        assert!(NonZero::is_valid(&-0.25_f64));
        assert!(!NonZero::is_valid(&-0.0_f64));
    }

    #[rstest]
    #[case(0, true)]
    #[case(-4, true)]
    #[case(7, false)]
    #[case(-3, false)]
    fn even_handles_negative_numbers(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(Even::is_valid(&value), expected);
        assert_eq!(Odd::is_valid(&value), !expected);
    }

    #[rstest]
    fn parity_covers_extreme_integers() {
        assert!(Odd::is_valid(&i8::MIN.wrapping_add(1)));
        assert!(Even::is_valid(&i128::MIN));
        assert!(Odd::is_valid(&u64::MAX));
        assert!(Even::is_valid(&0_usize));
    }

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(10, true)]
    #[case(11, false)]
    fn in_range_is_inclusive(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(<InRange<0, 10>>::is_valid(&value), expected);
    }

    #[rstest]
    fn bounds_outside_the_type_decide_by_sign() {
        assert!(<GreaterThan<{ -1 }>>::is_valid(&0_u8));
        assert!(!<GreaterThan<300>>::is_valid(&255_u8));
        assert!(<LessThan<300>>::is_valid(&255_u8));
        assert!(!<LessOrEqual<{ -1 }>>::is_valid(&0_u32));
    }

    #[rstest]
    fn bound_descriptions() {
        assert_eq!(<GreaterThan<5> as Refinement<i32>>::description(), "greater than 5");
        assert_eq!(
            <InRange<1, 9> as Refinement<i32>>::description(),
            "(at least 1 and at most 9)"
        );
        assert_eq!(<Odd as Refinement<i32>>::description(), "not even");
    }

    #[rstest]
    fn refined_usize_uses_bounds() {
        let index = Refined::<usize, LessThan<4>>::new(3).unwrap();
        assert_eq!(*index, 3);
        assert!(Refined::<usize, LessThan<4>>::new(4).is_err());
    }
}
