#![cfg(feature = "refined")]
//! Integration tests for refinement types.

use std::collections::{BTreeSet, HashSet};

use fnkit::refined::{
    Alphanumeric, Both, Even, GreaterThan, InRange, LessThan, MaxLength, MinLength, Negative,
    NonEmpty, Not, Odd, OneOf, Positive, Refined, Refinement, RefinementError, Trimmed,
};
use proptest::prelude::*;
use rstest::rstest;

type Port = Refined<u16, GreaterThan<1023>>;
type Username = Refined<String, Both<Both<MinLength<3>, MaxLength<12>>, Both<Alphanumeric, Trimmed>>>;
type NonZeroish = Refined<i32, OneOf<Positive, Negative>>;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case("ferris", true)]
#[case("ab", false)]
#[case("averyveryverylongname", false)]
#[case("with space", false)]
#[case("日本語のなまえ", true)]
fn username_rules_compose(#[case] candidate: &str, #[case] accepted: bool) {
    assert_eq!(Username::new(candidate.to_string()).is_ok(), accepted);
}

#[rstest]
fn rejected_value_is_returned_with_the_rule() {
    let error: RefinementError<u16> = Port::new(80).unwrap_err();
    assert_eq!(*error.value(), 80);
    assert_eq!(error.rule(), "greater than 1023");
    assert_eq!(error.to_string(), "value does not satisfy greater than 1023");
    assert_eq!(error.into_value(), 80);
}

#[rstest]
fn descriptions_nest() {
    assert_eq!(
        <Both<Positive, OneOf<Even, Not<LessThan<10>>>> as Refinement<i32>>::description(),
        "(positive and (even or not less than 10))"
    );
    assert_eq!(<Odd as Refinement<i32>>::description(), "not even");
}

#[rstest]
fn errors_are_std_errors() {
    fn boxed() -> Result<Port, Box<dyn std::error::Error>> {
        Ok(Port::new(22)?)
    }
    assert_eq!(
        boxed().unwrap_err().to_string(),
        "value does not satisfy greater than 1023"
    );
}

// =============================================================================
// Proof manipulation
// =============================================================================

#[rstest]
fn refine_adds_a_proof_and_first_second_drop_one() {
    let positive = Refined::<i64, Positive>::new(12).unwrap();
    let both = positive.refine::<Even>().unwrap();
    assert_eq!(*both.first(), 12);
    assert_eq!(*both.second(), 12);

    let odd = Refined::<i64, Positive>::new(7).unwrap().refine::<Even>();
    assert_eq!(odd.unwrap_err().into_value(), 7);
}

#[rstest]
fn either_widens_to_a_disjunction() {
    let positive = Refined::<i32, Positive>::new(5).unwrap();
    let widened: NonZeroish = positive.either_left();
    assert_eq!(*widened, 5);

    let negative = Refined::<i32, Negative>::new(-5).unwrap();
    let widened: NonZeroish = negative.either_right();
    assert_eq!(*widened, -5);
}

#[rstest]
fn double_negation_simplifies() {
    let value = Refined::<u8, Not<Not<Even>>>::new(4).unwrap();
    let simplified: Refined<u8, Even> = value.simplify();
    assert_eq!(simplified.into_inner(), 4);
}

#[rstest]
fn map_refined_revalidates() {
    let quantity = Refined::<u32, Positive>::new(3).unwrap();
    let percentage = quantity.map_refined::<u32, InRange<0, 100>, _>(|value| value * 30);
    assert_eq!(percentage.map(Refined::into_inner), Ok(90));

    let too_much = Refined::<u32, Positive>::new(4)
        .unwrap()
        .map_refined::<u32, InRange<0, 100>, _>(|value| value * 30);
    assert!(too_much.is_err());
}

// =============================================================================
// Delegated traits
// =============================================================================

#[rstest]
fn equality_ordering_and_hashing_follow_the_value() {
    let names: Vec<Refined<String, NonEmpty>> = ["b", "a", "b"]
        .into_iter()
        .map(|name| Refined::new(name.to_string()).unwrap())
        .collect();

    let unique: HashSet<_> = names.iter().cloned().collect();
    assert_eq!(unique.len(), 2);

    let sorted: BTreeSet<_> = names.into_iter().collect();
    let plain: Vec<&str> = sorted.iter().map(|name| name.as_str()).collect();
    assert_eq!(plain, vec!["a", "b"]);
}

#[rstest]
fn formatting_is_transparent() {
    let port = Port::new(8080).unwrap();
    assert_eq!(port.to_string(), "8080");
    assert_eq!(format!("{port:?}"), "Refined(8080)");
}

#[rstest]
fn borrowed_refined_values_look_up_plain_keys() {
    let set: HashSet<Refined<String, NonEmpty>> =
        HashSet::from([Refined::new(String::from("key")).unwrap()]);
    assert!(set.contains(&String::from("key")));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_new_accepts_exactly_valid_values(value in any::<i32>()) {
        prop_assert_eq!(Refined::<i32, Positive>::new(value).is_ok(), value > 0);
        prop_assert_eq!(Refined::<i32, Even>::new(value).is_ok(), value % 2 == 0);
        prop_assert_eq!(Refined::<i32, Odd>::new(value).is_ok(), value % 2 != 0);
    }

    #[test]
    fn prop_combinators_follow_boolean_logic(value in -50_i16..50) {
        let positive = value > 0;
        let even = value % 2 == 0;
        prop_assert_eq!(<Both<Positive, Even> as Refinement<i16>>::is_valid(&value), positive && even);
        prop_assert_eq!(<OneOf<Positive, Even> as Refinement<i16>>::is_valid(&value), positive || even);
        prop_assert_eq!(<Not<Positive> as Refinement<i16>>::is_valid(&value), !positive);
    }

    #[test]
    fn prop_in_range_is_inclusive(value in any::<i64>()) {
        prop_assert_eq!(
            Refined::<i64, InRange<{ -10 }, 10>>::new(value).is_ok(),
            (-10..=10).contains(&value)
        );
    }

    #[test]
    fn prop_valid_values_round_trip(value in 1_u64..) {
        let refined = Refined::<u64, Positive>::new(value).unwrap();
        prop_assert_eq!(refined.into_inner(), value);
    }
}
