#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Method form**: `x.pipe(f) == f(x)`
//!
//! ## Flip and Curry Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Curry Equivalence**: `curry3!(f)(a)(b)(c) == f(a, b, c)`
//! - **Uncurry**: `uncurry2(curry2!(f)) == f`

use std::thread;

use fnkit::compose::{Pipe, constant, flip, identity, uncurry2};
use fnkit::{compose, curry2, curry3, curry6, pipe};
use proptest::prelude::*;
use rstest::rstest;

fn add_one(value: i64) -> i64 {
    value + 1
}

fn double(value: i64) -> i64 {
    value * 2
}

fn square(value: i64) -> i64 {
    value * value
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_is_associative(value in -1000_i64..1000) {
        let left = compose!(add_one, compose!(double, square));
        let right = compose!(compose!(add_one, double), square);
        prop_assert_eq!(left(value), right(value));
    }

    #[test]
    fn prop_compose_identities(value in any::<i32>()) {
        let negate = |x: i32| x.wrapping_neg();
        prop_assert_eq!(compose!(identity, negate)(value), negate(value));
        prop_assert_eq!(compose!(negate, identity)(value), negate(value));
    }

    #[test]
    fn prop_compose_applies_right_to_left(value in -1000_i64..1000) {
        prop_assert_eq!(compose!(add_one, double, square)(value), add_one(double(square(value))));
    }

    #[test]
    fn prop_pipe_matches_reversed_compose(value in -1000_i64..1000) {
        prop_assert_eq!(pipe!(value, square, double, add_one), compose!(add_one, double, square)(value));
        prop_assert_eq!(pipe!(value), value);
        prop_assert_eq!(value.pipe(square).pipe(add_one), pipe!(value, square, add_one));
    }
}

// =============================================================================
// Flip, constant and currying
// =============================================================================

proptest! {
    #[test]
    fn prop_double_flip_is_identity(a in any::<i16>(), b in any::<i16>()) {
        let subtract = |x: i16, y: i16| i32::from(x) - i32::from(y);
        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
    }

    #[test]
    fn prop_constant_ignores_input(value in ".{0,6}", ignored in any::<u64>()) {
        prop_assert_eq!(constant(value.clone())(ignored), value);
    }

    #[test]
    fn prop_curry_matches_uncurried(a in any::<i8>(), b in any::<i8>(), c in any::<i8>()) {
        let combine = |x: i8, y: i8, z: i8| (i32::from(x) * 100) + (i32::from(y) * 10) + i32::from(z);
        prop_assert_eq!(curry3!(combine)(a)(b)(c), combine(a, b, c));
    }

    #[test]
    fn prop_uncurry_inverts_curry(a in any::<u8>(), b in any::<u8>()) {
        let pair = |x: u8, y: u8| (x, y);
        prop_assert_eq!(uncurry2(curry2!(pair))(a, b), pair(a, b));
    }
}

// =============================================================================
// Partial application in practice
// =============================================================================

#[rstest]
fn partially_applied_stages_are_reusable() {
    let format = curry3!(|prefix: String, separator: char, value: i32| format!("{prefix}{separator}{value}"));
    let labelled = format(String::from("id"))('=');
    let rendered: Vec<String> = [1, 2, 3].into_iter().map(&labelled).collect();
    assert_eq!(rendered, vec!["id=1", "id=2", "id=3"]);
}

#[rstest]
fn curried_stages_cross_threads() {
    let scale = curry2!(|factor: u64, value: u64| factor * value);
    let triple = scale(3);
    let handles: Vec<_> = (1..=3_u64)
        .map(|value| {
            let triple = triple.clone();
            thread::spawn(move || triple(value))
        })
        .collect();
    let results: Vec<u64> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert_eq!(results, vec![3, 6, 9]);
}

#[rstest]
fn six_argument_curry() {
    let sum6 = curry6!(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| [a, b, c, d, e, f].iter().map(|&x| u32::from(x)).sum::<u32>());
    assert_eq!(sum6(1)(2)(3)(4)(5)(6), 21);
}

#[rstest]
fn composed_pipelines_work_on_owned_data() {
    let words = |text: String| text.split_whitespace().map(str::to_owned).collect::<Vec<_>>();
    let count = |items: Vec<String>| items.len();
    assert_eq!(compose!(count, words)(String::from("a b  c")), 3);
    assert_eq!(pipe!(String::from("one two"), words, count), 2);
}
