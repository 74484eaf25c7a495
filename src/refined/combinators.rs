//! Boolean algebra over refinements.

use std::marker::PhantomData;

use super::Refinement;

/// Holds when both `A` and `B` hold.
pub struct Both<A, B>(PhantomData<fn() -> (A, B)>);

/// Holds when at least one of `A` and `B` holds.
pub struct OneOf<A, B>(PhantomData<fn() -> (A, B)>);

/// Holds when `A` does not.
pub struct Not<A>(PhantomData<fn() -> A>);

impl<T, A, B> Refinement<T> for Both<A, B>
where
    T: ?Sized,
    A: Refinement<T>,
    B: Refinement<T>,
{
    fn is_valid(value: &T) -> bool {
        A::is_valid(value) && B::is_valid(value)
    }

    fn description() -> String {
        format!("({} and {})", A::description(), B::description())
    }
}

impl<T, A, B> Refinement<T> for OneOf<A, B>
where
    T: ?Sized,
    A: Refinement<T>,
    B: Refinement<T>,
{
    fn is_valid(value: &T) -> bool {
        A::is_valid(value) || B::is_valid(value)
    }

    fn description() -> String {
        format!("({} or {})", A::description(), B::description())
    }
}

impl<T: ?Sized, A: Refinement<T>> Refinement<T> for Not<A> {
    fn is_valid(value: &T) -> bool {
        !A::is_valid(value)
    }

    fn description() -> String {
        format!("not {}", A::description())
    }
}
