use std::cmp::Ordering;

use crate::Integer;

/// Relation between the two ends of a sorted scan.
///
/// Equal values must always be equivalent, and `balance` has to be monotone
/// in both arguments so that whichever end it points at can never be matched
/// by anything still left between the pointers.
pub trait Equivalence {
    /// `Equal` when `head` and `tail` share a class, `Less` when `head` is
    /// alone in its class, `Greater` when `tail` is.
    fn balance(&self, head: Integer, tail: Integer) -> Ordering;
}

impl<E: Equivalence + ?Sized> Equivalence for &E {
    fn balance(&self, head: Integer, tail: Integer) -> Ordering {
        (**self).balance(head, tail)
    }
}

/// `x ~ y` iff `|x| == |y|`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteValue;

impl Equivalence for AbsoluteValue {
    fn balance(&self, head: Integer, tail: Integer) -> Ordering {
        (i128::from(head) + i128::from(tail)).cmp(&0)
    }
}

/// `x ~ y` iff `x` and `y` lie at the same distance from `pivot`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reflection {
    pub pivot: Integer,
}

impl Equivalence for Reflection {
    fn balance(&self, head: Integer, tail: Integer) -> Ordering {
        (i128::from(head) + i128::from(tail)).cmp(&(2 * i128::from(self.pivot)))
    }
}
