use serde_json::Value;
use std::cmp::Ordering;

/// A total ordering over all JSON values, including values of different types.
///
/// Implementations must be stateless with respect to `compare`: the same pair
/// of values always yields the same [`Ordering`], and `compare(a, b)` is the
/// reverse of `compare(b, a)`.
///
/// Only [`Collator::compare`] is required. The remaining methods are derived
/// from it, but an implementation may override [`Collator::equal`] when a
/// cheaper equality check exists.
pub trait Collator {
    /// Three-way comparison of `a` against `b`.
    fn compare(&self, a: &Value, b: &Value) -> Ordering;

    /// Returns `true` when `a` and `b` collate as equal.
    fn equal(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn lt(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn lte(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    fn gt(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    fn gte(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

impl<C: Collator + ?Sized> Collator for &C {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        (**self).compare(a, b)
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        (**self).equal(a, b)
    }
}

impl<C: Collator + ?Sized> Collator for Box<C> {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        (**self).compare(a, b)
    }

    fn equal(&self, a: &Value, b: &Value) -> bool {
        (**self).equal(a, b)
    }
}
