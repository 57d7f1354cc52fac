//! Comparator contract.
//!
//! A comparator answers "is `a` below, equal to, or above `b`", or refuses to
//! answer with its own error type. Sweep-line callers use the refusal to
//! report two segments that cannot be ordered because they intersect.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Three-way comparison that may fail.
pub trait Comparator<K: ?Sized> {
    type Error;

    fn compare(&self, a: &K, b: &K) -> Result<Ordering, Self::Error>;
}

impl<K, E, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Result<Ordering, E> {
        self(a, b)
    }
}

/// `Ord`-based comparator; never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    type Error = Infallible;

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// Adapts a C-style comparator returning negative / zero / positive.
///
/// ```
/// use redblack::{RbTree, ThreeWay};
///
/// let mut tree = RbTree::with_comparator(ThreeWay(|a: &i32, b: &i32| b - a));
/// for k in [1, 3, 2] {
///     tree.insert(k, ()).unwrap();
/// }
/// let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeWay<F>(pub F);

impl<K, F> Comparator<K> for ThreeWay<F>
where
    K: ?Sized,
    F: Fn(&K, &K) -> i32,
{
    type Error = Infallible;

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b).cmp(&0))
    }
}

/// Unwraps results whose error type is uninhabited.
pub trait IntoOk<T> {
    fn into_ok(self) -> T;
}

impl<T> IntoOk<T> for Result<T, Infallible> {
    #[inline]
    fn into_ok(self) -> T {
        match self {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_comparators() {
        let cmp = |a: &u8, b: &u8| -> Result<Ordering, &'static str> {
            if a == b {
                Err("equal keys")
            } else {
                Ok(a.cmp(b))
            }
        };
        assert_eq!(cmp.compare(&1, &2), Ok(Ordering::Less));
        assert_eq!(cmp.compare(&2, &2), Err("equal keys"));
    }

    #[test]
    fn three_way_maps_sign() {
        let cmp = ThreeWay(|a: &i64, b: &i64| (a - b) as i32);
        assert_eq!(cmp.compare(&-5, &5).into_ok(), Ordering::Less);
        assert_eq!(cmp.compare(&5, &5).into_ok(), Ordering::Equal);
        assert_eq!(cmp.compare(&9, &5).into_ok(), Ordering::Greater);
    }

    #[test]
    fn natural_order_on_unsized_keys() {
        assert_eq!(NaturalOrder.compare("abc", "abd").into_ok(), Ordering::Less);
    }
}
