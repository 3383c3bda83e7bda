//! Emptiness predicates over heterogeneous values.
//!
//! A value is considered empty when it carries no meaningful content for its
//! category: an absent `Option`, a zero-length string or collection, the
//! boolean `false`, a NaN float, or an exactly-zero integer. Each category
//! gets its own [`Emptiness`] impl; [`serde_json::Value`] serves as the
//! dynamically-typed entry point when the category is only known at runtime.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Per-type emptiness classification.
///
/// Implementations must be pure and deterministic: the same value always
/// yields the same verdict, and classification never panics.
pub trait Emptiness {
    /// Returns `true` if the value is considered empty.
    fn is_empty_value(&self) -> bool;
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// The absent marker. `None` is empty unconditionally; `Some` delegates to
/// the payload's own classification.
impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, Emptiness::is_empty_value)
    }
}

impl Emptiness for () {
    fn is_empty_value(&self) -> bool {
        true
    }
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Boolean falsity itself counts as an emptiness signal, not merely absence.
impl Emptiness for bool {
    fn is_empty_value(&self) -> bool {
        !self
    }
}

// Floats follow the number rule: only NaN is empty. Zero is a value.
impl Emptiness for f32 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl Emptiness for f64 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

// Integers follow the exact-integer rule: empty iff exactly zero.
macro_rules! impl_emptiness_for_integers {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Emptiness for $ty {
                fn is_empty_value(&self) -> bool {
                    *self == 0
                }
            }
        )+
    };
}

impl_emptiness_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for HashMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Dynamic entry point for values whose category is only known at runtime.
///
/// The match is total over every JSON category. `Number` is never empty:
/// JSON cannot represent NaN, and finite numbers, zero included, carry
/// content.
impl Emptiness for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

/// Checks whether a value is considered empty.
#[must_use]
pub fn is_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

/// Checks whether a value is not considered empty.
#[must_use]
pub fn is_not_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    !value.is_empty_value()
}

/// Checks whether at least one of the values is empty.
///
/// An empty list yields `false`: no element exists that is empty.
#[must_use]
pub fn is_any_empty(values: &[&dyn Emptiness]) -> bool {
    values.iter().any(|value| value.is_empty_value())
}

/// Checks whether every value is empty.
///
/// An empty list yields `true` (vacuous truth).
#[must_use]
pub fn is_all_empty(values: &[&dyn Emptiness]) -> bool {
    values.iter().all(|value| value.is_empty_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_markers_are_empty() {
        assert!(is_empty(&None::<i32>));
        assert!(is_empty(&()));
        assert!(is_empty(&Some("")));
        assert!(is_not_empty(&Some(1)));
    }

    #[test]
    fn test_strings() {
        assert!(is_empty(""));
        assert!(is_empty(&String::new()));
        assert!(is_not_empty("hello"));
        assert!(is_not_empty(" ")); // whitespace is content
    }

    #[test]
    fn test_booleans() {
        assert!(is_empty(&false));
        assert!(is_not_empty(&true));
    }

    #[test]
    fn test_floats_only_nan_is_empty() {
        assert!(is_empty(&f64::NAN));
        assert!(is_empty(&f32::NAN));
        assert!(is_not_empty(&0.0_f64));
        assert!(is_not_empty(&-1.5_f64));
        assert!(is_not_empty(&f64::INFINITY));
    }

    #[test]
    fn test_integers_zero_is_empty() {
        assert!(is_empty(&0_i64));
        assert!(is_empty(&0_u8));
        assert!(is_not_empty(&1_i32));
        assert!(is_not_empty(&-1_i64));
    }

    #[test]
    fn test_sequences() {
        assert!(is_empty(&Vec::<i32>::new()));
        assert!(is_not_empty(&vec![1, 2, 3]));
        let empty_slice: &[i32] = &[];
        assert!(is_empty(empty_slice));
    }

    #[test]
    fn test_keyed_records() {
        assert!(is_empty(&HashMap::<String, i32>::new()));
        assert!(is_empty(&BTreeMap::<String, i32>::new()));

        let mut map = HashMap::new();
        map.insert("a", 1);
        assert!(is_not_empty(&map));
    }

    #[test]
    fn test_dynamic_values() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!(false)));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(is_not_empty(&json!(0)));
        assert!(is_not_empty(&json!({ "a": 1 })));
        assert!(is_not_empty(&json!([0])));
    }

    #[test]
    fn test_is_not_empty_negates_is_empty() {
        let values: [&dyn Emptiness; 6] =
            [&"", &true, &0_i64, &f64::NAN, &None::<i32>, &json!({ "a": 1 })];
        for value in values {
            assert_ne!(is_empty(value), is_not_empty(value));
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let value = json!({ "a": 1 });
        assert_eq!(is_empty(&value), is_empty(&value));
        assert_eq!(is_empty(&f64::NAN), is_empty(&f64::NAN));
    }

    #[test]
    fn test_any_empty_over_mixed_values() {
        assert!(is_any_empty(&[&1_i64, &None::<i32>, &3_i64]));
        assert!(!is_any_empty(&[&1_i64, &"x", &true]));
    }

    #[test]
    fn test_all_empty_over_mixed_values() {
        assert!(is_all_empty(&[&None::<i32>, &(), &""]));
        assert!(!is_all_empty(&[&None::<i32>, &1_i64]));
    }

    #[test]
    fn test_zero_argument_boundaries() {
        // Exists over an empty domain is false; for-all is vacuously true.
        assert!(!is_any_empty(&[]));
        assert!(is_all_empty(&[]));
    }
}
