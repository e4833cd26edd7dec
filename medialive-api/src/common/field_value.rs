use std::{
    collections::BTreeMap,
    hash::{Hash, Hasher},
};

/// Equality and hashing of a single record field.
///
/// Floats compare by bit pattern with all NaNs folded into one, which makes
/// equality reflexive and lets records implement `Eq` and `Hash`.
pub(crate) trait FieldValue {
    fn field_eq(&self, other: &Self) -> bool;
    fn field_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_field_value_via_eq {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn field_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state)
                }
            }
        )*
    };
}

impl_field_value_via_eq!(String, bool, i32, i64);

fn canonical_bits(value: f64) -> u64 {
    match value.is_nan() {
        true => f64::NAN.to_bits(),
        false => value.to_bits(),
    }
}

impl FieldValue for f64 {
    fn field_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(*self).hash(state)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.field_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                state.write_u8(1);
                value.field_hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.field_eq(b))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.field_hash(state));
    }
}

impl<K: FieldValue, V: FieldValue> FieldValue for BTreeMap<K, V> {
    fn field_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka.field_eq(kb) && va.field_eq(vb))
    }

    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self {
            key.field_hash(state);
            value.field_hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of<T: FieldValue>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.field_hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_float_bits() {
        assert!(f64::NAN.field_eq(&-f64::NAN));
        assert_eq!(hash_of(&f64::NAN), hash_of(&-f64::NAN));
        assert!(!0.0f64.field_eq(&-0.0));
        assert!(29.97f64.field_eq(&29.97));
    }

    #[test]
    fn test_option_and_vec() {
        assert!(!Some(1).field_eq(&None));
        assert_ne!(hash_of(&Some(0i32)), hash_of(&None::<i32>));
        assert!(vec![1.5f64, 2.0].field_eq(&vec![1.5, 2.0]));
        assert!(!vec![1.5f64].field_eq(&vec![1.5, 2.0]));
    }
}
