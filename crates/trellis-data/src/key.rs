use std::fmt::Debug;
use std::hash::Hash;

/// Marker for types usable as table keys.
///
/// Tables only rely on equality and hashing; order comes from insertion.
pub trait Key: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Key for T {}

/// Values that can be read back as `f64`.
pub trait NumericValue: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericValue for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_value!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
