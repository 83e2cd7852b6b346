use std::fmt;

/// Fixed-width integer types the multiplier operates on.
///
/// Arithmetic is exposed in two flavors: wrapping (two's-complement
/// wraparound, identical in debug and release builds) and checked.
pub trait Element: Copy + PartialEq + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;
    /// Short type name, e.g. "i32".
    const NAME: &'static str;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_element {
    ($($t:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
