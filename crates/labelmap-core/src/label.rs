//! Label values
//!
//! A label map is parameterized by a fixed-width integer label type.
//! [`LabelValue`] captures the handful of numeric operations the container
//! needs: ordering, the representable range, and checked unit steps for
//! the allocator's overflow and wraparound rules.

use std::fmt;

/// Integer contract for label types.
///
/// Implemented for the fixed-width signed and unsigned integers. One value
/// per container, the background value, is reserved and never stored as a
/// key.
pub trait LabelValue: Copy + Ord + Eq + fmt::Debug + fmt::Display + 'static {
    /// Smallest representable value
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// Zero, the default background value
    const ZERO: Self;
    /// One, the first label allocated over a zero background
    const ONE: Self;

    /// `self + 1`, or `None` at the top of the range.
    fn next_up(self) -> Option<Self>;

    /// `self - 1`, or `None` at the bottom of the range.
    fn next_down(self) -> Option<Self>;
}

macro_rules! impl_label_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl LabelValue for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn next_up(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn next_down(self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_label_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_up_saturates_at_max() {
        assert_eq!(254u8.next_up(), Some(255));
        assert_eq!(u8::MAX.next_up(), None);
        assert_eq!(i32::MAX.next_up(), None);
    }

    #[test]
    fn test_next_down_saturates_at_min() {
        assert_eq!(1u8.next_down(), Some(0));
        assert_eq!(0u8.next_down(), None);
        assert_eq!(i8::MIN.next_down(), None);
        assert_eq!((-5i8).next_down(), Some(-6));
    }

    #[test]
    fn test_range_constants() {
        assert_eq!(<u8 as LabelValue>::MIN, 0);
        assert_eq!(<u8 as LabelValue>::MAX, 255);
        assert_eq!(<i16 as LabelValue>::MIN, i16::MIN);
        assert_eq!(<u32 as LabelValue>::ZERO, 0);
        assert_eq!(<u32 as LabelValue>::ONE, 1);
    }
}
