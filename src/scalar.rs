use num_traits::{Num, WrappingAdd, WrappingSub};

/// Coordinate domain shared by the integer and floating-point families.
///
/// All coordinate arithmetic goes through `wrapping_add`/`wrapping_sub`:
/// integers wrap at their width in every build profile, floats follow IEEE.
pub trait Scalar: Num + Copy + PartialOrd {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t as WrappingAdd>::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t as WrappingSub>::wrapping_sub(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }
        }
    )*};
}

int_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_scalar!(f32, f64);

// NaN inputs fall out of the raw comparison, no special casing.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}
