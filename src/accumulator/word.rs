use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Fixed-width signed integer used by accumulators.
///
/// All arithmetic goes through the `wrapping_*` methods, so overflow wraps
/// per two's-complement rules and never panics, saturates or widens.
pub trait Word:
    Copy + Ord + fmt::Debug + fmt::Display + FromStr<Err = ParseIntError> + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const WIDTH: Width;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_word {
    ($($t: ty => $width: expr),+ $(,)?) => {
        $(
            impl Word for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const WIDTH: Width = $width;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )+
    };
}

impl_word!(i32 => Width::W32, i64 => Width::W64);

/// Width of the word used for a computation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display, IntoStaticStr)]
pub enum Width {
    #[default]
    #[strum(serialize = "i32")]
    W32,
    #[strum(serialize = "i64")]
    W64,
}
