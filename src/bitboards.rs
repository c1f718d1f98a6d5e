/// A 64-bit word viewed as 64 bit positions, bit 0 least significant.
pub type Bitword = u64;

// Empty and full words
pub const EMPTY: Bitword = 0;
pub const FULL: Bitword = !0;

/// Isolate the lowest set bit, or 0 for an empty word.
///
/// `v & -v` in two's complement: negation flips every bit above the lowest
/// set bit and keeps that bit itself.
#[inline]
pub fn isolate_lsb(v: Bitword) -> Bitword {
    v & v.wrapping_neg()
}

/// Integers that can be reinterpreted as a [`Bitword`].
///
/// The source bit pattern is zero-extended, so `-1i32` becomes
/// `0x0000_0000_FFFF_FFFF`, and an `as` cast back to the source type gives the
/// original value.
pub trait Widen: Copy {
    fn widen(self) -> Bitword;
}

macro_rules! impl_widen {
    ($($src:ty => $bits:ty),* $(,)?) => {
        $(
            impl Widen for $src {
                #[inline]
                fn widen(self) -> Bitword {
                    self as $bits as Bitword
                }
            }
        )*
    };
}

impl_widen! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}

/// Single conversion point from any primitive integer to a [`Bitword`]
#[inline]
pub fn widen<T: Widen>(v: T) -> Bitword {
    v.widen()
}
