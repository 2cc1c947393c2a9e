macro_rules! header_field_range_accessors {
    ( $(($get_range: ident, $get_range_mut: ident, $left: literal..$right: literal $(,)?)),* $(,)? )
    => {
        $(
            #[inline]
            fn $get_range(buf: &[u8]) -> &[u8] {
                &buf[$left..$right]
            }
        )*

        $(
            #[inline]
            fn $get_range_mut(buf: &mut [u8]) -> &mut [u8] {
                &mut buf[$left..$right]
            }
        )*
    }
}

macro_rules! header_field_val_accessors {
    ( $(($get_val: ident, $get_val_mut: ident, $val: literal $(,)?)),* $(,)? )
    => {
        $(
            #[inline]
            fn $get_val(buf: &[u8]) -> &u8 {
                &buf[$val]
            }
        )*

        $(
            #[inline]
            fn $get_val_mut(buf: &mut [u8]) -> &mut u8 {
                &mut buf[$val]
            }
        )*
    }
}

// A transparent wrapper around a raw flag byte, with one named constant per
// control bit and lossless conversions to and from the raw value.
macro_rules! flag_set {
    (
        $(#[$set_attr: meta])*
        pub struct $tname:ident ($size_t:ty) {
            $(
                $(#[$arm_attr: meta])*
                $flag_arm:ident = $num_exp:expr
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
        $(#[$set_attr])*
        pub struct $tname($size_t);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $flag_arm: Self = Self($num_exp);
            )+

            /// An empty flag set.
            pub const EMPTY: Self = Self(0);

            /// Get the raw value.
            #[inline]
            pub fn raw(&self) -> $size_t {
                self.0
            }

            /// Whether every bit of `other` is also set in `self`.
            #[inline]
            pub fn contains(&self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl ::core::ops::BitOr for $tname {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::convert::From<$size_t> for $tname {
            #[inline]
            fn from(value: $size_t) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for $size_t {
            #[inline]
            fn from(value: $tname) -> $size_t {
                value.0
            }
        }
    };
}
