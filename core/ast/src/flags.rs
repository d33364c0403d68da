//! Per-kind node flag groups.
//!
//! Flags travel on the wire as a single varuint that fits in 15 bits. Every group
//! is a thin newtype over that value; the bit positions are the wire values of the
//! supported protocol version.

use serde::Serialize;

macro_rules! flag_groups {
    (
        $(
            $(#[$outer:meta])*
            pub struct $name:ident {
                $(
                    $(#[$flag_attr:meta])*
                    $flag:ident = $value:expr
                ),* $(,)?
            }
        )+
    ) => {
        $(
            $(#[$outer])*
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
            #[serde(transparent)]
            pub struct $name(u16);

            impl $name {
                $(
                    $(#[$flag_attr])*
                    pub const $flag: Self = Self($value);
                )*

                #[must_use]
                pub const fn from_bits(bits: u16) -> Self {
                    Self(bits)
                }

                #[must_use]
                pub const fn bits(self) -> u16 {
                    self.0
                }

                #[must_use]
                pub const fn is_empty(self) -> bool {
                    self.0 == 0
                }

                #[must_use]
                pub const fn contains(self, other: Self) -> bool {
                    self.0 & other.0 == other.0
                }

                /// Names of the known flags that are set, in bit order.
                #[must_use]
                pub fn names(self) -> Vec<&'static str> {
                    let mut names = Vec::new();
                    $(
                        if self.contains(Self::$flag) {
                            names.push(stringify!($flag));
                        }
                    )*
                    names
                }
            }

            impl std::ops::BitOr for $name {
                type Output = Self;

                fn bitor(self, rhs: Self) -> Self {
                    Self(self.0 | rhs.0)
                }
            }

            impl std::fmt::Debug for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}({:#x}", stringify!($name), self.0)?;
                    let names = self.names();
                    if !names.is_empty() {
                        write!(f, ": {}", names.join(" | "))?;
                    }
                    write!(f, ")")
                }
            }
        )+
    };
}

flag_groups! {
    /// Flags for arguments nodes.
    pub struct ArgumentsNodeFlags {
        /// The arguments contain a `**` splat.
        CONTAINS_KEYWORD_SPLAT = 1 << 0,
    }

    /// Flags for array nodes.
    pub struct ArrayNodeFlags {
        /// The array literal contains a `*` splat.
        CONTAINS_SPLAT = 1 << 0,
    }

    /// Flags for call nodes and the call-shaped write nodes.
    pub struct CallNodeFlags {
        /// `&.` operator.
        SAFE_NAVIGATION = 1 << 0,
        /// A bare identifier that could have been a local variable.
        VARIABLE_CALL = 1 << 1,
        /// An attribute write such as `foo.bar = 1`.
        ATTRIBUTE_WRITE = 1 << 2,
        /// Private and protected methods may be called.
        IGNORE_VISIBILITY = 1 << 3,
    }

    /// Flags for x-string nodes.
    pub struct EncodingFlags {
        FORCED_UTF8_ENCODING = 1 << 0,
        FORCED_BINARY_ENCODING = 1 << 1,
    }

    /// Radix an integer literal was written in.
    pub struct IntegerBaseFlags {
        BINARY = 1 << 0,
        DECIMAL = 1 << 1,
        OCTAL = 1 << 2,
        HEXADECIMAL = 1 << 3,
    }

    /// Flags for keyword hash nodes.
    pub struct KeywordHashNodeFlags {
        /// Every key is a symbol literal.
        SYMBOL_KEYS = 1 << 0,
    }

    /// Flags for while and until loops.
    pub struct LoopFlags {
        /// `begin ... end while cond`: the body runs before the first check.
        BEGIN_MODIFIER = 1 << 0,
    }

    /// Flags for parameter nodes.
    pub struct ParameterFlags {
        /// The parameter name repeats an earlier one (only legal for `_`-prefixed names).
        REPEATED_PARAMETER = 1 << 0,
    }

    /// Flags for range and flip-flop nodes.
    pub struct RangeFlags {
        /// `...` rather than `..`.
        EXCLUDE_END = 1 << 0,
    }

    /// Regular expression options and encodings.
    pub struct RegularExpressionFlags {
        IGNORE_CASE = 1 << 0,
        EXTENDED = 1 << 1,
        MULTI_LINE = 1 << 2,
        ONCE = 1 << 3,
        EUC_JP = 1 << 4,
        ASCII_8BIT = 1 << 5,
        WINDOWS_31J = 1 << 6,
        UTF_8 = 1 << 7,
        FORCED_UTF8_ENCODING = 1 << 8,
        FORCED_BINARY_ENCODING = 1 << 9,
        FORCED_US_ASCII_ENCODING = 1 << 10,
    }

    /// Flags for string nodes.
    pub struct StringFlags {
        FORCED_UTF8_ENCODING = 1 << 0,
        FORCED_BINARY_ENCODING = 1 << 1,
        /// Frozen by `# frozen_string_literal: true`.
        FROZEN = 1 << 2,
    }

    /// Flags for symbol nodes.
    pub struct SymbolFlags {
        FORCED_UTF8_ENCODING = 1 << 0,
        FORCED_BINARY_ENCODING = 1 << 1,
        FORCED_US_ASCII_ENCODING = 1 << 2,
    }
}
