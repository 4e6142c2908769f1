//! Forward-compatible wire enums.
//!
//! Every bounded string field of the payload schema decodes into a known case
//! or into the enum's `Unknown` sentinel. Decoding never fails, so a server
//! that starts sending a new value does not break older clients. `Unknown`
//! has no wire spelling: encoding it is an error.
//!
//! Declare enums with [`wire_enum!`](crate::wire_enum); the fallback logic
//! lives once, in this module.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, Serializer};

use crate::error::{FeedsError, Result};

/// Prefix of the serializer error raised for `Unknown`. `FeedsEvent::encode`
/// maps it back to [`FeedsError::InvalidEnumState`].
pub(crate) const INVALID_ENUM_STATE_MARKER: &str = "invalid enum state: ";

/// A closed vocabulary plus an `Unknown` sentinel.
pub trait WireEnum: Copy + Eq + 'static {
    /// Type name, reported by `InvalidEnumState`.
    const NAME: &'static str;
    /// Sentinel for values this client does not know.
    const UNKNOWN: Self;
    /// Known (wire string, case) pairs.
    const KNOWN: &'static [(&'static str, Self)];

    /// Exact, case-sensitive lookup; anything else is `UNKNOWN`.
    fn from_wire(raw: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(wire, _)| *wire == raw)
            .map(|(_, case)| *case)
            .unwrap_or(Self::UNKNOWN)
    }

    /// Non-string JSON (null, numbers, ...) is `UNKNOWN`.
    fn from_json(value: &serde_json::Value) -> Self {
        value.as_str().map(Self::from_wire).unwrap_or(Self::UNKNOWN)
    }

    fn to_wire(self) -> Result<&'static str> {
        Self::KNOWN
            .iter()
            .find(|(_, case)| *case == self)
            .map(|(wire, _)| *wire)
            .ok_or_else(|| FeedsError::InvalidEnumState(Self::NAME.to_string()))
    }

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Serde glue for `Serialize` impls.
pub fn serialize_wire<T: WireEnum, S: Serializer>(
    value: &T,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value.to_wire() {
        Ok(wire) => s.serialize_str(wire),
        Err(_) => Err(S::Error::custom(format_args!(
            "{INVALID_ENUM_STATE_MARKER}{}",
            T::NAME
        ))),
    }
}

/// Serde glue for `Deserialize` impls. Total: accepts any JSON value.
pub fn deserialize_wire<'de, T: WireEnum, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<T, D::Error> {
    d.deserialize_any(WireVisitor(PhantomData))
}

struct WireVisitor<T>(PhantomData<T>);

impl<'de, T: WireEnum> Visitor<'de> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} wire value", T::NAME)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<T, E> {
        Ok(T::from_wire(v))
    }

    fn visit_bool<E>(self, _: bool) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_i64<E>(self, _: i64) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_u64<E>(self, _: u64) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_f64<E>(self, _: f64) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_unit<E>(self) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_none<E>(self) -> std::result::Result<T, E> {
        Ok(T::UNKNOWN)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<T, D::Error> {
        deserialize_wire(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<T, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(T::UNKNOWN)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<T, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(T::UNKNOWN)
    }
}

/// Declare a forward-compatible wire enum.
///
/// Appends an `Unknown` variant and implements [`WireEnum`], `Serialize`,
/// `Deserialize` and `Display` (the wire string, `"unknown"` for the sentinel).
///
/// ```
/// feeds_core::wire_enum! {
///     /// Reaction kinds.
///     pub enum ReactionKind {
///         Like = "like",
///         Love = "love",
///     }
/// }
///
/// use feeds_core::WireEnum;
/// assert_eq!(ReactionKind::from_wire("love"), ReactionKind::Love);
/// assert_eq!(ReactionKind::from_wire("wow"), ReactionKind::Unknown);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not known to this client. Has no wire spelling.
            Unknown,
        }

        impl $crate::protocol::enums::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const UNKNOWN: Self = $name::Unknown;
            const KNOWN: &'static [(&'static str, Self)] = &[ $( ($wire, $name::$variant), )+ ];
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                s: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                $crate::protocol::enums::serialize_wire(self, s)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(
                d: D,
            ) -> ::core::result::Result<Self, D::Error> {
                $crate::protocol::enums::deserialize_wire(d)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $( $name::$variant => f.write_str($wire), )+
                    $name::Unknown => f.write_str("unknown"),
                }
            }
        }
    };
}
