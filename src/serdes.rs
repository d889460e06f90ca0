//! `serde` support.  A register is serialized as its bit string, most significant bit first, and
//! deserialized from one with the same rules as `FromStr`.

#![cfg(feature = "serde")]

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::register::Register;

impl Serialize for Register {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RegisterVisitor;

impl<'de> Visitor<'de> for RegisterVisitor {
    type Value = Register;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-empty string of 0s and 1s")
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Register, E> {
        text.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Register {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RegisterVisitor)
    }
}
