//! Raw storage for data the local schema does not declare.
//!
//! A decoder built from an old schema revision can receive values written by
//! a newer one. When asked to, it captures the parts it does not recognize in
//! the containers below, and encoders re-emit them verbatim so that
//! re-encoding is lossless.
//!
//! Captured data is tagged with the format it came from and is only re-emitted
//! into that same format. Both containers compare equal to any other instance
//! of themselves and hash to nothing, so generated types can derive
//! `PartialEq` and `Hash` without decoder provenance leaking into their
//! logical value.

use std::hash::{Hash, Hasher};

use serde_json::Value;

/// Trailing struct fields captured by a keep-unrecognized decode.
#[derive(Clone, Debug, Default)]
pub struct UnrecognizedFields {
    pub(crate) slots: RawSlots,
}

#[derive(Clone, Debug, Default)]
pub(crate) enum RawSlots {
    #[default]
    Empty,
    /// One self-delimiting wire value per trailing slot.
    Binary(Vec<Vec<u8>>),
    /// One JSON value per trailing slot.
    Json(Vec<Value>),
}

impl UnrecognizedFields {
    /// True when no unrecognized fields were captured.
    pub fn is_empty(&self) -> bool {
        matches!(self.slots, RawSlots::Empty)
    }

    pub(crate) fn from_binary(slots: Vec<Vec<u8>>) -> UnrecognizedFields {
        if slots.is_empty() {
            UnrecognizedFields::default()
        } else {
            UnrecognizedFields {
                slots: RawSlots::Binary(slots),
            }
        }
    }

    pub(crate) fn from_json(slots: Vec<Value>) -> UnrecognizedFields {
        if slots.is_empty() {
            UnrecognizedFields::default()
        } else {
            UnrecognizedFields {
                slots: RawSlots::Json(slots),
            }
        }
    }

    pub(crate) fn binary_slots(&self) -> Option<&[Vec<u8>]> {
        match &self.slots {
            RawSlots::Binary(slots) => Some(slots),
            _ => None,
        }
    }

    pub(crate) fn json_slots(&self) -> Option<&[Value]> {
        match &self.slots {
            RawSlots::Json(slots) => Some(slots),
            _ => None,
        }
    }
}

impl PartialEq for UnrecognizedFields {
    fn eq(&self, _other: &UnrecognizedFields) -> bool {
        true
    }
}

impl Eq for UnrecognizedFields {}

impl Hash for UnrecognizedFields {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

/// An enum variant the local schema does not declare, captured whole.
#[derive(Clone, Debug, Default)]
pub struct UnrecognizedEnum {
    pub(crate) raw: RawVariant,
}

#[derive(Clone, Debug, Default)]
pub(crate) enum RawVariant {
    #[default]
    Empty,
    /// One whole self-delimiting wire value.
    Binary(Vec<u8>),
    /// One whole JSON value.
    Json(Value),
}

impl UnrecognizedEnum {
    /// True when no raw variant data was captured. The empty instance is the
    /// default value of every generated enum type.
    pub fn is_empty(&self) -> bool {
        matches!(self.raw, RawVariant::Empty)
    }

    pub(crate) fn from_binary(raw: Vec<u8>) -> UnrecognizedEnum {
        UnrecognizedEnum {
            raw: RawVariant::Binary(raw),
        }
    }

    pub(crate) fn from_json(raw: Value) -> UnrecognizedEnum {
        UnrecognizedEnum {
            raw: RawVariant::Json(raw),
        }
    }
}

impl PartialEq for UnrecognizedEnum {
    fn eq(&self, _other: &UnrecognizedEnum) -> bool {
        true
    }
}

impl Eq for UnrecognizedEnum {}

impl Hash for UnrecognizedEnum {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
