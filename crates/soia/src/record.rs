//! Contracts implemented by schema-generated types.

use crate::unrecognized::{UnrecognizedEnum, UnrecognizedFields};

/// Implemented by every generated frozen struct type.
///
/// Decoders assemble values through the [`Mutable`](Struct::Mutable) builder
/// and freeze the result with [`from_mutable`](Struct::from_mutable). The
/// unrecognized-fields accessors let a keep-unrecognized decode attach the
/// trailing fields it captured and let encoders re-emit them.
pub trait Struct: Clone + Sized + 'static {
    /// The mutable builder type generated alongside the frozen type. Its
    /// `Default` value has every field set to the field type's default.
    type Mutable: Default;

    /// Freezes a builder into an immutable value.
    fn from_mutable(mutable: Self::Mutable) -> Self;

    /// The unrecognized fields captured when this value was decoded, empty
    /// for values built locally.
    fn unrecognized_fields(&self) -> &UnrecognizedFields;

    /// Returns this value with the given unrecognized fields attached.
    fn with_unrecognized_fields(self, fields: UnrecognizedFields) -> Self;
}

/// Implemented by every generated enum type.
///
/// Variant number 0 is reserved for the unknown variant, which is also the
/// default value of the type.
pub trait Enum: Clone + Sized + Send + Sync + 'static {
    /// Builds the unknown variant, carrying the raw form it was decoded from
    /// when that was captured.
    fn from_unrecognized(unrecognized: UnrecognizedEnum) -> Self;

    /// The raw unknown-variant data, or `None` for any known variant.
    fn unrecognized(&self) -> Option<&UnrecognizedEnum>;
}
