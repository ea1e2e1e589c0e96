use thiserror::Error;

use crate::kind::Kind;

/// Errors produced by the built-in per-kind parse functions.
///
/// These never reach callers: the registry dispatch flattens them into a
/// plain decline and the binder skips the field. The taxonomy exists so
/// trace output can say *why* a present value was not bound.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not a valid signed decimal integer, or it does not fit
    /// the destination width. Converted from `str::parse` on the exact
    /// integer type, which range-checks for free.
    #[error("invalid integer literal: {0}")]
    Int(#[from] std::num::ParseIntError),

    /// The text is not a valid decimal or exponential floating point
    /// literal.
    #[error("invalid float literal: {0}")]
    Float(#[from] std::num::ParseFloatError),

    /// The text is not one of the recognized boolean spellings
    /// (`1 t T TRUE true True 0 f F FALSE false False`).
    #[error("unrecognized boolean literal '{0}'")]
    Bool(String),

    /// A parsed integer does not fit the destination slot. Only reachable
    /// for default-width integers on targets narrower than 64 bits.
    #[error("integer out of range for {0}")]
    OutOfRange(Kind),

    /// The field's kind has no entry in the conversion table.
    #[error("no conversion for {0} fields")]
    UnsupportedKind(Kind),
}
