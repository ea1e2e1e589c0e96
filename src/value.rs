use crate::kind::Kind;

/// A successfully converted environment value, tagged with its kind.
///
/// Conversion functions must return the exact variant matching the
/// destination field's [`Kind`]; the binder checks the pairing at the
/// write site and skips the field on a mismatch instead of coercing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    I8(i8),
    I16(i16),
    Int(isize),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Str(_) => Kind::Str,
            Value::I8(_) => Kind::I8,
            Value::I16(_) => Kind::I16,
            Value::Int(_) => Kind::Int,
            Value::I32(_) => Kind::I32,
            Value::I64(_) => Kind::I64,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Bool(_) => Kind::Bool,
        }
    }
}
