/// The closed set of primitive kinds eligible for binding.
///
/// `Unsupported` stands in for every field kind outside the conversion
/// table (unsigned integers, compound types). It flows through the
/// registry like any other kind and is declined there, so annotated
/// fields of such kinds are skipped rather than rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Str,
    I8,
    I16,
    /// Default-width integer (`isize` slots). Parsed with 64-bit range.
    Int,
    I32,
    I64,
    F32,
    F64,
    Bool,
    Unsupported,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Str => "string",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::Int => "isize",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Bool => "bool",
            Kind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}
