use tracing::debug;

use crate::kind::Kind;
use crate::value::Value;

/// Describes one bindable field of a record: its name, its tag table,
/// and an exclusive mutable reference to its storage.
///
/// The tag table maps annotation keys to environment variable names, so
/// several independent annotation schemes can coexist on one record.
pub struct Field<'a> {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        slot: Slot<'a>,
    ) -> Self {
        Self { name, tags, slot }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The environment variable name annotated under `key`, if any.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, var)| var)
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    /// Write `value` into the field's slot. Returns `false` (leaving the
    /// field untouched) when the value's variant does not match the
    /// slot's kind.
    pub fn store(&mut self, value: Value) -> bool {
        let stored = self.slot.store(value);
        if !stored {
            debug!(
                field = self.name,
                kind = %self.kind(),
                "converted value does not match field kind, field left unchanged"
            );
        }
        stored
    }
}

/// A mutable reference into a record field, tagged with the field's
/// primitive kind.
///
/// `Unsupported` marks fields whose declared type is outside the
/// conversion table; they still appear in the descriptor list so the
/// registry gets to decline them, but nothing can ever be stored.
pub enum Slot<'a> {
    Str(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    Int(&'a mut isize),
    I32(&'a mut i32),
    I64(&'a mut i64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Unsupported,
}

impl Slot<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Str(_) => Kind::Str,
            Slot::I8(_) => Kind::I8,
            Slot::I16(_) => Kind::I16,
            Slot::Int(_) => Kind::Int,
            Slot::I32(_) => Kind::I32,
            Slot::I64(_) => Kind::I64,
            Slot::F32(_) => Kind::F32,
            Slot::F64(_) => Kind::F64,
            Slot::Bool(_) => Kind::Bool,
            Slot::Unsupported => Kind::Unsupported,
        }
    }

    fn store(&mut self, value: Value) -> bool {
        match (self, value) {
            (Slot::Str(slot), Value::Str(v)) => **slot = v,
            (Slot::I8(slot), Value::I8(v)) => **slot = v,
            (Slot::I16(slot), Value::I16(v)) => **slot = v,
            (Slot::Int(slot), Value::Int(v)) => **slot = v,
            (Slot::I32(slot), Value::I32(v)) => **slot = v,
            (Slot::I64(slot), Value::I64(v)) => **slot = v,
            (Slot::F32(slot), Value::F32(v)) => **slot = v,
            (Slot::F64(slot), Value::F64(v)) => **slot = v,
            (Slot::Bool(slot), Value::Bool(v)) => **slot = v,
            _ => return false,
        }
        true
    }
}

/// Borrow a field as its [`Slot`], selected by the field's Rust type.
///
/// This is what lets [`bindable!`](crate::bindable) stay free of
/// per-field kind spellings. Unsigned integer types deliberately map to
/// [`Slot::Unsupported`]: the field can be annotated, but the built-in
/// registry declines it.
pub trait AsSlot {
    fn as_slot(&mut self) -> Slot<'_>;
}

macro_rules! impl_as_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

impl_as_slot! {
    String => Str,
    i8 => I8,
    i16 => I16,
    isize => Int,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

macro_rules! impl_as_slot_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported
                }
            }
        )*
    };
}

impl_as_slot_unsupported!(u8, u16, u32, u64, usize);

/// Implements [`Bindable`](crate::Bindable) for a struct from a list of
/// `field => [(annotation key, variable name), ...]` entries.
///
/// Field kinds are taken from the struct's own types via [`AsSlot`], so
/// the list only repeats names and tags:
///
/// ```
/// struct Server {
///     host: String,
///     port: i32,
/// }
///
/// envtag::bindable! {
///     Server {
///         host => [("env", "SERVER_HOST")],
///         port => [("env", "SERVER_PORT"), ("test", "TEST_PORT")],
///     }
/// }
/// ```
#[macro_export]
macro_rules! bindable {
    ($ty:ty { $( $field:ident => [ $( ($key:expr, $var:expr) ),* $(,)? ] ),* $(,)? }) => {
        impl $crate::Bindable for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            ::std::stringify!($field),
                            &[ $( ($key, $var) ),* ],
                            $crate::AsSlot::as_slot(&mut self.$field),
                        )
                    ),*
                ]
            }
        }
    };
}
