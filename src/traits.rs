use crate::field::Field;

/// A trait for record types whose fields can be bound from environment
/// variables.
///
/// Rust has no runtime reflection, so implementors enumerate their own
/// fields as [`Field`] descriptors: name, tag table, and a mutable slot
/// into the field's storage. The binder walks the descriptors in the
/// order returned, which should be the struct's declared field order.
/// The [`bindable!`](crate::bindable) macro generates the impl from a
/// field list; implementing by hand is equivalent.
///
/// # Implementation Guidelines
/// - Return one descriptor per field that should participate in binding;
///   fields without descriptors are simply never touched
/// - Use the field's own name for the descriptor name (it only appears
///   in diagnostics)
/// - Fields of unsupported kinds may still be listed with
///   [`Slot::Unsupported`](crate::Slot::Unsupported); the registry
///   declines them and they are skipped
///
/// # Examples
/// ```
/// use envtag::{Bindable, Field, Slot};
///
/// struct Server {
///     host: String,
///     port: i32,
/// }
///
/// impl Bindable for Server {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", &[("env", "SERVER_HOST")], Slot::Str(&mut self.host)),
///             Field::new("port", &[("env", "SERVER_PORT")], Slot::I32(&mut self.port)),
///         ]
///     }
/// }
/// ```
pub trait Bindable {
    /// Enumerates the record's bindable fields, in declared order.
    ///
    /// Each call borrows the record mutably for the returned descriptors'
    /// lifetime, which is what gives the binder exclusive access to every
    /// slot for the duration of one pass.
    fn fields(&mut self) -> Vec<Field<'_>>;
}
