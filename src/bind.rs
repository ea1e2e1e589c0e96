use std::env;

use tracing::debug;

use crate::convert::convert;
use crate::kind::Kind;
use crate::traits::Bindable;
use crate::value::Value;

/// The annotation key [`bind`] reads.
pub const DEFAULT_TAG: &str = "env";

/// Binds `target`'s fields from the environment using the
/// [`DEFAULT_TAG`] annotation key and the built-in conversion registry.
pub fn bind<T: Bindable>(target: &mut T) {
    bind_tag_with(DEFAULT_TAG, target, convert)
}

/// Same as [`bind`], but reads the annotation key `tag` instead of
/// [`DEFAULT_TAG`].
pub fn bind_tag<T: Bindable>(tag: &str, target: &mut T) {
    bind_tag_with(tag, target, convert)
}

/// Binds `target`'s fields using a caller-supplied conversion strategy
/// in place of the built-in registry.
///
/// For each field, in declared order: look up the `tag` annotation (no
/// annotation, skip), read the named environment variable (unset or
/// empty, skip), then ask `convert` for a [`Value`] of the field's
/// [`Kind`] (`None`, skip). Only a successful conversion of the exact
/// variant overwrites the field; every other outcome leaves the prior
/// value in place and moves on. Nothing is ever reported to the caller.
///
/// The `&mut T` receiver gives the binder exclusive access to the record
/// for the duration of the pass; concurrent binds of *different* records
/// are fine since the registry is stateless.
pub fn bind_tag_with<T, F>(tag: &str, target: &mut T, convert: F)
where
    T: Bindable,
    F: Fn(&str, Kind) -> Option<Value>,
{
    for mut field in target.fields() {
        let Some(var) = field.tag(tag) else {
            continue;
        };
        // Unset and present-but-empty are indistinguishable on purpose;
        // non-UTF-8 values land in the same skip.
        let Ok(raw) = env::var(var) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        match convert(&raw, field.kind()) {
            Some(value) => {
                field.store(value);
            }
            None => debug!(
                field = field.name(),
                var,
                value = %raw,
                "environment value failed conversion, field left unchanged"
            ),
        }
    }
}
