//! Bind process environment variables to struct fields through
//! per-field tag tables.
//!
//! Each field descriptor names the environment variable to read under a
//! configurable annotation key (default `"env"`). Binding is best-effort
//! by contract: a missing annotation, an unset or empty variable, a
//! value that fails to parse for the field's kind, or a kind outside
//! the conversion table all leave the field at its prior value and move
//! on to the next one. No error ever reaches the caller.
//!
//! Supported kinds: `String`, `i8`, `i16`, `isize`, `i32`, `i64`,
//! `f32`, `f64`, and `bool`. Anything else (unsigned integers included)
//! is declined by the registry, not rejected up front.
//!
//! # Examples
//! ```
//! #[derive(Default)]
//! struct Settings {
//!     host: String,
//!     port: i32,
//!     debug: bool,
//! }
//!
//! envtag::bindable! {
//!     Settings {
//!         host => [("env", "APP_HOST")],
//!         port => [("env", "APP_PORT")],
//!         debug => [("env", "APP_DEBUG")],
//!     }
//! }
//!
//! std::env::set_var("APP_HOST", "example.com");
//! std::env::set_var("APP_PORT", "8080");
//!
//! let mut settings = Settings::default();
//! envtag::bind(&mut settings);
//!
//! assert_eq!(settings.host, "example.com");
//! assert_eq!(settings.port, 8080);
//! assert!(!settings.debug); // APP_DEBUG unset, prior value kept
//! ```
//!
//! A pass holds `&mut` access to the record, so binding the same record
//! from two threads at once is ruled out at compile time; binding
//! different records concurrently is fine, the registry is stateless.

mod bind;
mod convert;
pub mod errors;
mod field;
mod kind;
mod traits;
mod value;

pub use bind::{bind, bind_tag, bind_tag_with, DEFAULT_TAG};
pub use convert::convert;
pub use field::{AsSlot, Field, Slot};
pub use kind::Kind;
pub use traits::Bindable;
pub use value::Value;
