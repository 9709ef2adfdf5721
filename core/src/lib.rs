//! Schema-driven parsing of single-letter command-line flags.
//!
//! A schema string declares the flags a program accepts and the type of
//! each flag's value:
//!
//! - `x`: boolean flag, true when present.
//! - `x*`: string flag, takes the next token.
//! - `x#`: integer flag, takes the next token as an `i32`.
//! - `x##`: double flag, takes the next token as an `f64`.
//!
//! [`Args::parse`] compiles the schema ([`compile_schema`]), walks the tokens
//! with a single forward [`Cursor`] ([`scan`]) and exposes typed getters over
//! the result. Flags may be clustered (`-xyz`). Every failure is an
//! [`ArgsError`] naming the flag that caused it.
//!
//! New value types plug in through [`MarshalerRegistry`] without touching the
//! compiler or scanner.
//!
//! # Example
//!
//! ```
//! use flagschema_core::*;
//!
//! let args = Args::parse("l,p#,d*,r##", &["-l", "-p", "42", "-d", "/tmp", "-r", "0.5"]).unwrap();
//! assert!(args.get_boolean('l').unwrap());
//! assert_eq!(args.get_int('p').unwrap(), 42);
//! assert_eq!(args.get_string('d').unwrap(), "/tmp");
//! assert_eq!(args.get_double('r').unwrap(), 0.5);
//! assert_eq!(args.cardinality(), 4);
//!
//! let err = Args::parse("x#", &["-x", "Forty two"]).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidInteger);
//! assert_eq!(err.argument_id(), Some('x'));
//! assert_eq!(err.to_string(), "Argument -x expects an integer but was 'Forty two'.");
//! ```

mod args;
mod cursor;
mod error;
mod marshaler;
mod registry;
mod scanner;
mod schema;
mod value;

pub use args::Args;
pub use cursor::Cursor;
pub use error::{ArgsError, ErrorCode, NO_PARAMETER, Result};
pub use marshaler::{
    ArgumentMarshaler, BoolMarshaler, DoubleMarshaler, IntMarshaler, StringMarshaler,
};
pub use registry::{MarshalerFactory, MarshalerRegistry};
pub use scanner::scan;
pub use schema::{MarshalerMap, compile_schema};
pub use value::{ArgValue, ValueKind};
