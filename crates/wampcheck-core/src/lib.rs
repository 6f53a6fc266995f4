//! # wampcheck-core
//!
//! Foundational types for the `wampcheck` interoperability harness.
//!
//! This crate provides the two leaf components every other crate builds on:
//!
//! ## Modules
//!
//! - [`value`] - The typed-value model and CLI-token conversion
//! - [`codec`] - Hex/base64 rendering of binary results
//!
//! ## Token Conversion
//!
//! Command-line input is string-only; protocol payloads are typed. The
//! [`value::convert`] function bridges the two with a fixed parse precedence:
//!
//! ```
//! use wampcheck_core::{convert, Value};
//!
//! assert_eq!(convert("42"), Value::Integer(42));
//! assert_eq!(convert("4.2"), Value::Float(4.2));
//! assert_eq!(convert("true"), Value::Bool(true));
//! assert_eq!(convert("null"), Value::Null);
//! assert_eq!(convert("42abc"), Value::String("42abc".to_string()));
//! ```
//!
//! ## Binary Output
//!
//! Every binary result (serialized message, signature, key) is rendered
//! through [`codec::encode`]:
//!
//! ```
//! use wampcheck_core::{decode_any, encode, Encoding};
//!
//! let rendered = encode(Encoding::Hex, b"\xde\xad\xbe\xef");
//! assert_eq!(rendered, "deadbeef");
//! assert_eq!(decode_any(&rendered).unwrap(), b"\xde\xad\xbe\xef");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod value;

// Re-export commonly used items at the crate root for convenience
pub use codec::{decode_any, encode, CodecError, Encoding};
pub use value::{convert, convert_list, convert_map, normalize_payload, Dict, List, Value};
