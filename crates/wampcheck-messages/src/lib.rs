//! # wampcheck-messages
//!
//! Protocol message definitions for the `wampcheck` interoperability
//! harness.
//!
//! A protocol message is identified by its [`MessageKind`] and carries a
//! request identifier plus kind-specific fields. Messages are built once via
//! the `Message::new_*` constructors, never mutated, and projected to their
//! canonical wire array with [`Message::to_wire`] for serialization.
//!
//! ## Modules
//!
//! - [`kind`] - Message kinds and their wire type codes
//! - [`message`] - The message sum type, constructors, and wire projection
//!
//! ## Example
//!
//! ```
//! use wampcheck_messages::{Message, MessageKind};
//! use wampcheck_core::{Dict, Value};
//!
//! let message = Message::new_call(
//!     1,
//!     Dict::new(),
//!     "com.example.echo",
//!     Some(vec![Value::Integer(42)]),
//!     None,
//! );
//! assert_eq!(message.kind(), MessageKind::Call);
//! assert_eq!(message.to_wire()[0], Value::Integer(48));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod kind;
pub mod message;

pub use kind::MessageKind;
pub use message::Message;
