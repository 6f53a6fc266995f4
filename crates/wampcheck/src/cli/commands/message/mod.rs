//! # Message Commands
//!
//! Implementation of the `wampcheck message <kind>` commands. One builder
//! per message kind, all with the same control flow:
//!
//! 1. Convert the kind's CLI fields into typed values
//! 2. Apply the empty-defaulting rule where the kind carries a payload
//! 3. Construct the message with its fixed field order
//! 4. Serialize with the selected backend
//! 5. Encode the bytes with the selected output encoding
//!
//! Kinds differ only in field shape, not in control flow, so the builders
//! are plain data shaping inside one `match`.

use wampcheck_core::{codec, convert_list, convert_map, normalize_payload, Encoding};
use wampcheck_messages::{Message, MessageKind};
use wampcheck_serializer::{serializer_for, SerializeError, SerializerId};

use crate::cli::args::MessageCommands;
use crate::cli::commands::exit_codes::EXIT_ERROR;

// ============================================================================
// MessageCommandError
// ============================================================================

/// Errors that can occur when building and encoding a message.
#[derive(Debug, thiserror::Error)]
pub enum MessageCommandError {
    /// The selected serializer rejected the message.
    #[error("failed to serialize {kind} message: {source}")]
    Serialize {
        /// The kind that was being serialized.
        kind: MessageKind,
        /// The backend error.
        source: SerializeError,
    },
}

impl MessageCommandError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

// ============================================================================
// MessageCommand
// ============================================================================

/// The `message <kind>` command handler.
///
/// # Example
///
/// ```no_run
/// use wampcheck::cli::args::{MessageCommands, UnregisteredArgs};
/// use wampcheck::cli::commands::message::MessageCommand;
/// use wampcheck_core::Encoding;
/// use wampcheck_serializer::SerializerId;
///
/// let command = MessageCommands::Unregistered(UnregisteredArgs { request_id: 1 });
/// let cmd = MessageCommand::new(command, SerializerId::Json, Encoding::Hex);
/// println!("{}", cmd.run().unwrap());
/// ```
#[derive(Debug)]
pub struct MessageCommand {
    /// The parsed kind-specific fields.
    command: MessageCommands,
    /// The serializer backend to use.
    serializer: SerializerId,
    /// The output encoding.
    output: Encoding,
}

impl MessageCommand {
    /// Create a new `MessageCommand`.
    #[must_use]
    pub const fn new(command: MessageCommands, serializer: SerializerId, output: Encoding) -> Self {
        Self {
            command,
            serializer,
            output,
        }
    }

    /// Build, serialize, and encode the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageCommandError`] if the serializer rejects the
    /// message; nothing partial is produced.
    pub fn run(&self) -> Result<String, MessageCommandError> {
        let message = build_message(&self.command);
        let kind = message.kind();

        tracing::debug!(
            kind = %kind,
            serializer = %self.serializer,
            encoding = %self.output,
            "building protocol message"
        );

        let bytes = serializer_for(self.serializer)
            .serialize(&message)
            .map_err(|source| MessageCommandError::Serialize { kind, source })?;
        Ok(codec::encode(self.output, &bytes))
    }
}

/// Construct the typed message for a parsed kind.
fn build_message(command: &MessageCommands) -> Message {
    match command {
        MessageCommands::Call(args) => {
            let options = convert_map(&args.options);
            let (call_args, kwargs) =
                normalize_payload(convert_list(&args.args), convert_map(&args.kwargs));
            Message::new_call(
                args.request_id,
                options,
                args.procedure.as_str(),
                call_args,
                kwargs,
            )
        }

        MessageCommands::Result(args) => {
            let details = convert_map(&args.details);
            let (result_args, kwargs) =
                normalize_payload(convert_list(&args.args), convert_map(&args.kwargs));
            Message::new_result(args.request_id, details, result_args, kwargs)
        }

        MessageCommands::Register(args) => Message::new_register(
            args.request_id,
            convert_map(&args.options),
            args.procedure.as_str(),
        ),

        MessageCommands::Registered(args) => {
            Message::new_registered(args.request_id, args.registration_id)
        }

        MessageCommands::Invocation(args) => {
            let details = convert_map(&args.details);
            let (invocation_args, kwargs) =
                normalize_payload(convert_list(&args.args), convert_map(&args.kwargs));
            Message::new_invocation(
                args.request_id,
                args.registration_id,
                details,
                invocation_args,
                kwargs,
            )
        }

        MessageCommands::Yield(args) => {
            let options = convert_map(&args.options);
            let (yield_args, kwargs) =
                normalize_payload(convert_list(&args.args), convert_map(&args.kwargs));
            Message::new_yield(args.request_id, options, yield_args, kwargs)
        }

        MessageCommands::Unregister(args) => {
            Message::new_unregister(args.request_id, args.registration_id)
        }

        MessageCommands::Unregistered(args) => Message::new_unregistered(args.request_id),

        MessageCommands::Subscribe(args) => Message::new_subscribe(
            args.request_id,
            convert_map(&args.options),
            args.topic.as_str(),
        ),

        MessageCommands::Subscribed(args) => {
            Message::new_subscribed(args.request_id, args.subscription_id)
        }

        MessageCommands::Publish(args) => {
            let options = convert_map(&args.options);
            let (publish_args, kwargs) =
                normalize_payload(convert_list(&args.args), convert_map(&args.kwargs));
            Message::new_publish(
                args.request_id,
                options,
                args.topic.as_str(),
                publish_args,
                kwargs,
            )
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
