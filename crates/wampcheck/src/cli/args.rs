//! # CLI Argument Definitions
//!
//! This module defines the command-line interface structure using clap
//! derive macros.
//!
//! ## Main CLI Structure
//!
//! - `wampcheck auth cryptosign <operation>` - Cryptosign authentication
//!   operations
//! - `wampcheck message <kind> [fields...]` - Build and encode a protocol
//!   message
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `--output <hex|base64>` - Encoding for every binary result
//!
//! The `message` group carries its own `--serializer` option, valid for all
//! message kinds.

use clap::{Args, Parser, Subcommand, ValueEnum};

use wampcheck_core::Encoding;
use wampcheck_serializer::SerializerId;

/// Interoperability test harness for WAMP-style protocol implementations.
///
/// One implementation emits a canonical encoded message or signed challenge,
/// another decodes or verifies it; disagreements reveal interop bugs.
#[derive(Debug, Parser)]
#[command(name = "wampcheck")]
#[command(author, version, about = "Interoperability test harness for WAMP-style protocols")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// Can be specified multiple times to increase verbosity level:
    /// - `-v` - Show info messages
    /// - `-vv` - Show debug messages
    /// - `-vvv` - Show trace messages
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Encoding of every binary result
    #[arg(long, global = true, value_enum, default_value_t = OutputArg::Hex)]
    pub output: OutputArg,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI command groups.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication commands
    Auth {
        /// Authentication scheme to exercise
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Protocol message commands
    ///
    /// Builds a single message of the selected kind from typed CLI fields,
    /// serializes it with the selected serializer, and prints the encoded
    /// bytes.
    Message {
        /// Serializer to use
        #[arg(short, long, global = true, value_enum, default_value_t = SerializerArg::Json)]
        serializer: SerializerArg,

        /// Message kind to build
        #[command(subcommand)]
        command: MessageCommands,
    },
}

/// Authentication schemes.
#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Cryptosign (ed25519 challenge/response) commands
    Cryptosign {
        /// Cryptosign operation to execute
        #[command(subcommand)]
        command: CryptosignCommands,
    },
}

/// Cryptosign operations.
#[derive(Debug, Subcommand)]
pub enum CryptosignCommands {
    /// Generate a random cryptosign challenge
    GenerateChallenge,

    /// Sign a cryptosign challenge
    SignChallenge(SignChallengeArgs),

    /// Verify a signed cryptosign challenge
    VerifySignature(VerifySignatureArgs),

    /// Generate a cryptosign ed25519 key pair
    Keygen,

    /// Derive the ed25519 public key for a private key
    GetPubkey(GetPubkeyArgs),
}

/// Arguments for the sign-challenge operation.
///
/// Note: this type implements a custom `Debug` that redacts the private key
/// to prevent accidental exposure in logs or error messages.
#[derive(Clone, Args)]
pub struct SignChallengeArgs {
    /// Challenge to sign (hex or base64)
    #[arg(value_name = "CHALLENGE")]
    pub challenge: String,

    /// Private key to sign with (hex or base64; 32-byte seed or 64-byte
    /// combined form)
    #[arg(value_name = "PRIVATE_KEY")]
    pub private_key: String,
}

impl std::fmt::Debug for SignChallengeArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignChallengeArgs")
            .field("challenge", &self.challenge)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Arguments for the verify-signature operation.
#[derive(Debug, Clone, Args)]
pub struct VerifySignatureArgs {
    /// Signed challenge to verify (hex or base64)
    #[arg(value_name = "SIGNATURE")]
    pub signature: String,

    /// Public key to verify against (hex or base64, 32 bytes)
    #[arg(value_name = "PUBLIC_KEY")]
    pub public_key: String,
}

/// Arguments for the get-pubkey operation.
///
/// Note: custom `Debug` redacts the private key.
#[derive(Clone, Args)]
pub struct GetPubkeyArgs {
    /// Private key to derive from (hex or base64)
    #[arg(value_name = "PRIVATE_KEY")]
    pub private_key: String,
}

impl std::fmt::Debug for GetPubkeyArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetPubkeyArgs")
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Message commands
// ============================================================================

/// Message kinds, one subcommand each.
///
/// Positional fields follow the protocol's canonical field order: the
/// request ID always comes first, then the procedure/topic where the kind
/// has one, then free-form arguments.
#[derive(Debug, Subcommand)]
pub enum MessageCommands {
    /// CALL message
    Call(CallArgs),
    /// RESULT message
    Result(ResultArgs),
    /// REGISTER message
    Register(RegisterArgs),
    /// REGISTERED message
    Registered(RegisteredArgs),
    /// INVOCATION message
    Invocation(InvocationArgs),
    /// YIELD message
    Yield(YieldArgs),
    /// UNREGISTER message
    Unregister(UnregisterArgs),
    /// UNREGISTERED message
    Unregistered(UnregisteredArgs),
    /// SUBSCRIBE message
    Subscribe(SubscribeArgs),
    /// SUBSCRIBED message
    Subscribed(SubscribedArgs),
    /// PUBLISH message
    Publish(PublishArgs),
}

/// Parse a repeated `KEY=VALUE` flag token.
fn parse_key_value(token: &str) -> Result<(String, String), String> {
    token
        .split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{token}'"))
}

/// Arguments for the call message.
#[derive(Debug, Clone, Args)]
pub struct CallArgs {
    /// Call request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Procedure to call
    #[arg(value_name = "PROCEDURE")]
    pub procedure: String,

    /// Arguments for the call
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Keyword arguments for the call (repeatable)
    #[arg(short = 'k', long = "kwargs", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub kwargs: Vec<(String, String)>,

    /// Call options (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

/// Arguments for the result message.
#[derive(Debug, Clone, Args)]
pub struct ResultArgs {
    /// Result request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Result arguments
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Result details (repeatable)
    #[arg(short = 'd', long = "details", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub details: Vec<(String, String)>,

    /// Result keyword arguments (repeatable)
    #[arg(short = 'k', long = "kwargs", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub kwargs: Vec<(String, String)>,
}

/// Arguments for the register message.
#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    /// Register request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Procedure to register
    #[arg(value_name = "PROCEDURE")]
    pub procedure: String,

    /// Register options (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

/// Arguments for the registered message.
#[derive(Debug, Clone, Args)]
pub struct RegisteredArgs {
    /// Registered request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Registration ID
    #[arg(value_name = "REGISTRATION_ID")]
    pub registration_id: i64,
}

/// Arguments for the invocation message.
#[derive(Debug, Clone, Args)]
pub struct InvocationArgs {
    /// Invocation request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Registration ID the invocation targets
    #[arg(value_name = "REGISTRATION_ID")]
    pub registration_id: i64,

    /// Invocation arguments
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Invocation details (repeatable)
    #[arg(short = 'd', long = "details", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub details: Vec<(String, String)>,

    /// Invocation keyword arguments (repeatable)
    #[arg(short = 'k', long = "kwargs", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub kwargs: Vec<(String, String)>,
}

/// Arguments for the yield message.
#[derive(Debug, Clone, Args)]
pub struct YieldArgs {
    /// Yield request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Yield arguments
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Yield options (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// Yield keyword arguments (repeatable)
    #[arg(short = 'k', long = "kwargs", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub kwargs: Vec<(String, String)>,
}

/// Arguments for the unregister message.
#[derive(Debug, Clone, Args)]
pub struct UnregisterArgs {
    /// Unregister request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Registration ID to withdraw
    #[arg(value_name = "REGISTRATION_ID")]
    pub registration_id: i64,
}

/// Arguments for the unregistered message.
#[derive(Debug, Clone, Args)]
pub struct UnregisteredArgs {
    /// Unregistered request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,
}

/// Arguments for the subscribe message.
#[derive(Debug, Clone, Args)]
pub struct SubscribeArgs {
    /// Subscribe request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Topic to subscribe to
    #[arg(value_name = "TOPIC")]
    pub topic: String,

    /// Subscribe options (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,
}

/// Arguments for the subscribed message.
#[derive(Debug, Clone, Args)]
pub struct SubscribedArgs {
    /// Subscribed request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Subscription ID
    #[arg(value_name = "SUBSCRIPTION_ID")]
    pub subscription_id: i64,
}

/// Arguments for the publish message.
#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Publish request ID
    #[arg(value_name = "REQUEST_ID")]
    pub request_id: i64,

    /// Topic to publish to
    #[arg(value_name = "TOPIC")]
    pub topic: String,

    /// Publish arguments
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Publish options (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// Publish keyword arguments (repeatable)
    #[arg(short = 'k', long = "kwargs", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub kwargs: Vec<(String, String)>,
}

// ============================================================================
// Value enums
// ============================================================================

/// Output encoding for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Lowercase hexadecimal output
    #[default]
    Hex,

    /// Standard base64 output with padding
    Base64,
}

impl std::fmt::Display for OutputArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}

impl From<OutputArg> for Encoding {
    fn from(output: OutputArg) -> Self {
        match output {
            OutputArg::Hex => Self::Hex,
            OutputArg::Base64 => Self::Base64,
        }
    }
}

/// Serializer selection for message commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SerializerArg {
    /// JSON text encoding
    #[default]
    Json,

    /// CBOR binary encoding
    Cbor,

    /// MessagePack binary encoding
    Msgpack,

    /// Protobuf binary encoding
    Protobuf,
}

impl std::fmt::Display for SerializerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Cbor => write!(f, "cbor"),
            Self::Msgpack => write!(f, "msgpack"),
            Self::Protobuf => write!(f, "protobuf"),
        }
    }
}

impl From<SerializerArg> for SerializerId {
    fn from(serializer: SerializerArg) -> Self {
        match serializer {
            SerializerArg::Json => Self::Json,
            SerializerArg::Cbor => Self::Cbor,
            SerializerArg::Msgpack => Self::Msgpack,
            SerializerArg::Protobuf => Self::Protobuf,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
