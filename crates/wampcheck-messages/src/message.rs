//! The protocol message sum type, constructors, and wire projection.
//!
//! Message kinds differ only in field shape, not in behavior, so the whole
//! set is one enum with a constructor per kind. Constructors take their
//! fields in the canonical order (request ID always first); [`Message::to_wire`]
//! projects the message onto the array form each serializer consumes.

use wampcheck_core::{Dict, List, Value};

use crate::kind::MessageKind;

/// A single protocol message, immutable after construction.
///
/// The payload fields (`args`/`kwargs`) are `Option` so the caller can
/// distinguish "omitted" from "present but empty"; some wire encodings
/// distinguish the two. See [`Message::to_wire`] for the emission rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// CALL: caller requests a procedure invocation.
    Call {
        /// Request identifier chosen by the caller.
        request_id: i64,
        /// Call options.
        options: Dict,
        /// URI of the procedure to call.
        procedure: String,
        /// Positional call arguments.
        args: Option<List>,
        /// Keyword call arguments.
        kwargs: Option<Dict>,
    },

    /// RESULT: dealer returns the outcome of a call.
    Result {
        /// Request identifier of the original call.
        request_id: i64,
        /// Result details.
        details: Dict,
        /// Positional result values.
        args: Option<List>,
        /// Keyword result values.
        kwargs: Option<Dict>,
    },

    /// REGISTER: callee offers a procedure.
    Register {
        /// Request identifier chosen by the callee.
        request_id: i64,
        /// Registration options.
        options: Dict,
        /// URI of the procedure being offered.
        procedure: String,
    },

    /// REGISTERED: dealer acknowledges a registration.
    Registered {
        /// Request identifier of the original registration.
        request_id: i64,
        /// Identifier assigned to the registration.
        registration_id: i64,
    },

    /// INVOCATION: dealer forwards a call to the registered callee.
    Invocation {
        /// Request identifier chosen by the dealer.
        request_id: i64,
        /// Identifier of the matched registration.
        registration_id: i64,
        /// Invocation details.
        details: Dict,
        /// Positional call arguments.
        args: Option<List>,
        /// Keyword call arguments.
        kwargs: Option<Dict>,
    },

    /// YIELD: callee returns the outcome of an invocation.
    Yield {
        /// Request identifier of the invocation being answered.
        request_id: i64,
        /// Yield options.
        options: Dict,
        /// Positional result values.
        args: Option<List>,
        /// Keyword result values.
        kwargs: Option<Dict>,
    },

    /// UNREGISTER: callee withdraws a registration.
    Unregister {
        /// Request identifier chosen by the callee.
        request_id: i64,
        /// Identifier of the registration being withdrawn.
        registration_id: i64,
    },

    /// UNREGISTERED: dealer acknowledges an unregistration.
    Unregistered {
        /// Request identifier of the original unregistration.
        request_id: i64,
    },

    /// SUBSCRIBE: subscriber requests a topic subscription.
    Subscribe {
        /// Request identifier chosen by the subscriber.
        request_id: i64,
        /// Subscription options.
        options: Dict,
        /// URI of the topic.
        topic: String,
    },

    /// SUBSCRIBED: broker acknowledges a subscription.
    Subscribed {
        /// Request identifier of the original subscription.
        request_id: i64,
        /// Identifier assigned to the subscription.
        subscription_id: i64,
    },

    /// PUBLISH: publisher emits an event to a topic.
    Publish {
        /// Request identifier chosen by the publisher.
        request_id: i64,
        /// Publish options.
        options: Dict,
        /// URI of the topic.
        topic: String,
        /// Positional event payload.
        args: Option<List>,
        /// Keyword event payload.
        kwargs: Option<Dict>,
    },
}

// ============================================================================
// Constructors
// ============================================================================

impl Message {
    /// Build a CALL message.
    #[must_use]
    pub fn new_call(
        request_id: i64,
        options: Dict,
        procedure: impl Into<String>,
        args: Option<List>,
        kwargs: Option<Dict>,
    ) -> Self {
        Self::Call {
            request_id,
            options,
            procedure: procedure.into(),
            args,
            kwargs,
        }
    }

    /// Build a RESULT message.
    #[must_use]
    pub fn new_result(
        request_id: i64,
        details: Dict,
        args: Option<List>,
        kwargs: Option<Dict>,
    ) -> Self {
        Self::Result {
            request_id,
            details,
            args,
            kwargs,
        }
    }

    /// Build a REGISTER message.
    #[must_use]
    pub fn new_register(request_id: i64, options: Dict, procedure: impl Into<String>) -> Self {
        Self::Register {
            request_id,
            options,
            procedure: procedure.into(),
        }
    }

    /// Build a REGISTERED message.
    #[must_use]
    pub const fn new_registered(request_id: i64, registration_id: i64) -> Self {
        Self::Registered {
            request_id,
            registration_id,
        }
    }

    /// Build an INVOCATION message.
    #[must_use]
    pub fn new_invocation(
        request_id: i64,
        registration_id: i64,
        details: Dict,
        args: Option<List>,
        kwargs: Option<Dict>,
    ) -> Self {
        Self::Invocation {
            request_id,
            registration_id,
            details,
            args,
            kwargs,
        }
    }

    /// Build a YIELD message.
    #[must_use]
    pub fn new_yield(
        request_id: i64,
        options: Dict,
        args: Option<List>,
        kwargs: Option<Dict>,
    ) -> Self {
        Self::Yield {
            request_id,
            options,
            args,
            kwargs,
        }
    }

    /// Build an UNREGISTER message.
    #[must_use]
    pub const fn new_unregister(request_id: i64, registration_id: i64) -> Self {
        Self::Unregister {
            request_id,
            registration_id,
        }
    }

    /// Build an UNREGISTERED message.
    #[must_use]
    pub const fn new_unregistered(request_id: i64) -> Self {
        Self::Unregistered { request_id }
    }

    /// Build a SUBSCRIBE message.
    #[must_use]
    pub fn new_subscribe(request_id: i64, options: Dict, topic: impl Into<String>) -> Self {
        Self::Subscribe {
            request_id,
            options,
            topic: topic.into(),
        }
    }

    /// Build a SUBSCRIBED message.
    #[must_use]
    pub const fn new_subscribed(request_id: i64, subscription_id: i64) -> Self {
        Self::Subscribed {
            request_id,
            subscription_id,
        }
    }

    /// Build a PUBLISH message.
    #[must_use]
    pub fn new_publish(
        request_id: i64,
        options: Dict,
        topic: impl Into<String>,
        args: Option<List>,
        kwargs: Option<Dict>,
    ) -> Self {
        Self::Publish {
            request_id,
            options,
            topic: topic.into(),
            args,
            kwargs,
        }
    }
}

// ============================================================================
// Wire projection
// ============================================================================

impl Message {
    /// Returns the kind of this message.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Call { .. } => MessageKind::Call,
            Self::Result { .. } => MessageKind::Result,
            Self::Register { .. } => MessageKind::Register,
            Self::Registered { .. } => MessageKind::Registered,
            Self::Invocation { .. } => MessageKind::Invocation,
            Self::Yield { .. } => MessageKind::Yield,
            Self::Unregister { .. } => MessageKind::Unregister,
            Self::Unregistered { .. } => MessageKind::Unregistered,
            Self::Subscribe { .. } => MessageKind::Subscribe,
            Self::Subscribed { .. } => MessageKind::Subscribed,
            Self::Publish { .. } => MessageKind::Publish,
        }
    }

    /// Returns the request identifier of this message.
    #[must_use]
    pub const fn request_id(&self) -> i64 {
        match self {
            Self::Call { request_id, .. }
            | Self::Result { request_id, .. }
            | Self::Register { request_id, .. }
            | Self::Registered { request_id, .. }
            | Self::Invocation { request_id, .. }
            | Self::Yield { request_id, .. }
            | Self::Unregister { request_id, .. }
            | Self::Unregistered { request_id }
            | Self::Subscribe { request_id, .. }
            | Self::Subscribed { request_id, .. }
            | Self::Publish { request_id, .. } => *request_id,
        }
    }

    /// Project this message onto its canonical wire array.
    ///
    /// The array opens with the kind's type code and the request identifier,
    /// followed by the kind-specific fields in protocol order. Trailing
    /// payload fields are emitted only when they carry data: `kwargs` appears
    /// only when non-empty, and `args` appears when non-empty or when an
    /// empty placeholder is needed to keep `kwargs` in position.
    #[must_use]
    pub fn to_wire(&self) -> Vec<Value> {
        let mut wire = vec![
            Value::Integer(self.kind().code()),
            Value::Integer(self.request_id()),
        ];

        match self {
            Self::Call {
                options,
                procedure,
                args,
                kwargs,
                ..
            } => {
                wire.push(Value::Map(options.clone()));
                wire.push(Value::String(procedure.clone()));
                push_payload(&mut wire, args.as_ref(), kwargs.as_ref());
            }
            Self::Result {
                details,
                args,
                kwargs,
                ..
            } => {
                wire.push(Value::Map(details.clone()));
                push_payload(&mut wire, args.as_ref(), kwargs.as_ref());
            }
            Self::Register {
                options, procedure, ..
            } => {
                wire.push(Value::Map(options.clone()));
                wire.push(Value::String(procedure.clone()));
            }
            Self::Registered {
                registration_id, ..
            }
            | Self::Unregister {
                registration_id, ..
            } => {
                wire.push(Value::Integer(*registration_id));
            }
            Self::Invocation {
                registration_id,
                details,
                args,
                kwargs,
                ..
            } => {
                wire.push(Value::Integer(*registration_id));
                wire.push(Value::Map(details.clone()));
                push_payload(&mut wire, args.as_ref(), kwargs.as_ref());
            }
            Self::Yield {
                options,
                args,
                kwargs,
                ..
            } => {
                wire.push(Value::Map(options.clone()));
                push_payload(&mut wire, args.as_ref(), kwargs.as_ref());
            }
            Self::Unregistered { .. } => {}
            Self::Subscribe { options, topic, .. } => {
                wire.push(Value::Map(options.clone()));
                wire.push(Value::String(topic.clone()));
            }
            Self::Subscribed {
                subscription_id, ..
            } => {
                wire.push(Value::Integer(*subscription_id));
            }
            Self::Publish {
                options,
                topic,
                args,
                kwargs,
                ..
            } => {
                wire.push(Value::Map(options.clone()));
                wire.push(Value::String(topic.clone()));
                push_payload(&mut wire, args.as_ref(), kwargs.as_ref());
            }
        }

        wire
    }
}

/// Append the trailing payload fields following the protocol omission rules.
fn push_payload(wire: &mut Vec<Value>, args: Option<&List>, kwargs: Option<&Dict>) {
    let has_args = args.is_some_and(|list| !list.is_empty());
    let has_kwargs = kwargs.is_some_and(|map| !map.is_empty());

    if has_args || has_kwargs {
        wire.push(Value::List(args.cloned().unwrap_or_default()));
    }
    if has_kwargs {
        wire.push(Value::Map(kwargs.cloned().unwrap_or_default()));
    }
}

// ============================================================================
// Tests
// ============================================================================
